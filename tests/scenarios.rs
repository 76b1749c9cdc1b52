use adjgraph::graph::*;

fn fnaf() -> Graph<&'static str> {
    let mut g = Graph::directed();
    // Freddy
    g.add_edge("Show Stage", "Dining Area");
    g.add_edge("Dining Area", "Restrooms");
    g.add_edge("Restrooms", "Kitchen");
    g.add_edge("Kitchen", "East Hall");
    g.add_edge("East Hall", "East Corner");
    g.add_edge("East Corner", "Office");
    // Foxy
    g.add_edge("Pirate Cove", "West Hall");
    g.add_edge("West Hall", "West Corner");
    g.add_edge("West Corner", "Office");
    g
}

fn castle() -> Graph<&'static str> {
    let mut g = Graph::undirected();
    g.add_edge("Castle Hub", "Bob-omb Battlefield");
    g.add_edge("Castle Hub", "Whomp's Fortress");
    g.add_edge("Castle Hub", "Cool Cool Mountain");
    g.add_edge("Castle Hub", "Basement");
    g.add_edge("Basement", "Hazy Maze Cave");
    g.add_edge("Basement", "Lethal Lava Land");
    g
}

fn stars() -> Graph<&'static str, u32> {
    let mut g = Graph::directed();
    g.add_weighted_edge("Castle", "Bob-omb", 0);
    g.add_weighted_edge("Castle", "Whomp's", 1);
    g.add_weighted_edge("Castle", "Cool Mountain", 3);
    g.add_weighted_edge("Castle", "Bowser Door", 8);
    g
}

const FREDDY: [&str; 7] = [
    "Show Stage",
    "Dining Area",
    "Restrooms",
    "Kitchen",
    "East Hall",
    "East Corner",
    "Office",
];

#[test]
fn directed_chain_traversals() {
    let g = fnaf();
    assert_eq!(g.bfs(&"Show Stage"), FREDDY.to_vec());
    assert_eq!(g.dfs(&"Show Stage"), FREDDY.to_vec());
    assert!(!g.bfs(&"Show Stage").contains(&"Pirate Cove"));
    assert_eq!(
        g.dfs(&"Pirate Cove"),
        vec!["Pirate Cove", "West Hall", "West Corner", "Office"]
    );
    assert_eq!(g.vertex_size(), 10);
    assert_eq!(g.validate(), Ok(()));
}

#[test]
fn directed_chain_cut() {
    let mut g = fnaf();
    assert_eq!(g.remove_edge(&"Kitchen", &"East Hall"), 1);
    assert!(g.get_neighbors(&"Kitchen").is_empty());
    assert_eq!(
        g.bfs(&"Show Stage"),
        vec!["Show Stage", "Dining Area", "Restrooms", "Kitchen"]
    );
    assert_eq!(
        g.get_neighbors(&"East Hall"),
        &[Edge::Unweighted("East Corner")]
    );
}

#[test]
fn undirected_star() {
    let g = castle();
    assert_eq!(g.get_neighbors(&"Castle Hub").len(), 4);
    assert_eq!(
        g.get_neighbors(&"Basement"),
        &[
            Edge::Unweighted("Castle Hub"),
            Edge::Unweighted("Hazy Maze Cave"),
            Edge::Unweighted("Lethal Lava Land"),
        ]
    );
    assert_eq!(
        g.bfs(&"Castle Hub"),
        vec![
            "Castle Hub",
            "Bob-omb Battlefield",
            "Whomp's Fortress",
            "Cool Cool Mountain",
            "Basement",
            "Hazy Maze Cave",
            "Lethal Lava Land",
        ]
    );
    assert_eq!(
        g.dfs(&"Castle Hub"),
        vec![
            "Castle Hub",
            "Bob-omb Battlefield",
            "Whomp's Fortress",
            "Cool Cool Mountain",
            "Basement",
            "Hazy Maze Cave",
            "Lethal Lava Land",
        ]
    );
    assert_eq!(g.dfs(&"Hazy Maze Cave").len(), 7);
    assert_eq!(g.validate(), Ok(()));
}

#[test]
fn weights_do_not_steer_traversal() {
    let g = stars();
    let expected = vec!["Castle", "Bob-omb", "Whomp's", "Cool Mountain", "Bowser Door"];
    assert_eq!(g.dfs(&"Castle"), expected);
    assert_eq!(g.bfs(&"Castle"), expected);

    let mut reversed = Graph::<&str, u32>::directed();
    for e in g.get_neighbors(&"Castle") {
        reversed.add_weighted_edge("Castle", *e.destination(), 100 - e.weight().unwrap());
    }
    assert_eq!(reversed.dfs(&"Castle"), expected);
}

#[test]
fn weighted_removal_ignores_weight() {
    let mut g = stars();
    g.add_weighted_edge("Castle", "Bowser Door", 70);
    g.add_edge("Castle", "Bowser Door");
    assert_eq!(g.remove_edge(&"Castle", &"Bowser Door"), 3);
    assert_eq!(
        g.get_neighbors(&"Castle"),
        &[
            Edge::Weighted("Bob-omb", 0),
            Edge::Weighted("Whomp's", 1),
            Edge::Weighted("Cool Mountain", 3),
        ]
    );
}

#[test]
fn unknown_vertices_give_nothing() {
    let g = castle();
    for v in ["Tick Tock Clock", ""] {
        assert!(g.get_neighbors(&v).is_empty());
        assert!(g.dfs(&v).is_empty());
        assert!(g.bfs(&v).is_empty());
        assert!(matches!(
            g.try_neighbors(&v),
            Err(GraphError::VertexNotFound(_))
        ));
    }
    let empty = Graph::<&str>::default();
    assert!(empty.is_directed());
    assert!(empty.dfs(&"anything").is_empty());
}

#[test]
fn display_leaves_graph_alone() {
    let g = castle();
    let before: Vec<_> = g.iter_edges().map(|(v, e)| (*v, e.clone())).collect();
    g.display();
    let after: Vec<_> = g.iter_edges().map(|(v, e)| (*v, e.clone())).collect();
    assert_eq!(before, after);
}
