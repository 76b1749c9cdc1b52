//! Builds the sample graphs and prints their structure and traversals.

use adjgraph::graph::*;
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "graph-demo",
    about = "Walks sample directed, undirected and weighted graphs"
)]
struct Cli {
    /// Which sample graph to walk
    #[arg(value_enum, default_value = "all")]
    scenario: Scenario,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    Directed,
    Undirected,
    Weighted,
    All,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let wanted = |s: Scenario| cli.scenario == s || cli.scenario == Scenario::All;
    if wanted(Scenario::Directed) {
        directed();
    }
    if wanted(Scenario::Undirected) {
        undirected();
    }
    if wanted(Scenario::Weighted) {
        weighted();
    }
}

fn directed() {
    println!("=== DIRECTED GRAPH ===");
    let mut g = Graph::<&str>::directed();
    for (src, dst) in [
        ("Show Stage", "Dining Area"),
        ("Dining Area", "Restrooms"),
        ("Restrooms", "Kitchen"),
        ("Kitchen", "East Hall"),
        ("East Hall", "East Corner"),
        ("East Corner", "Office"),
        ("Pirate Cove", "West Hall"),
        ("West Hall", "West Corner"),
        ("West Corner", "Office"),
    ] {
        g.add_edge(src, dst);
    }
    g.display();
    println!();
    println!("DFS from Show Stage: {:?}", g.dfs(&"Show Stage"));
    println!("BFS from Show Stage: {:?}", g.bfs(&"Show Stage"));

    println!();
    println!("=== REMOVING EDGE ===");
    g.remove_edge(&"Kitchen", &"East Hall");
    println!("After removing Kitchen -> East Hall:");
    g.display();
    println!();
}

fn undirected() {
    println!("=== UNDIRECTED GRAPH ===");
    let mut g = Graph::<&str>::undirected();
    for (src, dst) in [
        ("Castle Hub", "Bob-omb Battlefield"),
        ("Castle Hub", "Whomp's Fortress"),
        ("Castle Hub", "Cool Cool Mountain"),
        ("Castle Hub", "Basement"),
        ("Basement", "Hazy Maze Cave"),
        ("Basement", "Lethal Lava Land"),
    ] {
        g.add_edge(src, dst);
    }
    g.display();
    println!();
    let neighbors: Vec<_> = g
        .get_neighbors(&"Castle Hub")
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Neighbors of Castle Hub: [{}]", neighbors.join(", "));
    println!("DFS from Castle Hub: {:?}", g.dfs(&"Castle Hub"));
    println!("BFS from Castle Hub: {:?}", g.bfs(&"Castle Hub"));
    println!();
}

fn weighted() {
    println!("=== WEIGHTED GRAPH ===");
    let mut g = Graph::<&str, u32>::directed();
    for (dst, stars) in [
        ("Bob-omb", 0),
        ("Whomp's", 1),
        ("Cool Mountain", 3),
        ("Bowser Door", 8),
    ] {
        g.add_weighted_edge("Castle", dst, stars);
    }
    g.display();
    println!();
    println!("DFS from Castle: {:?}", g.dfs(&"Castle"));
    println!("BFS from Castle: {:?}", g.bfs(&"Castle"));
}
