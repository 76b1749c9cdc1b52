use adjgraph::graph::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use static_init::dynamic;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("100000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, directed, undirected);
criterion_main!(benches);

fn directed(c: &mut Criterion) {
    cases(c, "directed", true);
}

fn undirected(c: &mut Criterion) {
    cases(c, "undirected", false);
}

fn cases(c: &mut Criterion, prefix: &str, is_directed: bool) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function(&(prefix.to_string() + "/add_edge"), |b| {
        b.iter(|| random_graph(is_directed, vertex_size, edge_size))
    });

    let g = random_graph(is_directed, vertex_size, edge_size);
    c.bench_function(&(prefix.to_string() + "/dfs"), |b| {
        b.iter(|| traverse(&g, vertex_size, Graph::dfs))
    });
    c.bench_function(&(prefix.to_string() + "/bfs"), |b| {
        b.iter(|| traverse(&g, vertex_size, Graph::bfs))
    });
    c.bench_function(&(prefix.to_string() + "/remove_edge"), |b| {
        let mut g = g.clone();
        b.iter(|| remove_edges(&mut g, vertex_size))
    });
}

fn random_graph(is_directed: bool, vertex_size: usize, edge_size: usize) -> Graph<usize, u32> {
    let mut g = Graph::new(is_directed);
    for v in 0..vertex_size {
        let _ = g.add_vertex(v);
    }
    let mut rng = rand::thread_rng();
    for _ in 0..edge_size {
        let v0 = rng.gen::<usize>() % vertex_size;
        let v1 = rng.gen::<usize>() % vertex_size;
        if rng.gen::<bool>() {
            g.add_weighted_edge(v0, v1, rng.gen());
        } else {
            g.add_edge(v0, v1);
        }
    }
    g
}

fn traverse<F>(g: &Graph<usize, u32>, vertex_size: usize, walk: F)
where
    F: Fn(&Graph<usize, u32>, &usize) -> Vec<usize>,
{
    let start = rand::thread_rng().gen::<usize>() % vertex_size;
    black_box(walk(g, &start));
}

fn remove_edges(g: &mut Graph<usize, u32>, vertex_size: usize) {
    let mut rng = rand::thread_rng();
    for _ in 0..16 {
        let v0 = rng.gen::<usize>() % vertex_size;
        let v1 = rng.gen::<usize>() % vertex_size;
        black_box(g.remove_edge(&v0, &v1));
    }
}
