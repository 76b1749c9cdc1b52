use crate::{algorithm::*, graph::*};
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// A directed or undirected graph kept as per-vertex lists of outgoing edges.
///
/// Edges are appended to the end of their source's list,
/// and traversals walk a list front to back.
/// Parallel edges and self-loops are allowed.
/// An undirected edge is stored twice, once in each endpoint's list,
/// with the same weight or lack thereof.
///
/// |                 | Complexity                                              |
/// | --------------- | ------------------------------------------------------- |
/// | `add_vertex`    | amortized $O(1)$                                        |
/// | `add_edge`      | amortized $O(1)$                                        |
/// | `remove_edge`   | $O(d)$, where $d$ is the out-degree of the endpoints.   |
/// | `get_neighbors` | $O(1)$                                                  |
/// | `dfs`, `bfs`    | $O(\|V'\| + \|E'\|)$ over the reachable part.          |
#[derive(Clone)]
pub struct Graph<V, W = f64>
where
    V: Hash + Eq + Clone,
{
    directed: bool,
    vid_factory: VertexIdFactory,
    vertices: BiHashMap<VertexId, V, RandomState, RandomState>,
    // indexed by `VertexId`
    adjacency: Vec<Vec<Edge<V, W>>>,
}

impl<V, W> Default for Graph<V, W>
where
    V: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::directed()
    }
}

impl<V, W> Graph<V, W>
where
    V: Hash + Eq + Clone,
{
    /// Creates an empty graph. Directedness cannot change afterwards.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vid_factory: VertexIdFactory::new(),
            vertices: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            adjacency: vec![],
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Out-edges of `v` as stored, or an empty slice if `v` is unknown.
    pub fn get_neighbors(&self, v: &V) -> &[Edge<V, W>] {
        match self.id_of(v) {
            Some(vid) => &self.adjacency[vid.to_raw()],
            None => &[],
        }
    }

    /// Like [Graph::get_neighbors], but tells an unknown vertex apart from one without edges.
    pub fn try_neighbors(&self, v: &V) -> Result<&[Edge<V, W>]>
    where
        V: std::fmt::Debug,
    {
        self.id_of(v)
            .map(|vid| self.adjacency[vid.to_raw()].as_slice())
            .ok_or_else(|| GraphError::VertexNotFound(format!("{:?}", v)))
    }

    /// Iterates over every stored edge with its source,
    /// sources in the order they were first seen.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&V, &Edge<V, W>)> + '_ {
        self.iter_vertices()
            .zip(self.adjacency.iter())
            .flat_map(|(v, edges)| edges.iter().map(move |e| (v, e)))
    }

    /// Vertices in depth-first order from `start`; empty if `start` is unknown.
    pub fn dfs(&self, start: &V) -> Vec<V> {
        self.dfs_iter(start).cloned().collect()
    }

    /// Vertices in breadth-first order from `start`; empty if `start` is unknown.
    pub fn bfs(&self, start: &V) -> Vec<V> {
        self.bfs_iter(start).cloned().collect()
    }

    /// Checks that every edge points to a known vertex and,
    /// for undirected graphs, that every edge has its mirror.
    pub fn validate(&self) -> Result<()>
    where
        V: std::fmt::Debug,
        W: Clone + PartialEq,
    {
        for (source, edge) in self.iter_edges() {
            let destination = edge.destination();
            let dst = match self.id_of(destination) {
                Some(dst) => dst,
                None => {
                    return Err(GraphError::DanglingEdge {
                        from: format!("{:?}", source),
                        to: format!("{:?}", destination),
                    })
                }
            };
            if self.directed {
                continue;
            }
            let forth = self
                .get_neighbors(source)
                .iter()
                .filter(|e| *e == edge)
                .count();
            let mirror = edge.mirrored(source.clone());
            let back = self.adjacency[dst.to_raw()]
                .iter()
                .filter(|e| **e == mirror)
                .count();
            if forth != back {
                return Err(GraphError::MissingMirror {
                    from: format!("{:?}", source),
                    to: format!("{:?}", destination),
                });
            }
        }
        Ok(())
    }

    /// Prints every vertex followed by its out-edges to the standard output.
    pub fn display(&self)
    where
        V: std::fmt::Debug,
        W: std::fmt::Debug,
    {
        let stdout = std::io::stdout();
        if let Err(e) = self.write_to(&mut stdout.lock()) {
            log::warn!("failed to display graph: {}", e);
        }
    }

    /// Writes what [Graph::display] prints into `out`.
    pub fn write_to<O>(&self, out: &mut O) -> std::io::Result<()>
    where
        O: std::io::Write,
        V: std::fmt::Debug,
        W: std::fmt::Debug,
    {
        writeln!(out, "Graph structure:")?;
        write!(out, "{}", self.debug().indent(2, 2))
    }

    fn id_of(&self, v: &V) -> Option<VertexId> {
        self.vertices.get_by_right(v).copied()
    }
}

impl<V, W> GraphBase for Graph<V, W>
where
    V: Hash + Eq + Clone,
{
    type Vertex = V;
    type Weight = W;

    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<V, W> GrowableGraph for Graph<V, W>
where
    V: Hash + Eq + Clone,
    W: Clone,
{
    fn add_vertex(&mut self, v: V) -> VertexId {
        if let Some(vid) = self.id_of(&v) {
            return vid;
        }
        let vid = self.vid_factory.one_more();
        debug_assert_eq!(vid.to_raw(), self.adjacency.len());
        self.vertices.insert(vid, v);
        self.adjacency.push(vec![]);
        log::trace!("added vertex #{}", vid.to_raw());
        vid
    }

    fn insert_edge(&mut self, source: V, destination: V, weight: Option<W>) {
        let src = self.add_vertex(source.clone());
        let dst = self.add_vertex(destination.clone());
        let edge = Edge::new(destination, weight);
        let mirror = (!self.directed).then(|| edge.mirrored(source));
        self.adjacency[src.to_raw()].push(edge);
        if let Some(mirror) = mirror {
            self.adjacency[dst.to_raw()].push(mirror);
        }
        log::trace!(
            "added edge #{} -> #{} (directed: {})",
            src.to_raw(),
            dst.to_raw(),
            self.directed
        );
    }
}

impl<V, W> EdgeShrinkableGraph for Graph<V, W>
where
    V: Hash + Eq + Clone,
{
    fn remove_edge(&mut self, source: &V, destination: &V) -> usize {
        let removed = match self.id_of(source) {
            Some(src) => drop_edges_to(&mut self.adjacency[src.to_raw()], destination),
            None => 0,
        };
        if !self.directed {
            if let Some(dst) = self.id_of(destination) {
                drop_edges_to(&mut self.adjacency[dst.to_raw()], source);
            }
        }
        log::trace!("removed {} edge(s)", removed);
        removed
    }
}

fn drop_edges_to<V, W>(edges: &mut Vec<Edge<V, W>>, destination: &V) -> usize
where
    V: PartialEq,
{
    let before = edges.len();
    edges.retain(|e| !e.points_to(destination));
    before - edges.len()
}

impl<V, W> QueryableGraph for Graph<V, W>
where
    V: Hash + Eq + Clone,
{
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        let it = (0..self.vid_factory.issued())
            .filter_map(|i| self.vertices.get_by_left(&VertexId::new(i)));
        Box::new(it)
    }

    fn find_vertex(&self, v: &V) -> Option<&V> {
        self.id_of(v).and_then(|vid| self.vertices.get_by_left(&vid))
    }

    fn edge_size(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn out_edges(&self, v: &V) -> Box<dyn Iterator<Item = &Edge<V, W>> + '_> {
        Box::new(self.get_neighbors(v).iter())
    }

    fn neighbors(&self, v: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.get_neighbors(v).iter().map(|e| e.destination()))
    }
}
