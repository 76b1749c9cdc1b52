use crate::graph::*;
use ahash::RandomState;
use std::collections::HashSet;

/// Depth-first traversal over any [QueryableGraph].
pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Lazily visits vertices reachable from `start` in depth-first order.
    ///
    /// Neighbors of a vertex are explored in the order their edges were added.
    /// Every reachable vertex is yielded exactly once, `start` first.
    /// An unknown `start` yields nothing.
    fn dfs_iter(&self, start: &Self::Vertex) -> Box<dyn Iterator<Item = &Self::Vertex> + '_> {
        Box::new(DfsIter::new(self, start))
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}

struct DfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    stack: Vec<&'a G::Vertex>,
    visited: HashSet<&'a G::Vertex, RandomState>,
}

impl<'a, G> Iterator for DfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = &'a G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        while let Some(vert) = self.stack.pop() {
            if !self.visited.insert(vert) {
                continue;
            }
            let unvisited: Vec<_> = graph
                .neighbors(vert)
                .filter(|n| !self.visited.contains(n))
                .collect();
            // reversed, so that the first neighbor is popped first
            self.stack.extend(unvisited.into_iter().rev());
            return Some(vert);
        }
        None
    }
}

impl<'a, G> DfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, start: &G::Vertex) -> Self {
        let mut res = Self {
            graph,
            stack: vec![],
            visited: HashSet::with_hasher(RandomState::new()),
        };
        match graph.find_vertex(start) {
            Some(vert) => res.stack.push(vert),
            None => log::debug!("depth-first search from an unknown vertex"),
        }
        res
    }
}
