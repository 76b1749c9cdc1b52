use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversal over any [QueryableGraph].
pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Lazily visits vertices reachable from `start` in breadth-first order.
    ///
    /// Vertices come out in non-decreasing distance from `start`.
    /// Ties are broken by the order edges were added.
    /// An unknown `start` yields nothing.
    fn bfs_iter(&self, start: &Self::Vertex) -> Box<dyn Iterator<Item = &Self::Vertex> + '_> {
        Box::new(BfsIter::new(self, start))
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}

struct BfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    queue: VecDeque<&'a G::Vertex>,
    // vertices ever enqueued
    visited: HashSet<&'a G::Vertex, RandomState>,
}

impl<'a, G> Iterator for BfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = &'a G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let vert = self.queue.pop_front()?;
        for n in graph.neighbors(vert) {
            if self.visited.insert(n) {
                self.queue.push_back(n);
            }
        }
        Some(vert)
    }
}

impl<'a, G> BfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, start: &G::Vertex) -> Self {
        let mut res = Self {
            graph,
            queue: VecDeque::new(),
            visited: HashSet::with_hasher(RandomState::new()),
        };
        match graph.find_vertex(start) {
            Some(vert) => {
                res.visited.insert(vert);
                res.queue.push_back(vert);
            }
            None => log::debug!("breadth-first search from an unknown vertex"),
        }
        res
    }
}
