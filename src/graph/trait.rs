use crate::graph::*;
use std::hash::Hash;

/// What every graph in this crate agrees on:
/// the type of its vertices, the type of its edge weights, and whether edges have a direction.
pub trait GraphBase {
    /// Vertex identity. The graph never looks inside.
    type Vertex: Hash + Eq + Clone;
    /// Edge weight. Stored and reported, never compared.
    type Weight;

    fn is_directed(&self) -> bool;
}

pub trait GrowableGraph: GraphBase {
    /// Inserts a vertex unless it is present, and returns its [VertexId] either way.
    fn add_vertex(&mut self, v: Self::Vertex) -> VertexId;

    /// Appends an edge from `source` to `destination`, creating both endpoints on demand.
    ///
    /// Undirected graphs append the mirrored edge to `destination` as well.
    fn insert_edge(
        &mut self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: Option<Self::Weight>,
    );

    fn add_edge(&mut self, source: Self::Vertex, destination: Self::Vertex) {
        self.insert_edge(source, destination, None)
    }

    fn add_weighted_edge(
        &mut self,
        source: Self::Vertex,
        destination: Self::Vertex,
        weight: Self::Weight,
    ) {
        self.insert_edge(source, destination, Some(weight))
    }
}

pub trait EdgeShrinkableGraph: GraphBase {
    /// Removes every edge from `source` to `destination`, whatever their weights,
    /// and returns how many left `source`'s list.
    ///
    /// Undirected graphs also drop the mirrored edges.
    /// Unknown endpoints make this a no-op.
    fn remove_edge(&mut self, source: &Self::Vertex, destination: &Self::Vertex) -> usize;
}

pub trait QueryableGraph: GraphBase {
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in the order they were first seen.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;
    /// The graph's own copy of a vertex equal to `v`, if any.
    fn find_vertex(&self, v: &Self::Vertex) -> Option<&Self::Vertex>;

    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.find_vertex(v).is_some()
    }

    /// Number of stored adjacency entries.
    ///
    /// An undirected edge counts twice, once for each endpoint.
    fn edge_size(&self) -> usize;
    /// Iterates over out-edges of `v` in insertion order.
    /// Unknown vertices have none.
    fn out_edges(
        &self,
        v: &Self::Vertex,
    ) -> Box<dyn Iterator<Item = &Edge<Self::Vertex, Self::Weight>> + '_>;
    /// Destinations of the out-edges of `v`, weights stripped.
    fn neighbors(&self, v: &Self::Vertex) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
