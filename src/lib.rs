//! An adjacency-list graph, both directed and undirected, with depth-first and breadth-first traversals.
//!
//! # Vertices and edges
//!
//! Vertices are whatever hashable identities callers hand in, e.g. `&str` labels.
//! There is no separate vertex object: the identity *is* the vertex.
//! A vertex is created on first reference, either explicitly by `add_vertex`
//! or implicitly as an endpoint of `add_edge`.
//!
//! Edges live in per-vertex ordered lists.
//! An edge is either bare, naming only its destination,
//! or weighted, carrying a destination and a weight.
//! Both shapes may sit side by side in one list.
//! Weights are stored and reported but never used by the algorithms.
//!
//! # Traversals
//!
//! `dfs` and `bfs` visit neighbors in the order their edges were added.
//! They are written against [graph::QueryableGraph],
//! so [algorithm::DepthFirstSearch] and [algorithm::BreadthFirstSearch]
//! work lazily on anything implementing it.
//!
//! ```rust
//! use adjgraph::graph::*;
//!
//! let mut g = Graph::<&str>::undirected();
//! g.add_edge("hub", "north");
//! g.add_edge("hub", "south");
//! g.add_edge("south", "cellar");
//! assert_eq!(g.bfs(&"hub"), vec!["hub", "north", "south", "cellar"]);
//! assert_eq!(g.dfs(&"cellar"), vec!["cellar", "south", "hub", "north"]);
//! ```

pub mod algorithm;
pub mod graph;
