//! The adjacency-list graph and the traits it is seen through.
//!
//! ```plain
//! Queryable    Growable   EdgeShrinkable
//!     |            |             |
//!     +-------->  Base <---------+
//! ```
//!
//! Algorithms only ever ask [QueryableGraph] for vertices and neighbors,
//! while [Graph] implements all of them.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod error;
pub use self::error::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod adjacency_list;
pub use self::adjacency_list::*;

#[cfg(test)]
pub use self::tests::*;
