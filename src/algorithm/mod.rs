//! Graph algorithms
mod dfs;
pub use self::dfs::*;
mod bfs;
pub use self::bfs::*;
