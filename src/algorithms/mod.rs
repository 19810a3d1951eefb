pub mod a_star;
pub mod bfs;
pub mod common;

pub use a_star::AStar;
pub use bfs::Bfs;
pub use common::{ReachabilityOracle, SearchResult, ShortestPath, Visit};
