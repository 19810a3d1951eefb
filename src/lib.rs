pub mod algorithms;
pub mod config;
pub mod cutoff;
pub mod errors;
pub mod grid;
pub mod input;
pub mod logging;
pub mod scenario;
pub mod statistics;

pub use algorithms::{AStar, Bfs, ReachabilityOracle, SearchResult, ShortestPath};
pub use cutoff::{find_cutoff, find_cutoff_linear, Cutoff, Probe, Strategy};
pub use errors::{CutoffError, GridError, ParseError};
pub use grid::{Grid, Position};
pub use input::parse_obstacles;
