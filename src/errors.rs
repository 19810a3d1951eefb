use crate::grid::Position;

/// Errors raised while reading an obstacle sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected \"<x>,<y>\" with non-negative integers, found {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("invalid position {text:?}: expected \"<x>,<y>\"")]
    MalformedPosition { text: String },
}

/// Errors raised while building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("a {width}x{height} grid has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("obstacle #{index} at {position} lies outside the {width}x{height} grid")]
    ObstacleOutOfBounds {
        index: usize,
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("endpoint {position} lies outside the {width}x{height} grid")]
    EndpointOutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },
}

/// Errors raised by the cutoff search when its preconditions do not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CutoffError {
    #[error("no obstacles to place")]
    NoObstacles,

    #[error("start and end remain connected after all {obstacle_count} obstacles are placed")]
    NeverDisconnected { obstacle_count: usize },

    #[error("known-good prefix {known_good} must be smaller than the obstacle count {obstacle_count}")]
    KnownGoodOutOfRange {
        known_good: usize,
        obstacle_count: usize,
    },

    #[error("known-good prefix {known_good} does not leave a path from start to end")]
    KnownGoodUnreachable { known_good: usize },
}
