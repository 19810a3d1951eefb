use crate::grid::{Grid, Position};
use rustc_hash::FxHashMap;

/// Answers "how far is the end from the start once the first `prefix`
/// obstacles have fallen".
///
/// Implementations must be pure in `(grid, prefix)`: every call builds its own
/// state and nothing is carried between probes.
pub trait ReachabilityOracle {
    fn search(&self, grid: &Grid, prefix: usize) -> SearchResult;

    fn name(&self) -> &'static str;

    fn is_reachable(&self, grid: &Grid, prefix: usize) -> bool {
        self.search(grid, prefix).is_reachable()
    }
}

/// How a position was first reached during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// `None` only for the start position.
    pub from: Option<Position>,
    pub distance: usize,
}

#[derive(Debug, Clone)]
pub enum SearchResult {
    Reached(ShortestPath),
    Unreachable,
}

impl SearchResult {
    pub fn is_reachable(&self) -> bool {
        matches!(self, SearchResult::Reached(_))
    }

    pub fn steps(&self) -> Option<usize> {
        match self {
            SearchResult::Reached(path) => Some(path.steps()),
            SearchResult::Unreachable => None,
        }
    }

    pub fn shortest_path(&self) -> Option<&ShortestPath> {
        match self {
            SearchResult::Reached(path) => Some(path),
            SearchResult::Unreachable => None,
        }
    }
}

/// The end's distance plus the predecessor map that produced it.
#[derive(Debug, Clone)]
pub struct ShortestPath {
    start: Position,
    end: Position,
    visits: FxHashMap<Position, Visit>,
}

impl ShortestPath {
    /// `visits` must contain both `start` (with no predecessor) and `end`.
    pub(crate) fn new(start: Position, end: Position, visits: FxHashMap<Position, Visit>) -> Self {
        debug_assert!(visits.contains_key(&start) && visits.contains_key(&end));
        ShortestPath { start, end, visits }
    }

    pub fn steps(&self) -> usize {
        self.visits[&self.end].distance
    }

    pub fn distance(&self, pos: &Position) -> Option<usize> {
        self.visits.get(pos).map(|visit| visit.distance)
    }

    pub fn predecessor(&self, pos: &Position) -> Option<Position> {
        self.visits.get(pos).and_then(|visit| visit.from)
    }

    /// Positions the search recorded a distance for. BFS records every cell it
    /// reached; A* records only the cells on the path it returns.
    pub fn visited(&self) -> &FxHashMap<Position, Visit> {
        &self.visits
    }

    /// Walks predecessors back from the end; returns start..=end.
    pub fn path(&self) -> Vec<Position> {
        let mut path = vec![self.end];
        let mut current = self.end;
        while let Some(prev) = self.predecessor(&current) {
            path.push(prev);
            current = prev;
        }
        debug_assert_eq!(current, self.start);
        path.reverse();
        path
    }
}
