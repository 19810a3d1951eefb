use crate::algorithms::common::{ReachabilityOracle, SearchResult, ShortestPath, Visit};
use crate::grid::Grid;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::collections::VecDeque;
use tracing::trace;

/// Breadth-first search over the free cells of a grid prefix.
///
/// A cell is marked visited when it is enqueued, so it enters the frontier at
/// most once and its recorded distance is already minimal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bfs {
    exhaustive: bool,
}

impl Bfs {
    /// Stops as soon as the end is dequeued.
    pub fn new() -> Self {
        Bfs { exhaustive: false }
    }

    /// Drains the whole frontier, so the result holds a distance for every
    /// cell reachable from the start.
    pub fn exhaustive() -> Self {
        Bfs { exhaustive: true }
    }
}

impl ReachabilityOracle for Bfs {
    fn search(&self, grid: &Grid, prefix: usize) -> SearchResult {
        let (start, end) = (grid.start, grid.end);
        if grid.is_blocked(&start, prefix) || grid.is_blocked(&end, prefix) {
            trace!(prefix, "endpoint blocked");
            return SearchResult::Unreachable;
        }

        let mut visits = FxHashMap::default();
        visits.insert(
            start,
            Visit {
                from: None,
                distance: 0,
            },
        );
        let mut frontier = VecDeque::from([start]);

        while let Some(current) = frontier.pop_front() {
            if current == end && !self.exhaustive {
                break;
            }

            let distance = visits[&current].distance + 1;
            for next in grid.open_neighbors(&current, prefix) {
                if let Entry::Vacant(slot) = visits.entry(next) {
                    slot.insert(Visit {
                        from: Some(current),
                        distance,
                    });
                    frontier.push_back(next);
                }
            }
        }

        trace!(prefix, visited = visits.len(), "bfs finished");
        if visits.contains_key(&end) {
            SearchResult::Reached(ShortestPath::new(start, end, visits))
        } else {
            SearchResult::Unreachable
        }
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}
