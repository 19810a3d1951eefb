use crate::algorithms::common::{ReachabilityOracle, SearchResult, ShortestPath, Visit};
use crate::grid::Grid;
use pathfinding::prelude::astar;
use rustc_hash::FxHashMap;
use tracing::trace;

/// Implements the reachability query with A* from the `pathfinding` crate.
///
/// Only the cells of the returned path carry predecessors, which is enough to
/// rebuild that one shortest path.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl AStar {
    pub fn new() -> Self {
        AStar
    }
}

impl ReachabilityOracle for AStar {
    fn search(&self, grid: &Grid, prefix: usize) -> SearchResult {
        let (start, end) = (grid.start, grid.end);
        if grid.is_blocked(&start, prefix) || grid.is_blocked(&end, prefix) {
            return SearchResult::Unreachable;
        }

        let result = astar(
            &start,
            // Each move to a free neighbor costs 1.
            |p| grid.open_neighbors(p, prefix).map(|next| (next, 1usize)),
            // Manhattan distance never overestimates on a 4-connected grid.
            |p| p.manhattan(&end),
            |p| *p == end,
        );

        let Some((path, cost)) = result else {
            trace!(prefix, "a* found no path");
            return SearchResult::Unreachable;
        };
        trace!(prefix, cost, "a* finished");

        let visits: FxHashMap<_, _> = path
            .iter()
            .enumerate()
            .map(|(distance, &pos)| {
                let from = distance.checked_sub(1).map(|prev| path[prev]);
                (pos, Visit { from, distance })
            })
            .collect();
        SearchResult::Reached(ShortestPath::new(start, end, visits))
    }

    fn name(&self) -> &'static str {
        "a-star"
    }
}
