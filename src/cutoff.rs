//! Finds the first obstacle whose placement disconnects start from end.
//!
//! Obstacles only ever add blocked cells, so any path that survives the first
//! `k` obstacles also survives every shorter prefix: `reachable(k)` implies
//! `reachable(k')` for all `k' < k`. That monotonicity is what lets
//! [`find_cutoff`] bisect over prefix lengths with `O(log n)` searches instead
//! of re-running the search after every placement.

use crate::algorithms::ReachabilityOracle;
use crate::errors::CutoffError;
use crate::grid::{Grid, Position};
use tracing::debug;

/// One oracle run made while looking for the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub prefix: usize,
    /// `None` when the end was unreachable at this prefix.
    pub steps: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cutoff {
    /// 0-based index of the disconnecting obstacle.
    pub index: usize,
    pub position: Position,
    /// Oracle runs in the order they were made.
    pub probes: Vec<Probe>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Binary,
    Linear,
}

impl Strategy {
    pub fn find<O: ReachabilityOracle + ?Sized>(
        self,
        grid: &Grid,
        oracle: &O,
        known_good: Option<usize>,
    ) -> Result<Cutoff, CutoffError> {
        match self {
            Strategy::Binary => find_cutoff(grid, oracle, known_good),
            Strategy::Linear => find_cutoff_linear(grid, oracle, known_good),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Binary => "binary",
            Strategy::Linear => "linear",
        }
    }
}

fn run_probe<O: ReachabilityOracle + ?Sized>(
    grid: &Grid,
    oracle: &O,
    prefix: usize,
    probes: &mut Vec<Probe>,
) -> bool {
    let steps = oracle.search(grid, prefix).steps();
    match steps {
        Some(steps) => debug!(prefix, steps, oracle = oracle.name(), "probe reachable"),
        None => debug!(prefix, oracle = oracle.name(), "probe unreachable"),
    }
    probes.push(Probe { prefix, steps });
    steps.is_some()
}

/// Checks the obstacle list is non-empty and the seed lies below its length.
fn checked_seed(grid: &Grid, known_good: Option<usize>) -> Result<usize, CutoffError> {
    let obstacle_count = grid.obstacle_count();
    if obstacle_count == 0 {
        return Err(CutoffError::NoObstacles);
    }

    let good = known_good.unwrap_or(0);
    if good >= obstacle_count {
        return Err(CutoffError::KnownGoodOutOfRange {
            known_good: good,
            obstacle_count,
        });
    }
    Ok(good)
}

/// Bisects the obstacle prefix for the first placement that severs the path.
///
/// `known_good` seeds the lower bound with a prefix the caller knows to be
/// reachable; it defaults to 0. The full obstacle list is probed first so that
/// a list that never disconnects the corners is reported as an error instead of
/// yielding an out-of-range index, and a non-zero seed is verified before use.
pub fn find_cutoff<O: ReachabilityOracle + ?Sized>(
    grid: &Grid,
    oracle: &O,
    known_good: Option<usize>,
) -> Result<Cutoff, CutoffError> {
    let mut good = checked_seed(grid, known_good)?;
    let obstacle_count = grid.obstacle_count();

    let mut probes = Vec::new();
    if run_probe(grid, oracle, obstacle_count, &mut probes) {
        return Err(CutoffError::NeverDisconnected { obstacle_count });
    }
    if good > 0 && !run_probe(grid, oracle, good, &mut probes) {
        return Err(CutoffError::KnownGoodUnreachable { known_good: good });
    }

    let mut bad = obstacle_count;
    while bad - good > 1 {
        let mid = good + (bad - good) / 2;
        if run_probe(grid, oracle, mid, &mut probes) {
            good = mid;
        } else {
            bad = mid;
        }
    }

    Ok(Cutoff {
        index: good,
        position: grid.obstacles()[good],
        probes,
    })
}

/// Re-runs the search after every placement until the end becomes unreachable.
///
/// Needs up to `n` searches; kept as the reference that [`find_cutoff`] must
/// agree with. A `known_good` seed is checked like in [`find_cutoff`] and the
/// scan resumes right after it.
pub fn find_cutoff_linear<O: ReachabilityOracle + ?Sized>(
    grid: &Grid,
    oracle: &O,
    known_good: Option<usize>,
) -> Result<Cutoff, CutoffError> {
    let good = checked_seed(grid, known_good)?;
    let obstacle_count = grid.obstacle_count();

    let mut probes = Vec::new();
    if good > 0 && !run_probe(grid, oracle, good, &mut probes) {
        return Err(CutoffError::KnownGoodUnreachable { known_good: good });
    }

    for prefix in good + 1..=obstacle_count {
        if !run_probe(grid, oracle, prefix, &mut probes) {
            let index = prefix - 1;
            return Ok(Cutoff {
                index,
                position: grid.obstacles()[index],
                probes,
            });
        }
    }

    Err(CutoffError::NeverDisconnected { obstacle_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{AStar, Bfs};
    use crate::scenario::horizontal_wall;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn walled_grid() -> Grid {
        // Some harmless drops, then a wall on row 3 whose last brick is (6, 3).
        let mut obstacles = vec![p(2, 0), p(4, 5), p(0, 6), p(2, 0)];
        obstacles.extend(horizontal_wall(7, 3));
        obstacles.extend([p(1, 1), p(5, 5)]);
        Grid::square(7, obstacles).unwrap()
    }

    #[test]
    fn finds_the_last_brick_of_the_wall() {
        let grid = walled_grid();
        let cutoff = find_cutoff(&grid, &Bfs::new(), None).unwrap();
        assert_eq!(cutoff.index, 10);
        assert_eq!(cutoff.position, p(6, 3));
    }

    #[test]
    fn agrees_with_linear_scan() {
        let grid = walled_grid();
        let binary = find_cutoff(&grid, &Bfs::new(), None).unwrap();
        let linear = find_cutoff_linear(&grid, &Bfs::new(), None).unwrap();
        assert_eq!(binary.index, linear.index);
        assert_eq!(binary.position, linear.position);
        assert_eq!(linear.probes.len(), 11);
        assert!(binary.probes.len() < linear.probes.len());
    }

    #[test]
    fn binary_probes_stay_logarithmic() {
        let obstacles = (0..200).map(|ind| p(ind % 50 + 1, ind / 50 + 1)).chain([p(0, 1), p(1, 0)]);
        let grid = Grid::square(60, obstacles.collect()).unwrap();
        let cutoff = find_cutoff(&grid, &Bfs::new(), None).unwrap();
        assert_eq!(cutoff.position, p(1, 0));
        // One precondition probe plus ceil(log2(202)) bisection steps.
        assert!(cutoff.probes.len() <= 1 + 8, "{} probes", cutoff.probes.len());
    }

    #[test]
    fn first_obstacle_can_be_the_cutoff() {
        let grid = Grid::square(3, vec![p(2, 2), p(1, 1)]).unwrap();
        let cutoff = find_cutoff(&grid, &Bfs::new(), None).unwrap();
        assert_eq!(cutoff.index, 0);
        assert_eq!(cutoff.position, p(2, 2));
    }

    #[test]
    fn known_good_seed_narrows_the_search() {
        let grid = walled_grid();
        let seeded = find_cutoff(&grid, &Bfs::new(), Some(8)).unwrap();
        assert_eq!(seeded.index, 10);
        assert_eq!(seeded.probes[0], Probe { prefix: 13, steps: None });
        assert_eq!(seeded.probes[1].prefix, 8);
        assert!(seeded.probes[1].steps.is_some());
    }

    #[test]
    fn linear_scan_resumes_after_known_good() {
        let grid = walled_grid();
        let seeded = find_cutoff_linear(&grid, &Bfs::new(), Some(8)).unwrap();
        assert_eq!(seeded.index, 10);
        assert_eq!(seeded.position, p(6, 3));
        let prefixes: Vec<_> = seeded.probes.iter().map(|probe| probe.prefix).collect();
        assert_eq!(prefixes, vec![8, 9, 10, 11]);

        let seeded = Strategy::Linear.find(&grid, &Bfs::new(), Some(10)).unwrap();
        assert_eq!(seeded.index, 10);
    }

    #[test]
    fn linear_scan_rejects_bad_seeds() {
        let grid = walled_grid();
        assert_eq!(
            find_cutoff_linear(&grid, &Bfs::new(), Some(13)).unwrap_err(),
            CutoffError::KnownGoodOutOfRange {
                known_good: 13,
                obstacle_count: 13,
            }
        );
        assert_eq!(
            find_cutoff_linear(&grid, &Bfs::new(), Some(11)).unwrap_err(),
            CutoffError::KnownGoodUnreachable { known_good: 11 }
        );
    }

    #[test]
    fn probes_record_distances() {
        let grid = walled_grid();
        let cutoff = find_cutoff(&grid, &Bfs::new(), None).unwrap();
        for probe in &cutoff.probes {
            assert_eq!(probe.steps, Bfs::new().search(&grid, probe.prefix).steps());
        }
    }

    #[test]
    fn works_with_any_oracle() {
        let grid = walled_grid();
        let cutoff = Strategy::Binary.find(&grid, &AStar::new(), None).unwrap();
        assert_eq!(cutoff.position, p(6, 3));
        let cutoff = Strategy::Linear.find(&grid, &AStar::new(), None).unwrap();
        assert_eq!(cutoff.position, p(6, 3));
    }

    #[test]
    fn reports_lists_that_never_disconnect() {
        let grid = Grid::square(7, vec![p(3, 3), p(1, 1)]).unwrap();
        let expected = CutoffError::NeverDisconnected { obstacle_count: 2 };
        assert_eq!(find_cutoff(&grid, &Bfs::new(), None).unwrap_err(), expected);
        assert_eq!(find_cutoff_linear(&grid, &Bfs::new(), None).unwrap_err(), expected);
    }

    #[test]
    fn reports_empty_lists() {
        let grid = Grid::square(7, vec![]).unwrap();
        assert_eq!(
            find_cutoff(&grid, &Bfs::new(), None).unwrap_err(),
            CutoffError::NoObstacles
        );
        assert_eq!(
            find_cutoff_linear(&grid, &Bfs::new(), None).unwrap_err(),
            CutoffError::NoObstacles
        );
    }

    #[test]
    fn rejects_bad_seeds() {
        let grid = walled_grid();
        assert_eq!(
            find_cutoff(&grid, &Bfs::new(), Some(13)).unwrap_err(),
            CutoffError::KnownGoodOutOfRange {
                known_good: 13,
                obstacle_count: 13,
            }
        );
        assert_eq!(
            find_cutoff(&grid, &Bfs::new(), Some(12)).unwrap_err(),
            CutoffError::KnownGoodUnreachable { known_good: 12 }
        );
    }
}
