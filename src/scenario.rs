use crate::errors::GridError;
use crate::grid::Position;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Generates a reproducible obstacle sequence of up to `count` distinct cells.
///
/// The start corner is never chosen. The end corner may be, so a sequence long
/// enough always ends up severing the path. Without a seed the sequence comes
/// from entropy. Only the requested cells are drawn, so large grids stay cheap.
pub fn generate(
    width: usize,
    height: usize,
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<Position>, GridError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let cells = width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })?;
    // Cell 0 is the start corner; candidates are cells 1..cells.
    let candidates = cells.saturating_sub(1);
    let amount = count.min(candidates);

    Ok(index::sample(&mut rng, candidates, amount)
        .into_iter()
        .map(|ind| {
            let cell = ind + 1;
            Position::new(cell % width, cell / width)
        })
        .collect())
}

/// A full-width wall on row `y`, placed left to right.
pub fn horizontal_wall(width: usize, y: usize) -> Vec<Position> {
    (0..width).map(|x| Position::new(x, y)).collect()
}
