use crate::errors::{GridError, ParseError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Manhattan distance, used as the A* heuristic and to check path steps.
    pub fn manhattan(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    fn offset(&self, dx: isize, dy: isize) -> Option<Position> {
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

fn parse_coordinate(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedPosition {
            text: s.to_string(),
        };
        let (x, y) = s.split_once(',').ok_or_else(malformed)?;
        let x = parse_coordinate(x).ok_or_else(malformed)?;
        let y = parse_coordinate(y).ok_or_else(malformed)?;
        Ok(Position { x, y })
    }
}

/// Expansion order for neighbors: +x, +y, -x, -y.
static DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const NEVER: usize = usize::MAX;

/// A bounded grid with fixed endpoints and a time-ordered obstacle list.
///
/// Obstacles are never removed: the first `k` entries of the list are the cells
/// blocked at prefix `k`. Each cell remembers the index of the first obstacle
/// that lands on it, so `is_blocked` answers any prefix in constant time.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub start: Position,
    pub end: Position,
    obstacles: Vec<Position>,
    first_drop: Vec<usize>,
}

impl Grid {
    /// Builds a grid whose start and end are the opposite corners.
    ///
    /// Obstacles outside the grid are rejected rather than ignored.
    pub fn new(width: usize, height: usize, obstacles: Vec<Position>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }

        let cells = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;
        let mut first_drop = vec![NEVER; cells];
        for (index, &position) in obstacles.iter().enumerate() {
            if position.x >= width || position.y >= height {
                return Err(GridError::ObstacleOutOfBounds {
                    index,
                    position,
                    width,
                    height,
                });
            }
            let cell = &mut first_drop[position.y * width + position.x];
            if *cell == NEVER {
                *cell = index;
            }
        }

        Ok(Grid {
            width,
            height,
            start: Position::new(0, 0),
            end: Position::new(width - 1, height - 1),
            obstacles,
            first_drop,
        })
    }

    pub fn square(size: usize, obstacles: Vec<Position>) -> Result<Self, GridError> {
        Self::new(size, size, obstacles)
    }

    /// Replaces the default corner endpoints.
    pub fn with_endpoints(mut self, start: Position, end: Position) -> Result<Self, GridError> {
        for position in [start, end] {
            if !self.in_bounds(&position) {
                return Err(GridError::EndpointOutOfBounds {
                    position,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        self.start = start;
        self.end = end;
        Ok(self)
    }

    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// True iff `pos` is among the first `prefix` obstacles.
    pub fn is_blocked(&self, pos: &Position, prefix: usize) -> bool {
        self.index_of(pos)
            .map(|ind| self.first_drop[ind] < prefix)
            .unwrap_or(false)
    }

    /// In-bounds neighbors in the fixed expansion order, blocked or not.
    pub fn neighbors(&self, pos: &Position) -> impl Iterator<Item = Position> + '_ {
        let pos = *pos;
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| pos.offset(dx, dy))
            .filter(move |next| self.in_bounds(next))
    }

    /// Neighbors that are free under the given prefix.
    pub fn open_neighbors(&self, pos: &Position, prefix: usize) -> impl Iterator<Item = Position> + '_ {
        self.neighbors(pos)
            .filter(move |next| !self.is_blocked(next, prefix))
    }

    /// Draws the grid: `#` for blocked cells, `O` for cells on `path`, `.` otherwise.
    pub fn render(&self, prefix: usize, path: &[Position]) -> String {
        let on_path: FxHashSet<Position> = path.iter().copied().collect();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position { x, y };
                let ch = if self.is_blocked(&pos, prefix) {
                    '#'
                } else if on_path.contains(&pos) {
                    'O'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn index_of(&self, pos: &Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y * self.width + pos.x)
        } else {
            None
        }
    }
}
