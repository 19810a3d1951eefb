use crate::algorithms::{AStar, Bfs, ReachabilityOracle};
use crate::cutoff::Strategy;
use crate::errors::GridError;
use crate::grid::{Grid, Position};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log filter, e.g. `debug`; overrides GRID_CUTOFF_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Shortest step count with a fixed number of obstacles placed.
    Steps(StepsArgs),
    /// First obstacle whose placement cuts the start off from the end.
    Cutoff(CutoffArgs),
    /// Print a random obstacle sequence.
    Generate(GenerateArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    Bfs,
    AStar,
}

impl Algorithm {
    pub fn oracle(self) -> Box<dyn ReachabilityOracle> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new()),
            Algorithm::AStar => Box::new(AStar::new()),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyArg {
    #[default]
    Binary,
    Linear,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Binary => Strategy::Binary,
            StrategyArg::Linear => Strategy::Linear,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub width: usize,

    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub height: usize,

    /// Start cell as `x,y` [default: 0,0]
    #[arg(long)]
    pub start: Option<Position>,

    /// End cell as `x,y` [default: the opposite corner]
    #[arg(long)]
    pub end: Option<Position>,

    #[arg(long, value_enum, default_value_t = Algorithm::Bfs)]
    pub algorithm: Algorithm,

    /// Obstacle file with one `x,y` per line, or `-` for stdin.
    pub input: PathBuf,
}

impl GridArgs {
    pub fn build(&self, obstacles: Vec<Position>) -> Result<Grid, GridError> {
        let grid = Grid::new(self.width, self.height, obstacles)?;
        if self.start.is_none() && self.end.is_none() {
            return Ok(grid);
        }
        let start = self.start.unwrap_or(grid.start);
        let end = self.end.unwrap_or(grid.end);
        grid.with_endpoints(start, end)
    }
}

#[derive(Args, Debug, Clone)]
pub struct StepsArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Number of obstacles placed [default: all of them]
    #[arg(long)]
    pub prefix: Option<usize>,

    /// Draw the grid and the path found.
    #[arg(long, default_value_t = false)]
    pub show: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CutoffArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// A prefix length already known to leave a path open.
    #[arg(long)]
    pub known_good: Option<usize>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Binary)]
    pub strategy: StrategyArg,

    /// Print probe statistics after the result.
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub width: usize,

    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub height: usize,

    #[arg(long)]
    pub count: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}
