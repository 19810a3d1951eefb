use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use grid_cutoff::config::{Command, Config, CutoffArgs, GenerateArgs, GridArgs, StepsArgs};
use grid_cutoff::cutoff::Strategy;
use grid_cutoff::statistics::CutoffStatistics;
use grid_cutoff::{logging, parse_obstacles, scenario, Grid};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init_tracing(config.log_level.as_deref());

    match config.command {
        Command::Steps(args) => run_steps(&args),
        Command::Cutoff(args) => run_cutoff(&args),
        Command::Generate(args) => run_generate(&args),
    }
}

fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read obstacles from stdin.")?;
    } else {
        text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open given file({}).", path.display()))?;
    }
    Ok(text)
}

fn load_grid(args: &GridArgs) -> Result<Grid> {
    let text = read_input(&args.input)?;
    let obstacles = parse_obstacles(&text)
        .with_context(|| format!("Failed to parse obstacles from {}.", args.input.display()))?;
    let grid = args.build(obstacles).context("Invalid grid configuration.")?;
    info!(
        width = grid.width,
        height = grid.height,
        start = %grid.start,
        end = %grid.end,
        obstacles = grid.obstacle_count(),
        "grid loaded"
    );
    Ok(grid)
}

fn run_steps(args: &StepsArgs) -> Result<()> {
    let grid = load_grid(&args.grid)?;
    let prefix = args.prefix.unwrap_or(grid.obstacle_count());
    if prefix > grid.obstacle_count() {
        warn!(
            prefix,
            obstacles = grid.obstacle_count(),
            "prefix exceeds the obstacle count; placing all of them"
        );
    }

    let oracle = args.grid.algorithm.oracle();
    let result = oracle.search(&grid, prefix);
    let path = match result.shortest_path() {
        Some(found) => {
            info!(prefix, steps = found.steps(), oracle = oracle.name(), "path found");
            println!("steps: {}", found.steps());
            found.path()
        }
        None => {
            info!(prefix, oracle = oracle.name(), "no path");
            println!("no path");
            Vec::new()
        }
    };

    if args.show {
        print!("{}", grid.render(prefix, &path));
    }
    Ok(())
}

fn run_cutoff(args: &CutoffArgs) -> Result<()> {
    let grid = load_grid(&args.grid)?;
    let oracle = args.grid.algorithm.oracle();
    let strategy = Strategy::from(args.strategy);

    let started = Instant::now();
    let cutoff = strategy
        .find(&grid, &*oracle, args.known_good)
        .context("Cutoff search failed.")?;
    let elapsed = started.elapsed();

    info!(index = cutoff.index, position = %cutoff.position, "cutoff found");
    println!("cutoff: {}", cutoff.position);
    println!("index: {}", cutoff.index);

    if args.stats {
        let stats = CutoffStatistics::new(
            strategy.name(),
            oracle.name(),
            grid.obstacle_count(),
            &cutoff,
            elapsed,
        );
        println!("{}", stats);
    }
    Ok(())
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let obstacles = scenario::generate(args.width, args.height, args.count, args.seed)
        .context("Invalid grid configuration.")?;
    if obstacles.len() < args.count {
        warn!(
            requested = args.count,
            generated = obstacles.len(),
            "grid has fewer free cells than requested"
        );
    }
    for pos in obstacles {
        println!("{}", pos);
    }
    Ok(())
}
