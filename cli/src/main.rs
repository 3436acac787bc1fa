use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use sketchfind_core::*;

mod report;

#[derive(Parser, Debug)]
#[command(version, about = "Suggests the next cell to probe on the hidden-picture grid", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Grid in text form, six rows of `.#oLM`; `-` or absent reads stdin
    grid: Option<PathBuf>,

    /// Which of the two weekly play sessions this is
    #[arg(short, long, value_enum, env = "SKETCHFIND_SESSION", default_value_t = SessionArg::First)]
    session: SessionArg,

    /// How the grid input is encoded
    #[arg(long, value_enum, default_value_t = InputFormat::Text)]
    input: InputFormat,

    /// How to print the recommendation
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Start from an empty grid instead of reading one
    #[arg(long)]
    reset: bool,

    /// Record the next probe result on a cell before recommending (repeatable)
    #[arg(long, value_name = "X,Y", value_parser = parse_coords)]
    cycle: Vec<Coord2>,

    /// Toggle the solver-only block on a cell before recommending (repeatable)
    #[arg(long, value_name = "X,Y", value_parser = parse_coords)]
    block: Vec<Coord2>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SessionArg {
    First,
    Second,
    SecondAlternate,
}

impl From<SessionArg> for Session {
    fn from(arg: SessionArg) -> Self {
        match arg {
            SessionArg::First => Session::First,
            SessionArg::Second => Session::Second,
            SessionArg::SecondAlternate => Session::SecondAlternate,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    session: Session,
    grid: &'a Grid,
    #[serde(flatten)]
    recommendation: &'a Recommendation,
}

fn parse_coords(value: &str) -> Result<Coord2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {value:?}"))?;
    let parse = |axis: &str| -> Result<Coord, String> {
        let n: Coord = axis
            .trim()
            .parse()
            .map_err(|err| format!("bad coordinate {axis:?}: {err}"))?;
        if n >= GRID_SIZE {
            return Err(format!("coordinate {n} is off the {GRID_SIZE}x{GRID_SIZE} grid"));
        }
        Ok(n)
    };
    Ok((parse(x)?, parse(y)?))
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    use tracing_subscriber::filter::LevelFilter;

    let level = match verbose.log_level_filter() {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_grid(args: &Args) -> Result<Grid> {
    if args.reset {
        log::debug!("starting from an empty grid");
        return Ok(Grid::new());
    }

    let source = match args.grid.as_deref() {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Could not read grid from {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read grid from stdin")?;
            buf
        }
    };

    match args.input {
        InputFormat::Text => source.parse().context("Could not parse text grid"),
        InputFormat::Json => serde_json::from_str(&source).context("Could not parse JSON grid"),
    }
}

fn apply_events(grid: &mut Grid, cycle: &[Coord2], block: &[Coord2]) -> Result<()> {
    for &coords in cycle {
        let cell = grid
            .cycle_probe(coords)
            .with_context(|| format!("Could not record probe at {coords:?}"))?;
        log::info!("cell {coords:?} is now {cell:?}");
    }
    for &coords in block {
        let cell = grid
            .toggle_blocked(coords)
            .with_context(|| format!("Could not toggle block at {coords:?}"))?;
        log::info!("cell {coords:?} is now {cell:?}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let mut grid = read_grid(&args)?;
    apply_events(&mut grid, &args.cycle, &args.block)?;

    let session = Session::from(args.session);
    let recommendation = recommend(&grid, session).context("Grid cannot be solved")?;

    match args.format {
        OutputFormat::Text => print!("{}", report::render(&grid, &recommendation)),
        OutputFormat::Json => {
            let report = JsonReport {
                session,
                grid: &grid,
                recommendation: &recommendation,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
