use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord, FlagOutcome, GameConfig, OpenOutcome, Placement};

use command::Command;
use render::Renderer;
use session::Session;

mod command;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in cells
    #[arg(long, default_value_t = GameConfig::default().size.0)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = GameConfig::default().size.1)]
    height: Coord,

    /// Number of mines to place
    #[arg(short, long, default_value_t = GameConfig::default().mines)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draw mine positions with replacement, so the board may get fewer mines
    #[arg(long)]
    with_replacement: bool,
}

fn init_logging(filter: log::LevelFilter) {
    use tracing_subscriber::filter::LevelFilter;

    let filter = match filter {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");

    let placement = if args.with_replacement {
        Placement::WithReplacement
    } else {
        Placement::Exact
    };
    let config = GameConfig::new((args.width, args.height), args.mines);
    let mut session = Session::new(config, placement, seed);

    let mut renderer = Renderer::new(io::stdout().lock());
    renderer.help()?;
    renderer.render(&session.snapshot())?;

    let mut input = io::stdin().lock();
    let mut line = String::new();
    loop {
        renderer.prompt()?;
        line.clear();
        if input.read_line(&mut line).context("Could not read command")? == 0 {
            break;
        }

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                renderer.message(err)?;
                continue;
            }
        };

        let changed = match command {
            Command::Open(coords) => session.open(coords).map(OpenOutcome::has_update),
            Command::Flag(coords) => session.toggle_flag(coords).map(FlagOutcome::has_update),
            Command::New => {
                session.restart();
                Ok(true)
            }
            Command::Help => {
                renderer.help()?;
                continue;
            }
            Command::Quit => break,
        };

        match changed {
            Ok(true) => renderer.render(&session.snapshot())?,
            Ok(false) => renderer.message("Nothing changed")?,
            Err(err) => renderer.message(err)?,
        }
    }

    log::debug!("Session ended on seed {}", session.seed());
    Ok(())
}
