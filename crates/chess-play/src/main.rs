//! Terminal front end for the fixed-depth search.
//!
//! `play` runs an interactive game, `best-move` prints the engine's choice
//! for a position and `eval` prints its static evaluation.

mod config;
mod game;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chess_search::{evaluate, Board, NullMovePolicy, Rules, SearchConfig, Searcher};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use config::PlayConfig;
use game::{ask_color, side_name, Session, SessionEnd};
use shakmaty::Color;
use tracing_subscriber::EnvFilter;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Play chess against a fixed-depth minimax search", version)]
struct Cli {
    /// Configuration file (defaults to ./chess-play.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine
    Play {
        /// Colour you play; asked interactively if omitted
        #[arg(long, value_enum)]
        color: Option<Side>,
        /// Starting position
        #[arg(long, default_value = STARTPOS)]
        fen: String,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print the move the engine would play
    BestMove {
        /// Position to search
        #[arg(long, default_value = STARTPOS)]
        fen: String,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print the static evaluation (positive favours White)
    Eval {
        /// Position to evaluate
        #[arg(long, default_value = STARTPOS)]
        fen: String,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u32>,
    /// Disable null-move pruning
    #[arg(long)]
    no_null_move: bool,
}

impl SearchArgs {
    /// Applies the flags on top of `config` and validates the result.
    fn apply(&self, mut config: SearchConfig) -> anyhow::Result<SearchConfig> {
        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        if self.no_null_move {
            config = config.with_null_move(NullMovePolicy::Disabled);
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn init_tracing(verbose: u8, default_filter: &str) {
    let default_filter = match verbose {
        0 => default_filter,
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(cli.verbose, &config.log_filter);

    match cli.command {
        Commands::Play { color, fen, search } => {
            let board = Board::from_fen(&fen)?;
            let searcher = Searcher::new(search.apply(config.search)?);

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();

            let human = match color {
                Some(side) => side.into(),
                None => match ask_color(&mut input, &mut output)? {
                    Some(color) => color,
                    None => return Ok(()),
                },
            };
            tracing::info!(human = side_name(human), depth = searcher.config().depth, "starting game");

            let mut session = Session::new(board, human, searcher, input, output);
            match session.run()? {
                SessionEnd::Finished(outcome) => tracing::info!(%outcome, "game finished"),
                SessionEnd::InputClosed => tracing::info!("input closed before the game ended"),
            }
            tracing::debug!(plies = session.board().ply_count(), "session closed");
        }
        Commands::BestMove { fen, search } => {
            let mut board = Board::from_fen(&fen)?;
            let mut searcher = Searcher::new(search.apply(config.search)?);
            let best = searcher.best_move_for_side_to_move(&mut board)?;
            println!(
                "bestmove {} ({}) score {} nodes {}",
                board.uci(&best.mv),
                board.san(&best.mv),
                best.score,
                searcher.stats().nodes
            );
        }
        Commands::Eval { fen } => {
            let board = Board::from_fen(&fen)?;
            print!("{board}");
            println!("{} to move", side_name(board.turn()));
            println!("eval {}", evaluate(&board));
        }
    }

    Ok(())
}
