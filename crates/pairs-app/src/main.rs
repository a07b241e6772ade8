#![deny(warnings)]

use anyhow::{Context, Result};
use clap::Parser;
use pairs_app::controller::GameController;
use pairs_app::logging::init_logging;
use pairs_app::simulate::run_game;
use pairs_core::game::session::OpponentMode;
use pairs_core::game::snapshot::SessionSnapshot;
use pairs_core::model::catalog::Catalog;
use pairs_core::model::deck::DeckSize;

/// Plays memory-matching games from the command line with a random
/// clicker standing in for the human player.
#[derive(Debug, Parser)]
#[command(name = "pairs", version, about)]
struct Cli {
    /// Board size in cards: 18, 24 or 32.
    #[arg(long, default_value = "18")]
    deck_size: DeckSize,

    /// Who plays side B: `user` (a second clicker) or `computer`.
    #[arg(long, default_value = "computer")]
    opponent: OpponentMode,

    /// Number of games to play back to back.
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Seed for deck shuffles and opponent choices; random when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final session snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Log at DEBUG instead of INFO.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut controller = GameController::with_seed(Catalog::builtin(), seed);

    for game in 0..cli.games {
        let report = run_game(
            &mut controller,
            cli.deck_size,
            cli.opponent,
            seed.wrapping_add(game as u64),
        )
        .with_context(|| format!("playing game {}", game + 1))?;
        if !cli.json {
            println!(
                "game {}: {} ({} - {})",
                game + 1,
                report.result.as_str(),
                report.score_a,
                report.score_b
            );
        }
    }

    if cli.json {
        let json = SessionSnapshot::to_json(controller.session()).context("encoding snapshot")?;
        println!("{json}");
    }
    Ok(())
}
