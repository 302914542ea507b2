//! Headless AI vs AI match
//!
//! Usage: `selfplay [TIGER_DIFFICULTY] [GOAT_DIFFICULTY] [SEED] [MAX_PLIES]`
//!
//! Prints the board after every move. Set `RUST_LOG=debug` to see the
//! search statistics.

use std::env;
use std::process::ExitCode;

use log::info;

use baghchal::{AIEngine, Difficulty, GameMode, Match, MatchConfig, Side};

const DEFAULT_MAX_PLIES: u32 = 300;

struct Args {
    tiger: Difficulty,
    goat: Difficulty,
    seed: Option<u64>,
    max_plies: u32,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let tiger = args
        .next()
        .map(|s| s.parse::<Difficulty>())
        .transpose()?
        .unwrap_or_default();
    let goat = args
        .next()
        .map(|s| s.parse::<Difficulty>())
        .transpose()?
        .unwrap_or_default();
    let seed = args
        .next()
        .map(|s| s.parse::<u64>().map_err(|e| format!("bad seed '{s}': {e}")))
        .transpose()?;
    let max_plies = args
        .next()
        .map(|s| s.parse::<u32>().map_err(|e| format!("bad ply limit '{s}': {e}")))
        .transpose()?
        .unwrap_or(DEFAULT_MAX_PLIES);

    Ok(Args {
        tiger,
        goat,
        seed,
        max_plies,
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: selfplay [easy|medium|hard] [easy|medium|hard] [seed] [max plies]");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match args.seed {
        Some(seed) => AIEngine::seeded(seed),
        None => AIEngine::new(),
    };

    // Threshold and undo rules follow a PvP match; both sides are scripted
    let mut game = Match::new(MatchConfig::new(GameMode::Pvp, Side::Goat, Difficulty::Medium));
    println!("Tigers: {}  Goats: {}\n{}", args.tiger, args.goat, game.board());

    for ply in 1..=args.max_plies {
        let side = game.turn();
        let difficulty = match side {
            Side::Tiger => args.tiger,
            Side::Goat => args.goat,
        };

        let result = engine.select_move_with_stats(
            game.board(),
            side,
            game.phase(),
            difficulty,
            game.goats_captured(),
        );
        let Some(mv) = result.best_move else {
            println!("{side} has no legal move");
            break;
        };

        let outcome = match game.apply(mv) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("engine produced a rejected move: {err}");
                return ExitCode::FAILURE;
            }
        };

        println!(
            "{ply:>3}. {side} {mv}{}  [{:?}, {} nodes, {}ms]",
            if outcome.captured { "  (goat eaten)" } else { "" },
            result.search_type,
            result.nodes,
            result.time_ms
        );
        println!("{}", game.board());

        if game.is_over() {
            break;
        }
    }

    match game.outcome() {
        Some(outcome) => {
            info!(
                "{} wins after {} captures ({} goats placed)",
                outcome.winner,
                outcome.goats_captured,
                game.goats_placed()
            );
            println!("{} wins. Goats eaten: {}", outcome.winner, outcome.goats_captured);
        }
        None => {
            info!("no result within {} plies", args.max_plies);
            println!("No result. Goats eaten: {}", game.goats_captured());
        }
    }

    ExitCode::SUCCESS
}
