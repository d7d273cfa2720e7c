//! Headless Coin Fusion runner (default binary).
//!
//! Plays a scripted list of directions against a seeded game and prints the
//! final board. Useful for reproducing a game from a seed without a front-end.
//! Set `RUST_LOG=debug` to see rejected moves, `trace` to see every spawn.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use coin_fusion::core::GameSession;
use coin_fusion::types::Direction;

#[derive(Debug, Parser)]
#[command(name = "coin-fusion", about = "Play Coin Fusion headlessly from a seed")]
struct Args {
    /// RNG seed for the game
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Number of move attempts to make
    #[arg(long, default_value_t = 64)]
    moves: u32,

    /// Comma-separated directions, replayed in a cycle
    #[arg(long, default_value = "left,down,right,up")]
    directions: String,

    /// Print the final state as a JSON snapshot instead of a grid
    #[arg(long)]
    json: bool,
}

fn parse_directions(list: &str) -> Result<Vec<Direction>> {
    let dirs = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<Direction>())
        .collect::<Result<Vec<_>, _>>()
        .context("parsing --directions")?;
    if dirs.is_empty() {
        bail!("--directions must name at least one direction");
    }
    Ok(dirs)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let directions = parse_directions(&args.directions)?;

    let mut session = GameSession::new(args.seed);
    info!("seed {}: opening board\n{}", args.seed, session.board());

    let mut rejected = 0u32;
    for direction in directions.iter().cycle().take(args.moves as usize) {
        if session.apply(*direction) {
            info!("{direction}: accepted (move {})", session.moves());
        } else {
            rejected += 1;
        }
    }
    info!("{} accepted, {} rejected", session.moves(), rejected);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    } else {
        println!("{}", session.board());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!(
            parse_directions("left, Up ,d").unwrap(),
            vec![Direction::Left, Direction::Up, Direction::Down]
        );
        assert!(parse_directions("left,nowhere").is_err());
        assert!(parse_directions(",").is_err());
    }
}
