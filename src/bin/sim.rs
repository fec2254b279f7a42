use std::io;

use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, AiPlayer, Mark, Player, Session};

/// Play the heuristic against itself and report the tally as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: u32,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
}

/// Play one round to the end, returning the winner or `None` on a draw.
fn play_round(rng: &mut SmallRng) -> anyhow::Result<Option<Mark>> {
    let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
    let mut session = Session::new(players);
    session.play_round(rng, &mut io::sink())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for _ in 0..args.games {
        match play_round(&mut rng)? {
            Some(Mark::X) => x_wins += 1,
            Some(Mark::O) => o_wins += 1,
            None => draws += 1,
        }
    }

    let result = json!({
        "games": args.games,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
