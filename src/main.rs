#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, prompt_play_with_ai, AiPlayer, CliPlayer, Mark, Player, Session};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Who sits opposite the first human. Asked interactively when omitted.
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,
    /// Mark played by the computer.
    #[arg(long, value_enum, default_value_t = MarkArg::O)]
    ai_mark: MarkArg,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Opponent {
    Ai,
    Human,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum MarkArg {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let play_with_ai = match cli.opponent {
        Some(Opponent::Ai) => true,
        Some(Opponent::Human) => false,
        None => prompt_play_with_ai(&mut std::io::stdin().lock())?,
    };

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (AI moves will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    // seat 0 plays X, seat 1 plays O
    let players: [Box<dyn Player>; 2] = match (play_with_ai, Mark::from(cli.ai_mark)) {
        (false, _) => [Box::new(CliPlayer::new()), Box::new(CliPlayer::new())],
        (true, Mark::X) => [Box::new(AiPlayer::new()), Box::new(CliPlayer::new())],
        (true, Mark::O) => [Box::new(CliPlayer::new()), Box::new(AiPlayer::new())],
    };
    if play_with_ai {
        log::info!("computer plays {}", Mark::from(cli.ai_mark));
    }

    let mut session = Session::new(players);
    session.run(&mut rng, &mut std::io::stdout())?;
    Ok(())
}
