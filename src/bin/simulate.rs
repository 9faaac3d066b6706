use std::collections::HashMap;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use dominoes::{DecisionProvider, GameError, GameSession, RandomProvider, RoundOutcome};

const DEFAULT_SEED: u64 = 0x00D0_0D0E_5EED;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Run seeded batches of dominoes rounds with random providers."
)]
struct Args {
    /// Number of rounds to simulate
    #[arg(short = 'r', long = "rounds", default_value_t = 100)]
    rounds: usize,

    /// Base RNG seed (session shuffles and provider RNGs derive from it)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of seats at the table
    #[arg(short = 'p', long = "players", default_value_t = 4)]
    players: usize,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let names: Vec<String> = (1..=args.players).map(|n| format!("Seat{n}")).collect();
    let mut session = GameSession::with_seed(names.clone(), args.seed)?;

    let mut providers: Vec<Box<dyn DecisionProvider>> = (0..args.players)
        .map(|seat| {
            let rng = StdRng::seed_from_u64(args.seed.wrapping_add(seat as u64 + 1));
            Box::new(RandomProvider::new(rng)) as Box<dyn DecisionProvider>
        })
        .collect();

    let mut wins: HashMap<String, usize> = HashMap::new();
    let mut blocked_rounds = 0usize;
    for _ in 0..args.rounds {
        let report = session.play_round(&mut providers)?;
        if matches!(report.outcome, RoundOutcome::Blocked) {
            blocked_rounds += 1;
        }
        *wins.entry(report.score.winner).or_default() += 1;
    }

    println!(
        "{} round(s), {} player(s), seed {:#x}",
        args.rounds, args.players, args.seed
    );
    println!("Blocked rounds: {blocked_rounds}");
    println!("\n{:<10} {:>6} {:>8} {:>8}", "seat", "wins", "win %", "points");
    for (name, points) in session.totals() {
        let won = wins.get(name).copied().unwrap_or(0);
        let rate = if args.rounds == 0 {
            0.0
        } else {
            100.0 * won as f64 / args.rounds as f64
        };
        println!("{name:<10} {won:>6} {rate:>7.1}% {points:>8}");
    }
    Ok(())
}
