use std::io::{self, Write};
use std::process;

use clap::Parser;

use dominoes::providers::console::{prompt_player_count, prompt_player_names};
use dominoes::{ConsoleProvider, DecisionProvider, GameError, GameSession, RoundOutcome};

#[derive(Parser, Debug)]
#[command(name = "play", about = "Interactive console dominoes for 2-4 players.")]
struct Args {
    /// Fix the session RNG seed (shuffles become reproducible).
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), GameError> {
    println!("===== DOMINOES =====");
    let count = prompt_player_count();
    let names = prompt_player_names(count);
    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(names, seed)?,
        None => GameSession::new(names)?,
    };

    loop {
        println!("\n--> New round: shuffling and dealing...");
        let mut providers: Vec<Box<dyn DecisionProvider>> = session
            .names()
            .iter()
            .map(|_| Box::new(ConsoleProvider::new()) as Box<dyn DecisionProvider>)
            .collect();
        let report = session.play_round(&mut providers)?;

        match &report.outcome {
            RoundOutcome::Won { winner } => {
                println!("\n*** {winner} played their last tile and wins the round! ***");
            }
            RoundOutcome::Blocked => {
                println!("\n--- Blocked: nobody can play and the pool is empty ---");
                println!(
                    "{} takes the round with the lowest pip count.",
                    report.score.winner
                );
            }
        }
        println!(
            "{} scores {} point(s) this round.",
            report.score.winner, report.score.points
        );

        println!("\n=== CUMULATIVE SCORES ===");
        for (name, points) in session.totals() {
            println!("  {name}: {points}");
        }

        match post_round_menu() {
            MenuChoice::PlayAgain => {}
            MenuChoice::ResetScores => {
                session.reset_scores();
                println!("Scores reset.");
            }
            MenuChoice::NewPlayers => {
                let count = prompt_player_count();
                let names = prompt_player_names(count);
                session.reconfigure(names)?;
            }
            MenuChoice::Quit => break,
        }
    }
    println!("Thanks for playing!");
    Ok(())
}

enum MenuChoice {
    PlayAgain,
    ResetScores,
    NewPlayers,
    Quit,
}

fn post_round_menu() -> MenuChoice {
    loop {
        println!("\nOptions:");
        println!("  1 - Play another round (keep scores)");
        println!("  2 - Reset scores and keep playing");
        println!("  3 - Set up new players");
        println!("  4 - Quit");
        print!("Choice: ");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => return MenuChoice::Quit,
            Ok(_) => {}
            Err(_) => {
                eprintln!("failed to read input");
                continue;
            }
        }
        match input.trim() {
            "1" => return MenuChoice::PlayAgain,
            "2" => return MenuChoice::ResetScores,
            "3" => return MenuChoice::NewPlayers,
            "4" => return MenuChoice::Quit,
            other => println!("Unknown option '{other}'."),
        }
    }
}
