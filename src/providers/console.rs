use std::io::{self, Write};

use crate::board::End;
use crate::display::{describe_placement, render_view};
use crate::play::{Placement, PlayChoice};
use crate::provider::DecisionProvider;
use crate::state::TurnView;
use crate::tile::{MAX_PLAYERS, MIN_PLAYERS};

/// Interactive provider that drives one seat from standard input.
///
/// All malformed input (bad indices, unknown side letters, non-numeric
/// entries) is absorbed here with a re-prompt; the engine only ever receives
/// a placement from the legal list or an explicit pass.
#[derive(Default)]
pub struct ConsoleProvider;

impl ConsoleProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionProvider for ConsoleProvider {
    fn choose_play(&mut self, view: &TurnView, legal: &[Placement]) -> PlayChoice {
        assert!(!legal.is_empty(), "engine must supply at least one option");
        println!("\n=== {}'s turn ===", view.name);
        print!("{}", render_view(view));
        println!("Legal placements:");
        for placement in legal {
            println!("  {}", describe_placement(view, placement));
        }
        loop {
            println!("\nChoose an action:");
            println!("  p: play a tile");
            println!("  v: inspect a tile");
            println!("  s: show board and hand again");
            println!("  x: pass voluntarily");
            let Some(option) = read_trimmed("Option: ") else {
                continue;
            };
            match option.to_ascii_lowercase().as_str() {
                "p" => {
                    if let Some(choice) = self.prompt_placement(view, legal) {
                        return choice;
                    }
                }
                "v" => {
                    if let Some(index) = prompt_index("Tile index to inspect: ", view.hand.len()) {
                        println!("Tile {}", view.hand[index]);
                    }
                }
                "s" => print!("{}", render_view(view)),
                "x" => {
                    println!("{} passes voluntarily.", view.name);
                    return PlayChoice::Pass;
                }
                other => println!("Unknown option '{other}'."),
            }
        }
    }
}

impl ConsoleProvider {
    fn prompt_placement(&self, view: &TurnView, legal: &[Placement]) -> Option<PlayChoice> {
        let tile_index = prompt_index("Tile index to play (e.g. 0): ", view.hand.len())?;
        let end = if view.open_ends.is_some() {
            let side = read_trimmed("Place on the (l)eft or (r)ight end? ")?;
            match side.to_ascii_lowercase().as_str() {
                "l" | "left" => End::Left,
                "r" | "right" => End::Right,
                other => {
                    println!("Unknown side '{other}'.");
                    return None;
                }
            }
        } else {
            // Empty board: either end works, the tile goes down as given.
            End::Right
        };
        let chosen = Placement { tile_index, end };
        if legal.contains(&chosen) {
            Some(PlayChoice::Place { tile_index, end })
        } else {
            println!("That tile does not fit on that end.");
            None
        }
    }
}

/// Asks for the number of seats, re-prompting until it is within 2..=4.
pub fn prompt_player_count() -> usize {
    loop {
        let Some(input) = read_trimmed("Number of players (2-4): ") else {
            continue;
        };
        match input.parse::<usize>() {
            Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => return count,
            _ => println!("Please enter a number between 2 and 4."),
        }
    }
}

/// Asks for one name per seat; blank entries fall back to `Player N`.
pub fn prompt_player_names(count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| {
            let name = read_trimmed(&format!("Name of player {n}: ")).unwrap_or_default();
            if name.is_empty() {
                format!("Player{n}")
            } else {
                name
            }
        })
        .collect()
}

fn read_trimmed(prompt: &str) -> Option<String> {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        eprintln!("failed to flush stdout");
    }
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            // EOF: nothing more to read, bail out rather than spin.
            println!();
            std::process::exit(0);
        }
        Ok(_) => Some(input.trim().to_string()),
        Err(_) => {
            eprintln!("failed to read input");
            None
        }
    }
}

fn prompt_index(prompt: &str, len: usize) -> Option<usize> {
    let input = read_trimmed(prompt)?;
    match input.parse::<usize>() {
        Ok(index) if index < len => Some(index),
        _ => {
            println!("Invalid index '{input}'.");
            None
        }
    }
}
