#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai::TargetingEngine,
    common::GuessResult,
    config::MAX_LABELLED_SIZE,
    player::{Player, TurnView},
};

/// Human player typing coordinates such as `B7` on a terminal.
///
/// An empty line accepts the engine's suggestion shown in brackets; `q`
/// quits.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
    advisor: TargetingEngine,
}

impl CliPlayer {
    /// Player reading from stdin, advised about an opponent fielding `ships`.
    pub fn new(ships: &[usize]) -> Self {
        Self::with_input(ships, Box::new(io::BufReader::new(io::stdin())))
    }

    pub fn with_input(ships: &[usize], input: Box<dyn BufRead>) -> Self {
        Self {
            input,
            advisor: TargetingEngine::new(ships),
        }
    }
}

/// Letter for column `c`; `None` past `Z`.
pub fn column_label(c: usize) -> Option<char> {
    if c < MAX_LABELLED_SIZE {
        Some((b'A' + c as u8) as char)
    } else {
        None
    }
}

/// Column letter then 1-based row, e.g. `(6, 1)` -> `B7`. Unlabelled
/// columns print as `?`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    std::format!("{}{}", column_label(c).unwrap_or('?'), r + 1)
}

/// Parse `B7` / `b7` into `(6, 1)`. Bounds are not checked.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

impl Player for CliPlayer {
    fn select_target(&mut self, view: &TurnView<'_>) -> Option<(usize, usize)> {
        let (sr, sc) = self
            .advisor
            .choose_shot(view.enemy, view.own, view.own_remaining);
        loop {
            print!("Enter guess [{}]: ", coord_to_string(sr, sc));
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            let line = line.trim();
            if line.is_empty() {
                return Some((sr, sc));
            }
            if line.eq_ignore_ascii_case("q") {
                return None;
            }
            match parse_coord(line) {
                Some((r, c)) if view.enemy.is_unknown(r, c) => return Some((r, c)),
                Some(_) => println!("Already fired there or off the board"),
                None => println!("Invalid coordinate"),
            }
        }
    }

    fn handle_guess_result(&mut self, coord: (usize, usize), result: GuessResult) {
        if let GuessResult::Sink(len) = result {
            self.advisor.notify_sunk(len);
        }
        println!(
            "You guessed {} -> {:?}",
            coord_to_string(coord.0, coord.1),
            result
        );
    }

    fn handle_opponent_guess(&mut self, coord: (usize, usize), result: GuessResult) {
        println!(
            "Opponent guessed {} -> {:?}",
            coord_to_string(coord.0, coord.1),
            result
        );
    }
}
