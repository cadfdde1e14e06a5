#![cfg(feature = "std")]

use crate::{
    ai::Heatmap,
    board::{Board, Cell},
    game::Game,
    knowledge::KnowledgeGrid,
    player_cli::column_label,
};

fn print_header(size: usize, width: usize) {
    print!("   ");
    for c in 0..size {
        let ch = column_label(c).unwrap_or('?');
        print!(" {:>width$}", ch, width = width);
    }
    println!();
}

/// Print a board with its ships revealed (`S`).
pub fn print_board(board: &Board) {
    print_header(board.size(), 1);
    for r in 0..board.size() {
        print!("{:2} ", r + 1);
        for c in 0..board.size() {
            let ch = match board.cell(r, c) {
                Some(Cell::Ship) => 'S',
                Some(Cell::Hit) => 'X',
                Some(Cell::Miss) => 'o',
                Some(Cell::Empty) | None => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print what an attacker knows: `X` hit, `o` miss, `.` unknown.
pub fn print_knowledge(view: &KnowledgeGrid) {
    print_header(view.size(), 1);
    for r in 0..view.size() {
        print!("{:2} ", r + 1);
        for c in 0..view.size() {
            let ch = view.get(r, c).map_or('.', |k| k.symbol());
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print raw heat values.
pub fn print_heatmap(heat: &Heatmap) {
    println!("\nHeatmap (total {}):", heat.total());
    print_header(heat.size(), 4);
    for r in 0..heat.size() {
        print!("{:2} ", r + 1);
        for c in 0..heat.size() {
            print!(" {:4}", heat.get(r, c));
        }
        println!();
    }
}

/// Display the enemy waters (top) and the player's fleet (bottom).
pub fn print_player_view(game: &Game) {
    println!("Enemy waters:");
    print_knowledge(&game.ai_board().knowledge_view());
    println!("\nYour fleet:");
    print_board(game.player_board());
    println!("\n{}", game.message());
}
