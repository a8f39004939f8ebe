use std::fmt::Write;

use crate::config::DisplayConfig;
use crate::game::{notation, Board, Cell};

/// Draw the board as framed ASCII art, top row first.
///
/// ```text
///    A   B   C   D   E   F   G
/// __                           __
/// ||   |   |   |   |   |   |   ||
/// |+---+---+---+---+---+---+---|
/// ...
/// ^^                           ^^
/// ```
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let cols = board.cols();
    let inner = " ".repeat(cols * 4 - 1);
    let mut out = String::new();

    let header: Vec<String> = (0..cols)
        .filter_map(notation::column_letter)
        .map(String::from)
        .collect();
    let _ = writeln!(out, "\n   {}", header.join("   "));
    let _ = writeln!(out, "__{inner}__");

    let separator = format!("|+{}|", vec!["---"; cols].join("+"));
    for row in (1..=board.rows()).rev() {
        let cells: Vec<String> = (0..cols)
            .map(|col| {
                let cell = board.get(row, col).unwrap_or(Cell::Empty);
                format!(" {} ", display.glyph(cell))
            })
            .collect();
        let _ = writeln!(out, "||{}||", cells.join("|"));
        let _ = writeln!(out, "{separator}");
    }

    let _ = writeln!(out, "^^{inner}^^\n");
    out
}
