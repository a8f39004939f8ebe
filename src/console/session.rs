use std::io::{self, BufRead, Write};

use crate::config::{AppConfig, DisplayConfig};
use crate::game::{notation, GameOutcome, GameState, MoveError};

use super::render::render_board;

/// Printed when the session ends without a chosen goodbye: input ran out or
/// the player interrupted.
pub const ABRUPT_FAREWELL: &str = "\n\nThanks for playing!";

/// Write the farewell for a session cut short.
pub fn write_abrupt_farewell<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{ABRUPT_FAREWELL}")?;
    output.flush()
}

/// How a single game ended from the session's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Finished,
    EndOfInput,
}

/// Line-oriented game loop: prompts for column letters, redraws the board
/// after every move, and offers a rematch when a game ends.
pub struct Session<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
    state: GameState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &AppConfig) -> Self {
        Session {
            input,
            output,
            display: config.display.clone(),
            state: GameState::new(config.game.first_player),
        }
    }

    /// Play games until the players decline a rematch or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let mut games = 0usize;
        loop {
            games += 1;
            log::debug!("starting game {games}");
            if self.play_game()? == Flow::EndOfInput {
                return write_abrupt_farewell(&mut self.output);
            }

            match self.read_line("Play again? (y/n): ")? {
                Some(answer) if answer.trim().to_lowercase().starts_with('y') => {
                    writeln!(self.output, "\n{}\n", "-".repeat(48))?;
                }
                Some(_) => return self.farewell("Thanks for playing!"),
                None => return write_abrupt_farewell(&mut self.output),
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn play_game(&mut self) -> io::Result<Flow> {
        self.state.reset();
        let one = self.display.player_one;
        let two = self.display.player_two;
        writeln!(self.output, "Welcome to Connect Four!")?;
        writeln!(self.output, "Players:")?;
        writeln!(self.output, "  Player {one} vs Player {two}")?;
        self.draw()?;

        let range = notation::column_range(self.state.board().cols());
        loop {
            let glyph = self.display.player_glyph(self.state.current_player());
            let prompt = format!("Player {glyph}, choose a column ({range}): ");
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(Flow::EndOfInput);
            };

            let Some(col) = notation::parse_column(&line, self.state.board().cols()) else {
                writeln!(self.output, "Invalid column. Enter a single letter in range.")?;
                continue;
            };

            match self.state.play(col) {
                Ok(()) => {}
                Err(MoveError::ColumnFull) => {
                    writeln!(self.output, "Column full. Try a different column.")?;
                    continue;
                }
                Err(MoveError::InvalidColumn) => {
                    writeln!(self.output, "Invalid column. Enter a single letter in range.")?;
                    continue;
                }
                Err(MoveError::GameOver) => return Ok(Flow::Finished),
            }

            self.draw()?;

            match self.state.outcome() {
                Some(GameOutcome::Winner(player)) => {
                    let glyph = self.display.player_glyph(player);
                    writeln!(self.output, "Player {glyph} wins! 🎉")?;
                    return Ok(Flow::Finished);
                }
                Some(GameOutcome::Draw) => {
                    writeln!(self.output, "It's a draw! 🤝")?;
                    return Ok(Flow::Finished);
                }
                None => {}
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let text = render_board(self.state.board(), &self.display);
        self.output.write_all(text.as_bytes())
    }

    /// Prompt and read one line; `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn farewell(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(input: &str) -> String {
        transcript_with(input, &AppConfig::default())
    }

    fn transcript_with(input: &str, config: &AppConfig) -> String {
        let mut session = Session::new(input.as_bytes(), Vec::new(), config);
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_horizontal_win_then_quit() {
        let out = transcript("a\na\nb\nb\nc\nc\nd\nn\n");

        assert!(out.starts_with("Welcome to Connect Four!\nPlayers:\n  Player X vs Player O\n"));
        assert!(out.contains("Player X, choose a column (A-G): "));
        assert!(out.contains("Player O, choose a column (A-G): "));
        assert!(out.contains("|| X | X | X | X |   |   |   ||"));
        assert!(out.contains("Player X wins! 🎉"));
        assert!(out.ends_with("Play again? (y/n): Thanks for playing!\n"));
        // Initial board plus one redraw per move
        assert_eq!(out.matches("^^\n").count(), 8);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let out = transcript("h\nab\n\n1\n");
        assert_eq!(
            out.matches("Invalid column. Enter a single letter in range.").count(),
            4
        );
        assert_eq!(out.matches("Player X, choose a column").count(), 5);
        assert!(!out.contains("Player O, choose"));
    }

    #[test]
    fn test_full_column_reprompts_same_player() {
        let out = transcript("a\na\na\na\na\na\na\n");
        assert_eq!(out.matches("Column full. Try a different column.").count(), 1);
        // X: moves 1, 3, 5, the rejected 7th, and the retry; O: moves 2, 4, 6
        assert_eq!(out.matches("Player X, choose a column").count(), 5);
        assert_eq!(out.matches("Player O, choose a column").count(), 3);
        assert!(out.ends_with("\n\nThanks for playing!\n"));
    }

    #[test]
    fn test_end_of_input_mid_game() {
        let out = transcript("d\n");
        assert!(out.ends_with("Player O, choose a column (A-G): \n\nThanks for playing!\n"));
        assert!(!out.contains("wins"));
    }

    #[test]
    fn test_rematch_starts_fresh_board() {
        let out = transcript("a\nb\na\nb\na\nb\na\nYes\nd\n");

        assert_eq!(out.matches("Player X wins! 🎉").count(), 1);
        assert_eq!(out.matches("Welcome to Connect Four!").count(), 2);
        assert!(out.contains(&format!("\n{}\n\n", "-".repeat(48))));
        // Second game opens on an empty board with X to move, then D is played
        let second = out.rsplit("Welcome to Connect Four!").next().unwrap();
        assert!(second.contains("||   |   |   |   |   |   |   ||"));
        assert!(second.contains("||   |   |   | X |   |   |   ||"));
    }

    #[test]
    fn test_abrupt_farewell_matches_end_of_input() {
        let mut interrupted = Vec::new();
        write_abrupt_farewell(&mut interrupted).unwrap();
        let interrupted = String::from_utf8(interrupted).unwrap();
        assert_eq!(interrupted, "\n\nThanks for playing!\n");

        let out = transcript("d\n");
        assert!(out.ends_with(&format!("Player O, choose a column (A-G): {interrupted}")));
    }

    #[test]
    fn test_end_of_input_at_rematch_prompt() {
        let out = transcript("a\nb\na\nb\na\nb\na\n");
        assert!(out.ends_with("Play again? (y/n): \n\nThanks for playing!\n"));
    }

    #[test]
    fn test_draw_is_announced() {
        // Row-by-row fill that leaves no line of four
        let rows = ["acbdegf"; 6];
        let mut input = String::new();
        for row in rows {
            for letter in row.chars() {
                input.push(letter);
                input.push('\n');
            }
        }
        input.push_str("n\n");

        let out = transcript(&input);
        assert!(out.contains("It's a draw! 🤝"));
        assert!(!out.contains("wins"));
    }

    #[test]
    fn test_configured_glyphs_and_first_player() {
        let mut config = AppConfig::default();
        config.display.player_one = 'R';
        config.display.player_two = 'Y';
        config.game.first_player = crate::game::Player::Two;

        let out = transcript_with("c\n", &config);
        assert!(out.contains("  Player R vs Player Y\n"));
        assert!(out.contains("Player Y, choose a column (A-G): "));
        assert!(out.contains("||   |   | Y |   |   |   |   ||"));
    }
}
