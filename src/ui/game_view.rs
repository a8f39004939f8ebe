use crate::config::DisplayConfig;
use crate::game::{notation, Board, Cell, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    display: &DisplayConfig,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, display, chunks[0]);
    let board = Paragraph::new(board_lines(game_state.board(), display, selected_column))
        .alignment(Alignment::Center);
    frame.render_widget(board, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_state.board(), chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Header text for the current state of play.
pub(crate) fn status_text(game_state: &GameState, display: &DisplayConfig) -> String {
    match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => {
            format!("Game Over  |  Player {} wins", display.player_glyph(player))
        }
        Some(GameOutcome::Draw) => "Game Over  |  Draw".to_string(),
        None => format!(
            "Current Player: {}",
            display.player_glyph(game_state.current_player())
        ),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, display: &DisplayConfig, area: Rect) {
    let color = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => player_color(player),
        Some(GameOutcome::Draw) => Color::White,
        None => player_color(game_state.current_player()),
    };

    let header = Paragraph::new(status_text(game_state, display))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

/// Lettered column headers, the framed grid from the top row down, and a
/// marker under the selected column.
pub(crate) fn board_lines(
    board: &Board,
    display: &DisplayConfig,
    selected_column: usize,
) -> Vec<Line<'static>> {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column letters with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let letter = notation::column_letter(col).unwrap_or('?');
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {letter} ")));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let bar = "═".repeat(cols * 3 + 1);
    lines.push(Line::from(format!("  ╔{bar}╗")));

    for row in (1..=board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            let color = cell.player().map_or(Color::DarkGray, player_color);
            row_spans.push(Span::styled(
                format!(" {} ", display.glyph(cell)),
                Style::default().fg(color),
            ));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{bar}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, board: &Board, area: Rect) {
    let range = notation::column_range(board.cols());
    let line = Line::from(format!(
        "←/→: Move  |  Enter: Drop  |  {range}: Drop in column  |  R: Restart  |  Q: Quit"
    ));

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
