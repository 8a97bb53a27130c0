use crate::config::PlayersConfig;
use crate::game::{Board, Cell, GameState, Status};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    theme: Theme,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_rows = u16::try_from(game_state.board().height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),       // Header
            Constraint::Min(board_rows), // Board
            Constraint::Length(3),       // Message
            Constraint::Length(3),       // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, players, theme, chunks[0]);
    render_board(frame, game_state.board(), theme, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, theme, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    players: &PlayersConfig,
    theme: Theme,
    area: Rect,
) {
    let current = game_state.current_player();

    let (status, color) = match game_state.status() {
        Status::InProgress => (
            format!(
                "{} to move  |  move {}",
                players.name(current),
                game_state.move_count() + 1
            ),
            theme.piece_color(current),
        ),
        Status::Won(winner) => (
            format!("{} won!  |  press R for a new game", players.name(winner)),
            theme.piece_color(winner),
        ),
        Status::Tied => (
            "It's a tie!  |  press R for a new game".to_string(),
            theme.piece_color(current),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, theme: Theme, selected_column: usize, area: Rect) {
    let width = board.width();
    let frame_style = Style::default().fg(theme.frame_color());
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::styled(format!("  ╔{rule}╗"), frame_style));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::styled("  ║", frame_style)];

        for col in 0..width {
            let span = match board.cell_at(row, col) {
                Ok(Cell::Occupied(player)) => Span::styled(
                    theme.piece_symbol(),
                    Style::default().fg(theme.piece_color(player)),
                ),
                _ => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::styled(" ║", frame_style));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::styled(format!("  ╚{rule}╝"), frame_style));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, theme: Theme, area: Rect) {
    let line = Line::from(format!(
        "←/→: Move  |  Enter/1-9: Drop  |  R: Restart  |  T: Theme ({})  |  Q: Quit",
        theme.name()
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
