//! TUI rendering with ratatui
//!
//! Tile grid, on-screen keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{Mark, WORD_LENGTH};
use crate::game::{GameStatus, LetterBoard, Row, RowKind};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, &app.engine.letter_board(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Guess the word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Option<Mark>) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match mark {
        Some(Mark::Correct) => style.fg(Color::Black).bg(Color::Green),
        Some(Mark::Present) => style.fg(Color::Black).bg(Color::Yellow),
        Some(Mark::Absent) => style.fg(Color::White).bg(Color::DarkGray),
        None => style.fg(Color::White),
    }
}

fn row_line(row: &Row) -> Line<'static> {
    let spans: Vec<Span> = (0..WORD_LENGTH)
        .flat_map(|i| {
            let letter = row
                .letter_at(i)
                .map_or(' ', |c| c.to_ascii_uppercase());
            let mark = row.feedback.map(|f| f.marks()[i]);
            let style = match (row.kind, mark) {
                (RowKind::Current, _) => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                (_, mark) => mark_style(mark),
            };
            [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for row in app.engine.rows() {
        lines.push(row_line(&row));
        lines.push(Line::from(""));
    }

    let title = match app.engine.status() {
        GameStatus::InProgress => " Board ",
        GameStatus::Won => " Solved! ",
        GameStatus::Lost => " Out of guesses ",
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, board: &LetterBoard, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            mark_style(board.get(c)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let attempt_text = format!(
        "Guess {}/{}",
        app.engine.attempts_used(),
        crate::game::MAX_ATTEMPTS
    );
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.engine.status().is_terminal() {
        "Enter/n: New Round | q/Esc: Quit"
    } else {
        "Enter: Submit | Ctrl+N: New Round | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
