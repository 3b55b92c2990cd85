//! TUI rendering with ratatui
//!
//! Board, clock and message panels for a round.

use super::app::{App, MessageStyle};
use crate::core::{GuessRow, RowId, Verdict};
use crate::game::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Clock
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_clock(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // History and messages
        ])
        .split(chunks[2]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⏱  WORDLE BLITZ")
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

/// Share of the round left, always within `0.0..=1.0`
fn clock_ratio(remaining: f64, round: f64) -> f64 {
    let ratio = remaining / round;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn render_clock(f: &mut Frame, app: &App, area: Rect) {
    let ratio = clock_ratio(
        app.engine.remaining_seconds(),
        app.engine.timer().duration(),
    );
    let color = if ratio <= 1.0 / 6.0 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Time ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(app.clock.to_string());
    f.render_widget(gauge, area);
}

const fn tile_colors(verdict: Verdict) -> (Color, Color) {
    match verdict {
        Verdict::Empty | Verdict::Occupied => (Color::Reset, Color::White),
        Verdict::Correct => (Color::Green, Color::Black),
        Verdict::WrongSpot => (Color::Yellow, Color::Black),
        Verdict::Incorrect => (Color::DarkGray, Color::White),
    }
}

fn row_line(row: &GuessRow, active: bool) -> Line<'static> {
    let mut spans = vec![Span::raw(if active { "▶ " } else { "  " })];
    for slot in row.slots() {
        let (bg, fg) = tile_colors(slot.verdict);
        let letter = slot.letter.map_or('_', |c| c.to_ascii_uppercase());
        let mut style = Style::default().fg(fg).bg(bg);
        if slot.verdict.is_scored() {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {letter} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let playing = !engine.is_game_over();
    let active = engine.active_row_id();

    let mut lines = vec![
        Line::from(Span::styled(
            "Opening guess",
            Style::default().fg(Color::DarkGray),
        )),
        row_line(engine.row(RowId::Initial), playing && active == RowId::Initial),
        Line::from(""),
        Line::from(Span::styled(
            "Guesses",
            Style::default().fg(Color::DarkGray),
        )),
        row_line(engine.row(RowId::Guessing), playing && active == RowId::Guessing),
    ];

    if app.invalid_word {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Not in word list",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    match engine.phase() {
        Phase::Won => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "🎉 YOU WIN!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Phase::Lost => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Better luck next time! It was {}", engine.target().to_uppercase()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        Phase::Idle | Phase::AwaitingInitialInput | Phase::AwaitingSubsequentInput => {}
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_history(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.engine.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, guess)| {
            let emoji: String = guess.verdicts.iter().map(|v| v.to_emoji()).collect();
            ListItem::new(format!(
                "{:>2}: {} {}",
                i + 1,
                guess.word.to_uppercase(),
                emoji
            ))
        })
        .collect();

    let list =
        List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
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

    let phase_text = match app.engine.phase() {
        Phase::Idle => "Waiting",
        Phase::AwaitingInitialInput => "Opening guess",
        Phase::AwaitingSubsequentInput => "Guessing",
        Phase::Won => "Won",
        Phase::Lost => "Lost",
    };
    let phase = Paragraph::new(format!("Phase: {phase_text}")).alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let stats = app.engine.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.played,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.engine.phase().is_over() {
        "n: New word | r: Same word | q: Quit"
    } else {
        "Enter: Submit | ^N: New | ^R: Restart | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
