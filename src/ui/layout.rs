//! Layout components (content split, status bar)

use crate::app::{App, StatusMessage};
use crate::state::Phase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the submitted data panel
const SUMMARY_WIDTH: u16 = 36;

/// Split the screen into form, optional summary panel and status bar
pub fn create_layout(area: Rect, phase: Phase) -> (Rect, Option<Rect>, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    match phase {
        Phase::Editing => (rows[0], None, rows[1]),
        Phase::SubmittedDisplay => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(40),               // Form
                    Constraint::Length(SUMMARY_WIDTH), // Submitted data
                ])
                .split(rows[0]);
            (columns[0], Some(columns[1]), rows[1])
        }
    }
}

fn message_color(message: &StatusMessage) -> Color {
    if message.is_error() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Draw the status bar with the last submit feedback
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let error_count = app.form.errors().len();
    let indicator = if error_count == 0 {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Red))
    };
    spans.push(indicator);

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            message.text(),
            Style::default().fg(message_color(message)),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
