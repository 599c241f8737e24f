//! Field rendering utilities for forms

use crate::state::{FieldName, CITY_PLACEHOLDER};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field's input box takes, borders included
pub fn field_height(name: FieldName) -> u16 {
    if name.is_multiline() {
        5
    } else {
        3
    }
}

/// Text shown inside the input box
pub fn display_value(name: FieldName, value: &str, is_active: bool) -> String {
    match (name, value.is_empty()) {
        (FieldName::City, true) => CITY_PLACEHOLDER.to_string(),
        (_, true) if !is_active => "(empty)".to_string(),
        _ => value.to_string(),
    }
}

/// Draw one form field with its inline error line.
///
/// `error_area` is the single row directly under the input box.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    error_area: Rect,
    name: FieldName,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let display_str = display_value(name, value, is_active);
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if name == FieldName::City {
        // Selection widget: arrows instead of a cursor
        let (left, right) = if is_active { ("◀ ", " ▶") } else { ("", "") };
        Paragraph::new(Line::from(vec![
            Span::styled(left, cursor_style),
            Span::styled(display_str, text_style),
            Span::styled(right, cursor_style),
        ]))
    } else if name.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled("▌", cursor_style));
            }
        }
        Paragraph::new(lines)
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, text_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", name.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);

    if let Some(message) = error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, error_area);
    }
}
