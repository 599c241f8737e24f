//! Submitted data summary

use crate::state::{FieldName, SubmittedRecord};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Summary lines: a bold label line per field followed by its value lines
fn summary_lines(record: &SubmittedRecord) -> Vec<Line<'_>> {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for name in FieldName::ALL {
        lines.push(Line::from(Span::styled(
            format!("{}:", name.label()),
            label_style,
        )));
        for value_line in record.get(name).split('\n') {
            lines.push(Line::from(format!("  {value_line}")));
        }
    }
    lines
}

/// Draw the last accepted record
pub fn draw_submitted(frame: &mut Frame, area: Rect, record: &SubmittedRecord) {
    let block = Block::default()
        .title(" Submitted Data ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(summary_lines(record))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
