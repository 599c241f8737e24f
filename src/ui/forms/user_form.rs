//! User details form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::{App, SUBMIT_SHORTCUT};
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Row constraints: each field box followed by its error line, then the
/// submit button and the help line
fn row_constraints(show_help: bool) -> Vec<Constraint> {
    let mut constraints: Vec<Constraint> = FieldName::ALL
        .into_iter()
        .flat_map(|name| [Constraint::Length(field_height(name)), Constraint::Length(1)])
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    if show_help {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    constraints
}

/// Draw the user form
pub fn draw_user_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let show_help = app.config.show_help();

    let border_color = if form.errors().is_empty() {
        Color::Cyan
    } else {
        Color::Red
    };
    let block = Block::default()
        .title(" User Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints(show_help))
        .margin(1)
        .split(area);

    let active = form.active_field_name();
    for name in FieldName::ALL {
        let row = name.index() * 2;
        draw_field(
            frame,
            chunks[row],
            chunks[row + 1],
            name,
            form.fields().get(name),
            active == Some(name),
            form.error_for(name),
        );
    }

    let button_row = FieldName::ALL.len() * 2;
    let button_area = Rect {
        width: chunks[button_row].width.min(14),
        ..chunks[button_row]
    };
    render_button(frame, button_area, "Submit", form.is_submit_row_active());

    if show_help {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled("←/→", Style::default().fg(Color::Cyan)),
            Span::raw(": city  "),
            Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
            Span::raw(": submit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[button_row + 1]);
    }
}
