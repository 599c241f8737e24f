//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, summary_area, status_area) =
        layout::create_layout(frame.area(), app.form.phase());

    forms::draw_user_form(frame, form_area, app);

    if let (Some(area), Some(record)) = (summary_area, app.form.last_submission()) {
        forms::draw_submitted(frame, area, record);
    }

    layout::draw_status_bar(frame, status_area, app);
}
