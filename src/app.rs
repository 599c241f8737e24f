//! Application state and key handling

use crate::config::FormConfig;
use crate::state::{FieldName, Form, FormState, LogSink, SubmissionController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shortcut that submits from any row
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Feedback from a submit attempt, tagged with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Submitted(String),
    Rejected(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Submitted(text) | StatusMessage::Rejected(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Rejected(_))
    }
}

/// Main application struct
pub struct App {
    /// Field values, errors and the last accepted record
    pub form: FormState,
    /// Validates and hands accepted records downstream
    controller: SubmissionController<LogSink>,
    pub config: FormConfig,
    /// Feedback from the last submit attempt
    pub status_message: Option<StatusMessage>,
    quit: bool,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: FormState::new(),
            controller: SubmissionController::new(LogSink),
            config,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Dispatch a key press to the form
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let active = self.form.active_field_name();

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Enter if self.form.is_submit_row_active() => self.submit(),
            KeyCode::Enter if active.is_some_and(FieldName::is_multiline) => {
                self.form.input_char('\n')
            }
            KeyCode::Enter => self.form.next_field(),
            KeyCode::Left if active == Some(FieldName::City) => self.form.cycle_city(false),
            KeyCode::Right | KeyCode::Char(' ') if active == Some(FieldName::City) => {
                self.form.cycle_city(true)
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(c) if !ctrl => self.form.input_char(c),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let message = match self.controller.submit(&mut self.form) {
            Ok(record) => StatusMessage::Submitted(format!(
                "Submitted details for {}",
                record.get(FieldName::Name)
            )),
            Err(errors) => StatusMessage::Rejected(match errors.len() {
                1 => "1 field needs attention".to_string(),
                n => format!("{n} fields need attention"),
            }),
        };
        self.status_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use crossterm::event::KeyEventKind;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_valid(app: &mut App) {
        type_str(app, "Asha");
        press(app, KeyCode::Tab);
        type_str(app, "9876543210");
        press(app, KeyCode::Tab);
        type_str(app, "a@b.com");
        press(app, KeyCode::Tab);
        type_str(app, "12 MG Road");
        press(app, KeyCode::Tab);
        type_str(app, "560001");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
    }

    #[test]
    fn test_typing_fills_fields() {
        let mut app = App::new(FormConfig::default());
        fill_valid(&mut app);
        let fields = app.form.fields();
        assert_eq!(fields.get(FieldName::Name), "Asha");
        assert_eq!(fields.get(FieldName::Pincode), "560001");
        assert_eq!(fields.get(FieldName::City), "Bengaluru");
    }

    #[test]
    fn test_enter_on_submit_row_submits() {
        let mut app = App::new(FormConfig::default());
        fill_valid(&mut app);
        press(&mut app, KeyCode::Tab);
        assert!(app.form.is_submit_row_active());

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.form.phase(), Phase::SubmittedDisplay);
        assert!(app.form.fields().is_empty());
        assert_eq!(
            app.status_message,
            Some(StatusMessage::Submitted("Submitted details for Asha".to_string()))
        );
    }

    #[test]
    fn test_ctrl_s_with_errors_keeps_values() {
        let mut app = App::new(FormConfig::default());
        type_str(&mut app, "Asha");

        ctrl(&mut app, 's');

        assert_eq!(app.form.fields().get(FieldName::Name), "Asha");
        assert_eq!(app.form.errors().len(), 5);
        assert_eq!(
            app.status_message,
            Some(StatusMessage::Rejected("5 fields need attention".to_string()))
        );
    }

    #[test]
    fn test_rejection_stays_an_error_after_flagged_fields_are_edited() {
        let mut app = App::new(FormConfig::default());
        fill_valid(&mut app);
        app.form.set_active_field(FieldName::Contact.index());
        press(&mut app, KeyCode::Backspace);
        ctrl(&mut app, 's');
        assert_eq!(app.form.errors().len(), 1);

        type_str(&mut app, "0");

        assert!(app.form.errors().is_empty());
        let status = app.status_message.as_ref().unwrap();
        assert!(status.is_error());
        assert_eq!(status.text(), "1 field needs attention");
    }

    #[test]
    fn test_enter_in_address_adds_newline() {
        let mut app = App::new(FormConfig::default());
        app.form.set_active_field(FieldName::Address.index());
        type_str(&mut app, "12");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "MG");
        assert_eq!(app.form.fields().get(FieldName::Address), "12\nMG");
    }

    #[test]
    fn test_enter_elsewhere_advances_focus() {
        let mut app = App::new(FormConfig::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.active_field_name(), Some(FieldName::Contact));
    }

    #[test]
    fn test_space_is_text_outside_city() {
        let mut app = App::new(FormConfig::default());
        type_str(&mut app, "A B");
        assert_eq!(app.form.fields().get(FieldName::Name), "A B");
    }

    #[test]
    fn test_left_cycles_city_backwards() {
        let mut app = App::new(FormConfig::default());
        app.form.set_active_field(FieldName::City.index());
        press(&mut app, KeyCode::Left);
        assert_eq!(app.form.fields().get(FieldName::City), "Mysuru");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(FormConfig::default());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());

        let mut app = App::new(FormConfig::default());
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let mut app = App::new(FormConfig::default());
        app.handle_key(KeyEvent::new_with_kind(
            KeyCode::Char('x'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ));
        assert!(app.form.fields().is_empty());
    }
}
