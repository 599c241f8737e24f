//! Form state holder

use super::city::City;
use super::error_set::ErrorSet;
use super::field::{FieldName, FieldSet};
use crate::error::Result;
use crate::state::SubmittedRecord;

/// Trait for focus navigation over a form's rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Which overlay the renderer should show alongside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No record accepted yet
    Editing,
    /// A record was accepted; the form stays editable underneath
    SubmittedDisplay,
}

/// Row index of the Submit button, after the six fields
pub const SUBMIT_ROW: usize = FieldName::ALL.len();

/// Owns the field values, their validation messages and the last accepted record.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: FieldSet,
    errors: ErrorSet,
    last_submission: Option<SubmittedRecord>,
    active_field_index: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn error_for(&self, name: FieldName) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn last_submission(&self) -> Option<&SubmittedRecord> {
        self.last_submission.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.last_submission.is_some() {
            Phase::SubmittedDisplay
        } else {
            Phase::Editing
        }
    }

    /// Overwrite one field and drop its pending error.
    ///
    /// The new value is not re-validated; errors only come back on submit.
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields.set(name, value);
        self.errors.remove(name);
    }

    /// `set_field` keyed by the renderer's wire name.
    ///
    /// A city must be one of the closed set or `""` for the unselected
    /// placeholder; anything else is rejected and the form is left as it was.
    pub fn on_field_change(&mut self, raw_name: &str, value: impl Into<String>) -> Result<()> {
        let name = raw_name.parse::<FieldName>().inspect_err(|err| {
            tracing::warn!("Ignoring field change: {err}");
        })?;
        let value = value.into();
        if name == FieldName::City && !value.is_empty() {
            value.parse::<City>().inspect_err(|err| {
                tracing::warn!("Ignoring field change: {err}");
            })?;
        }
        self.set_field(name, value);
        Ok(())
    }

    /// Field under focus, or `None` on the Submit row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Type a character into the focused text field.
    ///
    /// Newlines are only kept by multi-line fields. City is a selection and
    /// ignores typed characters.
    pub fn input_char(&mut self, c: char) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if name == FieldName::City || (c == '\n' && !name.is_multiline()) {
            return;
        }
        let mut value = self.fields.get(name).to_string();
        value.push(c);
        self.set_field(name, value);
    }

    /// Delete the last character of the focused field; clears a city selection
    pub fn backspace(&mut self) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        let mut value = self.fields.get(name).to_string();
        if name == FieldName::City {
            value.clear();
        } else {
            value.pop();
        }
        self.set_field(name, value);
    }

    /// Move the city selection one step through the closed set
    pub fn cycle_city(&mut self, forward: bool) {
        let next = City::cycle(self.fields.get(FieldName::City), forward);
        self.set_field(FieldName::City, next.map(City::as_str).unwrap_or_default());
    }

    /// Replace all errors with the outcome of a failed submission
    pub(crate) fn replace_errors(&mut self, errors: ErrorSet) {
        self.errors = errors;
    }

    /// Keep `record` as the last submission and start a fresh entry
    pub(crate) fn commit(&mut self, record: SubmittedRecord) {
        self.last_submission = Some(record);
        self.fields = FieldSet::default();
        self.errors.clear();
        self.active_field_index = 0;
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // six fields, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
