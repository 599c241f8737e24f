//! Per-field validation messages

use super::field::FieldName;
use serde::Serialize;
use std::collections::BTreeMap;

/// Validation messages keyed by field.
///
/// A field with no entry has no error. Empty messages are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one.
    /// An empty message clears the field instead.
    pub fn insert(&mut self, name: FieldName, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.entries.remove(&name);
        } else {
            self.entries.insert(name, message);
        }
    }

    pub fn remove(&mut self, name: FieldName) -> Option<String> {
        self.entries.remove(&name)
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.entries.get(&name).map(String::as_str)
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Fields that currently carry an error, in display order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.entries.iter().map(|(name, msg)| (*name, msg.as_str()))
    }
}

impl<M: Into<String>> FromIterator<(FieldName, M)> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = (FieldName, M)>>(iter: I) -> Self {
        let mut errors = ErrorSet::new();
        for (name, message) in iter {
            errors.insert(name, message);
        }
        errors
    }
}
