//! Form field value objects

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of fields on the user form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Contact,
    Email,
    Address,
    Pincode,
    City,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Contact,
        FieldName::Email,
        FieldName::Address,
        FieldName::Pincode,
        FieldName::City,
    ];

    /// Wire key used by the renderer
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Contact => "contact",
            FieldName::Email => "email",
            FieldName::Address => "address",
            FieldName::Pincode => "pincode",
            FieldName::City => "city",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Contact => "Contact No",
            FieldName::Email => "Email",
            FieldName::Address => "Full Address",
            FieldName::Pincode => "Pincode",
            FieldName::City => "City",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FieldName::Address)
    }

    /// Position of the field in display order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.key() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Current values of every form field.
///
/// All six fields are always present and always text, including the
/// numeric-looking contact and pincode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    name: String,
    contact: String,
    email: String,
    address: String,
    pincode: String,
    city: String,
}

impl FieldSet {
    /// All-empty field set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::Name => &self.name,
            FieldName::Contact => &self.contact,
            FieldName::Email => &self.email,
            FieldName::Address => &self.address,
            FieldName::Pincode => &self.pincode,
            FieldName::City => &self.city,
        }
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        *self.slot_mut(name) = value.into();
    }

    /// Builder-style setter, handy for assembling a set in one expression
    pub fn with(mut self, name: FieldName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Iterate over `(field, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }

    fn slot_mut(&mut self, name: FieldName) -> &mut String {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Contact => &mut self.contact,
            FieldName::Email => &mut self.email,
            FieldName::Address => &mut self.address,
            FieldName::Pincode => &mut self.pincode,
            FieldName::City => &mut self.city,
        }
    }
}
