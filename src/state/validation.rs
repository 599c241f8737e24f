//! Per-field validation rules

use crate::state::{ErrorSet, FieldName, FieldSet};
use once_cell::sync::Lazy;
use regex::Regex;

static CONTACT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("contact pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PINCODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("pincode pattern is valid"));

/// Message shown when a field fails its rule
pub fn failure_message(name: FieldName) -> &'static str {
    match name {
        FieldName::Name => "Name is required",
        FieldName::Contact => "Contact number must be 10 digits",
        FieldName::Email => "Invalid email address",
        FieldName::Address => "Address is required",
        FieldName::Pincode => "Pincode must be 6 digits",
        FieldName::City => "City is required",
    }
}

/// Check one field's value against its rule
pub fn is_valid(name: FieldName, value: &str) -> bool {
    let present = !value.trim().is_empty();
    match name {
        FieldName::Name | FieldName::Address => present,
        FieldName::Contact => present && CONTACT_REGEX.is_match(value),
        FieldName::Email => present && EMAIL_REGEX.is_match(value),
        FieldName::Pincode => present && PINCODE_REGEX.is_match(value),
        // The selection widget only offers the closed set, so presence is the rule
        FieldName::City => !value.is_empty(),
    }
}

/// Validate every field, returning messages only for the ones that fail
pub fn validate(fields: &FieldSet) -> ErrorSet {
    fields
        .iter()
        .filter(|(name, value)| !is_valid(*name, value))
        .map(|(name, _)| (name, failure_message(name)))
        .collect()
}
