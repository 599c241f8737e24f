//! Form domain layer
//!
//! Field values, their validation messages and the holder that owns both.

mod city;
mod error_set;
mod field;
mod form_state;

pub use city::{City, CITY_PLACEHOLDER};
pub use error_set::ErrorSet;
pub use field::{FieldName, FieldSet};
pub use form_state::{Form, FormState, Phase, SUBMIT_ROW};
