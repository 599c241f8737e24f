//! Error types for the form core

use thiserror::Error;

/// Errors raised when the renderer hands the core a key it does not know.
///
/// Field validation failures are not represented here; those are returned
/// as an [`ErrorSet`](crate::state::ErrorSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("unknown city: {0}")]
    UnknownCity(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
