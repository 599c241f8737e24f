//! Form rendering module
//!
//! - `field_renderer`: single field with its inline error
//! - `user_form`: the user details form
//! - `summary`: read-only view of the last submitted record

mod field_renderer;
mod summary;
mod user_form;

pub use summary::draw_submitted;
pub use user_form::draw_user_form;
