//! User Form TUI - terminal form for collecting user details
//!
//! The form core lives in [`state`]: [`state::FormState`] holds the field
//! values and their errors, [`state::validate`] checks them, and
//! [`state::submit`] commits or rejects a submission. [`app`] and [`ui`]
//! drive that core from a Ratatui terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;
