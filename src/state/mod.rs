//! Application state module

mod forms;
mod submission;
mod validation;

pub use forms::*;
pub use submission::*;
pub use validation::*;
