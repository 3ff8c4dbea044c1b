//! Bridge between the UI thread and the backend worker that performs uploads.

pub mod commands;
pub mod runtime;
