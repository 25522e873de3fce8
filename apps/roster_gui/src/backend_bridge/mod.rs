//! Bridge between the UI thread and the roster fetch worker.

pub mod commands;
pub mod runtime;
