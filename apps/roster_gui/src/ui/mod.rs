//! UI layer for the roster GUI: app shell and render helpers.

pub mod app;

pub use app::RosterApp;
