//! Admin console server for the live-dealer studio operation.
//!
//! The backend is deliberately thin: one route returns the fixed login +
//! shell document, `/static` serves the client bundle, and the relational
//! binding sits in shared state without being queried yet. All interactive
//! behavior belongs to the client bundle.

pub mod config;
pub mod db;
pub mod web;

pub use config::AppConfig;
pub use db::Database;
pub use web::{create_router, AppState};
