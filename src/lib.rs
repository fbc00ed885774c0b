//! Bookshelf Server
//!
//! A small Rust REST service exposing CRUD-style operations over an
//! in-memory catalog of book records. Data lives for the lifetime of the
//! process and resets on restart.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registry: Arc<registry::BookRegistry>,
}
