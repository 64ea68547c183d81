//! Bookshelf - In-Memory Book Catalog Server
//!
//! A small Rust REST API server exposing create, list, delete and search
//! operations over an in-memory catalog of book records. Nothing is
//! persisted: the catalog lives exactly as long as the process.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
