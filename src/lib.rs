//! Library Desk
//!
//! A small web front-end over the class library database: librarians lend and
//! take back readings, readers check what they have out, and anyone can browse
//! and search the catalog.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult, Rejection};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Opens the per-request database session
    pub database: Arc<dyn repository::Connector>,
}
