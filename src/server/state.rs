//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Initialized once during server startup and cloned (cheaply, `DatabaseConnection`
/// is a pooled handle) for each incoming request via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
