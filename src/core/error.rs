/// Bookdesk Error Module
///
/// This module defines the error types for the bookdesk application.
/// Every failure is converted to a user-visible message at the shell
/// boundary; these variants carry the text that gets displayed.
use thiserror::Error;

/// Comprehensive error type for the bookdesk application.
///
/// Covers the failure classes the browser can hit:
/// - Database operations (opening connections, running statements)
/// - Query execution against the library schema or the ad-hoc prompt
/// - Configuration loading and validation
/// - Rendering and export formats
/// - Shell command parsing and dispatch
#[derive(Error, Debug)]
pub enum BookdeskError {
    /// Database-related errors from SQLite operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// SQL query errors (syntax, constraint violations, missing tables, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rendering and export errors (unknown formats, no result to export)
    #[error("Display error: {0}")]
    Ui(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors from the grid export
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Shell command validation and dispatch errors
    #[error("Command error: {0}")]
    Command(String),

    /// Generic application errors for unexpected conditions
    #[error("Application error: {0}")]
    App(String),
}

/// Type alias for Result to use BookdeskError as the error type.
///
/// This provides a consistent error type across the entire application
/// instead of using `Result<T, String>` or mixed error types.
pub type Result<T> = std::result::Result<T, BookdeskError>;
