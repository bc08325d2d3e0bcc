/// Connection Provider Module
///
/// This module hands out database connections for single operations.
/// The connection string is fixed at startup (environment or config
/// file); every read or write opens a fresh connection against it and
/// closes it when the operation's scope ends. There is no pooling and
/// no shared handle, so a failed open aborts exactly one operation.
use crate::core::{BookdeskError, Result};
use rusqlite::Connection;
use tracing::debug;

/// Opens short-lived SQLite connections from a configured connection
/// string (a filesystem path or a `file:` URI).
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    url: String,
}

impl ConnectionProvider {
    /// Creates a provider for the given connection string.
    pub fn new(url: impl Into<String>) -> Self {
        ConnectionProvider { url: url.into() }
    }

    /// Returns the configured connection string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Opens a fresh connection for one operation.
    ///
    /// # Returns
    ///
    /// An open `Connection` the caller must let go out of scope at the
    /// end of the operation, or `BookdeskError::Database` if the open
    /// fails. Callers treat a failed open as "operation skipped" and
    /// never retry.
    pub fn open(&self) -> Result<Connection> {
        debug!(url = %self.url, "opening database connection");
        Connection::open(&self.url).map_err(BookdeskError::Database)
    }

    /// Probes the connection string by opening and dropping a
    /// connection. Used for the startup report; failure leaves the
    /// shell usable with every operation reporting the error inline.
    pub fn check(&self) -> Result<()> {
        self.open().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_and_connects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.db");
        let provider = ConnectionProvider::new(path.to_string_lossy());

        let conn = provider.open().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER);").unwrap();
        drop(conn);

        // A second operation gets its own connection and sees the file.
        let conn = provider.open().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_open_failure_reports_database_error() {
        let provider = ConnectionProvider::new("/nonexistent/path/library.db");
        let result = provider.open();
        assert!(result.is_err());
        match result.unwrap_err() {
            BookdeskError::Database(_) => {}
            other => panic!("Expected Database error, got {other:?}"),
        }
    }

    #[test]
    fn test_check_matches_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.db");
        assert!(ConnectionProvider::new(path.to_string_lossy()).check().is_ok());
        assert!(ConnectionProvider::new("/nonexistent/path/library.db")
            .check()
            .is_err());
    }
}
