/// Query Execution Module
///
/// This module runs SQL against a single-operation connection and
/// shapes results for display. Reads come back as a `QueryResult` with
/// every value stringified; writes run with bound parameters and
/// autocommit, so a statement either commits whole or not at all.
use crate::core::{BookdeskError, Result};
use rusqlite::{types::ValueRef, Connection};

/// Represents the result of a read query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Column names from the query result
    pub columns: Vec<String>,
    /// Rows of data as string values
    pub rows: Vec<Vec<String>>,
    /// Number of rows returned
    pub row_count: usize,
}

impl QueryResult {
    /// Creates a new QueryResult from column names and row data.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let row_count = rows.len();
        QueryResult {
            columns,
            rows,
            row_count,
        }
    }

    /// An empty result, rendered as a zero-row table. Used at the shell
    /// boundary when a read fails and the error text has already been
    /// displayed.
    pub fn empty() -> Self {
        QueryResult::new(Vec::new(), Vec::new())
    }
}

/// Executes a read query and returns its rows.
///
/// # Arguments
///
/// * `conn` - The operation's connection
/// * `sql` - The SQL text to run, passed through unmodified
///
/// # Errors
///
/// Returns `BookdeskError::Query` if the statement cannot be prepared,
/// produces no result columns (it is not a read query), or fails while
/// its rows are read. The statement is not stepped in the no-columns
/// case, so write statements slipped into the read path have no effect.
pub fn fetch(conn: &Connection, sql: &str) -> Result<QueryResult> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| BookdeskError::Query(format!("Failed to prepare statement: {e}")))?;

    let column_count = stmt.column_count();
    if column_count == 0 {
        return Err(BookdeskError::Query(
            "Statement returns no rows; only read queries run here".to_string(),
        ));
    }
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let rows = stmt
        .query_map([], |row| {
            let mut values = Vec::with_capacity(column_count);
            for i in 0..column_count {
                let value_ref = row.get_ref(i)?;
                values.push(format_value(value_ref));
            }
            Ok(values)
        })
        .map_err(|e| BookdeskError::Query(format!("Query execution failed: {e}")))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| BookdeskError::Query(format!("Result processing failed: {e}")))?;

    Ok(QueryResult::new(columns, rows))
}

/// Executes a write statement with bound parameter values.
///
/// Identifiers in `sql` come from the static catalog; every
/// user-supplied value arrives through `params` and is bound, never
/// interpolated. The connection is in autocommit mode, so the change is
/// committed only when execution succeeds.
///
/// # Returns
///
/// The number of rows the statement affected. A condition matching zero
/// rows is a success with a count of zero, not an error.
pub fn execute(conn: &Connection, sql: &str, params: &[String]) -> Result<usize> {
    conn.execute(sql, rusqlite::params_from_iter(params.iter()))
        .map_err(|e| BookdeskError::Query(format!("Statement execution failed: {e}")))
}

/// Formats a SQLite value for display.
fn format_value(value: ValueRef) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(b) => format!("<BLOB: {} bytes>", b.len()),
    }
}
