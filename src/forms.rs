/// Form Controller Module
///
/// One submission = one statement. This module seeds the editable
/// values a form starts from (blank, or the declared type name when
/// preview mode is on), and drives a collected submission through the
/// statement builder and the query executor on a connection scoped to
/// that single operation. Prompting for the values is the shell's job;
/// everything here is plain data in, statement out.
use crate::catalog::{FieldDef, TableDef};
use crate::core::db::{query, ConnectionProvider};
use crate::core::Result;
use crate::statement;
use tracing::debug;

/// The value a form field starts from: empty, or the declared type name
/// as a hint when preview mode is on. An untouched field submits its
/// seed unchanged.
pub fn seed_value(field: &FieldDef, preview: bool) -> String {
    if preview {
        field.field_type.name().to_string()
    } else {
        String::new()
    }
}

/// Seeds for an insert form: one value per declared field, in order.
pub fn insert_seeds(table: &TableDef, preview: bool) -> Vec<String> {
    table
        .fields
        .iter()
        .map(|f| seed_value(f, preview))
        .collect()
}

/// Seeds for an update form: one value per non-key field, in order. The
/// primary key is the condition, not an editable field.
pub fn update_seeds(table: &TableDef, preview: bool) -> Vec<String> {
    table.fields[1..]
        .iter()
        .map(|f| seed_value(f, preview))
        .collect()
}

/// Runs a collected insert submission. Returns the number of rows
/// inserted (one, when the statement succeeds).
pub fn insert_row(
    provider: &ConnectionProvider,
    table: &TableDef,
    values: &[String],
) -> Result<usize> {
    let stmt = statement::insert(table, values)?;
    debug!(table = table.name, "running insert");
    let conn = provider.open()?;
    query::execute(&conn, &stmt.sql, &stmt.params)
}

/// Runs a collected update submission scoped to the primary key.
/// Returns the number of rows the update touched.
pub fn update_row(
    provider: &ConnectionProvider,
    table: &TableDef,
    values: &[String],
    key_value: &str,
) -> Result<usize> {
    let stmt = statement::update(table, values, key_value)?;
    debug!(table = table.name, key = key_value, "running update");
    let conn = provider.open()?;
    query::execute(&conn, &stmt.sql, &stmt.params)
}

/// Runs a collected delete submission scoped to one condition field.
/// A condition matching zero rows succeeds and returns zero.
pub fn delete_rows(
    provider: &ConnectionProvider,
    table: &TableDef,
    condition_field: &str,
    condition_value: &str,
) -> Result<usize> {
    let stmt = statement::delete(table, condition_field, condition_value)?;
    debug!(table = table.name, field = condition_field, "running delete");
    let conn = provider.open()?;
    query::execute(&conn, &stmt.sql, &stmt.params)
}
