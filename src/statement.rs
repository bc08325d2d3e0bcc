/// Statement Builder Module
///
/// Builds the single SQL statement behind each form submission. Table
/// and field identifiers come only from the static catalog; submitted
/// values are returned alongside the SQL as bind parameters and never
/// spliced into the statement text. The ad-hoc Home prompt is the one
/// deliberate exception to this rule and does not go through here.
use crate::catalog::TableDef;
use crate::core::{BookdeskError, Result};

/// A built statement: SQL text with `?` placeholders plus the values to
/// bind, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<String>,
}

/// The read query behind every table and view screen.
pub fn select_all(name: &str) -> String {
    format!("SELECT * FROM {name};")
}

/// Builds an INSERT listing every declared field of the table.
///
/// # Errors
///
/// Returns `BookdeskError::Command` when the number of submitted values
/// does not match the table's declared field count.
pub fn insert(table: &TableDef, values: &[String]) -> Result<Statement> {
    if values.len() != table.fields.len() {
        return Err(BookdeskError::Command(format!(
            "Insert into {} expects {} values, got {}",
            table.name,
            table.fields.len(),
            values.len()
        )));
    }

    let fields: Vec<&str> = table.fields.iter().map(|f| f.name).collect();
    let placeholders: Vec<&str> = std::iter::repeat("?").take(values.len()).collect();
    Ok(Statement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({});",
            table.name,
            fields.join(", "),
            placeholders.join(", ")
        ),
        params: values.to_vec(),
    })
}

/// Builds an UPDATE setting every non-key field, scoped to the primary
/// key. The primary key is the first declared field and is never part
/// of the SET list.
///
/// # Errors
///
/// Returns `BookdeskError::Command` when the number of submitted values
/// does not match the table's non-key field count.
pub fn update(table: &TableDef, values: &[String], key_value: &str) -> Result<Statement> {
    let non_key = &table.fields[1..];
    if values.len() != non_key.len() {
        return Err(BookdeskError::Command(format!(
            "Update of {} expects {} values, got {}",
            table.name,
            non_key.len(),
            values.len()
        )));
    }

    let assignments: Vec<String> = non_key.iter().map(|f| format!("{} = ?", f.name)).collect();
    let mut params = values.to_vec();
    params.push(key_value.to_string());
    Ok(Statement {
        sql: format!(
            "UPDATE {} SET {} WHERE {} = ?;",
            table.name,
            assignments.join(", "),
            table.primary_key().name
        ),
        params,
    })
}

/// Builds a DELETE scoped to one chosen condition field.
///
/// # Errors
///
/// Returns `BookdeskError::Command` when the condition field is not a
/// declared field of the table.
pub fn delete(table: &TableDef, condition_field: &str, condition_value: &str) -> Result<Statement> {
    let field = table.field(condition_field).ok_or_else(|| {
        BookdeskError::Command(format!(
            "{} has no field named {}",
            table.name, condition_field
        ))
    })?;

    Ok(Statement {
        sql: format!("DELETE FROM {} WHERE {} = ?;", table.name, field.name),
        params: vec![condition_value.to_string()],
    })
}
