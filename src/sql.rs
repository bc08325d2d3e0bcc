/// Ad-hoc SQL Module
///
/// The Home screen accepts arbitrary SQL text and runs it on the read
/// path. This module classifies the text before it is passed through:
/// read statements go to the executor unmodified, anything else is
/// turned away with a hint instead of being stepped. The pass-through
/// itself is unsandboxed and trusted-operator-only.
use once_cell::sync::Lazy;
use regex::Regex;

static READ_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(SELECT|WITH|VALUES|PRAGMA|EXPLAIN)\b").expect("valid pattern")
});

/// Whether the text starts like a read statement. The executor still
/// verifies that whatever runs produces result columns; this check only
/// shapes the error message the prompt gives for write statements.
pub fn is_read_statement(sql: &str) -> bool {
    READ_STATEMENT.is_match(sql)
}
