/// Interactive Shell Module
///
/// The line-oriented interface of bookdesk. The menu stands in for the
/// sidebar: `:go` selects a screen and re-renders it whole, table
/// screens offer their operation set through `:insert`/`:update`/
/// `:delete`, and bare input is ad-hoc SQL on the Home screen or a menu
/// entry name anywhere else. Every failure is displayed here and the
/// loop continues; nothing is retried.
use crate::catalog::{Operation, TableDef, CATALOG};
use crate::core::db::{query, ConnectionProvider, QueryResult};
use crate::core::{BookdeskError, Result};
use crate::forms;
use crate::menu::{render_menu, Screen};
use crate::results_grid::Grid;
use crate::session::Session;
use crate::sql;
use crate::statement;
use crossterm::style::Stylize;
use std::io::{self, Write};
use tracing::info;

/// Represents a parsed shell command.
#[derive(Debug, PartialEq)]
pub enum Command {
    Menu,
    Go(String),
    Rows,
    Op(Operation),
    Preview,
    Export(String),
    Schema(Option<String>),
    Help,
    Quit,
    /// Bare input: ad-hoc SQL on Home, a menu entry name elsewhere
    Input(String),
    Unknown(String),
}

/// Parses a user input line into a corresponding `Command`.
///
/// If the input starts with a colon (`:`), it is interpreted as a
/// command. Otherwise it is handed to the current screen as bare input.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if !input.starts_with(':') {
        return Command::Input(input.to_string());
    }
    let trimmed = &input[1..];
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return Command::Unknown(input.to_string());
    }
    match parts[0] {
        "menu" => Command::Menu,
        "go" => {
            if parts.len() >= 2 {
                Command::Go(parts[1].to_string())
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "rows" => Command::Rows,
        "insert" => Command::Op(Operation::Insert),
        "update" => Command::Op(Operation::Update),
        "delete" => Command::Op(Operation::Delete),
        "preview" => Command::Preview,
        "export" => {
            if parts.len() >= 2 {
                Command::Export(parts[1].to_string())
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "schema" => {
            if parts.len() >= 2 {
                Command::Schema(Some(parts[1].to_string()))
            } else {
                Command::Schema(None)
            }
        }
        "help" => Command::Help,
        "quit" => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}

/// The interactive session driver.
pub struct Shell {
    provider: ConnectionProvider,
    session: Session,
}

impl Shell {
    pub fn new(provider: ConnectionProvider, session: Session) -> Self {
        Shell { provider, session }
    }

    /// Runs the shell until `:quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        println!("Welcome to bookdesk! Type :help for commands, :quit to exit.");
        self.render_screen();

        loop {
            print!("{}> ", self.session.screen.name());
            io::stdout().flush()?;
            let Some(line) = read_input_line()? else {
                break;
            };
            let trimmed = line.trim().to_string();
            if trimmed.is_empty() {
                continue;
            }

            match parse_command(&trimmed) {
                Command::Quit => break,
                Command::Menu => print!("{}", render_menu()),
                Command::Go(entry) => self.go(&entry),
                Command::Rows => self.render_screen(),
                Command::Op(op) => self.run_operation(op),
                Command::Preview => {
                    let on = self.session.toggle_preview();
                    println!("Preview mode {}", if on { "on" } else { "off" });
                }
                Command::Export(format) => {
                    if let Err(e) = self.export(&format) {
                        report_error(&e);
                    }
                }
                Command::Schema(name) => self.show_schema(name.as_deref()),
                Command::Help => print_help(),
                Command::Input(text) => {
                    if self.session.screen == Screen::Home {
                        self.run_adhoc(&text);
                    } else {
                        self.go(&text);
                    }
                }
                Command::Unknown(text) => {
                    report_error(&BookdeskError::Command(format!(
                        "Unknown command: {text}. Type :help for the command list"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Navigates to a menu entry and re-renders the whole screen.
    fn go(&mut self, entry: &str) {
        match Screen::resolve(entry) {
            Some(screen) => {
                info!(screen = screen.name(), "navigating");
                self.session.screen = screen;
                self.render_screen();
            }
            None => report_error(&BookdeskError::Command(format!(
                "No menu entry named '{entry}'. Type :menu to list entries"
            ))),
        }
    }

    /// Renders the current screen from scratch: title, current rows,
    /// and the operation set the screen offers.
    fn render_screen(&mut self) {
        let screen = self.session.screen.clone();
        println!("{}", screen.title().bold());
        match screen {
            Screen::Home => {
                println!("Browse and edit the library database.");
                println!("Type :menu to list tables and views, :go <entry> to open one.");
                println!(
                    "Preview mode is {} (:preview to toggle).",
                    if self.session.preview { "on" } else { "off" }
                );
                println!("Enter any SQL query directly at this prompt to run it.");
            }
            Screen::View(name) => {
                println!("Current data");
                self.show_rows(name);
            }
            Screen::Table(name) => {
                println!("Current data");
                self.show_rows(name);
                if let Some(table) = CATALOG.table(name) {
                    let ops: Vec<String> = table
                        .operations()
                        .iter()
                        .map(|op| format!(":{}", op.name().to_lowercase()))
                        .collect();
                    println!("Operations: {}", ops.join(", "));
                }
            }
        }
    }

    /// Fetches and prints the rows behind a table or view screen. On
    /// failure the error text is displayed and an empty grid stands in.
    fn show_rows(&mut self, name: &str) {
        let sql_text = statement::select_all(name);
        let result = match self
            .provider
            .open()
            .and_then(|conn| query::fetch(&conn, &sql_text))
        {
            Ok(result) => result,
            Err(e) => {
                report_error(&e);
                QueryResult::empty()
            }
        };
        let grid = Grid::from_result(&result);
        if grid.is_empty() {
            println!("(no rows)");
        }
        print!("{}", grid.render());
        self.session.remember_result(result);
    }

    /// Runs ad-hoc SQL from the Home prompt on the read path.
    fn run_adhoc(&mut self, text: &str) {
        if !sql::is_read_statement(text) {
            report_error(&BookdeskError::Query(
                "Only read queries run from the Home prompt; open a table screen for writes"
                    .to_string(),
            ));
            return;
        }
        match self
            .provider
            .open()
            .and_then(|conn| query::fetch(&conn, text))
        {
            Ok(result) => {
                report_success("Query executed successfully.");
                print!("{}", Grid::from_result(&result).render());
                self.session.remember_result(result);
            }
            Err(e) => report_error(&e),
        }
    }

    /// Dispatches an operation command on the current screen.
    fn run_operation(&mut self, op: Operation) {
        let table = match &self.session.screen {
            Screen::Table(name) => match CATALOG.table(name) {
                Some(table) => table.clone(),
                None => {
                    report_error(&BookdeskError::App(format!("unknown table {name}")));
                    return;
                }
            },
            Screen::View(_) => {
                report_error(&BookdeskError::Command(
                    "Views are read-only; no operations are available".to_string(),
                ));
                return;
            }
            Screen::Home => {
                report_error(&BookdeskError::Command(
                    "Open a table screen first (:go <table>)".to_string(),
                ));
                return;
            }
        };
        if !table.operations().contains(&op) {
            report_error(&BookdeskError::Command(format!(
                "{} does not support {}",
                table.name,
                op.name()
            )));
            return;
        }

        let outcome = match op {
            Operation::Insert => self.insert_flow(&table).map(|_| "Record inserted successfully."),
            Operation::Update => self.update_flow(&table).map(|_| "Record updated successfully."),
            Operation::Delete => self.delete_flow(&table).map(|_| "Record deleted successfully."),
        };
        match outcome {
            Ok(message) => {
                report_success(message);
                self.render_screen();
            }
            Err(e) => report_error(&e),
        }
    }

    /// Prompts for every declared field and inserts the collected row.
    fn insert_flow(&mut self, table: &TableDef) -> Result<usize> {
        let seeds = forms::insert_seeds(table, self.session.preview);
        let mut values = Vec::with_capacity(seeds.len());
        for (field, seed) in table.fields.iter().zip(seeds) {
            values.push(prompt_value(field.name, &seed)?);
        }
        forms::insert_row(&self.provider, table, &values)
    }

    /// Prompts for the primary-key condition and every non-key field,
    /// then updates the targeted row.
    fn update_flow(&mut self, table: &TableDef) -> Result<usize> {
        println!(
            "Primary key for update operation: {}",
            table.primary_key().name
        );
        let key_value = prompt_value("Condition value", "")?;
        let seeds = forms::update_seeds(table, self.session.preview);
        let mut values = Vec::with_capacity(seeds.len());
        for (field, seed) in table.fields[1..].iter().zip(seeds) {
            values.push(prompt_value(field.name, &seed)?);
        }
        forms::update_row(&self.provider, table, &values, &key_value)
    }

    /// Prompts for a condition field and value, then deletes matches.
    fn delete_flow(&mut self, table: &TableDef) -> Result<usize> {
        let field_names: Vec<&str> = table.fields.iter().map(|f| f.name).collect();
        println!("Choose field for delete condition: {}", field_names.join(", "));
        let condition_field = prompt_value("Condition field", table.primary_key().name)?;
        let condition_value = prompt_value("Condition value", "")?;
        forms::delete_rows(&self.provider, table, &condition_field, &condition_value)
    }

    /// Re-serializes the last rendered result in the named format.
    fn export(&self, format: &str) -> Result<()> {
        let result = self.session.last_result.as_ref().ok_or_else(|| {
            BookdeskError::Ui("No result to export yet; render a table first".to_string())
        })?;
        let output = Grid::from_result(result).export(format)?;
        println!("{output}");
        Ok(())
    }

    /// Renders the static catalog, or one entry of it.
    fn show_schema(&self, name: Option<&str>) {
        match name {
            None => print!("{}", CATALOG.describe(None)),
            Some(name) => {
                if let Some(table) = CATALOG.table(name) {
                    print!("{}", CATALOG.describe(Some(table)));
                } else if let Some(view) = CATALOG.view(name) {
                    println!("View: {view} (read-only)");
                } else {
                    report_error(&BookdeskError::Command(format!(
                        "No table or view named '{name}'"
                    )));
                }
            }
        }
    }
}

/// Reads one line from stdin; `None` means end of input.
fn read_input_line() -> Result<Option<String>> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(input))
    }
}

/// Prompts for one form value. The seed is shown in brackets and
/// submitted unchanged when the input line is empty — so in preview
/// mode an untouched field submits its declared type name.
fn prompt_value(label: &str, seed: &str) -> Result<String> {
    if seed.is_empty() {
        print!("  {label}: ");
    } else {
        print!("  {label} [{seed}]: ");
    }
    io::stdout().flush()?;
    match read_input_line()? {
        Some(line) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Ok(seed.to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Err(BookdeskError::App(
            "input ended before the form was submitted".to_string(),
        )),
    }
}

fn report_error(err: &BookdeskError) {
    println!("{}", err.to_string().red());
}

fn report_success(message: &str) {
    println!("{}", message.green());
}

fn print_help() {
    println!("Available commands:");
    println!("  :help - List all available commands and their descriptions");
    println!("  :menu - List the menu entries (Home, views, tables)");
    println!("  :go <entry> - Open a menu entry and render its screen");
    println!("  :rows - Re-render the current screen");
    println!("  :insert - Insert a row into the current table");
    println!("  :update - Update a row of the current table by primary key");
    println!("  :delete - Delete rows of the current table by condition");
    println!("  :preview - Toggle type previews in form fields");
    println!("  :export <format> - Export the last result (csv, json, markdown, html)");
    println!("  :schema [table] - Show the catalog, or one table of it");
    println!("  :quit - Exit");
    println!("\nOn the Home screen, enter SQL queries directly without any prefix.");
    println!("On any other screen, a bare menu entry name opens it.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colon_commands() {
        assert_eq!(parse_command(":menu"), Command::Menu);
        assert_eq!(parse_command(":go Author"), Command::Go("Author".to_string()));
        assert_eq!(parse_command(":rows"), Command::Rows);
        assert_eq!(parse_command(":insert"), Command::Op(Operation::Insert));
        assert_eq!(parse_command(":update"), Command::Op(Operation::Update));
        assert_eq!(parse_command(":delete"), Command::Op(Operation::Delete));
        assert_eq!(parse_command(":preview"), Command::Preview);
        assert_eq!(parse_command(":export csv"), Command::Export("csv".to_string()));
        assert_eq!(parse_command(":schema"), Command::Schema(None));
        assert_eq!(
            parse_command(":schema Book"),
            Command::Schema(Some("Book".to_string()))
        );
        assert_eq!(parse_command(":help"), Command::Help);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_commands_missing_arguments() {
        assert_eq!(parse_command(":go"), Command::Unknown(":go".to_string()));
        assert_eq!(parse_command(":export"), Command::Unknown(":export".to_string()));
    }

    #[test]
    fn test_parse_bare_input() {
        assert_eq!(
            parse_command("SELECT * FROM Book"),
            Command::Input("SELECT * FROM Book".to_string())
        );
        assert_eq!(parse_command("Author"), Command::Input("Author".to_string()));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse_command(":frobnicate"),
            Command::Unknown(":frobnicate".to_string())
        );
    }
}
