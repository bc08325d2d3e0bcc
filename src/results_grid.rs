/// Results Grid Module
///
/// Renders a query result for display. The terminal text grid is the
/// screen format; the HTML table fragment and the csv/json/markdown
/// exports are produced on demand from the same grid. No pagination,
/// sorting, or filtering happens here: every row of the result is
/// rendered in the order it arrived, and an empty result renders as a
/// zero-row table rather than an error.
use crate::core::db::QueryResult;
use crate::core::{BookdeskError, Result};
use std::collections::BTreeMap;

/// A display-ready copy of a query result: headers plus string rows.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates a new, empty grid.
    pub fn new() -> Self {
        Grid::default()
    }

    /// Builds a grid from a query result, discarding any positional
    /// state the result may carry — rows render 0..n in arrival order.
    pub fn from_result(result: &QueryResult) -> Self {
        Grid {
            headers: result.columns.clone(),
            rows: result.rows.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the grid as a text table with a header underline.
    pub fn render(&self) -> String {
        let mut output = String::new();
        if !self.headers.is_empty() {
            output.push_str(&self.headers.join(" | "));
            output.push('\n');
            let underline: Vec<String> = self
                .headers
                .iter()
                .map(|h| "-".repeat(h.len() + 2))
                .collect();
            output.push_str(&underline.join("-|-"));
            output.push('\n');
        }
        for row in &self.rows {
            output.push_str(&row.join(" | "));
            output.push('\n');
        }
        output
    }

    /// Serializes the grid to an HTML table fragment. Cell text is
    /// HTML-escaped; an empty grid yields a table with an empty body.
    pub fn to_html(&self) -> String {
        let mut output = String::from("<table>\n");
        if !self.headers.is_empty() {
            output.push_str("<thead><tr>");
            for header in &self.headers {
                output.push_str(&format!("<th>{}</th>", escape_html(header)));
            }
            output.push_str("</tr></thead>\n");
        }
        output.push_str("<tbody>\n");
        for row in &self.rows {
            output.push_str("<tr>");
            for cell in row {
                output.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            output.push_str("</tr>\n");
        }
        output.push_str("</tbody>\n</table>");
        output
    }

    /// Exports the grid in a named format.
    /// Supported formats: csv, json, markdown, html.
    pub fn export(&self, format: &str) -> Result<String> {
        match format.to_lowercase().as_str() {
            "csv" => Ok(self.export_to_csv()),
            "json" => self.export_to_json(),
            "markdown" => Ok(self.export_to_markdown()),
            "html" => Ok(self.to_html()),
            _ => Err(BookdeskError::Ui(format!(
                "Unsupported export format: '{format}'. Supported formats: csv, json, markdown, html"
            ))),
        }
    }

    fn export_to_csv(&self) -> String {
        let mut output = String::new();
        if !self.headers.is_empty() {
            let fields: Vec<String> = self.headers.iter().map(|h| csv_field(h)).collect();
            output.push_str(&fields.join(","));
            output.push('\n');
        }
        for row in &self.rows {
            let fields: Vec<String> = row.iter().map(|c| csv_field(c)).collect();
            output.push_str(&fields.join(","));
            output.push('\n');
        }
        output
    }

    fn export_to_json(&self) -> Result<String> {
        let mut rows = Vec::new();
        for row in &self.rows {
            let mut row_map = BTreeMap::new();
            for (i, cell) in row.iter().enumerate() {
                if let Some(header) = self.headers.get(i) {
                    row_map.insert(header.clone(), cell.clone());
                }
            }
            rows.push(row_map);
        }
        serde_json::to_string(&rows).map_err(BookdeskError::Json)
    }

    fn export_to_markdown(&self) -> String {
        let mut output = String::new();
        if !self.headers.is_empty() {
            output.push_str(&self.headers.join(" | "));
            output.push('\n');
            let underline: Vec<String> = self
                .headers
                .iter()
                .map(|h| "-".repeat(h.len()))
                .collect();
            output.push_str(&underline.join(" | "));
            output.push('\n');
        }
        for row in &self.rows {
            output.push_str(&row.join(" | "));
            output.push('\n');
        }
        output
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn csv_field(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_result(&QueryResult::new(
            vec!["BookID".to_string(), "Title".to_string()],
            vec![
                vec!["1".to_string(), "Emma".to_string()],
                vec!["2".to_string(), "Dracula".to_string()],
            ],
        ))
    }

    #[test]
    fn test_render_empty_grid() {
        let grid = Grid::new();
        assert_eq!(grid.render(), "");
        assert!(grid.is_empty());
    }

    #[test]
    fn test_render_header_only_for_empty_result() {
        let grid = Grid::from_result(&QueryResult::new(
            vec!["BookID".to_string()],
            Vec::new(),
        ));
        let rendered = grid.render();
        assert!(rendered.contains("BookID"));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_render_with_headers_and_rows() {
        let rendered = sample_grid().render();
        assert!(rendered.contains("BookID | Title"));
        assert!(rendered.contains("1 | Emma"));
        assert!(rendered.contains("2 | Dracula"));
    }

    #[test]
    fn test_to_html_escapes_cells() {
        let grid = Grid::from_result(&QueryResult::new(
            vec!["Text".to_string()],
            vec![vec!["<b>\"5 & 6\"</b>".to_string()]],
        ));
        let html = grid.to_html();
        assert!(html.contains("<td>&lt;b&gt;&quot;5 &amp; 6&quot;&lt;/b&gt;</td>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_to_html_fragment_shape() {
        insta::assert_snapshot!(sample_grid().to_html(), @r###"
        <table>
        <thead><tr><th>BookID</th><th>Title</th></tr></thead>
        <tbody>
        <tr><td>1</td><td>Emma</td></tr>
        <tr><td>2</td><td>Dracula</td></tr>
        </tbody>
        </table>
        "###);
    }

    #[test]
    fn test_export_to_csv_quotes_commas() {
        let grid = Grid::from_result(&QueryResult::new(
            vec!["Title".to_string()],
            vec![vec!["Crime, and \"Punishment\"".to_string()]],
        ));
        let csv = grid.export("csv").unwrap();
        assert!(csv.contains("\"Crime, and \"\"Punishment\"\"\""));
    }

    #[test]
    fn test_export_to_json() {
        let json = sample_grid().export("json").unwrap();
        assert!(json.contains(r#""BookID":"1""#));
        assert!(json.contains(r#""Title":"Dracula""#));
    }

    #[test]
    fn test_export_to_markdown() {
        let markdown = sample_grid().export("markdown").unwrap();
        let lines: Vec<&str> = markdown.trim().lines().collect();
        assert_eq!(lines[0], "BookID | Title");
        assert_eq!(lines[1], "------ | -----");
        assert_eq!(lines[2], "1 | Emma");
    }

    #[test]
    fn test_export_unsupported_format() {
        let result = sample_grid().export("xml");
        if let Err(BookdeskError::Ui(msg)) = result {
            assert!(msg.contains("Unsupported export format"));
            assert!(msg.contains("xml"));
        } else {
            panic!("Expected Ui error");
        }
    }
}
