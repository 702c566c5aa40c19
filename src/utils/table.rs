//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths: the widest of header and all cell values.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
                }
            }
        }

        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", header, width = widths[i]));
        }
        out.push('\n');

        // Separator
        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_longest_cell() {
        let mut table = Table::new(vec!["A".to_string(), "B".to_string()]);
        table.add_row(vec!["short".to_string(), "x".to_string()]);
        table.add_row(vec!["a much longer cell".to_string(), "y".to_string()]);

        let widths = table.widths();
        assert_eq!(widths[0], "a much longer cell".len());
        assert_eq!(widths[1], 1);
    }

    #[test]
    fn render_contains_headers_and_cells() {
        let mut table = Table::new(vec!["Client".to_string(), "Hours".to_string()]);
        table.add_row(vec!["ACME".to_string(), "7.5".to_string()]);

        let rendered = table.render();
        assert!(rendered.contains("Client"));
        assert!(rendered.contains("ACME"));
        assert!(rendered.contains("7.5"));
        assert!(rendered.contains("---"));
    }
}
