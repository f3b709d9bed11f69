//! Table rendering for formatted output.

use console::measure_text_width;

/// Shorten `text` to at most `max` display columns, ending in `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if measure_text_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = measure_text_width(ch.encode_utf8(&mut [0; 4]));
        if width + w > max - 3 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// A simple table for formatted output.
///
/// Column widths are measured in display columns, so wide characters line
/// up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));

        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let padding = width.saturating_sub(measure_text_width(cell));
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(padding));
            s.push_str(" │");
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Name", "Score"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("Name"));
        assert!(output.contains("Score"));
    }

    #[test]
    fn table_render_line_count() {
        let mut table = Table::new(vec!["Name", "Score", "Description"]);
        table.add_row(row(&["video-downloader", "3.45", "Download videos"]));
        table.add_row(row(&["pdf-toolkit", "1.5", "PDF tools"]));

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        // top border, header, separator, 2 rows, bottom border
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn rows_have_equal_width() {
        let mut table = Table::new(vec!["Name", "Description"]);
        table.add_row(row(&["pdf-toolkit", "PDF 工具"]));
        table.add_row(row(&["git-helper", "Git tips"]));

        let output = table.render();
        let widths: Vec<_> = output.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(row(&["only", "two"]));

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_long_text() {
        let out = truncate("Download videos from many sites", 12);
        assert_eq!(out, "Download ...");
        assert_eq!(measure_text_width(&out), 12);
    }
}
