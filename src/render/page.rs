//! Line-oriented Markdown text builder.

use std::fmt::Write;

/// Accumulates one Markdown document.
#[derive(Debug, Default)]
pub(super) struct Page {
    output: String,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    /// Emit a blank line unless the page is empty or already ends with one.
    pub fn blank(&mut self) {
        if !self.output.is_empty() && !self.output.ends_with("\n\n") {
            let _ = writeln!(self.output);
        }
    }

    pub fn heading(&mut self, level: usize, text: &str) {
        self.blank();
        let _ = writeln!(self.output, "{} {text}", "#".repeat(level));
        self.blank();
    }

    /// A paragraph, skipped when empty.
    pub fn paragraph(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.blank();
        self.line(text);
        self.blank();
    }

    pub fn code_block(&mut self, language: &str, code: &str) {
        self.blank();
        let _ = writeln!(self.output, "```{language}\n{code}\n```");
        self.blank();
    }

    /// `- **label**: value`
    pub fn field(&mut self, label: &str, value: &str) {
        let _ = writeln!(self.output, "- **{label}**: {value}");
    }

    /// A table with a header row. Pipes inside cells are escaped.
    pub fn table(&mut self, header: &[&str], rows: &[Vec<String>]) {
        self.blank();
        let _ = writeln!(self.output, "| {} |", header.join(" | "));
        let _ = writeln!(
            self.output,
            "|{}",
            header.iter().map(|_| "---|").collect::<String>()
        );
        for row in rows {
            let cells: Vec<String> = row.iter().map(|c| escape_cell(c)).collect();
            let _ = writeln!(self.output, "| {} |", cells.join(" | "));
        }
        self.blank();
    }

    /// The finished document, ending in exactly one newline.
    pub fn finish(self) -> String {
        let mut text = self.output.trim_end().to_string();
        text.push('\n');
        text
    }
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}
