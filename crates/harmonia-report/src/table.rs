//! Fixed-width text table writer.

/// A bordered table with an optional centered title band.
pub(crate) struct TextTable {
    title: Option<String>,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(header: &[&str]) -> Self {
        Self {
            title: None,
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let columns = self.header.len();
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(columns) {
                let width = cell.chars().count();
                if width > widths[i] {
                    widths[i] = width;
                }
            }
        }
        // Inner width of the title band: cells plus padding plus the
        // column separators it spans.
        let mut inner: usize = widths.iter().map(|w| w + 2).sum::<usize>() + columns - 1;
        if let Some(title) = &self.title {
            let needed = title.chars().count();
            if needed > inner {
                // Widen the last column so the title fits.
                if let Some(last) = widths.last_mut() {
                    *last += needed - inner;
                }
                inner = needed;
            }
        }

        let border = column_border(&widths);
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push('+');
            out.push_str(&"-".repeat(inner));
            out.push_str("+\n");
            out.push('|');
            out.push_str(&center(title, inner));
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push_str(&format_row(&self.header, &widths));
        out.push_str(&border);
        for row in &self.rows {
            out.push_str(&format_row(row, &widths));
        }
        out.push_str(&border);
        out
    }
}

fn column_border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(&pad(cell, *width));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut padded = text.to_string();
    if len < width {
        padded.push_str(&" ".repeat(width - len));
    }
    padded
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
