//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        // Rows, cells truncated to the column width
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = truncate(&row[i], col.width);
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            out.push('\n');
        }

        out
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else if width > 3 {
        let mut t: String = s.chars().take(width - 3).collect();
        t.push_str("...");
        t
    } else {
        s.chars().take(width).collect()
    }
}
