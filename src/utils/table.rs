//! Table rendering utilities for CLI outputs.

use crate::core::gradient::Rgb;
use crate::utils::colors::paint_cell;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

/// Plain text plus optional (background, foreground) colours.
#[derive(Debug, Clone)]
pub struct TableCell {
    pub text: String,
    pub colors: Option<(Rgb, Rgb)>,
}

impl TableCell {
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            colors: None,
        }
    }

    pub fn shaded<T: Into<String>>(text: T, background: Rgb, foreground: Rgb) -> Self {
        Self {
            text: text.into(),
            colors: Some((background, foreground)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<TableCell>) {
        self.rows.push(row);
    }

    /// Widths are measured on the plain text so colour codes never skew
    /// the alignment.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.text.width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render with colours; `colored = false` gives plain text.
    pub fn render(&self, colored: bool) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&format!(" {} ", pad(&col.header, *w, col.right_align)));
        }
        out.push('\n');

        for row in &self.rows {
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let Some(cell) = row.get(i) else {
                    out.push_str(&" ".repeat(w + 2));
                    continue;
                };

                // Pad inside the colour so the whole cell is shaded.
                let text = format!(" {} ", pad(&cell.text, *w, col.right_align));
                match (cell.colors, colored) {
                    (Some((bg, fg)), true) => out.push_str(&paint_cell(&text, bg, fg)),
                    _ => out.push_str(&text),
                }
            }
            out.push('\n');
        }

        out
    }
}

fn pad(s: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(s.width()));
    if right {
        format!("{fill}{s}")
    } else {
        format!("{s}{fill}")
    }
}
