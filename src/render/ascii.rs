//! Plain text output with optional 24-bit ANSI row colors.

use super::{Renderer, View};
use crate::palette::Rgb;

/// Renders rows as space-separated cells, one line each.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    fn col_headers(labels: &[String]) -> String {
        format!(
            "    {}\n    {}\n",
            labels.join(" "),
            "- ".repeat(labels.len())
        )
    }

    fn row(view: &View, index: usize) -> String {
        let cells: Vec<String> = view.row_cells(index).iter().map(char::to_string).collect();
        let row = cells.join(" ");
        match view.colors(index) {
            Some(entry) => format!(
                "\x1b[48;2;{}m\x1b[38;2;{}m{}\x1b[0m",
                ansi(entry.color),
                ansi(entry.text_color),
                row
            ),
            None => row,
        }
    }
}

fn ansi(color: Rgb) -> String {
    format!("{};{};{}", color.0, color.1, color.2)
}

impl Renderer for AsciiRenderer {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn render(&self, view: &View) -> String {
        let mut out = String::new();
        if let Some(labels) = view.col_header_labels() {
            out.push_str(&Self::col_headers(&labels));
        }

        for i in 0..view.grid.row_size() {
            if view.row_headers.is_some() {
                out.push_str(&view.row_header(i));
                out.push_str(" | ");
            }
            out.push_str(&Self::row(view, i));
            out.push('\n');
        }
        out
    }
}
