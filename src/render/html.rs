//! Standalone HTML page output.

use super::{Renderer, View};

const TEMPLATE: &str = include_str!("template.html");

/// Renders a full HTML page, one `div` per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn spans<I: IntoIterator<Item = String>>(items: I) -> String {
        items
            .into_iter()
            .map(|item| format!("<span>{}</span>", escape(&item)))
            .collect()
    }

    fn row(view: &View, index: usize) -> String {
        let style = view
            .colors(index)
            .map(|entry| {
                format!(
                    " style='color: rgb({}); background: rgb({})'",
                    entry.text_color, entry.color
                )
            })
            .unwrap_or_default();
        let cells = Self::spans(view.row_cells(index).iter().map(char::to_string));
        format!("<div class='row-content'{}>{}</div>", style, cells)
    }

    // Gradient from the last row's color (top) to the first's.
    fn background(view: &View) -> String {
        let palette = match &view.palette {
            Some(palette) => palette,
            None => return String::new(),
        };
        match (palette.first(), palette.last()) {
            (Some(first), Some(last)) => format!(
                "background:linear-gradient(rgb({}),rgb({}))",
                last.color, first.color
            ),
            _ => String::new(),
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, view: &View) -> String {
        let mut grid = String::new();
        if let Some(labels) = view.col_header_labels() {
            grid.push_str(&format!(
                "<div class='col-header'>{}</div>\n",
                Self::spans(labels)
            ));
        }

        for i in 0..view.grid.row_size() {
            grid.push_str("<div class='row'>");
            if view.row_headers.is_some() {
                grid.push_str(&format!(
                    "<div class='row-header'>{}</div>",
                    Self::spans([view.row_header(i)])
                ));
            }
            grid.push_str(&Self::row(view, i));
            grid.push_str("</div>\n");
        }

        TEMPLATE
            .replace("{{GRID}}", &grid)
            .replace("{{BACKGROUND}}", &Self::background(view))
    }
}
