//! Turning a view of a passcard into displayable text.
//!
//! A [`Renderer`] is passed to [`Reader::render`](crate::Reader::render) by
//! the caller; there is no global registry of output formats.

mod ascii;
mod html;

pub use ascii::AsciiRenderer;
pub use html::HtmlRenderer;

use crate::config::HEADERS;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::palette::{Palette, PaletteEntry};
use std::fmt;
use std::str::FromStr;

/// Everything a renderer needs: the grid, optional row colors, and optional
/// header labels sized to the grid.
#[derive(Debug, Clone)]
pub struct View {
    pub grid: Grid,
    pub palette: Option<Palette>,
    pub row_headers: Option<Vec<char>>,
    pub col_headers: Option<Vec<char>>,
}

impl View {
    /// Colors of row `index`, if the view is colored.
    pub fn colors(&self, index: usize) -> Option<&PaletteEntry> {
        self.palette.as_ref().and_then(|p| p.get(index))
    }

    /// Label of row `index`; blank past the end of the label alphabet.
    pub fn row_header(&self, index: usize) -> String {
        label(self.row_headers.as_deref(), index)
    }

    /// Column labels, if headers are on.
    pub fn col_header_labels(&self) -> Option<Vec<String>> {
        self.col_headers.as_deref().map(|labels| {
            (0..self.grid.col_size())
                .map(|i| label(Some(labels), i))
                .collect()
        })
    }

    /// Cells of row `index`.
    pub fn row_cells(&self, index: usize) -> &[char] {
        self.grid
            .cells()
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn label(labels: Option<&[char]>, index: usize) -> String {
    labels
        .and_then(|l| l.get(index))
        .map_or_else(|| " ".to_string(), char::to_string)
}

/// Produces text from a [`View`].
pub trait Renderer {
    /// Format name, e.g. `ascii`.
    fn name(&self) -> &'static str;

    /// Label alphabet for row and column headers.
    fn headers(&self) -> &str {
        HEADERS
    }

    fn render(&self, view: &View) -> String;
}

/// Built-in output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Ascii,
    Html,
}

impl OutputFormat {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Ascii => Box::new(AsciiRenderer),
            OutputFormat::Html => Box::new(HtmlRenderer),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Ascii => "ascii",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "ascii" => Ok(OutputFormat::Ascii),
            "html" => Ok(OutputFormat::Html),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{PaletteKind, PaletteOptions};

    pub(crate) fn sample_view(colored: bool, headers: bool) -> View {
        let grid = Grid::from_strs(&["a<1", "B&2"]).unwrap();
        let palette = colored
            .then(|| Palette::new(PaletteKind::Passcard, PaletteOptions::with_count(2)));
        let labels = |n: usize| -> Option<Vec<char>> {
            headers.then(|| HEADERS.chars().take(n).collect())
        };
        View {
            palette,
            row_headers: labels(2),
            col_headers: labels(3),
            grid,
        }
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!("ascii".parse::<OutputFormat>().unwrap(), OutputFormat::Ascii);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(Error::UnknownFormat(name)) if name == "pdf"
        ));
        assert_eq!(OutputFormat::Html.renderer().name(), "html");
    }

    #[test]
    fn test_view_labels() {
        let view = sample_view(false, true);
        assert_eq!(view.row_header(1), "B");
        assert_eq!(view.row_header(9), " ");
        assert_eq!(
            view.col_header_labels(),
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
        assert!(sample_view(false, false).col_header_labels().is_none());
    }
}
