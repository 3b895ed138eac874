//! Immutable character grids with wrap-around addressing.
//!
//! Rows and columns are treated as periodic: any integer index, negative or
//! past the end, resolves to `index mod len`. Every operation returns a new
//! [`Grid`]; nothing mutates in place.
//!
//! ```rust
//! use passcard::Grid;
//!
//! let grid = Grid::from_strs(&["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"]).unwrap();
//! assert_eq!(grid.rows_at([5]).to_flat_string(), "ABCDE");
//! assert_eq!(grid.rows_at([0, -1]).to_flat_string(), "ABCDEUVWXY");
//! ```

mod selector;

pub use selector::{Coord, Selector};

use crate::error::{Error, Result};
use selector::{flatten, wrap};
use std::fmt;

/// Number of characters shown by the `Debug` summary.
const DEBUG_PREVIEW: usize = 36;

/// A rectangular table of characters, row-major.
///
/// A grid with no rows, or with rows of no characters, is the empty grid
/// of size `(0, 0)`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from rows of characters.
    ///
    /// Fails with [`Error::InvalidGrid`] unless every row has the same length.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if rows.iter().any(|row| row.len() != width) {
                return Err(Error::InvalidGrid);
            }
        }
        Ok(Self::from_rectangular(rows))
    }

    /// Build a grid from one string per row.
    pub fn from_strs<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::new(rows.iter().map(|r| r.as_ref().chars().collect()).collect())
    }

    /// Build a grid by cutting a row-major string into rows of `cols` characters.
    pub fn from_flat(text: &str, cols: usize) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Ok(Self::empty());
        }
        if cols == 0 || chars.len() % cols != 0 {
            return Err(Error::InvalidGrid);
        }
        Ok(Self::from_rectangular(
            chars.chunks(cols).map(<[char]>::to_vec).collect(),
        ))
    }

    /// The `(0, 0)` grid.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    // Callers guarantee equal row lengths.
    fn from_rectangular(rows: Vec<Vec<char>>) -> Self {
        if rows.first().map_or(true, Vec::is_empty) {
            return Self::empty();
        }
        Self { rows }
    }

    /// Number of rows.
    pub fn row_size(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn col_size(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `(row_size, col_size)`.
    pub fn size(&self) -> (usize, usize) {
        (self.row_size(), self.col_size())
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.row_size() * self.col_size()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the underlying rows.
    pub fn cells(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Iterate over every character, row-major.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// The single row at a (wrapped) index.
    pub fn row(&self, index: i64) -> Grid {
        self.rows_at([index])
    }

    /// Select rows by any mix of indices, index lists and ranges.
    ///
    /// Selected rows are concatenated in order; repeats are kept.
    pub fn rows_at<I>(&self, selection: I) -> Grid
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let indices = flatten(selection);
        if self.is_empty() {
            return Self::empty();
        }
        let rows = indices
            .into_iter()
            .map(|i| self.rows[wrap(i, self.row_size())].clone())
            .collect();
        Self::from_rectangular(rows)
    }

    /// Select columns by any mix of indices, index lists and ranges.
    pub fn cols_at<I>(&self, selection: I) -> Grid
    where
        I: IntoIterator,
        I::Item: Into<Selector>,
    {
        let indices = flatten(selection);
        if self.is_empty() {
            return Self::empty();
        }
        let cols: Vec<usize> = indices
            .into_iter()
            .map(|i| wrap(i, self.col_size()))
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| cols.iter().map(|&c| row[c]).collect())
            .collect();
        Self::from_rectangular(rows)
    }

    /// Select rows, then columns. An empty selector leaves that axis whole.
    pub fn at(&self, rows: &[Selector], cols: &[Selector]) -> Grid {
        match (rows.is_empty(), cols.is_empty()) {
            (true, true) => self.clone(),
            (false, true) => self.rows_at(rows.iter().cloned()),
            (true, false) => self.cols_at(cols.iter().cloned()),
            (false, false) => self
                .rows_at(rows.iter().cloned())
                .cols_at(cols.iter().cloned()),
        }
    }

    /// Sub-grid covering `[top_left.row, bottom_right.row)` by
    /// `[top_left.col, bottom_right.col)`, wrapping on both axes.
    ///
    /// If either range is empty the result is the `(0, 0)` grid.
    pub fn slice(&self, top_left: impl Into<Coord>, bottom_right: impl Into<Coord>) -> Grid {
        let (from, to) = (top_left.into(), bottom_right.into());
        if to.row <= from.row || to.col <= from.col {
            return Self::empty();
        }
        self.rows_at([from.row..to.row]).cols_at([from.col..to.col])
    }

    /// Rotate rows by `r` and every row's contents by `c`.
    ///
    /// The cell at `(r, c)` becomes the top-left one; negative counts rotate
    /// the other way.
    pub fn rotate(&self, r: i64, c: i64) -> Grid {
        if self.is_empty() {
            return Self::empty();
        }
        let (rows, cols) = (self.row_size(), self.col_size());
        let (r, c) = (wrap(r, rows) as i64, wrap(c, cols) as i64);
        self.rows_at([r..r + rows as i64])
            .cols_at([c..c + cols as i64])
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Grid {
        let rows = (0..self.col_size())
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect();
        Self::from_rectangular(rows)
    }

    /// Non-empty and made only of ASCII digits.
    pub fn is_numeric(&self) -> bool {
        !self.is_empty() && self.chars().all(|c| c.is_ascii_digit())
    }

    /// Non-empty and made only of ASCII letters and digits.
    pub fn is_alphanumeric(&self) -> bool {
        !self.is_empty() && self.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Non-empty, not alphanumeric, and every character printable ASCII.
    pub fn has_symbols(&self) -> bool {
        !self.is_empty()
            && !self.is_alphanumeric()
            && self.chars().all(|c| c.is_ascii_graphic())
    }

    /// Row-major concatenation of every cell.
    pub fn to_flat_string(&self) -> String {
        self.chars().collect()
    }

    /// Column-major concatenation of every cell.
    pub fn to_vertical_string(&self) -> String {
        self.transpose().to_flat_string()
    }

    /// One line per row with no separators.
    pub fn to_concise_string(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One line per row, cells separated by a space.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut preview: String = self.chars().take(DEBUG_PREVIEW).collect();
        if self.len() > DEBUG_PREVIEW {
            preview.push_str("....");
        }
        write!(
            f,
            "Grid[rows={},cols={},length={}]{{{:?}}}",
            self.row_size(),
            self.col_size(),
            self.len(),
            preview
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid1() -> Grid {
        Grid::from_strs(&["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"]).unwrap()
    }

    fn grid2() -> Grid {
        Grid::from_strs(&["AFKPU", "BGLQV", "CHMRW", "DINSX", "EJOTY"]).unwrap()
    }

    #[test]
    fn test_construction_requires_rectangle() {
        assert!(matches!(
            Grid::from_strs(&["ABC", "DE"]),
            Err(Error::InvalidGrid)
        ));
        assert_eq!(grid1().size(), (5, 5));
        assert_eq!(grid1().len(), 25);
    }

    #[test]
    fn test_empty_rows_collapse_to_empty_grid() {
        let grid = Grid::new(vec![vec![], vec![]]).unwrap();
        assert_eq!(grid.size(), (0, 0));
        assert_eq!(grid, Grid::empty());
    }

    #[test]
    fn test_from_flat_chunks_rows() {
        let grid = Grid::from_flat("ABCDEF", 3).unwrap();
        assert_eq!(grid, Grid::from_strs(&["ABC", "DEF"]).unwrap());
        assert!(matches!(Grid::from_flat("ABCDE", 3), Err(Error::InvalidGrid)));
        assert!(matches!(Grid::from_flat("ABC", 0), Err(Error::InvalidGrid)));
        assert!(Grid::from_flat("", 3).unwrap().is_empty());
    }

    #[test]
    fn test_rows_at_single_indices() {
        let grid = grid1();
        assert_eq!(grid.rows_at([0]).size(), (1, 5));
        assert_eq!(grid.rows_at([0]).to_flat_string(), "ABCDE");
        assert_eq!(grid.rows_at([2]).to_flat_string(), "KLMNO");
        assert_eq!(grid.rows_at([-2]).to_flat_string(), "PQRST");
    }

    #[test]
    fn test_rows_wrap_around() {
        let grid = grid1();
        assert_eq!(grid.rows_at([5]).to_flat_string(), "ABCDE");
        assert_eq!(grid.rows_at([-1]).to_flat_string(), "UVWXY");
        assert_eq!(grid.rows_at([-8]).to_flat_string(), "KLMNO");
        assert_eq!(grid.rows_at([100_001]).to_flat_string(), "FGHIJ");
        assert_eq!(grid.rows_at([-100_001]).to_flat_string(), "UVWXY");
        for i in [-1_000_000_007i64, -26, -5, 0, 7, 123_456_789] {
            assert_eq!(grid.rows_at([i]), grid.rows_at([i.rem_euclid(5)]));
        }
    }

    #[test]
    fn test_rows_at_multiple_indices() {
        let grid = grid1();
        assert_eq!(grid.rows_at([0, -1]).to_flat_string(), "ABCDEUVWXY");
        assert_eq!(grid.rows_at([2, -3]).to_flat_string(), "KLMNOKLMNO");
        assert_eq!(grid.rows_at([-4, 4]).to_flat_string(), "FGHIJUVWXY");
        assert_eq!(grid.rows_at([1, 3, 5]).to_flat_string(), "FGHIJPQRSTABCDE");
    }

    #[test]
    fn test_rows_at_ranges_and_lists() {
        let grid = grid1();
        assert_eq!(grid.rows_at([4..7]).to_flat_string(), "UVWXYABCDEFGHIJ");
        assert_eq!(grid.rows_at([-11..-8]).to_flat_string(), "UVWXYABCDEFGHIJ");
        assert_eq!(
            grid.rows_at([vec![-11, -8, -9]]).to_flat_string(),
            "UVWXYKLMNOFGHIJ"
        );
    }

    #[test]
    fn test_rows_at_mixed_selectors() {
        let grid = grid1();
        let subgrid = grid.rows_at(vec![
            Selector::from(0..5),
            Selector::from(-5..0),
            Selector::from(vec![1, 2, 3]),
            Selector::from(vec![-1, -10, -14, 12]),
            Selector::from(3..6),
            Selector::from(-24..-20),
        ]);
        assert_eq!(subgrid.to_flat_string(), grid.to_flat_string().repeat(5));
    }

    #[test]
    fn test_cols_at() {
        let grid = grid2();
        assert_eq!(grid.cols_at([0]).size(), (5, 1));
        assert_eq!(grid.cols_at([-2]).to_flat_string(), "PQRST");
        assert_eq!(grid.cols_at([5]).to_flat_string(), "ABCDE");
        assert_eq!(grid.cols_at([0, -1]).to_flat_string(), "AUBVCWDXEY");
        assert_eq!(grid.cols_at([0, -1]).to_vertical_string(), "ABCDEUVWXY");
        assert_eq!(grid.cols_at([4..7]).to_vertical_string(), "UVWXYABCDEFGHIJ");
        assert_eq!(
            grid.cols_at([vec![-11, -8, -9]]).to_vertical_string(),
            "UVWXYKLMNOFGHIJ"
        );
    }

    #[test]
    fn test_at_combines_rows_and_cols() {
        let grid = grid1();
        let rows = [Selector::from(1), Selector::from(2)];
        let cols = [Selector::from(3), Selector::from(4)];
        assert_eq!(grid.at(&rows, &cols).to_flat_string(), "IJNO");
        assert_eq!(grid.at(&rows, &[]).to_flat_string(), "FGHIJKLMNO");
        assert_eq!(
            grid.at(&[], &[Selector::from(1), Selector::from(-3)])
                .to_flat_string(),
            "BCGHLMQRVW"
        );
        assert_eq!(grid.at(&[], &[]), grid);
    }

    #[test]
    fn test_slice() {
        let grid = grid1();
        assert_eq!(grid.slice((0, 0), (5, 5)), grid);
        assert_eq!(grid.slice((-130, -143), (-123, -128)).size(), (7, 15));
        assert_eq!(grid.slice((15, 15), (20, 20)).size(), (5, 5));
        assert_eq!(grid.slice((1, 1), (3, 3)).to_flat_string(), "GHLM");
    }

    #[test]
    fn test_slice_with_empty_range_is_empty() {
        let grid = grid1();
        assert_eq!(grid.slice((-123, -128), (-130, -143)).size(), (0, 0));
        assert_eq!(grid.slice((0, 0), (3, 0)).size(), (0, 0));
        assert_eq!(grid.slice((2, 0), (2, 4)).size(), (0, 0));
    }

    #[test]
    fn test_transpose_is_involutive() {
        assert_eq!(grid1().transpose(), grid2());
        assert_eq!(grid1().transpose().transpose(), grid1());
        let wide = Grid::from_strs(&["ABC", "DEF"]).unwrap();
        assert_eq!(wide.transpose().size(), (3, 2));
        assert_eq!(wide.transpose().transpose(), wide);
        assert_eq!(Grid::empty().transpose(), Grid::empty());
    }

    #[test]
    fn test_rotate_matches_row_and_col_ranges() {
        let grid = grid1();
        for k in [-12i64, -1, 0, 1, 3, 5, 17] {
            assert_eq!(grid.rotate(k, 0), grid.rows_at([k..k + 5]));
            assert_eq!(grid.rotate(0, k), grid.cols_at([k..k + 5]));
        }
        assert_eq!(grid.rotate(1, 2).rows_at([0]).to_flat_string(), "HIJFG");
        assert_eq!(grid.rotate(-1, -1).rows_at([0]).to_flat_string(), "YUVWX");
    }

    #[test]
    fn test_rotate_by_extreme_offsets() {
        let grid = grid1();
        for k in [i64::MAX - 1, i64::MAX, i64::MIN, i64::MIN + 1] {
            let shift = k.rem_euclid(5);
            assert_eq!(grid.rotate(k, 0), grid.rows_at([shift..shift + 5]));
            assert_eq!(grid.rotate(0, k), grid.cols_at([shift..shift + 5]));
            assert_eq!(grid.rotate(k, k), grid.rotate(shift, shift));
        }
        assert!(Grid::empty().rotate(i64::MAX, i64::MIN).is_empty());
    }

    #[test]
    fn test_classification() {
        let digits = Grid::from_strs(&["0123", "4567"]).unwrap();
        assert!(digits.is_numeric());
        assert!(digits.is_alphanumeric());
        assert!(!digits.has_symbols());

        assert!(!grid1().is_numeric());
        assert!(grid1().is_alphanumeric());
        assert!(!grid1().has_symbols());

        let symbols = Grid::from_strs(&["a#", "1]"]).unwrap();
        assert!(!symbols.is_alphanumeric());
        assert!(symbols.has_symbols());

        let spaced = Grid::from_strs(&["a ", "1]"]).unwrap();
        assert!(!spaced.has_symbols());

        assert!(!Grid::empty().is_numeric());
        assert!(!Grid::empty().has_symbols());
    }

    #[test]
    fn test_operations_on_empty_grid() {
        let empty = Grid::empty();
        assert!(empty.rows_at([3]).is_empty());
        assert!(empty.cols_at([-1]).is_empty());
        assert!(empty.rotate(2, 2).is_empty());
        assert!(empty.slice((0, 0), (4, 4)).is_empty());
    }

    #[test]
    fn test_text_forms() {
        let grid = Grid::from_strs(&["AB", "CD"]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC D");
        assert_eq!(grid.to_concise_string(), "AB\nCD");
        assert_eq!(grid.to_vertical_string(), "ACBD");
        assert_eq!(format!("{:?}", grid), "Grid[rows=2,cols=2,length=4]{\"ABCD\"}");
    }
}
