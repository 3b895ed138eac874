//! Row and column selectors over a periodic index space.

use std::ops::Range;

/// One piece of a row or column selection.
///
/// Indices are unbounded: they wrap around the grid with floored modulo,
/// so `-1` is the last row and `row_size` is the first one again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A single index.
    Index(i64),
    /// A list of indices, taken in order.
    Indices(Vec<i64>),
    /// A half-open range of indices. Empty when `end <= start`.
    Range(Range<i64>),
}

impl Selector {
    /// Expand into the raw (unwrapped) indices this selector names.
    pub fn indices(&self) -> Vec<i64> {
        match self {
            Selector::Index(i) => vec![*i],
            Selector::Indices(list) => list.clone(),
            Selector::Range(range) => range.clone().collect(),
        }
    }
}

/// Resolve an unbounded index against a dimension of length `len`.
///
/// `len` must be non-zero.
pub(crate) fn wrap(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

/// Flatten a selection into raw indices, preserving order and repeats.
pub(crate) fn flatten<I>(selection: I) -> Vec<i64>
where
    I: IntoIterator,
    I::Item: Into<Selector>,
{
    selection
        .into_iter()
        .flat_map(|s| s.into().indices())
        .collect()
}

impl From<i64> for Selector {
    fn from(i: i64) -> Self {
        Selector::Index(i)
    }
}

impl From<i32> for Selector {
    fn from(i: i32) -> Self {
        Selector::Index(i64::from(i))
    }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Selector::Index(i as i64)
    }
}

impl From<Vec<i64>> for Selector {
    fn from(list: Vec<i64>) -> Self {
        Selector::Indices(list)
    }
}

impl From<Vec<i32>> for Selector {
    fn from(list: Vec<i32>) -> Self {
        Selector::Indices(list.into_iter().map(i64::from).collect())
    }
}

impl From<&[i64]> for Selector {
    fn from(list: &[i64]) -> Self {
        Selector::Indices(list.to_vec())
    }
}

impl From<Range<i64>> for Selector {
    fn from(range: Range<i64>) -> Self {
        Selector::Range(range)
    }
}

impl From<Range<i32>> for Selector {
    fn from(range: Range<i32>) -> Self {
        Selector::Range(i64::from(range.start)..i64::from(range.end))
    }
}

/// A (row, col) coordinate in the unbounded grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: i64,
    pub col: i64,
}

impl Coord {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<(i64, i64)> for Coord {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(i64::from(row), i64::from(col))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i64, col as i64)
    }
}
