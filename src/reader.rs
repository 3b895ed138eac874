//! Opening a sealed passcard and cutting views out of it.

use crate::config::{PasscardOptions, RANDOM_VIEW_SIZE};
use crate::crypto::decrypt_data;
use crate::error::Result;
use crate::generator::Passcard;
use crate::grid::{Coord, Grid};
use crate::keyfile;
use crate::palette::{Palette, PaletteKind, PaletteOptions};
use crate::render::{Renderer, View};
use rand::Rng;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Named sub-grids of the default 80x80 passcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewKind {
    /// 10x20, numbers only.
    Pincard,
    /// 10x20, numbers only (alt).
    PincardAlt,
    /// 26x26, alphanumeric only.
    Alphanum,
    /// 26x26, alphanumeric only (alt).
    AlphanumAlt,
    /// 20x20, alphanumeric and symbols.
    Square,
    /// 15x30, alphanumeric and symbols.
    CardLarge,
    /// 10x20, alphanumeric and symbols.
    #[default]
    Card,
    /// A random 20x30 window.
    Random,
    /// The whole grid.
    Full,
}

impl ViewKind {
    /// The rectangle this view covers, `None` for random and full views.
    pub fn coordinates(&self) -> Option<(Coord, Coord)> {
        let rect = |a: (i64, i64), b: (i64, i64)| Some((Coord::from(a), Coord::from(b)));
        match self {
            ViewKind::Pincard => rect((0, 0), (10, 20)),
            ViewKind::PincardAlt => rect((10, 0), (20, 20)),
            ViewKind::Alphanum => rect((40, 40), (66, 66)),
            ViewKind::AlphanumAlt => rect((54, 54), (80, 80)),
            ViewKind::Square => rect((20, 20), (40, 40)),
            ViewKind::CardLarge => rect((0, 20), (15, 50)),
            ViewKind::Card => rect((30, 20), (40, 40)),
            ViewKind::Random | ViewKind::Full => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Pincard => "pincard",
            ViewKind::PincardAlt => "pincard_alt",
            ViewKind::Alphanum => "alphanum",
            ViewKind::AlphanumAlt => "alphanum_alt",
            ViewKind::Square => "square",
            ViewKind::CardLarge => "card_large",
            ViewKind::Card => "card",
            ViewKind::Random => "random",
            ViewKind::Full => "full",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised names select the full grid.
impl FromStr for ViewKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "pincard" => ViewKind::Pincard,
            "pincard_alt" => ViewKind::PincardAlt,
            "alphanum" => ViewKind::Alphanum,
            "alphanum_alt" => ViewKind::AlphanumAlt,
            "square" => ViewKind::Square,
            "card_large" => ViewKind::CardLarge,
            "card" => ViewKind::Card,
            "random" => ViewKind::Random,
            _ => ViewKind::Full,
        })
    }
}

/// What a renderer should be handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub kind: ViewKind,
    /// Row colors; `None` renders without color.
    pub palette: Option<PaletteKind>,
    /// Row and column header labels.
    pub header: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            kind: ViewKind::default(),
            palette: Some(PaletteKind::default()),
            header: true,
        }
    }
}

/// A decrypted passcard.
#[derive(Debug, Clone)]
pub struct Reader {
    options: PasscardOptions,
    grid: Grid,
}

impl Reader {
    /// Decrypt an envelope under `secret`.
    pub fn new(secret: &str, envelope: &str) -> Result<Self> {
        let passcard: Passcard = decrypt_data(envelope, secret)?;
        Self::from_passcard(passcard)
    }

    /// Wrap already decrypted content.
    pub fn from_passcard(passcard: Passcard) -> Result<Self> {
        let grid = passcard.to_grid()?;
        Ok(Self {
            options: passcard.options,
            grid,
        })
    }

    /// Read and decrypt the key file at `path`.
    pub fn read_key_file(secret: &str, path: &Path) -> Result<Self> {
        Self::new(secret, &keyfile::read_key_file(path)?)
    }

    /// Options the passcard was generated with.
    pub fn options(&self) -> &PasscardOptions {
        &self.options
    }

    /// The full grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Options and grid, as stored in the envelope.
    pub fn to_passcard(&self) -> Passcard {
        Passcard {
            options: self.options.clone(),
            grid: self.grid.to_flat_string(),
        }
    }

    /// Sub-grid of the full grid, see [`Grid::slice`].
    pub fn slice(&self, top_left: impl Into<Coord>, bottom_right: impl Into<Coord>) -> Grid {
        self.grid.slice(top_left, bottom_right)
    }

    /// The top-left numeric block.
    pub fn numeric_grid(&self) -> Grid {
        self.grid.slice((0, 0), self.options.numeric)
    }

    /// The bottom-right alphanumeric block.
    pub fn alpha_grid(&self) -> Grid {
        let (rows, cols) = self.options.size;
        let (alpha_rows, alpha_cols) = self.options.alpha;
        self.grid
            .slice((rows - alpha_rows, cols - alpha_cols), self.options.size)
    }

    /// A `rows` x `cols` window at a random origin.
    pub fn random_grid(&self, rows: usize, cols: usize) -> Grid {
        self.random_grid_with_rng(rows, cols, &mut rand::thread_rng())
    }

    /// Like [`Reader::random_grid`], drawing the origin from `rng`.
    ///
    /// Origins are drawn from `[0, R-rows-1) x [0, C-cols-1)` only, so the
    /// last row and column are never a window's first.
    pub fn random_grid_with_rng<R: Rng + ?Sized>(
        &self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Grid {
        match rows.checked_mul(cols) {
            Some(0) => return Grid::empty(),
            Some(area) if area < self.grid.len() => {}
            _ => return self.grid.clone(),
        }

        let (rows, cols) = (to_i64(rows), to_i64(cols));
        let (grid_rows, grid_cols) = (to_i64(self.options.size.0), to_i64(self.options.size.1));
        let top = random_origin(grid_rows.saturating_sub(rows).saturating_sub(1), rng);
        let left = random_origin(grid_cols.saturating_sub(cols).saturating_sub(1), rng);
        self.grid.slice(
            (top, left),
            (top.saturating_add(rows), left.saturating_add(cols)),
        )
    }

    /// Resolve a named view.
    pub fn view(&self, kind: ViewKind) -> Grid {
        match kind.coordinates() {
            Some((top_left, bottom_right)) => self.grid.slice(top_left, bottom_right),
            None if kind == ViewKind::Random => {
                self.random_grid(RANDOM_VIEW_SIZE.0, RANDOM_VIEW_SIZE.1)
            }
            None => self.grid.clone(),
        }
    }

    /// Collect a view, its palette and header labels for a renderer.
    pub fn prepare_view(&self, options: &ViewOptions, headers: &str) -> View {
        let grid = self.view(options.kind);
        let palette = options.palette.map(|kind| {
            Palette::new(kind, PaletteOptions::with_count(grid.row_size() as i64))
        });
        let labels = |n: usize| -> Option<Vec<char>> {
            options
                .header
                .then(|| headers.chars().filter(|c| !c.is_whitespace()).take(n).collect())
        };
        let (row_headers, col_headers) = (labels(grid.row_size()), labels(grid.col_size()));

        View {
            grid,
            palette,
            row_headers,
            col_headers,
        }
    }

    /// Render a view with a caller-supplied renderer.
    pub fn render(&self, renderer: &dyn Renderer, options: &ViewOptions) -> String {
        renderer.render(&self.prepare_view(options, renderer.headers()))
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn random_origin<R: Rng + ?Sized>(bound: i64, rng: &mut R) -> i64 {
    if bound > 0 {
        rng.gen_range(0..bound)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::generator::Generator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SECRET: &str = "secret-word";

    fn reader() -> Reader {
        let envelope = Generator::new(SECRET, PasscardOptions::default())
            .unwrap()
            .run()
            .unwrap();
        Reader::new(SECRET, &envelope).unwrap()
    }

    fn letter_grid() -> Reader {
        let grid: String = (0..36u32)
            .map(|i| std::char::from_digit(i % 36, 36).unwrap_or('0'))
            .collect();
        Reader::from_passcard(Passcard {
            options: PasscardOptions {
                charset: "abc".to_string(),
                size: (6, 6),
                numeric: (2, 2),
                alpha: (3, 3),
            },
            grid,
        })
        .unwrap()
    }

    #[test]
    fn test_reader_exposes_options_and_grid() {
        let reader = reader();
        assert!(!reader.options().charset.is_empty());
        assert_eq!(reader.grid().size(), reader.options().size);
        assert_eq!(reader.grid().size(), (80, 80));
    }

    #[test]
    fn test_wrong_secret() {
        let envelope = Generator::new(SECRET, PasscardOptions::default())
            .unwrap()
            .run()
            .unwrap();
        assert!(matches!(
            Reader::new("not-it", &envelope),
            Err(Error::InvalidDecryptionKey)
        ));
    }

    #[test]
    fn test_numeric_and_alpha_grids() {
        let reader = reader();
        let numeric = reader.numeric_grid();
        assert_eq!(numeric.size(), reader.options().numeric);
        assert!(numeric.is_numeric());

        let alpha = reader.alpha_grid();
        assert_eq!(alpha.size(), reader.options().alpha);
        assert!(alpha.is_alphanumeric());
    }

    #[test]
    fn test_region_slices_use_stored_geometry() {
        let reader = letter_grid();
        assert_eq!(reader.numeric_grid().to_flat_string(), "0167");
        assert_eq!(reader.alpha_grid().to_flat_string(), "lmnrstxyz");
    }

    #[test]
    fn test_random_grid_sizes() {
        let reader = reader();
        assert_eq!(reader.random_grid(10, 10).size(), (10, 10));
        assert_eq!(reader.random_grid(5, 5).size(), (5, 5));
        assert_eq!(reader.random_grid(100, 100).size(), (80, 80));
        assert_eq!(reader.random_grid(0, 0).size(), (0, 0));
        assert_eq!(reader.random_grid(0, 1).size(), (0, 0));
        assert_eq!(reader.random_grid(1, 0).size(), (0, 0));
        assert_eq!(reader.random_grid(1, 1).size(), (1, 1));
    }

    #[test]
    fn test_random_grid_huge_requests() {
        let reader = reader();
        assert_eq!(reader.random_grid(usize::MAX, 2), *reader.grid());
        assert_eq!(reader.random_grid(2, usize::MAX), *reader.grid());
        assert_eq!(reader.random_grid(usize::MAX, usize::MAX), *reader.grid());
        assert!(reader.random_grid(usize::MAX, 0).is_empty());
        // Fewer cells than the grid but taller than it: rows wrap around.
        let tall = reader.random_grid(200, 1);
        assert_eq!(tall.size(), (200, 1));
        assert_eq!(tall.rows_at([0..80]), tall.rows_at([80..160]));
    }

    #[test]
    fn test_random_grid_is_a_window_of_the_grid() {
        let reader = letter_grid();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let window = reader.random_grid_with_rng(2, 3, &mut rng);
            assert_eq!(window.size(), (2, 3));
            let first = window.cells()[0][0];
            let (r, c) = reader
                .grid()
                .cells()
                .iter()
                .enumerate()
                .find_map(|(r, row)| row.iter().position(|&x| x == first).map(|c| (r, c)))
                .unwrap();
            // Origins stay inside [0, 6-2-1) x [0, 6-3-1).
            assert!(r < 3 && c < 2);
            assert_eq!(window, reader.grid().slice((r, c), (r + 2, c + 3)));
        }
    }

    #[test]
    fn test_named_views() {
        let reader = reader();
        assert_eq!(reader.view(ViewKind::Pincard).size(), (10, 20));
        assert!(reader.view(ViewKind::Pincard).is_numeric());
        assert!(reader.view(ViewKind::PincardAlt).is_numeric());
        assert_eq!(reader.view(ViewKind::Alphanum).size(), (26, 26));
        assert!(reader.view(ViewKind::Alphanum).is_alphanumeric());
        assert!(reader.view(ViewKind::AlphanumAlt).is_alphanumeric());
        assert_eq!(reader.view(ViewKind::Square).size(), (20, 20));
        assert_eq!(reader.view(ViewKind::CardLarge).size(), (15, 30));
        assert_eq!(reader.view(ViewKind::Card).size(), (10, 20));
        assert_eq!(reader.view(ViewKind::Random).size(), (20, 30));
        assert_eq!(reader.view(ViewKind::Full), *reader.grid());
    }

    #[test]
    fn test_view_names() {
        assert_eq!("card_large".parse::<ViewKind>().unwrap(), ViewKind::CardLarge);
        assert_eq!("whatever".parse::<ViewKind>().unwrap(), ViewKind::Full);
        assert_eq!(ViewKind::AlphanumAlt.to_string(), "alphanum_alt");
    }

    #[test]
    fn test_prepare_view() {
        let reader = reader();
        let view = reader.prepare_view(&ViewOptions::default(), crate::config::HEADERS);
        assert_eq!(view.grid.size(), (10, 20));
        assert_eq!(view.palette.as_ref().map(Palette::len), Some(10));
        assert_eq!(view.row_headers.as_ref().map(Vec::len), Some(10));
        assert_eq!(view.col_headers.as_deref().map(|h| h[19]), Some('T'));

        let plain = ViewOptions {
            palette: None,
            header: false,
            ..ViewOptions::default()
        };
        let view = reader.prepare_view(&plain, crate::config::HEADERS);
        assert!(view.palette.is_none());
        assert!(view.row_headers.is_none() && view.col_headers.is_none());
    }

    #[test]
    fn test_to_passcard_roundtrip() {
        let reader = letter_grid();
        let again = Reader::from_passcard(reader.to_passcard()).unwrap();
        assert_eq!(again.grid(), reader.grid());
        assert_eq!(again.options(), reader.options());
    }
}
