//! Row color palettes.
//!
//! A [`Palette`] holds one background color per displayed row, each paired
//! with a black or white text color that contrasts with it. Changing the kind
//! or the options regenerates every color.

mod color;

pub use color::{hsl_to_rgb, hsv_to_rgb, Rgb};

use crate::config::palette_params;
use crate::error::{Error, Result};
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// 1/φ, the hue step of `martin_ankerl`.
const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

/// Available color generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    /// Fixed random hue, saturation ramping up to `smax`, lightness `1 - s`.
    #[default]
    Passcard,
    /// Golden-ratio hue steps at fixed saturation and value.
    MartinAnkerl,
    /// Three phase-shifted sine waves.
    Krazydad,
    /// Linear blend between two `martin_ankerl` colors.
    Gradient,
}

impl PaletteKind {
    /// Every generator, in listing order.
    pub fn all() -> &'static [PaletteKind] {
        &[
            PaletteKind::Passcard,
            PaletteKind::MartinAnkerl,
            PaletteKind::Krazydad,
            PaletteKind::Gradient,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaletteKind::Passcard => "passcard",
            PaletteKind::MartinAnkerl => "martin_ankerl",
            PaletteKind::Krazydad => "krazydad",
            PaletteKind::Gradient => "gradient",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a generator name. A blank name means the default generator.
impl FromStr for PaletteKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Ok(PaletteKind::default());
        }
        PaletteKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownPaletteType(name.to_string()))
    }
}

/// Knobs for the generators. Each generator reads only its own.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteOptions {
    /// Number of colors. Zero or negative gives none.
    pub n: i64,
    /// `passcard`: top of the saturation ramp.
    pub smax: f64,
    /// `martin_ankerl`: saturation.
    pub saturation: f64,
    /// `martin_ankerl`, `gradient`: value.
    pub value: f64,
    /// `krazydad`: sine amplitude.
    pub width: f64,
    /// `krazydad`: sine center.
    pub center: f64,
    /// `krazydad`: phase; random when unset.
    pub phase: Option<f64>,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            n: 0,
            smax: palette_params::SMAX,
            saturation: palette_params::SATURATION,
            value: palette_params::VALUE,
            width: palette_params::WIDTH,
            center: palette_params::CENTER,
            phase: None,
        }
    }
}

impl PaletteOptions {
    /// Default options for `n` colors.
    pub fn with_count(n: i64) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }
}

/// One row's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub text_color: Rgb,
}

impl From<Rgb> for PaletteEntry {
    fn from(color: Rgb) -> Self {
        Self {
            color,
            text_color: color.readable_text_color(),
        }
    }
}

/// An ordered set of row colors.
#[derive(Debug, Clone)]
pub struct Palette {
    kind: PaletteKind,
    options: PaletteOptions,
    colors: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(kind: PaletteKind, options: PaletteOptions) -> Self {
        Self::with_rng(kind, options, &mut rand::thread_rng())
    }

    /// Like [`Palette::new`], drawing random hues and phases from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        kind: PaletteKind,
        options: PaletteOptions,
        rng: &mut R,
    ) -> Self {
        let colors = generate(kind, &options, rng);
        Self {
            kind,
            options,
            colors,
        }
    }

    /// Build from a generator name.
    pub fn from_name(name: &str, options: PaletteOptions) -> Result<Self> {
        Ok(Self::new(name.parse()?, options))
    }

    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    pub fn options(&self) -> &PaletteOptions {
        &self.options
    }

    pub fn colors(&self) -> &[PaletteEntry] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.colors.get(index)
    }

    pub fn first(&self) -> Option<&PaletteEntry> {
        self.colors.first()
    }

    pub fn last(&self) -> Option<&PaletteEntry> {
        self.colors.last()
    }

    /// Switch generator and regenerate.
    pub fn set_kind(&mut self, kind: PaletteKind) {
        self.kind = kind;
        self.regenerate();
    }

    /// Replace the options and regenerate.
    pub fn set_options(&mut self, options: PaletteOptions) {
        self.options = options;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.colors = generate(self.kind, &self.options, &mut rand::thread_rng());
    }
}

fn generate<R: Rng + ?Sized>(
    kind: PaletteKind,
    options: &PaletteOptions,
    rng: &mut R,
) -> Vec<PaletteEntry> {
    let n = match usize::try_from(options.n) {
        Ok(n) if n > 0 => n,
        _ => return Vec::new(),
    };
    let colors = match kind {
        PaletteKind::Passcard => passcard(n, options, rng),
        PaletteKind::MartinAnkerl => martin_ankerl(n, options.saturation, options.value, rng),
        PaletteKind::Krazydad => krazydad(n, options, rng),
        PaletteKind::Gradient => gradient(n, options, rng),
    };
    colors.into_iter().map(PaletteEntry::from).collect()
}

fn passcard<R: Rng + ?Sized>(n: usize, options: &PaletteOptions, rng: &mut R) -> Vec<Rgb> {
    let hue = (360.0 * rng.gen::<f64>() * 100.0).round() / 100.0;
    (1..=n)
        .map(|i| {
            let s = i as f64 / n as f64 * options.smax;
            hsl_to_rgb(hue, s, 1.0 - s)
        })
        .collect()
}

fn martin_ankerl<R: Rng + ?Sized>(n: usize, saturation: f64, value: f64, rng: &mut R) -> Vec<Rgb> {
    let mut hue: f64 = rng.gen();
    (0..n)
        .map(|_| {
            hue = (hue + GOLDEN_RATIO_CONJUGATE) % 1.0;
            hsv_to_rgb(hue * 360.0, saturation, value)
        })
        .collect()
}

fn krazydad<R: Rng + ?Sized>(n: usize, options: &PaletteOptions, rng: &mut R) -> Vec<Rgb> {
    let phase = options
        .phase
        .unwrap_or_else(|| rng.gen::<f64>() * PI * 2.0);
    let freq = PI / n as f64 * 2.0;
    let wave = |i: usize, shift: f64| {
        (freq * i as f64 + shift + phase).sin() * options.width + options.center
    };

    (0..n)
        .map(|i| Rgb::from_f64(wave(i, 0.0), wave(i, 2.0), wave(i, 4.0)))
        .collect()
}

fn gradient<R: Rng + ?Sized>(n: usize, options: &PaletteOptions, rng: &mut R) -> Vec<Rgb> {
    let saturation: f64 = rng.gen();
    let ends = martin_ankerl(2, saturation, options.value, rng);
    let (from, to) = (ends[0].components(), ends[1].components());

    (0..n)
        .map(|i| {
            let m = i as f64 / n as f64;
            let mix = |j: usize| f64::from(from[j]) * m + f64::from(to[j]) * (1.0 - m);
            Rgb::from_f64(mix(0), mix(1), mix(2))
        })
        .collect()
}
