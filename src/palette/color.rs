//! RGB colors, HSL/HSV conversion and WCAG contrast.
//!
//! Conversions follow <https://en.wikipedia.org/wiki/HSL_and_HSV>; luminance
//! and contrast follow <https://www.w3.org/TR/WCAG20/#relativeluminancedef>.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB true color, each component 0 to 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Build from floating point components, rounding and clamping each.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Rgb(channel(r), channel(g), channel(b))
    }

    pub fn components(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }

    /// Relative luminance, 0.0 (black) to 1.0 (white).
    pub fn luminance(&self) -> f64 {
        let [r, g, b] = self.components().map(|c| {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        });
        r * 0.2126 + g * 0.7152 + b * 0.0722
    }

    /// Black or white, whichever contrasts more with `self`. Ties go to black.
    pub fn readable_text_color(&self) -> Rgb {
        let lc = self.luminance();
        let ld = Rgb::BLACK.luminance();
        let ll = Rgb::WHITE.luminance();
        if (lc + 0.05) / (ld + 0.05) >= (ll + 0.05) / (lc + 0.05) {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

/// `r,g,b`, as used in CSS `rgb()` and ANSI escapes (with `;`).
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Hue in degrees, `0 <= h < 360`; chroma, secondary and match components.
fn hue_to_rgb(h: f64, c: f64, x: f64, m: f64) -> Rgb {
    let (r, g, b) = match h.rem_euclid(360.0) {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb::from_f64((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

/// Hue in degrees, saturation and value in `[0, 1]`.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    hue_to_rgb(h, c, x, v - c)
}

/// Hue in degrees, saturation and lightness in `[0, 1]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    hue_to_rgb(h, c, x, l - c / 2.0)
}
