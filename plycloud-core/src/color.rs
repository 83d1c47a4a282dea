//! Per-vertex color and gamma conversion

use serde::{Deserialize, Serialize};

/// Display gamma assumed by PLY viewers
pub const DISPLAY_GAMMA: f64 = 2.2;

/// An 8-bit RGB color triple
///
/// Channel values are 0-255 and carry linear-light intensities as commonly
/// produced by graphics pipelines; [`gamma_encode`] converts a channel into
/// display space before it is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(C)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from individual channel values
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Get the channels as an array in `[r, g, b]` order
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb8 {
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
        }
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
        }
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        c.channels()
    }
}

/// Convert a linear-light channel value into display gamma space
///
/// Applies the power-law transform `(c/255)^(1/2.2) * 255`. The result stays
/// within `[0.0, 255.0]` for the full `u8` input domain and is monotonic
/// in `c`.
pub fn gamma_encode(c: u8) -> f64 {
    (f64::from(c) / 255.0).powf(1.0 / DISPLAY_GAMMA) * 255.0
}
