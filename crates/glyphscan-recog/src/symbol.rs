//! Glyph feature vectors
//!
//! A [`GlyphFeatures`] record describes one glyph by its topology (hole
//! count), its shape (height/width proportion) and how its ink is spread
//! ([`Density`]). Records support `+=` and [`GlyphFeatures::mean`] so that
//! training can average many samples of one character.

use std::ops::{AddAssign, DivAssign};

/// Foreground fractions over parts of a glyph box
///
/// Every field is a ratio in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Density {
    /// Whole box
    pub total: f64,
    /// Edge pixels of the box
    pub border: f64,
    /// Top-right quadrant
    pub q1: f64,
    /// Top-left quadrant
    pub q2: f64,
    /// Bottom-left quadrant
    pub q3: f64,
    /// Bottom-right quadrant
    pub q4: f64,
    /// Vertical midline
    pub mid1: f64,
    /// Horizontal midline
    pub mid2: f64,
}

impl Density {
    /// Number of fields
    pub const LEN: usize = 8;

    /// Fields in persistence order: total, border, q1..q4, mid1, mid2
    pub fn to_array(&self) -> [f64; Self::LEN] {
        [
            self.total,
            self.border,
            self.q1,
            self.q2,
            self.q3,
            self.q4,
            self.mid1,
            self.mid2,
        ]
    }

    /// Inverse of [`Density::to_array`]
    pub fn from_array(a: [f64; Self::LEN]) -> Self {
        let [total, border, q1, q2, q3, q4, mid1, mid2] = a;
        Self {
            total,
            border,
            q1,
            q2,
            q3,
            q4,
            mid1,
            mid2,
        }
    }

    /// Sum of absolute per-field differences
    pub fn abs_diff_sum(&self, other: &Density) -> f64 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

impl AddAssign for Density {
    fn add_assign(&mut self, rhs: Self) {
        let mut a = self.to_array();
        for (x, y) in a.iter_mut().zip(rhs.to_array()) {
            *x += y;
        }
        *self = Self::from_array(a);
    }
}

impl DivAssign<f64> for Density {
    fn div_assign(&mut self, rhs: f64) {
        *self = Self::from_array(self.to_array().map(|x| x / rhs));
    }
}

/// Feature vector of one glyph
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphFeatures {
    /// Enclosed background regions
    pub holes: u32,
    /// Height divided by width
    pub proportion: f64,
    /// Ink distribution
    pub density: Density,
}

impl AddAssign for GlyphFeatures {
    fn add_assign(&mut self, rhs: Self) {
        self.holes += rhs.holes;
        self.proportion += rhs.proportion;
        self.density += rhs.density;
    }
}

impl GlyphFeatures {
    /// Mean of `n` accumulated samples, or `None` when `n` is zero
    ///
    /// The hole count is rounded to the nearest integer.
    pub fn mean(self, n: u32) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let mut density = self.density;
        density /= n as f64;
        Some(Self {
            holes: (self.holes + n / 2) / n,
            proportion: self.proportion / n as f64,
            density,
        })
    }
}
