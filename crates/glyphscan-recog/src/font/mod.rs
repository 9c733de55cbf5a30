//! Font model and nearest-profile classification
//!
//! A [`FontModel`] maps character labels to reference [`GlyphFeatures`].
//! Classification is a linear scan for the profile with the smallest
//! weighted distance to the candidate.

mod serial;

pub use serial::{DEFAULT_FONT_DIR, FONT_EXTENSION, font_path};

use crate::error::{RecogError, RecogResult};
use crate::symbol::GlyphFeatures;
use log::debug;
use std::collections::BTreeMap;

/// Weights of the distance between two feature vectors
///
/// The distance is
/// `holes * |Δholes| + proportion * |Δproportion| + density * Σ|Δdensity|`.
/// A hole difference must dominate the continuous features:
/// [`MatchWeights::validate`] requires `holes` to exceed five times each of
/// the other weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    /// Weight per hole of difference
    pub holes: f64,
    /// Weight per unit of proportion difference
    pub proportion: f64,
    /// Weight per unit of difference in each density field
    pub density: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            holes: 1000.0,
            proportion: 100.0,
            density: 100.0,
        }
    }
}

impl MatchWeights {
    /// Set the hole weight
    pub fn with_holes(mut self, w: f64) -> Self {
        self.holes = w;
        self
    }

    /// Set the proportion weight
    pub fn with_proportion(mut self, w: f64) -> Self {
        self.proportion = w;
        self
    }

    /// Set the density weight
    pub fn with_density(mut self, w: f64) -> Self {
        self.density = w;
        self
    }

    /// Check that the weights are usable
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if a weight is negative or
    /// not finite, or if `holes` does not exceed five times the proportion
    /// or density weight.
    pub fn validate(&self) -> RecogResult<()> {
        for (name, w) in [
            ("holes", self.holes),
            ("proportion", self.proportion),
            ("density", self.density),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(RecogError::InvalidParameter(format!(
                    "{} weight must be finite and non-negative, got {}",
                    name, w
                )));
            }
        }
        if self.holes <= self.proportion * 5.0 || self.holes <= self.density * 5.0 {
            return Err(RecogError::InvalidParameter(format!(
                "holes weight {} must exceed 5x proportion ({}) and density ({}) weights",
                self.holes, self.proportion, self.density
            )));
        }
        Ok(())
    }

    /// Weighted distance between a candidate and a reference; lower is closer
    pub fn distance(&self, candidate: &GlyphFeatures, reference: &GlyphFeatures) -> f64 {
        self.holes * candidate.holes.abs_diff(reference.holes) as f64
            + self.proportion * (candidate.proportion - reference.proportion).abs()
            + self.density * candidate.density.abs_diff_sum(&reference.density)
    }
}

/// Result of classifying one glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMatch {
    /// Label of the closest profile
    pub label: char,
    /// Distance to that profile
    pub distance: f64,
}

/// Labelled reference profiles
///
/// Profiles are kept sorted by label, so iteration and tie-breaking are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontModel {
    profiles: BTreeMap<char, GlyphFeatures>,
}

impl FontModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the profile for `label`
    pub fn insert(&mut self, label: char, features: GlyphFeatures) -> Option<GlyphFeatures> {
        self.profiles.insert(label, features)
    }

    /// Profile for `label`
    pub fn get(&self, label: char) -> Option<&GlyphFeatures> {
        self.profiles.get(&label)
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the model has no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Labels in sorted order
    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.profiles.keys().copied()
    }

    /// Profiles in label order
    pub fn iter(&self) -> impl Iterator<Item = (char, &GlyphFeatures)> {
        self.profiles.iter().map(|(&c, f)| (c, f))
    }

    /// Find the profile closest to `candidate`
    ///
    /// Ties go to the smallest label.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::NoReferenceProfile`] if the model is empty.
    pub fn best_match(
        &self,
        candidate: &GlyphFeatures,
        weights: &MatchWeights,
    ) -> RecogResult<GlyphMatch> {
        let mut best: Option<GlyphMatch> = None;
        for (label, reference) in self.iter() {
            let distance = weights.distance(candidate, reference);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(GlyphMatch { label, distance });
            }
        }
        let best = best.ok_or(RecogError::NoReferenceProfile)?;
        debug!("matched '{}' at distance {:.3}", best.label, best.distance);
        Ok(best)
    }
}

impl FromIterator<(char, GlyphFeatures)> for FontModel {
    fn from_iter<I: IntoIterator<Item = (char, GlyphFeatures)>>(iter: I) -> Self {
        Self {
            profiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Density;

    fn profile(holes: u32, proportion: f64, d: f64) -> GlyphFeatures {
        GlyphFeatures {
            holes,
            proportion,
            density: Density::from_array([d; Density::LEN]),
        }
    }

    #[test]
    fn test_default_weights_valid() {
        assert!(MatchWeights::default().validate().is_ok());
        assert!(MatchWeights::default().with_holes(500.0).validate().is_err());
        assert!(MatchWeights::default().with_density(-1.0).validate().is_err());
        assert!(
            MatchWeights::default()
                .with_proportion(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_distance() {
        let w = MatchWeights::default();
        let a = profile(1, 2.0, 0.5);
        assert_eq!(w.distance(&a, &a), 0.0);
        let b = profile(0, 1.5, 0.25);
        // 1000 + 100 * 0.5 + 100 * 8 * 0.25
        assert!((w.distance(&a, &b) - 1250.0).abs() < 1e-9);
        assert_eq!(w.distance(&a, &b), w.distance(&b, &a));
    }

    #[test]
    fn test_holes_dominate() {
        let w = MatchWeights::default();
        let candidate = profile(1, 1.0, 0.5);
        let one_hole_off = profile(0, 1.0, 0.5);
        let very_different_shape = profile(1, 6.0, 0.5);
        assert!(w.distance(&candidate, &one_hole_off) > w.distance(&candidate, &very_different_shape));

        let font: FontModel = [('a', one_hole_off), ('b', very_different_shape)]
            .into_iter()
            .collect();
        assert_eq!(font.best_match(&candidate, &w).unwrap().label, 'b');
    }

    #[test]
    fn test_exact_match() {
        let font: FontModel = [
            ('I', profile(0, 6.0, 1.0)),
            ('O', profile(1, 1.0, 0.4)),
            ('B', profile(2, 1.4, 0.6)),
        ]
        .into_iter()
        .collect();
        let m = font
            .best_match(&profile(1, 1.0, 0.4), &MatchWeights::default())
            .unwrap();
        assert_eq!(m.label, 'O');
        assert_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_tie_goes_to_first_label() {
        let p = profile(0, 1.0, 0.5);
        let font: FontModel = [('z', p), ('a', p), ('m', p)].into_iter().collect();
        let m = font.best_match(&p, &MatchWeights::default()).unwrap();
        assert_eq!(m.label, 'a');
        assert_eq!(font.labels().collect::<String>(), "amz");
    }

    #[test]
    fn test_empty_model() {
        let font = FontModel::new();
        assert!(matches!(
            font.best_match(&GlyphFeatures::default(), &MatchWeights::default()),
            Err(RecogError::NoReferenceProfile)
        ));
    }
}
