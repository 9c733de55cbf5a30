//! Building a font model from sample images
//!
//! Each sample image holds one line of text: the alphabet, or any prefix
//! of it, in order. Glyphs are paired with alphabet characters by
//! position, and each character's profile is the mean of its samples.

use crate::error::{RecogError, RecogResult};
use crate::features::extract_features;
use crate::font::FontModel;
use crate::lineseg::{LineSegOptions, segment_line};
use crate::symbol::GlyphFeatures;
use glyphscan_core::{Image, PixelClassifier};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Characters expected in training images, in order
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,?!/@_";

/// Accumulates glyph samples per label and averages them into a
/// [`FontModel`]
#[derive(Debug, Clone)]
pub struct FontBuilder {
    alphabet: Vec<char>,
    sums: BTreeMap<char, (GlyphFeatures, u32)>,
}

impl Default for FontBuilder {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            sums: BTreeMap::new(),
        }
    }
}

impl FontBuilder {
    /// Create a builder for the default alphabet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a custom alphabet
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if the alphabet is empty,
    /// repeats a character, or contains `#` or whitespace.
    pub fn with_alphabet(alphabet: &str) -> RecogResult<Self> {
        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return Err(RecogError::InvalidParameter("empty alphabet".to_string()));
        }
        for (i, &c) in chars.iter().enumerate() {
            if c == '#' || c.is_whitespace() {
                return Err(RecogError::InvalidParameter(format!(
                    "alphabet character {:?} cannot be a font label",
                    c
                )));
            }
            if chars[..i].contains(&c) {
                return Err(RecogError::InvalidParameter(format!(
                    "alphabet repeats {:?}",
                    c
                )));
            }
        }
        Ok(Self {
            alphabet: chars,
            sums: BTreeMap::new(),
        })
    }

    /// The alphabet samples are paired with
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Add one sample of `label`
    pub fn add_sample(&mut self, label: char, features: GlyphFeatures) {
        let entry = self
            .sums
            .entry(label)
            .or_insert((GlyphFeatures::default(), 0));
        entry.0 += features;
        entry.1 += 1;
    }

    /// Number of samples collected for `label`
    pub fn sample_count(&self, label: char) -> u32 {
        self.sums.get(&label).map_or(0, |(_, n)| *n)
    }

    /// Add every glyph of a one-line sample image
    ///
    /// Returns the number of glyphs paired with a label. Glyphs beyond the
    /// end of the alphabet are ignored.
    pub fn add_image(
        &mut self,
        image: &Image,
        classifier: &PixelClassifier,
        options: &LineSegOptions,
    ) -> RecogResult<usize> {
        let glyphs = segment_line(image, classifier, &image.bounds(), options)?;
        if glyphs.len() > self.alphabet.len() {
            warn!(
                "sample has {} glyphs but the alphabet has {}; ignoring the rest",
                glyphs.len(),
                self.alphabet.len()
            );
        } else if glyphs.len() < self.alphabet.len() {
            warn!(
                "sample covers the first {} of {} alphabet characters",
                glyphs.len(),
                self.alphabet.len()
            );
        }

        let paired = glyphs.len().min(self.alphabet.len());
        for (i, glyph) in glyphs.iter().take(paired).enumerate() {
            let features = extract_features(image, classifier, glyph)?;
            let label = self.alphabet[i];
            debug!("sample {:?}: {} at {}", label, features.holes, glyph);
            self.add_sample(label, features);
        }
        Ok(paired)
    }

    /// Average the collected samples into a font
    ///
    /// Each label is averaged over its own sample count.
    pub fn build(&self) -> FontModel {
        self.sums
            .iter()
            .filter_map(|(&label, &(sum, n))| sum.mean(n).map(|mean| (label, mean)))
            .collect()
    }
}
