//! Line segmentation
//!
//! A line is a horizontal band of the image. Its ink components are found
//! in reading order, and consecutive components whose middle columns lie
//! within [`LineSegOptions::merge_tolerance`] of each other are merged into
//! one glyph (the dot and stem of `i`, the two bars of `=`).

use crate::error::{RecogError, RecogResult};
use crate::features::extract_features;
use crate::symbol::GlyphFeatures;
use glyphscan_core::{Box, Image, PixelClassifier};
use glyphscan_region::find_components;
use log::debug;

/// Default merge tolerance in pixels
pub const DEFAULT_MERGE_TOLERANCE: u32 = 3;

/// Default minimum word gap relative to the line height
pub const DEFAULT_SPACE_RATIO: f64 = 0.28;

/// Options for line segmentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegOptions {
    /// Maximum distance between middle columns of merged components
    /// (default: 3)
    pub merge_tolerance: u32,
    /// A gap wider than this fraction of the line height is a word break
    /// (default: 0.28)
    pub space_ratio: f64,
    /// Whether word breaks produce spaces in the text (default: true)
    pub insert_spaces: bool,
}

impl Default for LineSegOptions {
    fn default() -> Self {
        Self {
            merge_tolerance: DEFAULT_MERGE_TOLERANCE,
            space_ratio: DEFAULT_SPACE_RATIO,
            insert_spaces: true,
        }
    }
}

impl LineSegOptions {
    /// Set the merge tolerance
    pub fn with_merge_tolerance(mut self, tolerance: u32) -> Self {
        self.merge_tolerance = tolerance;
        self
    }

    /// Set the space ratio
    pub fn with_space_ratio(mut self, ratio: f64) -> Self {
        self.space_ratio = ratio;
        self
    }

    /// Enable or disable space insertion
    pub fn with_insert_spaces(mut self, insert: bool) -> Self {
        self.insert_spaces = insert;
        self
    }

    /// Check that the options are usable
    pub fn validate(&self) -> RecogResult<()> {
        if !self.space_ratio.is_finite() || self.space_ratio < 0.0 {
            return Err(RecogError::InvalidParameter(format!(
                "space ratio must be finite and non-negative, got {}",
                self.space_ratio
            )));
        }
        Ok(())
    }
}

/// Find the glyph boxes of the line in `band`, left to right
///
/// Each box tightly encloses the ink of its glyph. Merging looks only at
/// middle columns, so narrow neighbours whose middles lie within the
/// merge tolerance become one glyph: two `i` one column apart read as a
/// single box. Lower the tolerance for tightly set narrow type.
pub fn segment_line(
    image: &Image,
    classifier: &PixelClassifier,
    band: &Box,
    options: &LineSegOptions,
) -> RecogResult<Vec<Box>> {
    let components = find_components(image, classifier, band)?;

    let mut glyphs = Vec::new();
    let mut current: Option<Box> = None;
    for comp in components {
        match current.as_mut() {
            Some(glyph) if glyph.has_similar_x_midpoint(&comp.bounds, options.merge_tolerance) => {
                debug!("merging {} into glyph {}", comp.bounds, glyph);
                glyph.extend_to_include_box(&comp.bounds);
            }
            Some(glyph) => {
                glyphs.push(*glyph);
                *glyph = comp.bounds;
            }
            None => current = Some(comp.bounds),
        }
    }
    glyphs.extend(current);

    debug!("line {}: {} glyphs", band, glyphs.len());
    Ok(glyphs)
}

/// Which glyphs are preceded by a word break
///
/// Entry `i` is `true` when the blank columns between the rightmost ink
/// before glyph `i` and glyph `i` exceed `space_ratio` times the height
/// of the line's ink. The
/// first entry is always `false`. All entries are `false` when
/// [`LineSegOptions::insert_spaces`] is off.
pub fn word_breaks(glyphs: &[Box], options: &LineSegOptions) -> Vec<bool> {
    let mut breaks = vec![false; glyphs.len()];
    let Some(line) = glyphs.iter().copied().reduce(|a, b| a.union(&b)) else {
        return breaks;
    };
    if !options.insert_spaces {
        return breaks;
    }

    let min_gap = options.space_ratio * line.height() as f64;
    let mut right = glyphs[0].high().x;
    for (i, glyph) in glyphs.iter().enumerate().skip(1) {
        let gap = glyph.low().x.saturating_sub(right + 1);
        if gap as f64 > min_gap {
            debug!("word break before glyph {} (gap {} > {:.2})", i, gap, min_gap);
            breaks[i] = true;
        }
        right = right.max(glyph.high().x);
    }
    breaks
}

/// Feature vectors of the glyphs in `band`, left to right
pub fn line_features(
    image: &Image,
    classifier: &PixelClassifier,
    band: &Box,
    options: &LineSegOptions,
) -> RecogResult<Vec<GlyphFeatures>> {
    segment_line(image, classifier, band, options)?
        .iter()
        .map(|glyph| extract_features(image, classifier, glyph))
        .collect()
}
