//! Text reading
//!
//! [`Reader`] ties the pipeline together: page bands, glyph boxes within a
//! band, features of each glyph, and the closest profile in a
//! [`FontModel`].

use crate::error::{RecogError, RecogResult};
use crate::features::extract_features;
use crate::font::{FontModel, GlyphMatch, MatchWeights};
use crate::lineseg::{LineSegOptions, segment_line, word_breaks};
use crate::pageseg::segment_page;
use glyphscan_core::{Box, Image, PixelClassifier};
use log::{debug, warn};

/// Options for reading text
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReadOptions {
    /// Ink/paper decision
    pub classifier: PixelClassifier,
    /// Distance weights for classification
    pub weights: MatchWeights,
    /// Line segmentation options
    pub line: LineSegOptions,
}

impl ReadOptions {
    /// Set the pixel classifier
    pub fn with_classifier(mut self, classifier: PixelClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the match weights
    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the line segmentation options
    pub fn with_line(mut self, line: LineSegOptions) -> Self {
        self.line = line;
        self
    }

    /// Check that every option is usable
    pub fn validate(&self) -> RecogResult<()> {
        self.weights.validate()?;
        self.line.validate()
    }
}

/// Reads text from images with one font
#[derive(Debug, Clone)]
pub struct Reader {
    font: FontModel,
    options: ReadOptions,
}

impl Reader {
    /// Create a reader
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if `options` do not
    /// validate.
    pub fn new(font: FontModel, options: ReadOptions) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self { font, options })
    }

    /// The font in use
    pub fn font(&self) -> &FontModel {
        &self.font
    }

    /// The options in use
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Classify the glyph inside `region`
    pub fn match_glyph(&self, image: &Image, region: &Box) -> RecogResult<GlyphMatch> {
        let features = extract_features(image, &self.options.classifier, region)?;
        self.font.best_match(&features, &self.options.weights)
    }

    /// Read the single character inside `region`
    pub fn read_glyph(&self, image: &Image, region: &Box) -> RecogResult<char> {
        Ok(self.match_glyph(image, region)?.label)
    }

    /// Read the line of text inside `band`
    ///
    /// Glyphs are read left to right with a space at each word break. A
    /// band without ink reads as an empty string.
    pub fn read_line(&self, image: &Image, band: &Box) -> RecogResult<String> {
        let glyphs = segment_line(image, &self.options.classifier, band, &self.options.line)?;
        let breaks = word_breaks(&glyphs, &self.options.line);

        let mut text = String::with_capacity(glyphs.len() * 2);
        for (glyph, space_before) in glyphs.iter().zip(breaks) {
            let m = match self.match_glyph(image, glyph) {
                Ok(m) => m,
                Err(RecogError::EmptyGlyphRegion { region }) => {
                    warn!("skipping empty glyph region {}", region);
                    continue;
                }
                Err(e) => return Err(e),
            };
            if space_before {
                text.push(' ');
            }
            text.push(m.label);
        }
        debug!("line {}: {:?}", band, text);
        Ok(text)
    }

    /// Read a whole page, one output line per text band
    pub fn read_page(&self, image: &Image) -> RecogResult<String> {
        let lines = segment_page(image, &self.options.classifier)
            .iter()
            .map(|band| self.read_line(image, band))
            .collect::<RecogResult<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }
}
