//! Foreground/background pixel classification
//!
//! Ink is dark: a pixel is foreground when every color channel is below
//! the classifier's threshold. Alpha is ignored.

use crate::color;

/// Default channel threshold below which a pixel counts as ink
pub const DEFAULT_FOREGROUND_THRESHOLD: u8 = 110;

/// Default per-channel difference below which two pixels count as similar
pub const DEFAULT_SIMILAR_THRESHOLD: u8 = 10;

/// The two classes a pixel can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    /// Ink
    Foreground,
    /// Paper
    Background,
}

impl PixelClass {
    /// The other class
    pub fn opposite(self) -> Self {
        match self {
            Self::Foreground => Self::Background,
            Self::Background => Self::Foreground,
        }
    }
}

/// Threshold-based pixel classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelClassifier {
    /// Every channel must be strictly below this value for foreground
    pub threshold: u8,
    /// Per-channel difference bound used by [`PixelClassifier::is_similar`]
    pub similar_threshold: u8,
}

impl Default for PixelClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FOREGROUND_THRESHOLD,
            similar_threshold: DEFAULT_SIMILAR_THRESHOLD,
        }
    }
}

impl PixelClassifier {
    /// Create a classifier with the given foreground threshold
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Set the foreground threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the similarity threshold
    pub fn with_similar_threshold(mut self, threshold: u8) -> Self {
        self.similar_threshold = threshold;
        self
    }

    /// Whether `pixel` is ink
    #[inline]
    pub fn is_foreground(&self, pixel: u32) -> bool {
        let (r, g, b) = color::extract_rgb(pixel);
        r < self.threshold && g < self.threshold && b < self.threshold
    }

    /// The class of `pixel`
    #[inline]
    pub fn classify(&self, pixel: u32) -> PixelClass {
        if self.is_foreground(pixel) {
            PixelClass::Foreground
        } else {
            PixelClass::Background
        }
    }

    /// Whether two pixels differ by less than the similarity threshold on
    /// every channel
    ///
    /// An alternative grouping predicate to the binary foreground test,
    /// useful for color-clustered input.
    pub fn is_similar(&self, a: u32, b: u32) -> bool {
        let (ar, ag, ab) = color::extract_rgb(a);
        let (br, bg, bb) = color::extract_rgb(b);
        ar.abs_diff(br) < self.similar_threshold
            && ag.abs_diff(bg) < self.similar_threshold
            && ab.abs_diff(bb) < self.similar_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{compose_gray, compose_rgb, compose_rgba};

    #[test]
    fn test_dark_pixels_are_foreground() {
        let c = PixelClassifier::default();
        assert!(c.is_foreground(color::BLACK));
        assert!(c.is_foreground(compose_gray(109)));
        assert!(!c.is_foreground(compose_gray(110)));
        assert!(!c.is_foreground(color::WHITE));
    }

    #[test]
    fn test_every_channel_must_be_dark() {
        let c = PixelClassifier::default();
        assert!(!c.is_foreground(compose_rgb(0, 0, 200)));
        assert!(!c.is_foreground(compose_rgb(200, 0, 0)));
        assert!(c.is_foreground(compose_rgb(50, 60, 70)));
    }

    #[test]
    fn test_alpha_ignored() {
        let c = PixelClassifier::default();
        assert!(c.is_foreground(compose_rgba(0, 0, 0, 0)));
    }

    #[test]
    fn test_custom_threshold() {
        let c = PixelClassifier::new(200);
        assert!(c.is_foreground(compose_gray(150)));
        assert_eq!(c.classify(compose_gray(220)), PixelClass::Background);
        assert_eq!(
            PixelClass::Background.opposite(),
            PixelClass::Foreground
        );
    }

    #[test]
    fn test_is_similar() {
        let c = PixelClassifier::default();
        assert!(c.is_similar(compose_rgb(100, 100, 100), compose_rgb(109, 91, 100)));
        assert!(!c.is_similar(compose_rgb(100, 100, 100), compose_rgb(110, 100, 100)));
        let loose = c.with_similar_threshold(50);
        assert!(loose.is_similar(compose_rgb(100, 100, 100), compose_rgb(140, 60, 100)));
    }
}
