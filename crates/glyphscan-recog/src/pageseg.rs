//! Page segmentation into text lines
//!
//! A page is split at every row that holds no ink. Each maximal run of
//! ink-bearing rows becomes one full-width band.

use glyphscan_core::{Box, Image, PixelClassifier, Point};
use log::debug;

fn row_has_ink(image: &Image, classifier: &PixelClassifier, y: u32) -> bool {
    image
        .row_data(y)
        .iter()
        .any(|&p| classifier.is_foreground(p))
}

/// Find the text line bands of `image`, top to bottom
///
/// Each band spans the full image width and the rows of one run of ink.
/// A run reaching the last row is closed there.
pub fn segment_page(image: &Image, classifier: &PixelClassifier) -> Vec<Box> {
    let right = image.width() - 1;
    let mut bands = Vec::new();
    let mut top: Option<u32> = None;

    for y in 0..image.height() {
        match (row_has_ink(image, classifier, y), top) {
            (true, None) => top = Some(y),
            (false, Some(t)) => {
                bands.push(Box::from_corners(Point::new(0, t), Point::new(right, y - 1)));
                top = None;
            }
            _ => {}
        }
    }
    if let Some(t) = top {
        bands.push(Box::from_corners(
            Point::new(0, t),
            Point::new(right, image.height() - 1),
        ));
    }

    debug!("page {}x{}: {} lines", image.width(), image.height(), bands.len());
    bands
}
