//! glyphscan-core - Basic data structures for glyph recognition
//!
//! This crate provides the fundamental data structures used throughout
//! the glyphscan OCR engine:
//!
//! - [`Image`] / [`ImageMut`] - RGBA bitmap container (immutable / mutable)
//! - [`Point`] - Integer pixel coordinate
//! - [`Box`] - Inclusive rectangle with edge traversal
//! - [`PixelClassifier`] - Foreground/background decision for a pixel
//!
//! The recognition crates never mutate an [`Image`]; everything downstream
//! of decoding works on shared, read-only pixels.

pub mod box_;
pub mod classify;
pub mod error;
pub mod image;
pub mod point;

pub use box_::{Box, EdgeIter};
pub use classify::{PixelClass, PixelClassifier};
pub use error::{Error, Result};
pub use image::{Image, ImageFormat, ImageMut};
pub use point::Point;

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Opaque white
    pub const WHITE: u32 = 0xffff_ffff;
    /// Opaque black
    pub const BLACK: u32 = 0x0000_00ff;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Compose an opaque gray pixel.
    #[inline]
    pub fn compose_gray(v: u8) -> u32 {
        compose_rgb(v, v, v)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract() {
            let p = compose_rgba(10, 20, 30, 40);
            assert_eq!(extract_rgba(p), (10, 20, 30, 40));
            assert_eq!(extract_rgb(compose_rgb(1, 2, 3)), (1, 2, 3));
            assert_eq!(alpha(compose_rgb(1, 2, 3)), 255);
        }

        #[test]
        fn test_named_colors() {
            assert_eq!(extract_rgb(WHITE), (255, 255, 255));
            assert_eq!(extract_rgba(BLACK), (0, 0, 0, 255));
            assert_eq!(compose_gray(128), compose_rgb(128, 128, 128));
        }
    }
}
