//! Pixel access functions
//!
//! Bounds-checked getters return `Option`, setters return `Result`.
//! The `_unchecked` variants skip the check and panic on bad coordinates.

use super::{Image, ImageMut};
use crate::box_::Box;
use crate::color;
use crate::error::{Error, Result};
use crate::point::Point;

impl Image {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates fall outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get the pixel at a [`Point`].
    #[inline]
    pub fn pixel_at(&self, p: Point) -> Option<u32> {
        self.get_pixel(p.x, p.y)
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl ImageMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates fall outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an opaque RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Set every pixel inside `rect` to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `rect` reaches past the image.
    pub fn fill_rect(&mut self, rect: &Box, val: u32) -> Result<()> {
        let high = rect.high();
        if high.x >= self.inner.width || high.y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                x: high.x,
                y: high.y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        for y in rect.low().y..=high.y {
            let start = self.inner.index(rect.low().x, y);
            let end = self.inner.index(high.x, y);
            self.inner.data[start..=end].fill(val);
        }
        Ok(())
    }
}
