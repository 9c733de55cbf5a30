//! Image - the bitmap container
//!
//! # Pixel layout
//!
//! - One `u32` per pixel, row-major, no padding
//! - Color order is RGBA (red in MSB), see [`crate::color`]
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared, read-only ownership).
//! Recognition only ever reads pixels. To modify pixel data, convert to
//! `ImageMut` via [`Image::try_into_mut`] or [`Image::to_mut`], then convert
//! back with `Into<Image>`.

mod access;

use crate::box_::Box;
use crate::error::{Error, Result};
use std::sync::Arc;

/// File formats understood by the I/O layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// Windows bitmap
    Bmp,
    /// JFIF JPEG
    Jpeg,
    /// PNG
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => Self::Bmp,
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            _ => Self::Unknown,
        }
    }
}

/// Internal image data
#[derive(Debug)]
struct ImageData {
    width: u32,
    height: u32,
    /// Whether the alpha channel carries information
    has_alpha: bool,
    /// Format the image was decoded from
    informat: ImageFormat,
    data: Vec<u32>,
}

impl ImageData {
    fn new(width: u32, height: u32, fill: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            has_alpha: false,
            informat: ImageFormat::Unknown,
            data: vec![fill; len],
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// RGBA bitmap
///
/// # Examples
///
/// ```
/// use glyphscan_core::{Image, color};
///
/// let img = Image::new_filled(64, 16, color::WHITE).unwrap();
/// assert_eq!(img.width(), 64);
/// assert_eq!(img.get_pixel(3, 3), Some(color::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with every pixel set to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new image with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        Ok(Image {
            inner: Arc::new(ImageData::new(width, height, pixel)?),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// The box covering the whole image
    #[inline]
    pub fn bounds(&self) -> Box {
        Box::from_corners(
            crate::Point::new(0, 0),
            crate::Point::new(self.inner.width - 1, self.inner.height - 1),
        )
    }

    /// Whether the alpha channel carries information
    pub fn has_alpha(&self) -> bool {
        self.inner.has_alpha
    }

    /// Format the image was decoded from
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Raw pixel data, row-major
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// One row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Check whether two images have the same dimensions
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Number of strong references to the pixel data
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                has_alpha: self.inner.has_alpha,
                informat: self.inner.informat,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable image
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new mutable image with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::new(width, height, pixel)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Mark whether the alpha channel carries information
    pub fn set_has_alpha(&mut self, has_alpha: bool) {
        self.inner.has_alpha = has_alpha;
    }

    /// Record the format the image was decoded from
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Mutable raw pixel data
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_new_rejects_empty() {
        assert!(Image::new(0, 10).is_err());
        assert!(Image::new(10, 0).is_err());
    }

    #[test]
    fn test_bounds() {
        let img = Image::new(7, 3).unwrap();
        let b = img.bounds();
        assert_eq!((b.width(), b.height()), (7, 3));
        assert_eq!(b.low(), crate::Point::new(0, 0));
    }

    #[test]
    fn test_try_into_mut_shared() {
        let img = Image::new_filled(4, 4, color::WHITE).unwrap();
        let shared = img.clone();
        assert_eq!(img.ref_count(), 2);
        let img = img.try_into_mut().unwrap_err();
        drop(shared);
        let mut m = img.try_into_mut().unwrap();
        m.set_pixel(1, 1, color::BLACK).unwrap();
        let img: Image = m.into();
        assert_eq!(img.get_pixel(1, 1), Some(color::BLACK));
    }

    #[test]
    fn test_to_mut_copies() {
        let img = Image::new_filled(2, 2, color::WHITE).unwrap();
        let mut m = img.to_mut();
        m.set_pixel(0, 0, color::BLACK).unwrap();
        assert_eq!(img.get_pixel(0, 0), Some(color::WHITE));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ImageFormat::from_extension("JPEG"), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::from_extension("tif"), ImageFormat::Unknown);
    }
}
