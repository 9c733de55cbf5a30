//! Error types for glyphscan-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::point::Point;
use thiserror::Error;

/// glyphscan core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Box corners out of order on at least one axis
    #[error("invalid box: low ({}, {}) is not below high ({}, {})", .low.x, .low.y, .high.x, .high.y)]
    InvalidBox { low: Point, high: Point },

    /// Pixel coordinate out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text or binary decode error
    #[error("decode error: {0}")]
    DecodeError(String),
}

/// Result type alias for glyphscan core operations
pub type Result<T> = std::result::Result<T, Error>;
