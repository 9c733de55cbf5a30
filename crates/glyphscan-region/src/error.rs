//! Error types for glyphscan-region

use glyphscan_core::Box;
use thiserror::Error;

/// Errors that can occur during region growing
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Search region reaches outside the image
    #[error("region {region} exceeds {width}x{height} image")]
    BoundsViolation { region: Box, width: u32, height: u32 },

    /// Seed lies outside the search region
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
