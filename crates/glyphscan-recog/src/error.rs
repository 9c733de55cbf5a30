//! Error types for glyphscan-recog

use glyphscan_core::Box;
use glyphscan_region::RegionError;
use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Region growing error other than a bounds violation
    #[error("region error: {0}")]
    Region(#[source] RegionError),

    /// Glyph region reaches outside the image
    #[error("region {region} exceeds {width}x{height} image")]
    BoundsViolation { region: Box, width: u32, height: u32 },

    /// Glyph region contains no ink
    #[error("no ink in glyph region {region}")]
    EmptyGlyphRegion { region: Box },

    /// Classification against a font with no profiles
    #[error("font has no reference profiles")]
    NoReferenceProfile,

    /// Malformed font profile record
    #[error("font profile line {line}: {message}")]
    ProfileParse { line: usize, message: String },

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RegionError> for RecogError {
    /// Bounds and core errors keep their meaning whichever layer raised them
    fn from(e: RegionError) -> Self {
        match e {
            RegionError::Core(e) => Self::Core(e),
            RegionError::BoundsViolation {
                region,
                width,
                height,
            } => Self::BoundsViolation {
                region,
                width,
                height,
            },
            e => Self::Region(e),
        }
    }
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
