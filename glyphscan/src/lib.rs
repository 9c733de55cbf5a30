//! glyphscan - OCR for scanned typewritten text
//!
//! Pages are split into line bands, lines into glyph boxes, and each glyph
//! is reduced to a small feature vector (hole count, proportion, ink
//! densities) that is matched against the nearest profile of a trained
//! font.
//!
//! # Example
//!
//! ```
//! use glyphscan::{Image, color};
//! use glyphscan::recog::{FontModel, ReadOptions, Reader};
//!
//! let page = Image::new_filled(32, 16, color::WHITE).unwrap();
//! let reader = Reader::new(FontModel::new(), ReadOptions::default()).unwrap();
//! // A blank page has no lines
//! assert_eq!(reader.read_page(&page).unwrap(), "");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphscan_io as io;
pub use glyphscan_recog as recog;
pub use glyphscan_region as region;
