//! glyphscan-recog - Glyph features, font profiles and text reading
//!
//! This crate turns ink regions into text:
//!
//! - **Feature extraction**: pare a glyph box to its ink, count holes,
//!   measure proportion and densities ([`features`])
//! - **Font model**: labelled reference profiles and nearest-profile
//!   classification ([`font`])
//! - **Segmentation**: page into line bands ([`pageseg`]), lines into
//!   glyph boxes ([`lineseg`])
//! - **Training**: average samples of a fixed alphabet into a font
//!   ([`train`])
//! - **Reading**: the [`Reader`] facade over all of the above
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphscan_recog::{FontModel, ReadOptions, Reader};
//! use glyphscan_core::Image;
//!
//! let font = FontModel::load_or_empty("font/serif.font");
//! let reader = Reader::new(font, ReadOptions::default()).unwrap();
//! let page = Image::new_filled(640, 480, glyphscan_core::color::WHITE).unwrap();
//! println!("{}", reader.read_page(&page).unwrap());
//! ```

mod error;
pub mod features;
pub mod font;
pub mod lineseg;
pub mod pageseg;
pub mod reader;
pub mod symbol;
pub mod train;

pub use error::{RecogError, RecogResult};

pub use features::{area_density, border_density, count_holes, extract_features, pare_down};
pub use font::{DEFAULT_FONT_DIR, FontModel, GlyphMatch, MatchWeights, font_path};
pub use lineseg::{LineSegOptions, line_features, segment_line, word_breaks};
pub use pageseg::segment_page;
pub use reader::{ReadOptions, Reader};
pub use symbol::{Density, GlyphFeatures};
pub use train::{DEFAULT_ALPHABET, FontBuilder};

// Re-export core for convenience
pub use glyphscan_core;
