//! glyphscan-region - Region growing for glyphscan
//!
//! This crate provides the flood fill that both segmentation and hole
//! counting are built on:
//!
//! - [`VisitedSet`] - flat visitation buffer scoped to one search box
//! - [`flood_fill`] - 8-connected region growing clipped to a box
//! - [`find_components`] - column-major scan for ink components
//!
//! # Examples
//!
//! ```
//! use glyphscan_core::{Image, PixelClass, PixelClassifier, Point, color};
//! use glyphscan_region::{VisitedSet, flood_fill};
//!
//! let img = Image::new_filled(10, 10, color::WHITE).unwrap();
//! let mut visited = VisitedSet::new(img.bounds());
//! let extent = flood_fill(
//!     &img,
//!     &PixelClassifier::default(),
//!     Point::new(5, 5),
//!     PixelClass::Background,
//!     &mut visited,
//! )
//! .unwrap();
//! assert_eq!(extent, img.bounds());
//! assert_eq!(visited.count(), 100);
//! ```

pub mod conncomp;
pub mod error;
pub mod seedfill;
pub mod visited;

pub use glyphscan_core;

pub use conncomp::{Component, find_components};
pub use error::{RegionError, RegionResult};
pub use seedfill::{check_region, flood_fill};
pub use visited::VisitedSet;
