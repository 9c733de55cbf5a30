//! glyphscan-test - Regression test framework for glyphscan
//!
//! Provides [`RegParams`], a small harness that counts checks, records
//! failures and reports them at the end, in one of three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! The [`synth`] module builds test images from ASCII art so that
//! recognition tests do not depend on image files.
//!
//! # Usage
//!
//! ```ignore
//! use glyphscan_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("holes");
//! let img = synth::from_ascii(&["###", "#.#", "###"]).unwrap();
//! rp.compare_values(1.0, holes as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // glyphscan-test is at crates/glyphscan-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
