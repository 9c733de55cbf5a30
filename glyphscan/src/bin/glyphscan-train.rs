//! Build a font profile from sample images
//!
//! Each sample image holds one line of glyphs in alphabet order:
//!
//! ```text
//! glyphscan-train courier samples/courier-*.bmp
//! ```

use clap::Parser;
use glyphscan_core::PixelClassifier;
use glyphscan_recog::{DEFAULT_ALPHABET, DEFAULT_FONT_DIR, FontBuilder, LineSegOptions, font_path};
use log::{info, warn};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line arguments for the trainer
#[derive(Debug, Parser)]
#[command(name = "glyphscan-train", version)]
#[command(about = "Average sample images of an alphabet into a font profile")]
struct Args {
    /// Name of the font to write
    font: String,

    /// Sample images, one line of alphabet glyphs each
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Directory to write the font profile into
    #[arg(long, default_value = DEFAULT_FONT_DIR)]
    font_dir: PathBuf,

    /// Characters shown in every sample, in order
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Channel value below which a pixel counts as ink
    #[arg(long)]
    threshold: Option<u8>,
}

fn run(args: &Args) -> Result<PathBuf, Box<dyn Error>> {
    let mut builder = FontBuilder::with_alphabet(&args.alphabet)?;
    let classifier = args
        .threshold
        .map_or_else(PixelClassifier::default, PixelClassifier::new);
    let options = LineSegOptions::default();

    for path in &args.images {
        let image = glyphscan_io::read_image(path)?;
        let paired = builder.add_image(&image, &classifier, &options)?;
        info!("{}: {} glyphs", path.display(), paired);
    }

    let font = builder.build();
    if font.is_empty() {
        warn!("no glyphs found in any sample; writing an empty font");
    }

    fs::create_dir_all(&args.font_dir)?;
    let out = font_path(&args.font_dir, &args.font);
    font.write_to_file(&out)?;
    Ok(out)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(out) => {
            info!("wrote {}", out.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("glyphscan-train: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let args = Args::try_parse_from([
            "glyphscan-train",
            "courier",
            "a.bmp",
            "b.png",
            "--alphabet",
            "IO",
        ])
        .unwrap();
        assert_eq!(args.font, "courier");
        assert_eq!(args.images.len(), 2);
        assert_eq!(args.alphabet, "IO");
        assert_eq!(args.font_dir, PathBuf::from(DEFAULT_FONT_DIR));
    }

    #[test]
    fn test_images_required() {
        assert!(Args::try_parse_from(["glyphscan-train", "courier"]).is_err());
        let args = Args::try_parse_from(["glyphscan-train", "courier", "a.bmp"]).unwrap();
        assert_eq!(args.alphabet, DEFAULT_ALPHABET);
    }
}
