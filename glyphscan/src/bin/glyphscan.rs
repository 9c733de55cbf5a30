//! Read text from a scanned image
//!
//! ```text
//! glyphscan p page.bmp --font courier
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Parser, ValueEnum};
use glyphscan_core::{Image, PixelClassifier};
use glyphscan_recog::{
    DEFAULT_FONT_DIR, FontModel, LineSegOptions, ReadOptions, Reader, font_path,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// How much of the image to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// A whole page of lines
    #[value(name = "p", alias = "page")]
    Page,
    /// A single line
    #[value(name = "l", alias = "line")]
    Line,
    /// A single character
    #[value(name = "c", alias = "char")]
    Char,
}

/// Command-line arguments for the reader
#[derive(Debug, Parser)]
#[command(name = "glyphscan", version)]
#[command(about = "Read typewritten text from a scanned image")]
struct Args {
    /// What the image contains
    #[arg(value_enum)]
    mode: Mode,

    /// Image to read (BMP, PNG or JPEG)
    image: PathBuf,

    /// Font profile name
    #[arg(long, default_value = "default")]
    font: String,

    /// Directory holding font profiles
    #[arg(long, default_value = DEFAULT_FONT_DIR)]
    font_dir: PathBuf,

    /// Channel value below which a pixel counts as ink
    #[arg(long)]
    threshold: Option<u8>,

    /// Largest midpoint offset, in pixels, at which two strokes merge
    /// into one glyph
    #[arg(long)]
    merge_tolerance: Option<u32>,

    /// Do not insert spaces between words
    #[arg(long)]
    no_spaces: bool,
}

impl Args {
    fn read_options(&self) -> ReadOptions {
        let mut classifier = PixelClassifier::default();
        if let Some(t) = self.threshold {
            classifier = classifier.with_threshold(t);
        }
        let mut line = LineSegOptions::default().with_insert_spaces(!self.no_spaces);
        if let Some(t) = self.merge_tolerance {
            line = line.with_merge_tolerance(t);
        }
        ReadOptions::default()
            .with_classifier(classifier)
            .with_line(line)
    }
}

fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    let path = font_path(&args.font_dir, &args.font);
    let font = FontModel::load_or_empty(&path);
    info!("font {} has {} profiles", path.display(), font.len());

    let reader = Reader::new(font, args.read_options())?;
    let image: Image = glyphscan_io::read_image(&args.image)?;

    let text = match args.mode {
        Mode::Page => reader.read_page(&image)?,
        Mode::Line => reader.read_line(&image, &image.bounds())?,
        Mode::Char => reader.read_glyph(&image, &image.bounds())?.to_string(),
    };
    Ok(text)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version print to stdout and are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("glyphscan: {}", e);
            ExitCode::FAILURE
        }
    }
}
