//! Full pipeline regression test: train, persist, decode and read
//!
//! Run with:
//! ```
//! cargo test -p glyphscan --test pipeline_reg
//! ```

use glyphscan::io::{read_image, write_image};
use glyphscan::recog::{FontBuilder, FontModel, LineSegOptions, ReadOptions, Reader, font_path};
use glyphscan::{ImageFormat, PixelClassifier};
use glyphscan_test::{RegParams, regout_dir, synth};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let classifier = PixelClassifier::default();

    // Train from two samples of the same alphabet
    let mut builder = FontBuilder::with_alphabet("IOBLT").expect("alphabet");
    for gap in [1, 2] {
        let sample = synth::text_line("IOBLT", gap, 4, 2).expect("sample");
        builder
            .add_image(&sample, &classifier, &LineSegOptions::default())
            .expect("train");
    }
    rp.compare_values(2.0, builder.sample_count('B') as f64, 0.0);

    let font_dir = format!("{}/pipeline_font", regout_dir());
    std::fs::create_dir_all(&font_dir).expect("font dir");
    let path = font_path(&font_dir, "block");
    builder.build().write_to_file(&path).expect("write font");
    let font = FontModel::load_or_empty(&path);
    rp.compare_values(5.0, font.len() as f64, 0.0);

    // A missing profile loads as an empty font
    let missing = FontModel::load_or_empty(font_path(&font_dir, "missing"));
    rp.compare_values(0.0, missing.len() as f64, 0.0);

    let page = synth::vstack(
        &[
            synth::text_line("BOLT", 1, 4, 2).expect("line"),
            synth::text_line("TO BOIL", 1, 4, 2).expect("line"),
        ],
        4,
    )
    .expect("page");

    let reader = Reader::new(font, ReadOptions::default()).expect("reader");
    for format in [ImageFormat::Bmp, ImageFormat::Png] {
        let file = format!("{}/pipeline_page.{}", regout_dir(), format.extension());
        write_image(&page, &file, format).expect("write page");
        let decoded = read_image(&file).expect("read page");
        rp.compare_strings(
            "BOLT\nTO BOIL",
            &reader.read_page(&decoded).expect("read text"),
        );
    }

    assert!(rp.cleanup(), "pipeline regression test failed");
}
