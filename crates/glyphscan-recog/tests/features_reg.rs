//! Glyph feature regression test
//!
//! Run with:
//! ```
//! cargo test -p glyphscan-recog --test features_reg
//! ```

use glyphscan_core::{Box, Image, PixelClassifier};
use glyphscan_recog::{area_density, count_holes, extract_features, pare_down};
use glyphscan_test::{RegParams, synth};

fn glyph(c: char) -> Image {
    synth::from_ascii(synth::glyph_art(c).expect("art")).expect("fixture")
}

#[test]
fn features_holes_reg() {
    let mut rp = RegParams::new("features_holes");
    let c = PixelClassifier::default();

    for (ch, expected) in [('I', 0.0), ('L', 0.0), ('T', 0.0), ('O', 1.0), ('B', 2.0)] {
        let img = glyph(ch);
        let holes = count_holes(&img, &c, &img.bounds()).expect("holes");
        eprintln!("{}: {} holes", ch, holes);
        rp.compare_values(expected, holes as f64, 0.0);
    }

    // Holes do not depend on the margin around the glyph
    let mut m = synth::blank(20, 20).expect("blank").to_mut();
    synth::draw_ring(&mut m, &Box::from_coords(6, 4, 13, 15).unwrap(), 2).expect("ring");
    let img: Image = m.into();
    rp.compare_values(
        1.0,
        count_holes(&img, &c, &img.bounds()).expect("holes") as f64,
        0.0,
    );
    rp.compare_values(
        1.0,
        count_holes(&img, &c, &Box::from_coords(6, 4, 13, 15).unwrap()).expect("holes") as f64,
        0.0,
    );

    assert!(rp.cleanup(), "features_holes regression test failed");
}

#[test]
fn features_density_reg() {
    let mut rp = RegParams::new("features_density");
    let c = PixelClassifier::default();

    // Solid square: every density is 1
    let mut m = synth::blank(16, 16).expect("blank").to_mut();
    let square = Box::from_coords(4, 4, 11, 11).unwrap();
    synth::draw_rect(&mut m, &square).expect("rect");
    let img: Image = m.into();
    rp.compare_values(1.0, area_density(&img, &c, &square).expect("density"), 0.0);
    rp.compare_values(
        0.0,
        area_density(&img, &c, &Box::from_coords(0, 0, 15, 3).unwrap()).expect("density"),
        0.0,
    );

    // Translation invariance over a striped pattern
    let stripes = synth::from_ascii(&[
        "#.#.#.#.#.#.",
        "#.#.#.#.#.#.",
        "#.#.#.#.#.#.",
        "#.#.#.#.#.#.",
    ])
    .expect("fixture");
    let a = area_density(&stripes, &c, &Box::from_coords(0, 0, 3, 3).unwrap()).expect("a");
    let b = area_density(&stripes, &c, &Box::from_coords(6, 0, 9, 3).unwrap()).expect("b");
    rp.compare_values(0.5, a, 0.0);
    rp.compare_values(a, b, 0.0);

    // Pare down finds the ink
    let pared = pare_down(&img, &c, &img.bounds()).expect("pare").expect("ink");
    assert_eq!(pared, square);

    // The 'I' art: 5 wide, 7 tall, one bar top and bottom
    let i = glyph('I');
    let f = extract_features(&i, &c, &i.bounds()).expect("features");
    rp.compare_values(7.0 / 5.0, f.proportion, 1e-12);
    rp.compare_values(15.0 / 35.0, f.density.total, 1e-12);
    rp.compare_values(1.0, f.density.mid1, 0.0);
    rp.compare_values(0.0, f.holes as f64, 0.0);

    assert!(rp.cleanup(), "features_density regression test failed");
}
