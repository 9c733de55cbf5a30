//! Box geometry regression test
//!
//! Run with:
//! ```
//! cargo test -p glyphscan-core --test geometry_reg
//! ```

use glyphscan_core::{Box, Point};
use glyphscan_test::RegParams;

#[test]
fn geometry_reg() {
    let mut rp = RegParams::new("geometry");

    let b = Box::from_coords(10, 20, 19, 33).expect("box");
    rp.compare_values(10.0, b.width() as f64, 0.0);
    rp.compare_values(14.0, b.height() as f64, 0.0);
    rp.compare_values(1.4, b.proportion(), 1e-12);

    // Quadrants overlap on the midlines and together cover the box
    let [q1, q2, q3, q4] = b.quadrants();
    let mut cover = q1;
    for q in [q2, q3, q4] {
        cover.extend_to_include_box(&q);
    }
    rp.compare_strings(&b.to_string(), &cover.to_string());
    let [vertical, horizontal] = b.midlines();
    rp.compare_values(b.height() as f64, vertical.area() as f64, 0.0);
    rp.compare_values(b.width() as f64, horizontal.area() as f64, 0.0);
    rp.compare_values(
        b.area() as f64,
        (q1.area() + q2.area() + q3.area() + q4.area()
            - vertical.area()
            - horizontal.area()
            - 1) as f64,
        0.0,
    );

    // The edge walk visits every border pixel once and nothing else
    let edge: Vec<Point> = b.edge_points().collect();
    rp.compare_values((2 * (10 + 14) - 4) as f64, edge.len() as f64, 0.0);
    let interior = b
        .points()
        .filter(|&p| !b.on_edge(p))
        .count();
    rp.compare_values(
        b.area() as f64,
        (edge.len() + interior) as f64,
        0.0,
    );
    rp.compare_strings("[(10, 20) - (19, 33)]", &b.to_string());

    assert!(rp.cleanup(), "geometry regression test failed");
}
