//! Synthetic test images
//!
//! Fixtures are written as ASCII art: `#` is ink (opaque black), `.` and
//! space are paper (opaque white). Rows must all have the same length.

use crate::error::{TestError, TestResult};
use glyphscan_core::{Box, Image, ImageMut, color};

/// Build an image from ASCII art rows
pub fn from_ascii(rows: &[&str]) -> TestResult<Image> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut m = blank_mut(width, height)?;
    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() as u32 != width {
            return Err(TestError::Fixture(format!(
                "row {} has {} columns, expected {}",
                y,
                row.chars().count(),
                width
            )));
        }
        for (x, ch) in row.chars().enumerate() {
            match ch {
                '#' => m.set_pixel_unchecked(x as u32, y as u32, color::BLACK),
                '.' | ' ' => {}
                other => {
                    return Err(TestError::Fixture(format!(
                        "unexpected character {:?} at ({}, {})",
                        other, x, y
                    )));
                }
            }
        }
    }
    Ok(m.into())
}

/// A white image
pub fn blank(width: u32, height: u32) -> TestResult<Image> {
    Ok(blank_mut(width, height)?.into())
}

fn blank_mut(width: u32, height: u32) -> TestResult<ImageMut> {
    ImageMut::new_filled(width, height, color::WHITE)
        .map_err(|e| TestError::Fixture(e.to_string()))
}

/// Fill `rect` with ink
pub fn draw_rect(img: &mut ImageMut, rect: &Box) -> TestResult<()> {
    img.fill_rect(rect, color::BLACK)
        .map_err(|e| TestError::Fixture(e.to_string()))
}

/// Draw an ink ring of the given stroke `thickness` just inside `outer`
pub fn draw_ring(img: &mut ImageMut, outer: &Box, thickness: u32) -> TestResult<()> {
    draw_rect(img, outer)?;
    let (low, high) = (outer.low(), outer.high());
    if outer.width() > 2 * thickness && outer.height() > 2 * thickness {
        let inner = Box::from_coords(
            low.x + thickness,
            low.y + thickness,
            high.x - thickness,
            high.y - thickness,
        )
        .map_err(|e| TestError::Fixture(e.to_string()))?;
        img.fill_rect(&inner, color::WHITE)
            .map_err(|e| TestError::Fixture(e.to_string()))?;
    }
    Ok(())
}

/// 5x7 block letters used by the recognition tests
///
/// Holes are closed under 8-connectivity so that `O` has one hole and `B`
/// has two.
pub fn glyph_art(c: char) -> Option<&'static [&'static str]> {
    let art: &'static [&'static str] = match c {
        'I' => &[
            "#####", "..#..", "..#..", "..#..", "..#..", "..#..", "#####",
        ],
        'O' => &[
            "#####", "#...#", "#...#", "#...#", "#...#", "#...#", "#####",
        ],
        'B' => &[
            "#####", "#...#", "#...#", "#####", "#...#", "#...#", "#####",
        ],
        'L' => &[
            "#....", "#....", "#....", "#....", "#....", "#....", "#####",
        ],
        'T' => &[
            "#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#..",
        ],
        'i' => &["#", ".", "#", "#", "#", "#", "#"],
        _ => return None,
    };
    Some(art)
}

/// Render `text` with [`glyph_art`] letters, bottom-aligned
///
/// Letters are separated by `letter_gap` blank columns, a space adds
/// `word_gap` blank columns instead, and `margin` blank pixels surround
/// the whole line.
pub fn text_line(text: &str, letter_gap: u32, word_gap: u32, margin: u32) -> TestResult<Image> {
    let mut placed: Vec<(u32, &'static [&'static str])> = Vec::new();
    let mut x = margin;
    let mut pending_gap = 0;
    for c in text.chars() {
        if c == ' ' {
            pending_gap = word_gap;
            continue;
        }
        let art =
            glyph_art(c).ok_or_else(|| TestError::Fixture(format!("no glyph art for {:?}", c)))?;
        if !placed.is_empty() {
            x += pending_gap.max(letter_gap);
        }
        placed.push((x, art));
        x += art[0].len() as u32;
        pending_gap = 0;
    }
    if placed.is_empty() {
        return Err(TestError::Fixture("empty text".to_string()));
    }

    let glyph_h = placed.iter().map(|(_, a)| a.len() as u32).max().unwrap_or(0);
    let width = x + margin;
    let height = glyph_h + 2 * margin;
    let mut m = blank_mut(width, height)?;
    for (x0, art) in placed {
        let y0 = margin + glyph_h - art.len() as u32;
        for (dy, row) in art.iter().enumerate() {
            for (dx, ch) in row.chars().enumerate() {
                if ch == '#' {
                    m.set_pixel_unchecked(x0 + dx as u32, y0 + dy as u32, color::BLACK);
                }
            }
        }
    }
    Ok(m.into())
}

/// Stack images vertically, left-aligned, with `gap` white rows between
pub fn vstack(images: &[Image], gap: u32) -> TestResult<Image> {
    let width = images.iter().map(Image::width).max().unwrap_or(0);
    let height = images.iter().map(Image::height).sum::<u32>()
        + gap * images.len().saturating_sub(1) as u32;
    let mut m = blank_mut(width, height)?;
    let mut y0 = 0;
    for img in images {
        for y in 0..img.height() {
            for (x, &p) in img.row_data(y).iter().enumerate() {
                m.set_pixel_unchecked(x as u32, y0 + y, p);
            }
        }
        y0 += img.height() + gap;
    }
    Ok(m.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        let img = from_ascii(&["#.", ".#"]).unwrap();
        assert_eq!(img.get_pixel(0, 0), Some(color::BLACK));
        assert_eq!(img.get_pixel(1, 0), Some(color::WHITE));
        assert!(from_ascii(&["##", "#"]).is_err());
        assert!(from_ascii(&["#x"]).is_err());
        assert!(from_ascii(&[]).is_err());
    }

    #[test]
    fn test_draw_ring() {
        let mut m = ImageMut::new_filled(8, 8, color::WHITE).unwrap();
        draw_ring(&mut m, &Box::from_coords(1, 1, 6, 6).unwrap(), 1).unwrap();
        let img: Image = m.into();
        assert_eq!(img.get_pixel(1, 3), Some(color::BLACK));
        assert_eq!(img.get_pixel(3, 3), Some(color::WHITE));
        assert_eq!(img.get_pixel(0, 0), Some(color::WHITE));
    }

    #[test]
    fn test_text_line_layout() {
        let img = text_line("I iL", 1, 4, 2).unwrap();
        // 2 + 5 + 4 + 1 + 1 + 5 + 2
        assert_eq!(img.width(), 20);
        assert_eq!(img.height(), 11);
        assert_eq!(img.get_pixel(2, 2), Some(color::BLACK));
        assert_eq!(img.get_pixel(11, 3), Some(color::WHITE));
        assert!(text_line("I?", 1, 4, 0).is_err());
    }

    #[test]
    fn test_vstack() {
        let a = blank(4, 2).unwrap();
        let b = from_ascii(&["##"]).unwrap();
        let img = vstack(&[a, b], 3).unwrap();
        assert_eq!((img.width(), img.height()), (4, 6));
        assert_eq!(img.get_pixel(1, 5), Some(color::BLACK));
        assert_eq!(img.get_pixel(3, 5), Some(color::WHITE));
    }
}
