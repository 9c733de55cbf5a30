//! PNG image format support
//!
//! Every PNG color type is normalized to 8-bit samples on load, so palette,
//! low-depth and 16-bit files all arrive as RGBA pixels. Color samples of
//! images with alpha are blended over white, so transparent areas read as
//! paper; the alpha sample itself is kept.

use crate::{IoError, IoResult};
use glyphscan_core::{Image, ImageFormat, ImageMut, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Blend a color sample of coverage `a` over a white background
fn over_white(c: u8, a: u8) -> u8 {
    let (c, a) = (c as u32, a as u32);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output color type: {:?}",
                other
            )));
        }
    };

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut image = ImageMut::new_filled(width, height, color::WHITE)?;
    image.set_informat(ImageFormat::Png);
    image.set_has_alpha(samples % 2 == 0);

    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..];
        for x in 0..width {
            let px = &row[x as usize * samples..];
            let pixel = match samples {
                1 => color::compose_gray(px[0]),
                2 => {
                    let g = over_white(px[0], px[1]);
                    color::compose_rgba(g, g, g, px[1])
                }
                3 => color::compose_rgb(px[0], px[1], px[2]),
                _ => {
                    let a = px[3];
                    color::compose_rgba(
                        over_white(px[0], a),
                        over_white(px[1], a),
                        over_white(px[2], a),
                        a,
                    )
                }
            };
            image.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(image.into())
}

/// Write a PNG image
///
/// Produces 8-bit RGBA when the image carries alpha, RGB otherwise.
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();

    let (color_type, samples) = if image.has_alpha() {
        (ColorType::Rgba, 4)
    } else {
        (ColorType::Rgb, 3)
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(image.data().len() * samples);
    for &pixel in image.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b]);
        if samples == 4 {
            data.push(a);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
