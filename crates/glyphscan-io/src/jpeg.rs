//! JPEG image format support
//!
//! Decode only. Scanned pages usually arrive as JPEG, but nothing in the
//! recognition pipeline produces one.

use crate::{IoError, IoResult};
use glyphscan_core::{Image, ImageFormat, ImageMut, color};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> u32 {
    let k = 255 - k as u32;
    let channel = |v: u8| ((255 - v as u32) * k / 255) as u8;
    color::compose_rgb(channel(c), channel(m), channel(y))
}

/// Read a JPEG image
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let samples = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
    };

    let width = info.width as u32;
    let height = info.height as u32;
    let expected = width as usize * height as usize * samples;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} bytes, expected {}",
            data.len(),
            expected
        )));
    }

    let mut image = ImageMut::new_filled(width, height, color::WHITE)?;
    image.set_informat(ImageFormat::Jpeg);

    for (i, px) in data[..expected].chunks_exact(samples).enumerate() {
        let pixel = match info.pixel_format {
            PixelFormat::L8 => color::compose_gray(px[0]),
            // Big-endian samples; keep the high byte
            PixelFormat::L16 => color::compose_gray(px[0]),
            PixelFormat::RGB24 => color::compose_rgb(px[0], px[1], px[2]),
            PixelFormat::CMYK32 => cmyk_to_rgb(px[0], px[1], px[2], px[3]),
        };
        image.data_mut()[i] = pixel;
    }

    Ok(image.into())
}
