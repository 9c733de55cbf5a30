//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap files at 1, 4, 8, 24 and 32 bits per
//! pixel. Palette images are expanded to RGB on load. Writing always
//! produces a bottom-up 24-bit file.

use crate::{IoError, IoResult};
use glyphscan_core::{Image, ImageFormat, ImageMut, color};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

fn le_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn le_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

fn skip<R: Read>(reader: &mut R, n: usize) -> IoResult<()> {
    if n > 0 {
        let mut sink = vec![0u8; n];
        reader.read_exact(&mut sink)?;
    }
    Ok(())
}

/// Bytes per stored row; BMP rows are padded to a 4-byte boundary
fn row_stride(width: u32, bits_per_pixel: u16) -> usize {
    (width as usize * bits_per_pixel as usize).div_ceil(32) * 4
}

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Image> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }
    let pixel_offset = le_u32(&file_header, 10) as usize;

    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header)?;

    let header_size = le_u32(&info_header, 0);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_u32(&info_header, 4) as i32;
    let height = le_u32(&info_header, 8) as i32;

    let planes = le_u16(&info_header, 12);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = le_u16(&info_header, 14);
    let compression = le_u32(&info_header, 16);
    let colors_used = le_u32(&info_header, 32) as usize;

    // BI_RGB and BI_BITFIELDS with the default masks
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }
    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    skip(&mut reader, (header_size - BMP_INFO_HEADER_SIZE) as usize)?;

    let palette: Vec<u32> = if bits_per_pixel <= 8 {
        let max_colors = 1usize << bits_per_pixel;
        let num_colors = match colors_used {
            0 => max_colors,
            n => n.min(max_colors),
        };
        let mut raw = vec![0u8; num_colors * 4];
        reader.read_exact(&mut raw)?;
        raw.chunks_exact(4)
            .map(|bgr| color::compose_rgb(bgr[2], bgr[1], bgr[0]))
            .collect()
    } else {
        Vec::new()
    };

    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize + palette.len() * 4;
    if pixel_offset > current_pos {
        skip(&mut reader, pixel_offset - current_pos)?;
    }

    let mut image = ImageMut::new_filled(width, height, color::WHITE)?;
    image.set_informat(ImageFormat::Bmp);

    let lookup = |index: u8| -> IoResult<u32> {
        palette.get(index as usize).copied().ok_or_else(|| {
            IoError::InvalidData(format!(
                "palette index {} out of range ({} colors)",
                index,
                palette.len()
            ))
        })
    };

    let mut row_buffer = vec![0u8; row_stride(width, bits_per_pixel)];

    for row in 0..height {
        reader.read_exact(&mut row_buffer)?;

        let y = if top_down { row } else { height - 1 - row };

        for x in 0..width {
            let xi = x as usize;
            let pixel = match bits_per_pixel {
                1 => lookup((row_buffer[xi / 8] >> (7 - (xi % 8))) & 1)?,
                4 => {
                    let byte = row_buffer[xi / 2];
                    lookup(if xi % 2 == 0 { byte >> 4 } else { byte & 0xF })?
                }
                8 => lookup(row_buffer[xi])?,
                24 => {
                    let idx = xi * 3;
                    color::compose_rgb(row_buffer[idx + 2], row_buffer[idx + 1], row_buffer[idx])
                }
                // The fourth byte is padding in most 32-bit writers.
                _ => {
                    let idx = xi * 4;
                    color::compose_rgb(row_buffer[idx + 2], row_buffer[idx + 1], row_buffer[idx])
                }
            };
            image.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(image.into())
}

/// Write an image as a bottom-up 24-bit BMP
///
/// Alpha is dropped.
pub fn write_bmp<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();
    let bits_per_pixel: u16 = 24;

    let stride = row_stride(width, bits_per_pixel);
    let pixel_data_size = stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = u32::try_from(pixel_offset + pixel_data_size).map_err(|_| {
        IoError::EncodeError(format!("{}x{} image too large for BMP", width, height))
    })?;

    // File header
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&(pixel_offset as u32).to_le_bytes())?;

    // Info header
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&bits_per_pixel.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Compression
    writer.write_all(&(pixel_data_size as u32).to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    let mut row_buffer = vec![0u8; stride];
    for row in 0..height {
        let y = height - 1 - row;
        for (x, &pixel) in image.row_data(y).iter().enumerate() {
            let (r, g, b) = color::extract_rgb(pixel);
            let idx = x * 3;
            row_buffer[idx] = b;
            row_buffer[idx + 1] = g;
            row_buffer[idx + 2] = r;
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hand-built 8-bit palette BMP, 3x2, top-down, two palette entries
    fn palette_bmp() -> Vec<u8> {
        let stride = row_stride(3, 8);
        let pixel_offset = 14 + 40 + 2 * 4;
        let mut buf = Vec::new();
        buf.extend_from_slice(b"BM");
        buf.extend_from_slice(&((pixel_offset + stride * 2) as u32).to_le_bytes());
        buf.extend_from_slice(&[0; 4]);
        buf.extend_from_slice(&(pixel_offset as u32).to_le_bytes());
        buf.extend_from_slice(&40u32.to_le_bytes());
        buf.extend_from_slice(&3i32.to_le_bytes());
        buf.extend_from_slice(&(-2i32).to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&8u16.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf.extend_from_slice(&((stride * 2) as u32).to_le_bytes());
        buf.extend_from_slice(&[0; 8]);
        buf.extend_from_slice(&2u32.to_le_bytes()); // Colors used
        buf.extend_from_slice(&0u32.to_le_bytes());
        // Palette: 0 = white, 1 = dark red (BGRx)
        buf.extend_from_slice(&[255, 255, 255, 0, 0, 0, 128, 0]);
        // Rows, padded to 4 bytes
        buf.extend_from_slice(&[0, 1, 0, 0]);
        buf.extend_from_slice(&[1, 1, 1, 0]);
        buf
    }

    #[test]
    fn test_bmp_roundtrip_rgb() {
        let mut m = ImageMut::new_filled(5, 3, color::WHITE).unwrap();
        m.set_rgb(0, 0, 255, 0, 0).unwrap();
        m.set_rgb(1, 1, 0, 255, 0).unwrap();
        m.set_rgb(4, 2, 0, 0, 255).unwrap();
        let img: Image = m.into();

        let mut buffer = Vec::new();
        write_bmp(&img, &mut buffer).unwrap();
        assert_eq!(buffer.len(), 14 + 40 + row_stride(5, 24) * 3);

        let img2 = read_bmp(Cursor::new(buffer)).unwrap();
        assert_eq!((img2.width(), img2.height()), (5, 3));
        assert_eq!(img2.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(img2.get_rgb(1, 1), Some((0, 255, 0)));
        assert_eq!(img2.get_rgb(4, 2), Some((0, 0, 255)));
        assert_eq!(img2.get_pixel(2, 2), Some(color::WHITE));
        assert_eq!(img2.informat(), ImageFormat::Bmp);
    }

    #[test]
    fn test_read_palette_top_down() {
        let img = read_bmp(Cursor::new(palette_bmp())).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.get_pixel(0, 0), Some(color::WHITE));
        assert_eq!(img.get_rgb(1, 0), Some((128, 0, 0)));
        assert_eq!(img.get_rgb(2, 1), Some((128, 0, 0)));
    }

    #[test]
    fn test_palette_index_out_of_range() {
        let mut data = palette_bmp();
        let last_row = data.len() - 4;
        data[last_row] = 7;
        assert!(matches!(
            read_bmp(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_reject_bad_magic_and_truncation() {
        let mut data = palette_bmp();
        data[0] = b'X';
        assert!(read_bmp(Cursor::new(data)).is_err());

        let data = palette_bmp();
        assert!(matches!(
            read_bmp(Cursor::new(&data[..data.len() - 2])),
            Err(IoError::Io(_))
        ));
    }
}
