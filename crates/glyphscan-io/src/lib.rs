//! glyphscan-io - Image decoding and encoding
//!
//! Loads scanned pages into an RGBA [`Image`] and writes images back out.
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | BMP    | yes  | yes   | `bmp`        |
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | no    | `jpeg`       |
//!
//! The format of an input file is detected from its leading bytes, never
//! from its name.

pub mod error;
pub mod format;

#[cfg(feature = "bmp")]
pub mod bmp;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use glyphscan_core::{Image, ImageFormat};

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image file, detecting its format from the file contents
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read and
/// [`IoError::UnsupportedFormat`] if the format is unknown or was not
/// enabled at build time.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let image = read_image_from_bytes(&data)?;
    debug!(
        "read {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.informat()
    );
    Ok(image)
}

/// Decode an image held in memory
pub fn read_image_from_bytes(data: &[u8]) -> IoResult<Image> {
    let format = detect_format_from_bytes(data)?;
    let reader = Cursor::new(data);
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(reader),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        _ => Err(IoError::UnsupportedFormat(format!(
            "cannot read {:?} images",
            format
        ))),
    }
}

/// Write an image to any writer in the given format
pub fn write_image_to_writer<W: Write>(
    image: &Image,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::write_bmp(image, writer),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        _ => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "cannot write {:?} images",
                format
            )))
        }
    }
}

/// Encode an image into memory
pub fn write_image_to_bytes(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to_writer(image, &mut buffer, format)?;
    Ok(buffer)
}

/// Write an image file
///
/// [`ImageFormat::Unknown`] picks the format from the file extension.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(ImageFormat::from_extension)
            .unwrap_or_default(),
        f => f,
    };
    // Encode before creating the file so an unsupported format leaves
    // nothing behind.
    let encoded = write_image_to_bytes(image, format)?;
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&encoded)?;
    writer.flush()?;
    debug!("wrote {} ({:?})", path.display(), format);
    Ok(())
}
