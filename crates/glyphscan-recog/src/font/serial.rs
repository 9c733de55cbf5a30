//! Font profile persistence
//!
//! # Format
//!
//! Plain text, one profile per line, fields separated by whitespace:
//!
//! ```text
//! # label holes proportion total border q1 q2 q3 q4 mid1 mid2
//! I 0 6 1 1 1 1 1 1 1 1
//! O 1 1 0.395 1 0.36 0.36 0.36 0.36 0.222 0.222
//! ```
//!
//! The label is a single character. Blank lines and lines starting with
//! `#` are ignored, so `#` and whitespace cannot be labels. Profiles are
//! written in label order.

use super::FontModel;
use crate::error::{RecogError, RecogResult};
use crate::symbol::{Density, GlyphFeatures};
use log::warn;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Directory fonts are looked up in when none is given
pub const DEFAULT_FONT_DIR: &str = "font";

/// File extension of font profiles
pub const FONT_EXTENSION: &str = "font";

/// Maximum input size in bytes
const MAX_INPUT_SIZE: usize = 16_000_000;

const HEADER: &str = "# label holes proportion total border q1 q2 q3 q4 mid1 mid2";

/// Path of the profile for font `name` inside `dir`
pub fn font_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", name, FONT_EXTENSION))
}

fn parse_err(line: usize, message: impl Into<String>) -> RecogError {
    RecogError::ProfileParse {
        line,
        message: message.into(),
    }
}

fn parse_record(line_no: usize, line: &str) -> RecogResult<(char, GlyphFeatures)> {
    let mut fields = line.split_whitespace();

    let label_field = fields.next().ok_or_else(|| parse_err(line_no, "empty record"))?;
    let mut chars = label_field.chars();
    let label = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(parse_err(
                line_no,
                format!("label must be one character, got {:?}", label_field),
            ));
        }
    };

    let holes_field = fields
        .next()
        .ok_or_else(|| parse_err(line_no, "missing hole count"))?;
    let holes: u32 = holes_field
        .parse()
        .map_err(|e| parse_err(line_no, format!("hole count {:?}: {}", holes_field, e)))?;

    let mut values = [0.0f64; 1 + Density::LEN];
    for (i, slot) in values.iter_mut().enumerate() {
        let field = fields
            .next()
            .ok_or_else(|| parse_err(line_no, format!("expected 11 fields, got {}", i + 2)))?;
        let v: f64 = field
            .parse()
            .map_err(|e| parse_err(line_no, format!("value {:?}: {}", field, e)))?;
        if !v.is_finite() {
            return Err(parse_err(line_no, format!("value {:?} is not finite", field)));
        }
        *slot = v;
    }
    if fields.next().is_some() {
        return Err(parse_err(line_no, "trailing fields after 11 values"));
    }

    let [proportion, rest @ ..] = values;
    Ok((
        label,
        GlyphFeatures {
            holes,
            proportion,
            density: Density::from_array(rest),
        },
    ))
}

fn parse_font(text: &str) -> RecogResult<FontModel> {
    let mut font = FontModel::new();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (label, features) = parse_record(i + 1, trimmed)?;
        if font.insert(label, features).is_some() {
            warn!("font profile line {}: duplicate label '{}' replaces earlier record", i + 1, label);
        }
    }
    Ok(font)
}

fn check_size(len: usize) -> RecogResult<()> {
    if len > MAX_INPUT_SIZE {
        return Err(parse_err(
            0,
            format!("input exceeds {} bytes", MAX_INPUT_SIZE),
        ));
    }
    Ok(())
}

impl FontModel {
    /// Read a font from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::ProfileParse`] for malformed records and for
    /// input larger than the size limit.
    pub fn read_from_reader(reader: &mut impl Read) -> RecogResult<Self> {
        let mut buf = Vec::new();
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buf)?;
        Self::read_from_bytes(&buf)
    }

    /// Read a font from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> RecogResult<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        Self::read_from_reader(&mut reader)
    }

    /// Read a font from bytes.
    pub fn read_from_bytes(data: &[u8]) -> RecogResult<Self> {
        check_size(data.len())?;
        let text = std::str::from_utf8(data)
            .map_err(|e| parse_err(0, format!("invalid UTF-8: {e}")))?;
        parse_font(text)
    }

    /// Read a font file, falling back to an empty model
    ///
    /// A missing or malformed file is logged and yields an empty model,
    /// which then fails every classification with
    /// [`RecogError::NoReferenceProfile`].
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read_from_file(path) {
            Ok(font) => font,
            Err(e) => {
                warn!("cannot load font {}: {}; using an empty font", path.display(), e);
                Self::new()
            }
        }
    }

    /// Check that every label can be read back (`#` and whitespace cannot)
    fn check_labels(&self) -> RecogResult<()> {
        match self.labels().find(|&c| c == '#' || c.is_whitespace()) {
            Some(label) => Err(RecogError::InvalidParameter(format!(
                "label {:?} cannot be stored in a font profile",
                label
            ))),
            None => Ok(()),
        }
    }

    /// Write the font to a writer.
    ///
    /// Labels are checked before anything is written.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] for labels that cannot be
    /// read back (`#` or whitespace).
    pub fn write_to_writer(&self, writer: &mut impl Write) -> RecogResult<()> {
        self.check_labels()?;
        writeln!(writer, "{}", HEADER)?;
        for (label, f) in self.iter() {
            write!(writer, "{} {} {}", label, f.holes, f.proportion)?;
            for v in f.density.to_array() {
                write!(writer, " {}", v)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the font to a file.
    ///
    /// The profile is written to a sibling temporary file and renamed over
    /// `path` only once complete, so a failed save leaves any existing
    /// file untouched.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> RecogResult<()> {
        let path = path.as_ref();
        self.check_labels()?;

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);

        let result = std::fs::File::create(&tmp)
            .map_err(RecogError::from)
            .and_then(|file| {
                let mut writer = BufWriter::new(file);
                self.write_to_writer(&mut writer)?;
                writer
                    .into_inner()
                    .map_err(|e| e.into_error())?
                    .sync_all()?;
                Ok(())
            })
            .and_then(|()| std::fs::rename(&tmp, path).map_err(RecogError::from));
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result
    }

    /// Write the font to bytes.
    pub fn write_to_bytes(&self) -> RecogResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_font() -> FontModel {
        [
            (
                'O',
                GlyphFeatures {
                    holes: 1,
                    proportion: 1.4,
                    density: Density::from_array([0.5, 1.0, 0.4, 0.4, 0.4, 0.4, 0.25, 0.2]),
                },
            ),
            (
                'I',
                GlyphFeatures {
                    holes: 0,
                    proportion: 7.0 / 5.0,
                    density: Density::from_array([0.1; Density::LEN]),
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_write_sorted_with_header() {
        let text = String::from_utf8(sample_font().write_to_bytes().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('#'));
        assert!(lines[1].starts_with("I 0 "));
        assert_eq!(lines[2], "O 1 1.4 0.5 1 0.4 0.4 0.4 0.4 0.25 0.2");
    }

    #[test]
    fn test_read_back_exact() {
        let font = sample_font();
        let bytes = font.write_to_bytes().unwrap();
        assert_eq!(FontModel::read_from_bytes(&bytes).unwrap(), font);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let text = "\n# comment\n  \nA 0 1 1 1 1 1 1 1 1 1\n";
        let font = FontModel::read_from_bytes(text.as_bytes()).unwrap();
        assert_eq!(font.len(), 1);
        assert_eq!(font.get('A').unwrap().proportion, 1.0);
    }

    #[test]
    fn test_parse_errors() {
        let cases = [
            "AB 0 1 1 1 1 1 1 1 1 1",
            "A x 1 1 1 1 1 1 1 1 1",
            "A 0 1 1 1",
            "A 0 1 1 1 1 1 1 1 1 1 9",
            "A 0 inf 1 1 1 1 1 1 1 1",
            "A -1 1 1 1 1 1 1 1 1 1",
        ];
        for text in cases {
            assert!(
                matches!(
                    FontModel::read_from_bytes(text.as_bytes()),
                    Err(RecogError::ProfileParse { line: 1, .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn test_unstorable_label() {
        let mut font = FontModel::new();
        font.insert('!', GlyphFeatures::default());
        font.insert('#', GlyphFeatures::default());
        let mut buf = Vec::new();
        assert!(matches!(
            font.write_to_writer(&mut buf),
            Err(RecogError::InvalidParameter(_))
        ));
        // Nothing is written before the labels are checked
        assert!(buf.is_empty());
    }

    #[test]
    fn test_oversized_input_rejected() {
        let mut text = b"A 0 1 1 1 1 1 1 1 1 1\n".to_vec();
        text.resize(MAX_INPUT_SIZE + 1, b'\n');
        assert!(matches!(
            FontModel::read_from_bytes(&text),
            Err(RecogError::ProfileParse { line: 0, .. })
        ));
        assert!(matches!(
            FontModel::read_from_reader(&mut text.as_slice()),
            Err(RecogError::ProfileParse { line: 0, .. })
        ));

        text.truncate(MAX_INPUT_SIZE);
        let font = FontModel::read_from_reader(&mut text.as_slice()).unwrap();
        assert_eq!(font.len(), 1);
    }

    #[test]
    fn test_font_path() {
        assert_eq!(
            font_path(DEFAULT_FONT_DIR, "serif"),
            Path::new("font").join("serif.font")
        );
    }

    #[test]
    fn test_load_missing_is_empty() {
        let font = FontModel::load_or_empty("/nonexistent/dir/none.font");
        assert!(font.is_empty());
    }
}
