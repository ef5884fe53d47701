use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Serializes a whole document as compact, ASCII-only JSON in one call.
///
/// Characters above U+007F are written as `\uXXXX` escapes (surrogate pairs
/// outside the BMP). Nothing is appended after the document, not even a
/// newline.
pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, AsciiFormatter);
        value.serialize(&mut serializer)?;
        Ok(bytes)
    }

    /// Write to any sink; returns the number of bytes written.
    pub fn write_to<T, W>(&self, value: &T, mut writer: W) -> Result<usize>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        let bytes = self.to_bytes(value)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(bytes.len())
    }

    pub fn write_stdout<T: Serialize + ?Sized>(&self, value: &T) -> Result<usize> {
        let stdout = io::stdout();
        let written = self.write_to(value, stdout.lock())?;
        info!(bytes = written, "Wrote JSON to stdout");
        Ok(written)
    }

    /// Create or truncate `path` and write the document to it.
    pub fn write_file<T: Serialize + ?Sized>(&self, value: &T, path: &Path) -> Result<usize> {
        let file = File::create(path)?;
        let written = self.write_to(value, io::BufWriter::new(file))?;
        info!(bytes = written, path = %path.display(), "Wrote JSON file");
        Ok(written)
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact separators; non-ASCII string content escaped as UTF-16 units.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;

            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
