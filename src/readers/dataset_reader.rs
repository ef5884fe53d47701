use crate::error::Result;
use crate::models::{Dataset, Row};
use csv::ReaderBuilder;
use tracing::{debug, warn};

/// Parses CSV text into a [`Dataset`] using the default dialect.
///
/// There is no header row and rows may have any width; a short or long line
/// comes through as a short or long [`Row`]. A blank line becomes an empty
/// [`Row`], so every line of the body is accounted for.
pub struct DatasetReader {
    builder: ReaderBuilder,
}

/// One logical line of the body: blank, or the full text of one record
/// (several physical lines when a quoted field contains newlines).
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Blank,
    Record(&'a str),
}

impl DatasetReader {
    pub fn new() -> Self {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(false).flexible(true);
        Self { builder }
    }

    pub fn parse_str(&self, text: &str) -> Result<Dataset> {
        let mut rows = Vec::new();
        for segment in split_segments(text) {
            match segment {
                Segment::Blank => rows.push(Row::new(Vec::new())),
                Segment::Record(record_text) => {
                    let mut csv_reader = self.builder.from_reader(record_text.as_bytes());
                    for record in csv_reader.records() {
                        rows.push(Row::from(record?));
                    }
                }
            }
        }

        let dataset = Dataset::new(rows);
        debug!(rows = dataset.len(), "Parsed CSV body");

        let ragged = dataset.ragged_rows();
        if ragged > 0 {
            warn!(
                ragged,
                width = dataset.rows[0].len(),
                "Rows with inconsistent column counts passed through"
            );
        }

        Ok(dataset)
    }
}

impl Default for DatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Split on `\n` (terminators kept), joining lines that sit inside an open
/// quoted field.
fn split_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut state = QuoteState::default();
    let mut record_start: Option<usize> = None;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if record_start.is_none() && line.trim_end_matches(['\r', '\n']).is_empty() {
            segments.push(Segment::Blank);
            continue;
        }

        let start = *record_start.get_or_insert(line_start);
        state.feed(line);
        if !state.in_quotes {
            segments.push(Segment::Record(&text[start..offset]));
            record_start = None;
            state = QuoteState::default();
        }
    }

    // Unterminated quoted field: hand the rest to the csv reader as is
    if let Some(start) = record_start {
        segments.push(Segment::Record(&text[start..]));
    }

    segments
}

/// Tracks whether the scan position is inside a quoted field. A field is
/// quoted only when `"` is its first character; `""` inside it is an escape.
struct QuoteState {
    in_quotes: bool,
    field_start: bool,
}

impl Default for QuoteState {
    fn default() -> Self {
        Self {
            in_quotes: false,
            field_start: true,
        }
    }
}

impl QuoteState {
    fn feed(&mut self, line: &str) {
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if self.in_quotes {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                    } else {
                        self.in_quotes = false;
                    }
                }
                continue;
            }

            match ch {
                '"' if self.field_start => {
                    self.in_quotes = true;
                    self.field_start = false;
                }
                ',' | '\n' => self.field_start = true,
                _ => self.field_start = false,
            }
        }
    }
}
