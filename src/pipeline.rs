use crate::error::Result;
use crate::models::{Dataset, TypedRow};
use crate::processors::ColumnCoercer;
use crate::readers::{DatasetReader, RemoteSource};
use crate::utils::constants::{AIRPORTS_URL, OUTPUT_FILE};
use crate::utils::progress::ProgressReporter;
use crate::writers::JsonWriter;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Where the JSON document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `airports.json` in the current working directory.
    pub fn default_file() -> Self {
        Destination::File(PathBuf::from(OUTPUT_FILE))
    }
}

/// Shape of each emitted row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowFormat {
    /// Every field as a JSON string, exactly as read.
    #[default]
    Raw,
    /// Id and altitude as integers; latitude, longitude and UTC offset as floats.
    Typed,
}

/// The converted dataset, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Raw(Dataset),
    Typed(Vec<TypedRow>),
}

impl Document {
    pub fn len(&self) -> usize {
        match self {
            Document::Raw(dataset) => dataset.len(),
            Document::Typed(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    pub rows: usize,
    pub bytes: usize,
}

/// Fetch, convert and emit, strictly in that order.
pub struct Pipeline {
    url: String,
    format: RowFormat,
    destination: Destination,
    show_progress: bool,
}

impl Pipeline {
    pub fn new(destination: Destination) -> Self {
        Self {
            url: AIRPORTS_URL.to_string(),
            format: RowFormat::Raw,
            destination,
            show_progress: false,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_format(mut self, format: RowFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub async fn run(&self) -> Result<PipelineSummary> {
        let body = self.fetch().await?;
        let document = self.convert(&body)?;

        let writer = JsonWriter::new();
        let bytes = match &self.destination {
            Destination::Stdout => writer.write_stdout(&document)?,
            Destination::File(path) => writer.write_file(&document, path)?,
        };

        let rows = document.len();
        info!(rows, bytes, "Pipeline complete");
        Ok(PipelineSummary { rows, bytes })
    }

    /// Fetch and convert without touching the destination; returns the JSON bytes.
    pub async fn fetch_and_convert(&self) -> Result<Vec<u8>> {
        let body = self.fetch().await?;
        let document = self.convert(&body)?;
        JsonWriter::new().to_bytes(&document)
    }

    async fn fetch(&self) -> Result<String> {
        let progress = ProgressReporter::new_spinner("Connecting...", !self.show_progress)?;
        let source = RemoteSource::with_url(self.url.as_str())?;
        source.fetch(&progress).await
    }

    /// Parse CSV text into the configured row format.
    pub fn convert(&self, body: &str) -> Result<Document> {
        let dataset = DatasetReader::new().parse_str(body)?;

        Ok(match self.format {
            RowFormat::Raw => Document::Raw(dataset),
            RowFormat::Typed => Document::Typed(ColumnCoercer::new().coerce_dataset(&dataset)),
        })
    }
}
