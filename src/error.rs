use thiserror::Error;

pub type Result<T> = std::result::Result<T, AirportsError>;

#[derive(Error, Debug)]
pub enum AirportsError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error fetching {url}: {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Response body is not valid UTF-8 ({bytes} bytes)")]
    Decode { bytes: usize },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Progress template error: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}
