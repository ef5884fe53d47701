use crate::error::{AirportsError, Result};
use crate::utils::constants::AIRPORTS_URL;
use crate::utils::progress::ProgressReporter;
use encoding_rs::UTF_8;
use tracing::{debug, info};

/// Fetches the dataset body over HTTP and decodes it to text.
pub struct RemoteSource {
    url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new() -> Result<Self> {
        Self::with_url(AIRPORTS_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue a single GET and return the whole body as text.
    ///
    /// No timeout and no retry: any transport failure or non-success status
    /// ends the fetch.
    pub async fn fetch(&self, progress: &ProgressReporter) -> Result<String> {
        info!(url = %self.url, "Fetching airports dataset");
        progress.set_message(&format!("Downloading {}", self.url));

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AirportsError::HttpStatus {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Response body received");
        progress.finish_with_message(&format!("Downloaded {} bytes", body.len()));

        decode_body(&body)
    }
}

/// Strict UTF-8 decode. A leading BOM is kept as U+FEFF.
pub fn decode_body(bytes: &[u8]) -> Result<String> {
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(AirportsError::Decode { bytes: bytes.len() })
}
