//! Line sources for the price book.
//!
//! The published price book lives behind a plain HTTP URL. A local copy can
//! be read instead by passing a file path as the locator.

use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::PricebookError;

/// The MLCC price book.
pub const DEFAULT_SOURCE_URL: &str = "http://www.dleg.state.mi.us/mlcc/pricebook/webprbk.txt";

/// Something that yields the raw lines of a price book.
pub trait LineSource {
    /// Human-readable name used in diagnostics.
    fn describe(&self) -> String;

    /// Retrieve every non-empty line, in order.
    fn fetch_lines(&self) -> Result<Vec<String>, PricebookError>;
}

/// Split text into its non-empty lines, dropping a trailing `\r`.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Price book served over HTTP. Every fetch performs a fresh GET.
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, PricebookError> {
        let url = url.into();
        let client = Client::builder()
            .build()
            .map_err(|e| PricebookError::SourceUnavailable {
                source_name: url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { url, client })
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    fn unavailable(&self, reason: impl ToString) -> PricebookError {
        PricebookError::SourceUnavailable {
            source_name: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

impl LineSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_lines(&self) -> Result<Vec<String>, PricebookError> {
        debug!(url = %self.url, "fetching price book");
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.unavailable(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.unavailable(format!("HTTP status {status}")));
        }

        let body = response.text().map_err(|e| self.unavailable(e))?;
        let lines = split_lines(&body);
        debug!(url = %self.url, bytes = body.len(), lines = lines.len(), "fetched price book");
        Ok(lines)
    }
}

/// Price book read from a local file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_lines(&self) -> Result<Vec<String>, PricebookError> {
        debug!(path = %self.path.display(), "reading price book");
        let bytes = fs::read(&self.path).map_err(|e| PricebookError::SourceUnavailable {
            source_name: self.describe(),
            reason: e.to_string(),
        })?;
        // The published file is not guaranteed to be UTF-8.
        Ok(split_lines(&String::from_utf8_lossy(&bytes)))
    }
}

fn is_url(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

/// Pick a source for `locator`: URLs go over HTTP, anything else is a path.
pub fn source_for(locator: &str) -> Result<Box<dyn LineSource>, PricebookError> {
    if is_url(locator) {
        Ok(Box::new(HttpSource::new(locator)?))
    } else {
        Ok(Box::new(FileSource::new(locator)))
    }
}

/// Fetch the lines behind `locator`.
pub fn fetch(locator: &str) -> Result<Vec<String>, PricebookError> {
    source_for(locator)?.fetch_lines()
}
