//! Core data types shared across the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Text reported in `extracted_data` when no chunk produced an answer.
pub const NOT_FOUND_SENTINEL: &str = "No relevant data found";

/// Message of the record emitted when the URL or query is missing.
pub const MISSING_INPUT_MESSAGE: &str = "Missing URL or Query parameter";

/// A bounded slice of the normalized stream, handed to the answering capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk in the produced sequence (0-based).
    pub index: usize,
    /// Space-joined words.
    pub text: String,
}

impl Chunk {
    /// Joined length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Iterate the words of this chunk in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// Terminal outcome of the sequential extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Trimmed, non-empty answer from the first chunk that produced one.
    Found(String),
    /// Every chunk was consulted (or there were none) without an answer.
    NotFound,
}

impl ExtractionResult {
    /// The answer, or the not-found sentinel text.
    pub fn as_text(&self) -> &str {
        match self {
            ExtractionResult::Found(answer) => answer,
            ExtractionResult::NotFound => NOT_FOUND_SENTINEL,
        }
    }
}

/// Output record for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeReport {
    pub url: String,
    pub query: String,
    pub extracted_data: String,
}

impl ScrapeReport {
    pub fn new(url: &str, query: &str, result: &ExtractionResult) -> Self {
        Self {
            url: url.to_string(),
            query: query.to_string(),
            extracted_data: result.as_text().to_string(),
        }
    }
}

/// Record emitted instead of a report when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn missing_input() -> Self {
        Self {
            error: MISSING_INPUT_MESSAGE.to_string(),
        }
    }
}

/// A validated (url, query) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub query: String,
}

impl ScrapeRequest {
    /// Build a request, rejecting a missing or blank URL or query.
    ///
    /// Blankness is judged on the trimmed text; the values are kept as given.
    pub fn new(url: Option<&str>, query: Option<&str>) -> FactsiftResult<Self> {
        let url = url.filter(|s| !s.trim().is_empty());
        let query = query.filter(|s| !s.trim().is_empty());
        match (url, query) {
            (Some(url), Some(query)) => Ok(Self {
                url: url.to_string(),
                query: query.to_string(),
            }),
            _ => Err(FactsiftError::MissingInput),
        }
    }
}

/// Errors that abort a pipeline run.
#[derive(thiserror::Error, Debug)]
pub enum FactsiftError {
    #[error("{MISSING_INPUT_MESSAGE}")]
    MissingInput,

    #[error("Invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),

    #[error("Browser not found: {0}")]
    BrowserNotFound(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience result type.
pub type FactsiftResult<T> = Result<T, FactsiftError>;
