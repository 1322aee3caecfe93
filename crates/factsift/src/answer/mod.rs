//! The answering capability consulted once per chunk.
//!
//! An [`Answerer`] turns a prompt into free-form text or fails. Failures are
//! ordinary values ([`AnswerError`]) so the extractor can log them and move on
//! to the next chunk.

pub mod chat;

use async_trait::async_trait;

pub use chat::ChatAnswerer;

/// Text returned by the answering capability for one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answer {
    pub content: String,
}

impl Answer {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Why a single answering call failed.
#[derive(thiserror::Error, Debug)]
pub enum AnswerError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Answering failed: {0}")]
    Other(String),
}

/// A language-model service (or stand-in) that answers prompts.
#[async_trait]
pub trait Answerer: Send + Sync {
    /// Answer one prompt.
    async fn answer(&self, prompt: &str) -> Result<Answer, AnswerError>;
}
