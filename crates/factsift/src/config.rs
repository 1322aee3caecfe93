//! Configuration for the pipeline and its collaborators.
//!
//! Plain structs with defaults; the binary fills them from flags and
//! environment variables.

use std::path::PathBuf;

use crate::chunk::DEFAULT_CHUNK_SIZE;

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Browser rendering and readiness settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Upper bound for the navigation itself.
    pub navigation_timeout_ms: u64,
    /// Upper bound for waiting on `document.readyState == "complete"`.
    pub ready_timeout_ms: u64,
    /// Extra delay after readiness for client-side rendering to settle.
    pub settle_ms: u64,
    /// Explicit browser binary; otherwise it is searched for.
    pub chromium_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            navigation_timeout_ms: 30_000,
            ready_timeout_ms: 10_000,
            settle_ms: 5_000,
            chromium_path: None,
        }
    }
}

/// Chat-completions service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_ms: 60_000,
        }
    }
}

/// Settings owned by the pipeline driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Chunk threshold in characters; must be at least 1.
    pub chunk_size: usize,
    pub render: RenderConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            render: RenderConfig::default(),
        }
    }
}
