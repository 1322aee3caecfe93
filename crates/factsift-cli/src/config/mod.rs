//! Runtime options shared by every mode, resolved from flags and environment.

use std::path::PathBuf;

use clap::Args;

use factsift::config::{DEFAULT_API_BASE, DEFAULT_MODEL};
use factsift::{AnswerConfig, PipelineConfig, RenderConfig, DEFAULT_CHUNK_SIZE};

/// Pipeline, browser, and model settings.
///
/// Each flag falls back to an environment variable, then to the default.
#[derive(Args, Debug, Clone)]
pub struct RuntimeOpts {
    /// Minimum chunk length in characters.
    #[arg(long, env = "FACTSIFT_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE, global = true)]
    pub chunk_size: usize,

    /// Delay after the document is ready, for client-side rendering to settle.
    #[arg(long, env = "FACTSIFT_SETTLE_MS", default_value_t = 5_000, global = true)]
    pub settle_ms: u64,

    /// Navigation timeout in milliseconds.
    #[arg(long, env = "FACTSIFT_NAV_TIMEOUT_MS", default_value_t = 30_000, global = true)]
    pub nav_timeout_ms: u64,

    /// Upper bound on waiting for `document.readyState == "complete"`.
    #[arg(long, env = "FACTSIFT_READY_TIMEOUT_MS", default_value_t = 10_000, global = true)]
    pub ready_timeout_ms: u64,

    /// Path to a Chrome/Chromium/Edge binary.
    #[arg(long = "chromium", env = "FACTSIFT_CHROMIUM_PATH", global = true)]
    pub chromium_path: Option<PathBuf>,

    /// Chat model identifier.
    #[arg(long, env = "FACTSIFT_MODEL", default_value = DEFAULT_MODEL, global = true)]
    pub model: String,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long, env = "FACTSIFT_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// API key for the chat service.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Per-request timeout for the chat service in milliseconds.
    #[arg(long, env = "FACTSIFT_ANSWER_TIMEOUT_MS", default_value_t = 60_000, global = true)]
    pub answer_timeout_ms: u64,
}

impl RuntimeOpts {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            navigation_timeout_ms: self.nav_timeout_ms,
            ready_timeout_ms: self.ready_timeout_ms,
            settle_ms: self.settle_ms,
            chromium_path: self.chromium_path.clone(),
        }
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            chunk_size: self.chunk_size,
            render: self.render_config(),
        }
    }

    pub fn answer_config(&self) -> AnswerConfig {
        AnswerConfig {
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone().filter(|k| !k.trim().is_empty()),
            timeout_ms: self.answer_timeout_ms,
        }
    }
}

/// Logging options.
#[derive(Args, Debug, Clone)]
pub struct LogOpts {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl LogOpts {
    /// Install the global subscriber. Logs always go to stderr.
    pub fn init(&self) {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        if self.log_json {
            builder.json().init();
        } else {
            builder.init();
        }
    }
}
