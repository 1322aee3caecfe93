//! factsift: pull one requested fact out of a rendered web page.
//!
//! The page is rendered in a headless browser, its markup reduced to a
//! deduplicated text stream ordered longest block first, the stream cut into
//! word-aligned chunks, and each chunk put to a language model in turn until
//! one of them yields an answer.
//!
//! ```text
//! Renderer ──► normalize ──► chunk ──► extract ──► ScrapeReport
//!  (markup)     (stream)    (chunks)   (answer | "No relevant data found")
//! ```

pub mod answer;
pub mod chunk;
pub mod config;
pub mod extract;
pub mod noise;
pub mod normalize;
pub mod pipeline;
pub mod renderer;
pub mod types;

pub use answer::{Answer, AnswerError, Answerer, ChatAnswerer};
pub use chunk::{chunk, DEFAULT_CHUNK_SIZE};
pub use config::{AnswerConfig, PipelineConfig, RenderConfig};
pub use extract::{extract, extract_traced, Extraction};
pub use noise::is_irrelevant;
pub use normalize::normalize;
pub use pipeline::Pipeline;
pub use renderer::{render_page, ChromiumRenderer, RenderContext, Renderer};
pub use types::*;
