//! Render → normalize → chunk → extract, in strict sequence.

use std::sync::Arc;

use tracing::info;

use crate::answer::Answerer;
use crate::chunk::chunk;
use crate::config::PipelineConfig;
use crate::extract::extract_traced;
use crate::normalize::normalize;
use crate::renderer::{render_page, Renderer};
use crate::types::{FactsiftError, FactsiftResult, ScrapeReport, ScrapeRequest};

/// The pipeline driver. Owns its collaborators for the lifetime of a process
/// (or server) and runs one request at a time per call.
pub struct Pipeline {
    renderer: Arc<dyn Renderer>,
    answerer: Arc<dyn Answerer>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(
        renderer: Arc<dyn Renderer>,
        answerer: Arc<dyn Answerer>,
        config: PipelineConfig,
    ) -> FactsiftResult<Self> {
        if config.chunk_size == 0 {
            return Err(FactsiftError::InvalidChunkSize(config.chunk_size));
        }
        Ok(Self {
            renderer,
            answerer,
            config,
        })
    }

    pub fn renderer(&self) -> &Arc<dyn Renderer> {
        &self.renderer
    }

    /// Validate the inputs, then run. Nothing is rendered if either is missing.
    pub async fn scrape(&self, url: Option<&str>, query: Option<&str>) -> FactsiftResult<ScrapeReport> {
        let request = ScrapeRequest::new(url, query)?;
        self.run(&request).await
    }

    /// Run the full pipeline for a validated request.
    ///
    /// A rendering failure aborts the run; answering failures never do.
    pub async fn run(&self, request: &ScrapeRequest) -> FactsiftResult<ScrapeReport> {
        let markup = render_page(self.renderer.as_ref(), &request.url, &self.config.render)
            .await
            .map_err(|e| FactsiftError::Render(format!("{e:#}")))?;

        let stream = normalize(&markup);
        drop(markup);
        info!(
            "normalized page into {} block(s), {} chars",
            stream.lines().count(),
            stream.chars().count()
        );

        let chunks = chunk(&stream, self.config.chunk_size)?;
        info!("split content into {} chunk(s)", chunks.len());

        let extraction = extract_traced(&chunks, &request.query, self.answerer.as_ref()).await;
        if !extraction.failures.is_empty() {
            info!(
                "{} of {} queried chunk(s) failed",
                extraction.failures.len(),
                extraction.chunks_queried
            );
        }

        Ok(ScrapeReport::new(&request.url, &request.query, &extraction.result))
    }
}
