//! CLI and HTTP wiring around the `factsift` pipeline.

pub mod cli;
pub mod config;
pub mod doctor;
pub mod output;
pub mod server;

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use factsift::{ChatAnswerer, ChromiumRenderer, ErrorRecord, Pipeline, ScrapeRequest};

use crate::config::RuntimeOpts;

/// Launch the browser and build the chat client, then assemble the pipeline.
pub async fn launch_pipeline(opts: &RuntimeOpts) -> Result<Pipeline> {
    let answerer = ChatAnswerer::new(&opts.answer_config()).context("failed to build chat client")?;
    let renderer = ChromiumRenderer::launch(&opts.render_config()).await?;
    let pipeline = Pipeline::new(Arc::new(renderer), Arc::new(answerer), opts.pipeline_config())?;
    Ok(pipeline)
}

/// One-shot mode: validate, run, and write exactly one JSON object to `out`.
///
/// `launch` is only called once both inputs are present, so a missing
/// argument never starts a browser. Once launched, the renderer is shut down
/// whether or not the run succeeds.
pub async fn run_once<W, F, Fut>(
    url: Option<&str>,
    query: Option<&str>,
    out: &mut W,
    launch: F,
) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Pipeline>>,
{
    let request = match ScrapeRequest::new(url, query) {
        Ok(request) => request,
        Err(_) => return output::write_json(out, &ErrorRecord::missing_input()),
    };

    let pipeline = launch().await?;
    let report = pipeline.run(&request).await;
    if let Err(e) = pipeline.renderer().shutdown().await {
        tracing::warn!("renderer shutdown failed: {e:#}");
    }
    output::write_json(out, &report?)
}
