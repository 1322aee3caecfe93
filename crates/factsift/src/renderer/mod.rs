//! Renderer abstraction for browser-based page rendering.
//!
//! Defines the `Renderer` and `RenderContext` traits that abstract over
//! the browser engine (currently Chromium via chromiumoxide), and
//! [`render_page`], the single call the pipeline makes.

pub mod chromium;

use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::RenderConfig;

pub use chromium::{find_chromium, ChromiumRenderer};

/// Interval between `document.readyState` polls.
const READY_POLL_MS: u64 = 100;

/// Result of navigating to a URL.
#[derive(Debug, Clone)]
pub struct NavigationResult {
    /// The final URL after any redirects.
    pub final_url: String,
    /// Time taken to load the page in milliseconds.
    pub load_time_ms: u64,
}

/// A browser engine that can create rendering contexts.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Create a new browser context (tab).
    async fn new_context(&self) -> Result<Box<dyn RenderContext>>;
    /// Close the browser engine and wait for it to exit.
    async fn shutdown(&self) -> Result<()>;
}

/// A single browser context (tab) for rendering pages.
#[async_trait]
pub trait RenderContext: Send + Sync {
    /// Navigate to a URL with a timeout.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<NavigationResult>;
    /// Execute JavaScript in the page context and return the result.
    async fn execute_js(&self, script: &str) -> Result<serde_json::Value>;
    /// Get the full page HTML.
    async fn get_html(&self) -> Result<String>;
    /// Close this context.
    async fn close(self: Box<Self>) -> Result<()>;

    /// Poll until the document reports `complete`, for at most `timeout_ms`.
    ///
    /// Returns `false` if the deadline passed first.
    async fn wait_until_ready(&self, timeout_ms: u64) -> Result<bool> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);
        loop {
            let state = self.execute_js("document.readyState").await?;
            if state.as_str() == Some("complete") {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            tokio::time::sleep(Duration::from_millis(READY_POLL_MS)).await;
        }
    }
}

/// Render `url` in a fresh context and return the page's markup.
///
/// The context is closed whether or not loading succeeded. Errors are not
/// recovered here; a page that cannot be rendered fails the run.
pub async fn render_page(renderer: &dyn Renderer, url: &str, config: &RenderConfig) -> Result<String> {
    info!("loading page {url}");
    let mut ctx = renderer.new_context().await?;
    let html = load(ctx.as_mut(), url, config).await;

    if let Err(e) = ctx.close().await {
        debug!("failed to close render context: {e:#}");
    }

    let html = html?;
    info!("page loaded ({} bytes of markup)", html.len());
    Ok(html)
}

async fn load(ctx: &mut dyn RenderContext, url: &str, config: &RenderConfig) -> Result<String> {
    let nav = ctx.navigate(url, config.navigation_timeout_ms).await?;
    debug!("navigated to {} in {}ms", nav.final_url, nav.load_time_ms);

    if !ctx.wait_until_ready(config.ready_timeout_ms).await? {
        warn!(
            "document not complete after {}ms; reading markup anyway",
            config.ready_timeout_ms
        );
    }

    if config.settle_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.settle_ms)).await;
    }

    ctx.get_html().await
}
