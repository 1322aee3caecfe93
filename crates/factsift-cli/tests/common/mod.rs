//! Shared doubles: a renderer serving fixed markup and a fixed-reply answerer.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use factsift::renderer::NavigationResult;
use factsift::{
    Answer, AnswerError, Answerer, Pipeline, PipelineConfig, RenderConfig, RenderContext, Renderer,
};

pub const LISTING: &str = r#"
<html><body>
  <nav><p>Home / Apartments / Lahore</p></nav>
  <div><h1>Two bedroom apartment in Gulberg</h1>
  <p>Monthly rent is Rs. 85,000 excluding maintenance</p></div>
  <footer><p>All rights reserved by the portal</p></footer>
</body></html>
"#;

pub struct StaticRenderer {
    markup: Option<String>,
    pub renders: Arc<AtomicUsize>,
    pub shutdowns: AtomicUsize,
}

impl StaticRenderer {
    pub fn serving(markup: &str) -> Self {
        Self {
            markup: Some(markup.to_string()),
            renders: Arc::new(AtomicUsize::new(0)),
            shutdowns: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            markup: None,
            renders: Arc::new(AtomicUsize::new(0)),
            shutdowns: AtomicUsize::new(0),
        }
    }

    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }

    pub fn shutdown_count(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }
}

struct StaticContext {
    markup: Option<String>,
    renders: Arc<AtomicUsize>,
}

#[async_trait]
impl Renderer for StaticRenderer {
    async fn new_context(&self) -> anyhow::Result<Box<dyn RenderContext>> {
        Ok(Box::new(StaticContext {
            markup: self.markup.clone(),
            renders: Arc::clone(&self.renders),
        }))
    }
    async fn shutdown(&self) -> anyhow::Result<()> {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl RenderContext for StaticContext {
    async fn navigate(&mut self, url: &str, _timeout_ms: u64) -> anyhow::Result<NavigationResult> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        match self.markup {
            Some(_) => Ok(NavigationResult {
                final_url: url.to_string(),
                load_time_ms: 0,
            }),
            None => anyhow::bail!("navigation to {url} failed: net::ERR_NAME_NOT_RESOLVED"),
        }
    }
    async fn execute_js(&self, _script: &str) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::json!("complete"))
    }
    async fn get_html(&self) -> anyhow::Result<String> {
        Ok(self.markup.clone().unwrap_or_default())
    }
    async fn close(self: Box<Self>) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Always replies with the same content.
pub struct FixedAnswerer(pub &'static str);

#[async_trait]
impl Answerer for FixedAnswerer {
    async fn answer(&self, _prompt: &str) -> Result<Answer, AnswerError> {
        Ok(Answer::new(self.0))
    }
}

pub fn pipeline(renderer: Arc<StaticRenderer>, reply: &'static str) -> Pipeline {
    let config = PipelineConfig {
        chunk_size: 1000,
        render: RenderConfig {
            settle_ms: 0,
            ..RenderConfig::default()
        },
    };
    Pipeline::new(renderer, Arc::new(FixedAnswerer(reply)), config).expect("valid config")
}
