//! Sequential, first-match extraction over chunks.
//!
//! Chunks are queried strictly in order and one at a time. The first
//! non-empty (trimmed) answer ends the scan; later chunks are never sent. A
//! failed call is logged and the scan moves on, so one bad chunk cannot sink
//! the whole query. Running out of chunks yields [`ExtractionResult::NotFound`].

use tracing::{debug, info, warn};

use crate::answer::Answerer;
use crate::types::{Chunk, ExtractionResult};

/// A chunk whose answering call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFailure {
    pub chunk_index: usize,
    pub reason: String,
}

/// Result of a scan, with the bookkeeping needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub result: ExtractionResult,
    /// Number of answering calls issued.
    pub chunks_queried: usize,
    /// Index of the chunk that produced the answer.
    pub answered_by: Option<usize>,
    pub failures: Vec<ChunkFailure>,
}

/// Build the prompt for one chunk.
pub fn build_prompt(query: &str, chunk_text: &str) -> String {
    format!(
        "Extract the following detail from the text:\n\
         - {query}\n\
         \n\
         {chunk_text}\n\
         \n\
         Answer in this format:\n\
         e.g. price: Rs.700 (write only what is asked)\n\
         For a price, always include the currency."
    )
}

/// Query `chunks` in order and return the first usable answer.
pub async fn extract(chunks: &[Chunk], query: &str, answerer: &dyn Answerer) -> ExtractionResult {
    extract_traced(chunks, query, answerer).await.result
}

/// Like [`extract`], but also reports which chunks were queried and which failed.
pub async fn extract_traced(chunks: &[Chunk], query: &str, answerer: &dyn Answerer) -> Extraction {
    let total = chunks.len();
    let mut failures = Vec::new();
    let mut chunks_queried = 0;

    for chunk in chunks {
        debug!("processing chunk {}/{total}", chunk.index + 1);
        chunks_queried += 1;

        let prompt = build_prompt(query, &chunk.text);
        match answerer.answer(&prompt).await {
            Ok(answer) => {
                let content = answer.content.trim();
                if !content.is_empty() {
                    info!("answer found in chunk {}/{total}", chunk.index + 1);
                    return Extraction {
                        result: ExtractionResult::Found(content.to_string()),
                        chunks_queried,
                        answered_by: Some(chunk.index),
                        failures,
                    };
                }
                debug!("chunk {} produced an empty answer", chunk.index + 1);
            }
            Err(e) => {
                warn!("answering failed for chunk {}/{total}: {e}", chunk.index + 1);
                failures.push(ChunkFailure {
                    chunk_index: chunk.index,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!("no answer in {total} chunk(s)");
    Extraction {
        result: ExtractionResult::NotFound,
        chunks_queried,
        answered_by: None,
        failures,
    }
}
