//! Turn rendered HTML into a deduplicated, length-ranked text stream.
//!
//! The walk skips whole subtrees rooted at [`STRIPPED_TAGS`], takes the text of
//! every element in [`CONTENT_TAGS`], and keeps the candidates that are long
//! enough and not boilerplate (see [`crate::noise`]). Ranking is a separate,
//! explicit step ([`rank_blocks`]): duplicates collapse to their first
//! occurrence, then blocks are stably ordered longest first. The extractor
//! stops at the first chunk that yields an answer, so dense blocks go first.
//!
//! `scraper` types are `!Send`. Everything here is synchronous and nothing
//! from the parsed tree escapes a call.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Node};

use crate::noise::is_irrelevant;

/// Elements whose entire subtree is dropped before any text is read.
pub const STRIPPED_TAGS: &[&str] = &[
    "script", "style", "meta", "noscript", "iframe", "link", "svg", "footer", "header", "aside",
    "nav", "form", "button",
];

/// Elements whose text becomes a candidate block.
pub const CONTENT_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "p", "span", "li", "div", "td", "th"];

/// Blocks of this many characters or fewer are discarded.
pub const MIN_BLOCK_CHARS: usize = 10;

/// Normalize rendered markup into a newline-joined stream of blocks.
///
/// Empty markup, or markup with no surviving blocks, yields an empty string.
pub fn normalize(markup: &str) -> String {
    rank_blocks(extract_blocks(markup)).join("\n")
}

/// Candidate blocks in document order, already cleaned and filtered.
///
/// May contain duplicates; [`rank_blocks`] collapses them.
pub fn extract_blocks(markup: &str) -> Vec<String> {
    if markup.trim().is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(markup);
    if !document.errors.is_empty() {
        tracing::debug!(
            "html parser recovered from {} error(s)",
            document.errors.len()
        );
    }

    let mut blocks = Vec::new();
    walk(document.root_element(), &mut blocks);
    blocks
}

/// Deduplicate (first occurrence wins) and sort by descending character length.
///
/// The sort is stable, so blocks of equal length keep their input order.
pub fn rank_blocks(blocks: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = blocks
        .into_iter()
        .filter(|block| seen.insert(block.clone()))
        .collect();
    unique.sort_by_cached_key(|block| std::cmp::Reverse(block.chars().count()));
    unique
}

/// Lower-case, trim, and filter one candidate.
///
/// Internal whitespace is left alone; the chunker splits on it anyway.
pub fn clean_block(raw: &str) -> Option<String> {
    let text = raw.trim().to_lowercase();

    if text.chars().count() <= MIN_BLOCK_CHARS || is_irrelevant(&text) {
        return None;
    }
    Some(text)
}

fn is_stripped(element: &ElementRef<'_>) -> bool {
    STRIPPED_TAGS.contains(&element.value().name())
}

fn is_content(element: &ElementRef<'_>) -> bool {
    CONTENT_TAGS.contains(&element.value().name())
}

fn walk(element: ElementRef<'_>, blocks: &mut Vec<String>) {
    if is_stripped(&element) {
        return;
    }

    if is_content(&element) {
        let mut parts = Vec::new();
        collect_text(element, &mut parts);
        if let Some(block) = clean_block(&parts.concat()) {
            blocks.push(block);
        }
    }

    for child in element.children() {
        if let Some(child) = ElementRef::wrap(child) {
            walk(child, blocks);
        }
    }
}

/// Trimmed, non-empty descendant text nodes of `element`, skipping stripped
/// subtrees. Callers concatenate them with no separator.
fn collect_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    if !is_stripped(&child) {
                        collect_text(child, parts);
                    }
                }
            }
            _ => {}
        }
    }
}
