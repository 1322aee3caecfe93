//! Greedy word-boundary chunking of the normalized stream.

use crate::types::{Chunk, FactsiftError, FactsiftResult};

/// Default chunk threshold in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Split `stream` into chunks of at least `size` characters.
///
/// Words are accumulated in order; as soon as the space-joined buffer reaches
/// `size` it is emitted. The remainder, if any, becomes a final shorter chunk.
/// Words are never split, so a single word longer than `size` is a chunk of
/// its own.
pub fn chunk(stream: &str, size: usize) -> FactsiftResult<Vec<Chunk>> {
    if size == 0 {
        return Err(FactsiftError::InvalidChunkSize(size));
    }

    let mut chunks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    // Joined length of `buffer`, spaces included.
    let mut joined_len = 0usize;

    for word in stream.split_whitespace() {
        let word_len = word.chars().count();
        joined_len += if buffer.is_empty() { word_len } else { word_len + 1 };
        buffer.push(word);

        if joined_len >= size {
            chunks.push(Chunk {
                index: chunks.len(),
                text: buffer.join(" "),
            });
            buffer.clear();
            joined_len = 0;
        }
    }

    if !buffer.is_empty() {
        chunks.push(Chunk {
            index: chunks.len(),
            text: buffer.join(" "),
        });
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of(chunks: &[Chunk]) -> Vec<&str> {
        chunks.iter().flat_map(|c| c.words()).collect()
    }

    /// `n` eight-character words, with a newline after every seventh.
    fn stream_of(n: usize) -> String {
        (0..n)
            .map(|i| format!("word{i:04}"))
            .enumerate()
            .map(|(i, w)| if i % 7 == 6 { format!("{w}\n") } else { format!("{w} ") })
            .collect::<String>()
    }

    #[test]
    fn test_2500_chars_make_three_chunks() {
        // 278 eight-char words joined by single spaces.
        let stream = stream_of(278);
        let joined: String = stream.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(joined.chars().count(), 2501);

        let chunks = chunk(&stream, 1000).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks[0].char_len() >= 1000);
        assert!(chunks[1].char_len() >= 1000);
        assert!(chunks[2].char_len() < 1000);
        assert_eq!(words_of(&chunks), stream.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn test_chunks_cover_every_word_in_order() {
        let stream = stream_of(500);
        for size in [1, 9, 50, 333, 1000, 10_000] {
            let chunks = chunk(&stream, size).unwrap();
            assert_eq!(
                words_of(&chunks),
                stream.split_whitespace().collect::<Vec<_>>(),
                "size {size}"
            );
            for c in &chunks[..chunks.len() - 1] {
                assert!(c.char_len() >= size, "size {size}: {}", c.char_len());
            }
            for (i, c) in chunks.iter().enumerate() {
                assert_eq!(c.index, i);
            }
        }
    }

    #[test]
    fn test_chunk_closes_as_soon_as_threshold_is_reached() {
        let chunks = chunk("aaaa bbbb cccc dddd", 9).unwrap();
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["aaaa bbbb", "cccc dddd"]);
    }

    #[test]
    fn test_long_word_is_never_split() {
        let long = "x".repeat(40);
        let stream = format!("tiny {long} end");
        let chunks = chunk(&stream, 10).unwrap();
        let first = format!("tiny {long}");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec![first.as_str(), "end"]);

        let solo = chunk(&long, 10).unwrap();
        assert_eq!(solo.len(), 1);
        assert_eq!(solo[0].text, long);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Each word is 5 chars but 10 bytes.
        let chunks = chunk("ééééé ééééé ééééé", 11).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "ééééé ééééé");
    }

    #[test]
    fn test_empty_stream_has_no_chunks() {
        assert!(chunk("", 1000).unwrap().is_empty());
        assert!(chunk(" \n\t ", 1000).unwrap().is_empty());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            chunk("some words", 0),
            Err(FactsiftError::InvalidChunkSize(0))
        ));
    }

    #[test]
    fn test_chunk_is_deterministic() {
        let stream = stream_of(321);
        assert_eq!(chunk(&stream, 120).unwrap(), chunk(&stream, 120).unwrap());
    }
}
