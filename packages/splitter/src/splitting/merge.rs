//! Greedy merging of small fragments into chunks.

use std::collections::VecDeque;

use crate::length::LengthFunction;

/// Packs consecutive fragments into chunks of at most `chunk_size`.
///
/// When a chunk is closed, the tail of it (whole fragments, at most
/// `chunk_overlap` long) opens the next chunk.
#[derive(Debug, Clone)]
pub struct GreedyMerger {
    chunk_size: usize,
    chunk_overlap: usize,
    length_function: LengthFunction,
    strip_whitespace: bool,
}

impl GreedyMerger {
    /// Create a merger. `chunk_overlap <= chunk_size` is assumed to be validated.
    #[must_use]
    pub fn new(
        chunk_size: usize,
        chunk_overlap: usize,
        length_function: LengthFunction,
        strip_whitespace: bool,
    ) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            length_function,
            strip_whitespace,
        }
    }

    /// Merge `fragments`, putting `glue` between consecutive fragments.
    ///
    /// The glue is counted in the running length only between fragments.
    /// Fragments that carry their own separator are merged with an empty glue.
    #[must_use]
    pub fn merge(&self, fragments: &[&str], glue: &str) -> Vec<String> {
        let glue_len = if glue.is_empty() {
            0
        } else {
            self.length_function.measure(glue)
        };
        // Glue only sits between fragments, never before the first one.
        let glue_after = |non_empty: bool| if non_empty { glue_len } else { 0 };

        let mut chunks = Vec::new();
        let mut window: VecDeque<(&str, usize)> = VecDeque::new();
        let mut total = 0;

        for &fragment in fragments {
            let len = self.length_function.measure(fragment);

            if total + len + glue_after(!window.is_empty()) > self.chunk_size {
                if total > self.chunk_size {
                    tracing::warn!(
                        length = total,
                        chunk_size = self.chunk_size,
                        "Created a chunk longer than the chunk size"
                    );
                }
                if !window.is_empty() {
                    self.push_chunk(&mut chunks, &window, glue);

                    // Keep the longest tail that is within the overlap and
                    // still leaves room for the incoming fragment.
                    while !window.is_empty() {
                        let crowds_next =
                            total > 0 && total + len + glue_after(true) > self.chunk_size;
                        if total <= self.chunk_overlap && !crowds_next {
                            break;
                        }
                        if let Some((_, first_len)) = window.pop_front() {
                            total -= first_len + glue_after(!window.is_empty());
                        }
                    }
                }
            }

            total += len + glue_after(!window.is_empty());
            window.push_back((fragment, len));
        }

        if !window.is_empty() {
            self.push_chunk(&mut chunks, &window, glue);
        }

        chunks
    }

    fn push_chunk(&self, chunks: &mut Vec<String>, window: &VecDeque<(&str, usize)>, glue: &str) {
        let joined = window
            .iter()
            .map(|(fragment, _)| *fragment)
            .collect::<Vec<_>>()
            .join(glue);

        let chunk = if self.strip_whitespace {
            joined.trim().to_string()
        } else {
            joined
        };

        if !chunk.is_empty() {
            chunks.push(chunk);
        }
    }
}
