//! Recursive splitter that picks separators by priority and merges the pieces.

use super::matcher::Separator;
use super::merge::GreedyMerger;
use super::selector::select_separator;
use super::TextSplitter;
use crate::config::SplitterConfig;
use crate::error::Result;
use crate::presets::SeparatorSet;

/// Splits text on the highest-priority separator present, recursing into
/// fragments that are still too long with the lower-priority separators.
///
/// Separators are compiled once, at construction. A splitter holds no
/// mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    config: SplitterConfig,
    separators: Vec<Separator>,
    merger: GreedyMerger,
}

impl RecursiveSplitter {
    /// Create a splitter, validating the configuration.
    ///
    /// # Examples
    /// ```
    /// use recursive_splitter::{RecursiveSplitter, SplitterConfig};
    ///
    /// let splitter = RecursiveSplitter::new(
    ///     SplitterConfig::new().with_chunk_size(5).with_chunk_overlap(0),
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     splitter.split_text("AAAA\n\nBBBB\n\nCCCC"),
    ///     vec!["AAAA", "BBBB", "CCCC"]
    /// );
    /// ```
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate()?;

        let separators = config.separators.iter().map(Separator::compile).collect();
        let merger = GreedyMerger::new(
            config.chunk_size,
            config.chunk_overlap,
            config.length_function.clone(),
            config.strip_whitespace,
        );

        Ok(Self {
            config,
            separators,
            merger,
        })
    }

    /// Create a splitter using the separators of a named set.
    ///
    /// Any separators already in `config` are replaced.
    pub fn from_separator_set(set: &SeparatorSet, config: SplitterConfig) -> Result<Self> {
        Self::new(config.with_separator_set(set))
    }

    /// The configuration this splitter was built from.
    #[must_use]
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split `text` into chunks.
    ///
    /// Chunks are at most `chunk_size` long, except fragments that no
    /// separator could split further; those are returned unchanged.
    #[must_use]
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split(text, &self.separators)
    }

    fn split(&self, text: &str, separators: &[Separator]) -> Vec<String> {
        let selection = select_separator(text, separators);
        tracing::trace!(
            separator = %selection.separator_str().escape_debug(),
            remaining = selection.remaining.len(),
            "Selected separator"
        );

        let mut chunks = Vec::new();
        let mut good_splits: Vec<&str> = Vec::new();

        for fragment in selection.fragments(text) {
            // Strict: a fragment exactly chunk_size long is not merged.
            if self.config.length_function.measure(fragment) < self.config.chunk_size {
                good_splits.push(fragment);
                continue;
            }

            if !good_splits.is_empty() {
                chunks.extend(self.merger.merge(&good_splits, ""));
                good_splits.clear();
            }

            if selection.remaining.is_empty() {
                tracing::debug!(
                    length = self.config.length_function.measure(fragment),
                    chunk_size = self.config.chunk_size,
                    "No separator left to split fragment, keeping it whole"
                );
                chunks.push(fragment.to_string());
            } else {
                chunks.extend(self.split(fragment, selection.remaining));
            }
        }

        if !good_splits.is_empty() {
            chunks.extend(self.merger.merge(&good_splits, ""));
        }

        chunks
    }
}

impl TextSplitter for RecursiveSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        RecursiveSplitter::split_text(self, text)
    }
}
