//! Named separator sets.
//!
//! A separator set is opaque configuration data: a name and an ordered list
//! of separator patterns. The splitter never interprets the content type a
//! set is meant for.

use std::collections::BTreeMap;

use crate::config::DEFAULT_SEPARATORS;
use crate::error::{Result, SplitterError};

/// A named, ordered list of separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    /// Name used to look the set up.
    pub name: String,

    /// Separators, coarsest first.
    pub separators: Vec<String>,
}

impl SeparatorSet {
    /// Create an empty separator set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            separators: Vec::new(),
        }
    }

    /// Set the separators.
    #[must_use]
    pub fn with_separators(
        mut self,
        separators: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }
}

/// Registry of separator sets, keyed by name.
pub struct SeparatorSetRegistry {
    sets: BTreeMap<String, SeparatorSet>,
}

impl SeparatorSetRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sets: BTreeMap::new(),
        }
    }

    /// Register a separator set, replacing any set with the same name.
    pub fn register(&mut self, set: SeparatorSet) {
        self.sets.insert(set.name.clone(), set);
    }

    /// Get a separator set by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SeparatorSet> {
        self.sets.get(name)
    }

    /// Get a separator set by name, failing for unknown names.
    pub fn require(&self, name: &str) -> Result<&SeparatorSet> {
        self.get(name)
            .ok_or_else(|| SplitterError::UnknownSeparatorSet(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

impl Default for SeparatorSetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with the built-in separator sets.
///
/// - `plain`: paragraphs, lines, words, graphemes
/// - `markdown`: code fences and horizontal rules before the plain list
///
/// A separator stays at the end of the fragment before it, so only markers
/// that close a section are listed. Headings start a section and are reached
/// through the paragraph and line breaks in front of them, which keeps the
/// `#` marker with its title.
#[must_use]
pub fn default_separator_sets() -> SeparatorSetRegistry {
    let mut registry = SeparatorSetRegistry::new();

    registry.register(SeparatorSet::new("plain").with_separators(DEFAULT_SEPARATORS));

    registry.register(
        SeparatorSet::new("markdown").with_separators(
            [
                r"```\n",
                r"\n\*\*\*+\n",
                r"\n---+\n",
                r"\n___+\n",
            ]
            .into_iter()
            .chain(DEFAULT_SEPARATORS),
        ),
    );

    registry
}
