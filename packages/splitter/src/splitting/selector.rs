//! Separator selection.

use super::matcher::Separator;

/// Outcome of [`select_separator`].
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// Chosen separator. `None` is the empty-separator fallback used when no
    /// candidate occurs in the text.
    pub separator: Option<&'a Separator>,

    /// Strictly lower-priority separators following the chosen one.
    pub remaining: &'a [Separator],
}

impl<'a> Selection<'a> {
    /// Split `text` on the selected separator.
    #[must_use]
    pub fn fragments<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self.separator {
            Some(separator) => separator.split(text),
            None => Separator::units().split(text),
        }
    }

    /// The selected separator as configured (`""` for the fallback).
    #[must_use]
    pub fn separator_str(&self) -> &'a str {
        self.separator.map_or("", Separator::as_str)
    }
}

/// Find the first separator, in priority order, that occurs in `text`.
///
/// Separators that failed to compile are skipped. If nothing matches, the
/// empty separator is selected with nothing remaining.
#[must_use]
pub fn select_separator<'a>(text: &str, separators: &'a [Separator]) -> Selection<'a> {
    match separators.iter().position(|s| s.is_match(text)) {
        Some(index) => Selection {
            separator: Some(&separators[index]),
            remaining: &separators[index + 1..],
        },
        None => Selection {
            separator: None,
            remaining: &[],
        },
    }
}
