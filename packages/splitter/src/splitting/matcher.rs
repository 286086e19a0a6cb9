//! Compiled separator patterns.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// How a separator matches text.
#[derive(Debug, Clone)]
enum Matcher {
    /// The empty separator: splits between every grapheme.
    Units,
    /// A compiled `(<separator>)` pattern.
    Pattern(Regex),
    /// A separator that failed to compile. Never matches.
    Invalid,
}

/// A separator compiled once per splitter.
#[derive(Debug, Clone)]
pub struct Separator {
    source: String,
    matcher: Matcher,
}

impl Separator {
    /// Compile a separator.
    ///
    /// Non-empty separators are regular-expression fragments. A fragment that
    /// does not compile is kept, but never matches.
    pub fn compile(source: impl Into<String>) -> Self {
        let source = source.into();
        let matcher = if source.is_empty() {
            Matcher::Units
        } else {
            match Regex::new(&format!("({source})")) {
                Ok(regex) => Matcher::Pattern(regex),
                Err(e) => {
                    tracing::warn!(
                        separator = %source.escape_debug(),
                        error = %e,
                        "Separator is not a valid pattern, it will never match"
                    );
                    Matcher::Invalid
                }
            }
        };
        Self { source, matcher }
    }

    /// The empty separator.
    #[must_use]
    pub fn units() -> Self {
        Self {
            source: String::new(),
            matcher: Matcher::Units,
        }
    }

    /// The separator as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the separator compiled (the empty separator always does).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self.matcher, Matcher::Invalid)
    }

    /// Whether the separator occurs anywhere in `text`.
    ///
    /// The empty separator matches every text, including the empty one.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match &self.matcher {
            Matcher::Units => true,
            Matcher::Pattern(regex) => regex.is_match(text),
            Matcher::Invalid => false,
        }
    }

    /// Split `text` into fragments that end with the matched separator text.
    ///
    /// Concatenating the fragments reproduces `text`. The last fragment has no
    /// trailing separator unless `text` ends with one, and no empty fragment is
    /// ever produced. Zero-width matches are ignored.
    #[must_use]
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match &self.matcher {
            Matcher::Units => text.graphemes(true).collect(),
            Matcher::Pattern(regex) => {
                let mut fragments = Vec::new();
                let mut start = 0;
                for m in regex.find_iter(text) {
                    if m.start() == m.end() {
                        continue;
                    }
                    fragments.push(&text[start..m.end()]);
                    start = m.end();
                }
                if start < text.len() {
                    fragments.push(&text[start..]);
                }
                fragments
            }
            Matcher::Invalid => {
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_keeps_separator_as_suffix() {
        let sep = Separator::compile("\n\n");
        assert_eq!(sep.split("a\n\nb\n\nc"), vec!["a\n\n", "b\n\n", "c"]);
    }

    #[test]
    fn test_split_trailing_separator_not_dropped() {
        let sep = Separator::compile("\n");
        assert_eq!(sep.split("a\nb\n"), vec!["a\n", "b\n"]);
        assert_eq!(sep.split("\n\n"), vec!["\n", "\n"]);
    }

    #[test]
    fn test_split_reconstructs_text() {
        let text = "  leading spaces, a\tTAB and  double  spaces ";
        for source in [" ", r"\s+", ",", "x", ""] {
            let sep = Separator::compile(source);
            assert_eq!(sep.split(text).concat(), text, "separator {source:?}");
        }
    }

    #[test]
    fn test_split_regex_separator_retains_matched_text() {
        let sep = Separator::compile(r"[.!?] ");
        assert_eq!(
            sep.split("One. Two! Three? Four"),
            vec!["One. ", "Two! ", "Three? ", "Four"]
        );
    }

    #[test]
    fn test_split_units_uses_graphemes() {
        let sep = Separator::compile("");
        assert_eq!(sep.split("ae\u{301}b"), vec!["a", "e\u{301}", "b"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(Separator::compile("\n").split("").is_empty());
        assert!(Separator::compile("").split("").is_empty());
        assert!(Separator::compile("(").split("").is_empty());
    }

    #[test]
    fn test_zero_width_matches_are_ignored() {
        let sep = Separator::compile("x*");
        assert!(sep.is_match("abc"));
        assert_eq!(sep.split("abc"), vec!["abc"]);
        assert_eq!(sep.split("axxbc"), vec!["axx", "bc"]);
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let sep = Separator::compile("(unclosed");
        assert!(!sep.is_valid());
        assert!(!sep.is_match("(unclosed"));
        assert_eq!(sep.split("text"), vec!["text"]);
    }

    #[test]
    fn test_metacharacters_use_regex_semantics() {
        let dot = Separator::compile(".");
        assert!(dot.is_match("no dots here"));

        let escaped = Separator::compile(regex::escape("."));
        assert!(!escaped.is_match("no dots here"));
        assert!(escaped.is_match("a.b"));
    }

    #[test]
    fn test_units_matches_everything() {
        let sep = Separator::units();
        assert!(sep.is_match(""));
        assert!(sep.is_match("abc"));
        assert_eq!(sep.as_str(), "");
    }
}
