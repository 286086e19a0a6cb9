//! Pluggable length measurement for chunks.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::SplitterError;

/// Measures the "size" of a piece of text for comparison against the chunk size.
///
/// The function must be pure: the splitter may call it many times on the
/// same input and assumes it always returns the same value.
#[derive(Clone)]
pub struct LengthFunction {
    unit: &'static str,
    measure: Arc<dyn Fn(&str) -> usize + Send + Sync>,
}

impl LengthFunction {
    /// Wrap a custom measure, e.g. a tokenizer's token count.
    pub fn new(measure: impl Fn(&str) -> usize + Send + Sync + 'static) -> Self {
        Self {
            unit: "custom",
            measure: Arc::new(measure),
        }
    }

    /// Count extended grapheme clusters (user-perceived characters).
    #[must_use]
    pub fn graphemes() -> Self {
        Self {
            unit: "graphemes",
            measure: Arc::new(|text: &str| text.graphemes(true).count()),
        }
    }

    /// Count Unicode scalar values.
    #[must_use]
    pub fn chars() -> Self {
        Self {
            unit: "chars",
            measure: Arc::new(|text: &str| text.chars().count()),
        }
    }

    /// Count UTF-8 bytes.
    #[must_use]
    pub fn bytes() -> Self {
        Self {
            unit: "bytes",
            measure: Arc::new(|text: &str| text.len()),
        }
    }

    /// Measure `text`.
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        (self.measure)(text)
    }

    /// Name of the unit being counted.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        self.unit
    }
}

impl Default for LengthFunction {
    fn default() -> Self {
        Self::graphemes()
    }
}

impl fmt::Debug for LengthFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LengthFunction")
            .field("unit", &self.unit)
            .finish_non_exhaustive()
    }
}

/// Built-in length units, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    Graphemes,
    Chars,
    Bytes,
}

impl LengthUnit {
    /// Build the corresponding length function.
    #[must_use]
    pub fn length_function(&self) -> LengthFunction {
        match self {
            Self::Graphemes => LengthFunction::graphemes(),
            Self::Chars => LengthFunction::chars(),
            Self::Bytes => LengthFunction::bytes(),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = SplitterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "graphemes" | "grapheme" => Ok(Self::Graphemes),
            "chars" | "char" | "characters" => Ok(Self::Chars),
            "bytes" | "byte" => Ok(Self::Bytes),
            other => Err(SplitterError::Config(format!(
                "unknown length unit '{other}', expected graphemes, chars or bytes"
            ))),
        }
    }
}
