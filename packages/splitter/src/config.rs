//! Configuration constants and validation for the splitter.

use crate::error::{Result, SplitterError};
use crate::length::LengthFunction;
use crate::presets::SeparatorSet;

/// Default maximum chunk length, in units of the length function.
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Default overlap between consecutive chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Default separators, coarsest first.
///
/// The trailing empty string splits between every grapheme and is the
/// last-resort separator.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Environment variable overriding the chunk size.
pub const ENV_CHUNK_SIZE: &str = "SPLITTER_CHUNK_SIZE";

/// Environment variable overriding the chunk overlap.
pub const ENV_CHUNK_OVERLAP: &str = "SPLITTER_CHUNK_OVERLAP";

/// Environment variable toggling whitespace stripping of chunks.
pub const ENV_STRIP_WHITESPACE: &str = "SPLITTER_STRIP_WHITESPACE";

/// Configuration of a recursive splitter.
///
/// Immutable once handed to a splitter; the splitter clones what it needs.
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    /// Separators in priority order, each treated as a regex fragment.
    pub separators: Vec<String>,

    /// Maximum chunk length (best-effort, see unsplittable fragments).
    pub chunk_size: usize,

    /// Target overlap between consecutive chunks of one merge run.
    pub chunk_overlap: usize,

    /// Measure compared against `chunk_size`.
    pub length_function: LengthFunction,

    /// Trim merged chunks and drop the ones that end up empty.
    pub strip_whitespace: bool,
}

impl SplitterConfig {
    /// Create a configuration with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.iter().map(|s| (*s).to_string()).collect(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            length_function: LengthFunction::default(),
            strip_whitespace: true,
        }
    }

    /// Defaults overlaid with `SPLITTER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Some(size) = env_var(ENV_CHUNK_SIZE) {
            config.chunk_size = parse_env(ENV_CHUNK_SIZE, &size)?;
        }
        if let Some(overlap) = env_var(ENV_CHUNK_OVERLAP) {
            config.chunk_overlap = parse_env(ENV_CHUNK_OVERLAP, &overlap)?;
        }
        if let Some(strip) = env_var(ENV_STRIP_WHITESPACE) {
            config.strip_whitespace = parse_bool_env(ENV_STRIP_WHITESPACE, &strip)?;
        }

        Ok(config)
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

    /// Take the separators from a named separator set.
    #[must_use]
    pub fn with_separator_set(mut self, set: &SeparatorSet) -> Self {
        self.separators = set.separators.clone();
        self
    }

    /// Set the chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the chunk overlap.
    #[must_use]
    pub fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Set the length function.
    #[must_use]
    pub fn with_length_function(mut self, length_function: LengthFunction) -> Self {
        self.length_function = length_function;
        self
    }

    /// Set whether merged chunks are trimmed.
    #[must_use]
    pub fn with_strip_whitespace(mut self, strip_whitespace: bool) -> Self {
        self.strip_whitespace = strip_whitespace;
        self
    }

    /// Validate the numeric parameters.
    ///
    /// # Returns
    /// * `Ok(())` if `0 < chunk_size` and `chunk_overlap <= chunk_size`
    /// * `Err(SplitterError::InvalidChunkSize)` for a zero chunk size
    /// * `Err(SplitterError::InvalidOverlap)` if the overlap exceeds the chunk size
    ///
    /// # Examples
    /// ```
    /// use recursive_splitter::config::SplitterConfig;
    ///
    /// assert!(SplitterConfig::new().validate().is_ok());
    /// assert!(SplitterConfig::new().with_chunk_size(100).with_chunk_overlap(100).validate().is_ok());
    /// assert!(SplitterConfig::new().with_chunk_size(100).with_chunk_overlap(101).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SplitterError::InvalidChunkSize);
        }
        if self.chunk_overlap > self.chunk_size {
            return Err(SplitterError::InvalidOverlap {
                chunk_overlap: self.chunk_overlap,
                chunk_size: self.chunk_size,
            });
        }
        Ok(())
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env(name: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| {
            SplitterError::Config(format!(
                "{name} must be a non-negative integer, got '{value}'"
            ))
        })
}

fn parse_bool_env(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(SplitterError::Config(format!(
            "{name} must be one of true, false, 1 or 0, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SplitterConfig::default();
        assert_eq!(config.separators, vec!["\n\n", "\n", " ", ""]);
        assert_eq!(config.chunk_size, 4000);
        assert_eq!(config.chunk_overlap, 200);
        assert!(config.strip_whitespace);
        assert_eq!(config.length_function.unit(), "graphemes");
    }

    #[test]
    fn test_overlap_equal_to_chunk_size_is_valid() {
        let config = SplitterConfig::new().with_chunk_size(50).with_chunk_overlap(50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlap_larger_than_chunk_size_is_rejected() {
        let config = SplitterConfig::new().with_chunk_size(50).with_chunk_overlap(51);
        assert!(matches!(
            config.validate(),
            Err(SplitterError::InvalidOverlap {
                chunk_overlap: 51,
                chunk_size: 50
            })
        ));
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        let config = SplitterConfig::new().with_chunk_size(0).with_chunk_overlap(0);
        assert!(matches!(config.validate(), Err(SplitterError::InvalidChunkSize)));
    }

    #[test]
    fn test_parse_env_value() {
        assert_eq!(parse_env(ENV_CHUNK_SIZE, " 512 ").unwrap(), 512);
        let err = parse_env(ENV_CHUNK_SIZE, "-1").unwrap_err();
        assert!(err.to_string().contains("SPLITTER_CHUNK_SIZE"));
    }

    #[test]
    fn test_parse_bool_env_value() {
        assert!(parse_bool_env(ENV_STRIP_WHITESPACE, "true").unwrap());
        assert!(parse_bool_env(ENV_STRIP_WHITESPACE, " TRUE ").unwrap());
        assert!(parse_bool_env(ENV_STRIP_WHITESPACE, "1").unwrap());
        assert!(!parse_bool_env(ENV_STRIP_WHITESPACE, "False").unwrap());
        assert!(!parse_bool_env(ENV_STRIP_WHITESPACE, "0").unwrap());

        for value in ["nope", "no", "yes", "2"] {
            let err = parse_bool_env(ENV_STRIP_WHITESPACE, value).unwrap_err();
            assert!(matches!(err, SplitterError::Config(_)));
            assert!(err.to_string().contains("SPLITTER_STRIP_WHITESPACE"));
        }
    }

    #[test]
    fn test_from_env_strip_whitespace() {
        std::env::set_var(ENV_STRIP_WHITESPACE, "FALSE");
        let parsed = SplitterConfig::from_env();
        std::env::set_var(ENV_STRIP_WHITESPACE, "nope");
        let rejected = SplitterConfig::from_env();
        std::env::remove_var(ENV_STRIP_WHITESPACE);

        assert!(!parsed.unwrap().strip_whitespace);
        assert!(matches!(rejected, Err(SplitterError::Config(_))));
    }

    #[test]
    fn test_with_separator_set() {
        let set = SeparatorSet::new("lines").with_separators(["\n", ""]);
        let config = SplitterConfig::new().with_separator_set(&set);
        assert_eq!(config.separators, vec!["\n", ""]);
    }
}
