//! Recursive separator text splitter.
//!
//! Splits a document into an ordered sequence of chunks bounded by a maximum
//! size, using a prioritized list of separators so chunks end on natural text
//! boundaries (paragraphs, lines, words) wherever possible.
//!
//! # Example
//!
//! ```
//! use recursive_splitter::{RecursiveSplitter, SplitterConfig};
//!
//! let splitter = RecursiveSplitter::new(
//!     SplitterConfig::new().with_chunk_size(12).with_chunk_overlap(0),
//! )
//! .unwrap();
//!
//! let chunks = splitter.split_text("Short one.\n\nAnother paragraph.");
//! assert_eq!(chunks, vec!["Short one.", "Another", "paragraph."]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Defaults, builder and validation
//! - [`length`]: Pluggable length functions
//! - [`presets`]: Named separator sets
//! - [`splitting`]: Separator selection, splitting, merging and recursion
//! - [`types`]: Documents and output records
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod length;
pub mod presets;
pub mod splitting;
pub mod types;

// Re-export commonly used items
pub use config::SplitterConfig;
pub use error::{Result, SplitterError};
pub use length::{LengthFunction, LengthUnit};
pub use presets::{default_separator_sets, SeparatorSet, SeparatorSetRegistry};
pub use splitting::{RecursiveSplitter, TextSplitter};
pub use types::Document;
