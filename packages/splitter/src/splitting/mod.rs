//! Recursive separator splitting.
//!
//! Text is split on the highest-priority separator it contains. Fragments
//! that are small enough are merged back together up to the chunk size;
//! fragments that are too large are split again with the lower-priority
//! separators.

mod engine;
mod matcher;
mod merge;
mod selector;
mod strategy;

pub use engine::RecursiveSplitter;
pub use matcher::Separator;
pub use merge::GreedyMerger;
pub use selector::{select_separator, Selection};
pub use strategy::{TextSplitter, CHUNK_INDEX_KEY, SOURCE_INDEX_KEY};
