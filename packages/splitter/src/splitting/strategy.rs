//! The splitter interface.

use crate::types::Document;

/// Metadata key holding a chunk's position within its source document.
pub const CHUNK_INDEX_KEY: &str = "chunk_index";

/// Metadata key holding the position of the source document in the input.
pub const SOURCE_INDEX_KEY: &str = "source_index";

/// Trait for splitters that turn text into chunks.
///
/// Implementations must not keep state between calls, so one instance can
/// serve many threads.
pub trait TextSplitter: Send + Sync {
    /// Split `text` into an ordered sequence of chunks.
    fn split_text(&self, text: &str) -> Vec<String>;

    /// Split each document, producing one document per chunk.
    ///
    /// Chunks inherit their source's metadata, plus `chunk_index` and
    /// `source_index`.
    fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .enumerate()
            .flat_map(|(source_index, document)| {
                self.split_text(&document.content)
                    .into_iter()
                    .enumerate()
                    .map(move |(chunk_index, content)| {
                        let mut metadata = document.metadata.clone();
                        metadata.insert(CHUNK_INDEX_KEY.to_string(), chunk_index.to_string());
                        metadata.insert(SOURCE_INDEX_KEY.to_string(), source_index.to_string());
                        Document { content, metadata }
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Splits on every comma, for exercising the provided methods.
    struct CommaSplitter;

    impl TextSplitter for CommaSplitter {
        fn split_text(&self, text: &str) -> Vec<String> {
            text.split(',')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        }
    }

    #[test]
    fn test_split_documents_copies_metadata() {
        let documents = vec![
            Document::new("a,b").with_metadata("source", "first.txt"),
            Document::new("c").with_metadata("source", "second.txt"),
        ];

        let chunks = CommaSplitter.split_documents(&documents);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].content, "b");
        assert_eq!(chunks[1].metadata["source"], "first.txt");
        assert_eq!(chunks[1].metadata[CHUNK_INDEX_KEY], "1");
        assert_eq!(chunks[1].metadata[SOURCE_INDEX_KEY], "0");
        assert_eq!(chunks[2].metadata["source"], "second.txt");
        assert_eq!(chunks[2].metadata[CHUNK_INDEX_KEY], "0");
        assert_eq!(chunks[2].metadata[SOURCE_INDEX_KEY], "1");
    }

    #[test]
    fn test_split_documents_skips_empty_documents() {
        let chunks = CommaSplitter.split_documents(&[Document::new("")]);
        assert!(chunks.is_empty());
    }
}
