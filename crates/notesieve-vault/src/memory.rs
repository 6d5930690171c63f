//! In-memory corpus, for embedding hosts and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;

use notesieve_core::{Document, DocumentCorpus, Error, Result};

/// One note held by a [`MemoryCorpus`].
#[derive(Debug, Clone)]
pub struct MemoryNote {
    pub document: Document,
    pub content: String,
    pub tags: Vec<String>,
    /// Epoch milliseconds.
    pub modified: i64,
}

impl MemoryNote {
    pub fn new<I, S>(path: impl Into<String>, content: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            document: Document::from_path(path),
            content: content.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            modified: Utc::now().timestamp_millis(),
        }
    }

    pub fn with_modified(mut self, modified: i64) -> Self {
        self.modified = modified;
        self
    }
}

/// Corpus backed by a list of notes, enumerated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    notes: Vec<MemoryNote>,
    index: HashMap<String, usize>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note modified now.
    pub fn with_note<I, S>(self, path: impl Into<String>, content: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(MemoryNote::new(path, content, tags))
    }

    pub fn with(mut self, note: MemoryNote) -> Self {
        self.insert(note);
        self
    }

    /// Add a note, replacing any note at the same path in place.
    pub fn insert(&mut self, note: MemoryNote) {
        match self.index.get(&note.document.path) {
            Some(&i) => self.notes[i] = note,
            None => {
                self.index
                    .insert(note.document.path.clone(), self.notes.len());
                self.notes.push(note);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn note(&self, doc: &Document) -> Result<&MemoryNote> {
        self.index
            .get(&doc.path)
            .map(|&i| &self.notes[i])
            .ok_or_else(|| Error::DocumentRead(format!("{}: not in corpus", doc.path)))
    }
}

#[async_trait]
impl DocumentCorpus for MemoryCorpus {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        Ok(self.notes.iter().map(|n| n.document.clone()).collect())
    }

    async fn read_content(&self, doc: &Document) -> Result<String> {
        Ok(self.note(doc)?.content.clone())
    }

    async fn tags(&self, doc: &Document) -> Result<Vec<String>> {
        Ok(self.note(doc)?.tags.clone())
    }

    async fn modified_time(&self, doc: &Document) -> Result<i64> {
        Ok(self.note(doc)?.modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insertion_order_and_lookup() {
        let corpus = MemoryCorpus::new()
            .with_note("b.md", "second", ["#x"])
            .with_note("a.md", "first", Vec::<String>::new());

        let docs = corpus.list_documents().await.unwrap();
        let paths: Vec<&str> = docs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["b.md", "a.md"]);
        assert_eq!(corpus.read_content(&docs[1]).await.unwrap(), "first");
        assert_eq!(corpus.tags(&docs[0]).await.unwrap(), vec!["#x"]);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let mut corpus = MemoryCorpus::new()
            .with_note("a.md", "old", ["#a"])
            .with_note("b.md", "b", ["#b"]);
        corpus.insert(MemoryNote::new("a.md", "new", ["#a"]).with_modified(42));

        assert_eq!(corpus.len(), 2);
        let docs = corpus.list_documents().await.unwrap();
        assert_eq!(docs[0].path, "a.md");
        assert_eq!(corpus.read_content(&docs[0]).await.unwrap(), "new");
        assert_eq!(corpus.modified_time(&docs[0]).await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_unknown_document_is_document_local_error() {
        let corpus = MemoryCorpus::new();
        assert!(corpus.is_empty());
        let err = corpus
            .read_content(&Document::from_path("ghost.md"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DocumentRead(_)));
        assert!(err.is_document_local());
    }
}
