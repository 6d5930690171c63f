//! Core traits for notesieve abstractions.
//!
//! The engine never touches storage directly; a host (or one of the backends
//! in `notesieve-vault`) implements [`DocumentCorpus`].

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Document, NoteBody};

/// Read-only accessor for the host's note corpus.
///
/// Per-document methods should fail with
/// [`Error::DocumentRead`](crate::Error::DocumentRead) so a scan can skip the
/// document and continue. `list_documents` failing means the corpus as a
/// whole is unavailable.
#[async_trait]
pub trait DocumentCorpus: Send + Sync {
    /// Enumerate every document, in a stable order.
    async fn list_documents(&self) -> Result<Vec<Document>>;

    /// Full text content of a document.
    async fn read_content(&self, doc: &Document) -> Result<String>;

    /// Tags of a document, with or without the leading `#` marker.
    async fn tags(&self, doc: &Document) -> Result<Vec<String>>;

    /// Last modification time in epoch milliseconds.
    async fn modified_time(&self, doc: &Document) -> Result<i64>;

    /// Content and tags of a document in one call.
    ///
    /// Backends that derive tags from the content should override this to
    /// read the document once.
    async fn read_note(&self, doc: &Document) -> Result<NoteBody> {
        let content = self.read_content(doc).await?;
        let tags = self.tags(doc).await?;
        Ok(NoteBody { content, tags })
    }
}
