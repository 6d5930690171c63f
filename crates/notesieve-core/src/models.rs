//! Document and result types exchanged between the corpus and the engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT
// =============================================================================

/// Read-only handle to a note in the host corpus.
///
/// Tags, content and modification time are fetched through
/// [`DocumentCorpus`](crate::traits::DocumentCorpus); the handle only carries
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    /// Corpus-relative path, `/`-separated.
    pub path: String,
    /// File name without extension.
    pub title: String,
}

impl Document {
    /// Build a handle from a path, deriving the title from the file stem.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let title = Path::new(&path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        Self { path, title }
    }
}

// =============================================================================
// NOTE BODY
// =============================================================================

/// What a corpus reads for one document before evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBody {
    pub content: String,
    /// Tags, with or without the leading `#` marker.
    pub tags: Vec<String>,
}

// =============================================================================
// DIMENSION RESULT
// =============================================================================

/// Outcome of evaluating one dimension against one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionResult {
    /// Whether the dimension is satisfied.
    pub matches: bool,
    /// Matched tags, title keywords, or content fragments.
    pub matched_items: Vec<String>,
    /// Weighted hit count.
    pub score: u32,
}

impl DimensionResult {
    /// Result of a dimension without terms: satisfied, no evidence.
    pub fn vacuous() -> Self {
        Self {
            matches: true,
            matched_items: Vec::new(),
            score: 0,
        }
    }

    /// Result of an unsatisfied dimension.
    pub fn no_match() -> Self {
        Self::default()
    }
}

// =============================================================================
// SEARCH RESULT
// =============================================================================

/// One matching document with its score and evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: Document,
    pub title: String,
    pub path: String,
    /// Sum of the three dimension scores.
    pub score: u32,
    pub matched_tags: Vec<String>,
    pub matched_title_fragments: Vec<String>,
    /// First few content fragments; every hit still counts toward `score`.
    pub matched_content_fragments: Vec<String>,
}

// =============================================================================
// TAG SUGGESTION
// =============================================================================

/// A corpus tag and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub tag: String,
    pub count: usize,
}
