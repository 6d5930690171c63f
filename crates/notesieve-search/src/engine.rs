//! Search orchestration: corpus scan, evaluation, scoring and ranking.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, trace, warn};

use notesieve_core::defaults::MAX_CONTENT_FRAGMENTS;
use notesieve_core::{
    Dimension, Document, DocumentCorpus, Error, Result, SearchCriteria, SearchResult,
    TagSuggestion,
};

use crate::dimension::{evaluate_dimension, DocumentFields};
use crate::resolver::{resolve, DimensionVerdicts};
use crate::suggestions::{filter_suggestions, TagTally};

/// Trait for note search operations.
#[async_trait]
pub trait NoteSearch: Send + Sync {
    /// Evaluate `criteria` against every document and return the matches,
    /// best score first.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<SearchResult>>;

    /// Every corpus tag with its occurrence count, most used first.
    async fn all_tag_suggestions(&self) -> Result<Vec<TagSuggestion>>;

    /// Tag suggestions filtered by what the user has typed so far.
    async fn matching_tag_suggestions(&self, input: &str) -> Result<Vec<TagSuggestion>>;
}

/// Sequential scan search engine over a [`DocumentCorpus`].
pub struct SearchEngine<C> {
    corpus: C,
}

impl<C: DocumentCorpus> SearchEngine<C> {
    /// Create a new search engine.
    pub fn new(corpus: C) -> Self {
        Self { corpus }
    }

    /// The underlying corpus.
    pub fn corpus(&self) -> &C {
        &self.corpus
    }

    /// Fetch what a document needs for evaluation and evaluate it.
    ///
    /// Returns `Ok(None)` for a non-matching document and `Err` when the
    /// document cannot be read.
    async fn evaluate_document(
        &self,
        doc: &Document,
        criteria: &SearchCriteria,
    ) -> Result<Option<SearchResult>> {
        if criteria.time_range.is_active() {
            let modified = self.corpus.modified_time(doc).await?;
            if !criteria.time_range.contains(modified) {
                trace!(doc_path = %doc.path, modified, "Outside time range");
                return Ok(None);
            }
        }

        // A document that cannot be read never matches, whatever the query.
        let body = self.corpus.read_note(doc).await?;

        let fields = DocumentFields {
            title: &doc.title,
            tags: &body.tags,
            content: &body.content,
        };
        Ok(score_document(criteria, doc, &fields))
    }

    /// Read a document's tags for the suggestion tally.
    async fn document_tags(&self, doc: &Document) -> Option<Vec<String>> {
        match self.corpus.tags(doc).await {
            Ok(tags) => Some(tags),
            Err(e) => {
                warn!(
                    subsystem = "search",
                    component = "suggestions",
                    doc_path = %doc.path,
                    error = %e,
                    "Skipping document with unreadable tags"
                );
                None
            }
        }
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.corpus.list_documents().await.map_err(|e| match e {
            Error::CorpusUnavailable(_) => e,
            other => Error::CorpusUnavailable(other.to_string()),
        })
    }
}

/// Evaluate already-fetched fields of a document.
///
/// Returns the scored result if the document matches. `criteria` must be
/// normalized.
pub fn score_document(
    criteria: &SearchCriteria,
    doc: &Document,
    fields: &DocumentFields<'_>,
) -> Option<SearchResult> {
    let tags = evaluate_dimension(Dimension::Tags, criteria, fields);
    let title = evaluate_dimension(Dimension::Title, criteria, fields);
    let content = evaluate_dimension(Dimension::Content, criteria, fields);

    let matched = resolve(
        criteria,
        &DimensionVerdicts {
            tags: &tags,
            title: &title,
            content: &content,
        },
    );
    trace!(
        doc_path = %doc.path,
        tags = tags.matches,
        title = title.matches,
        content = content.matches,
        matched,
        "Document evaluated"
    );
    if !matched {
        return None;
    }

    let mut content_fragments = content.matched_items;
    content_fragments.truncate(MAX_CONTENT_FRAGMENTS);

    Some(SearchResult {
        document: doc.clone(),
        title: doc.title.clone(),
        path: doc.path.clone(),
        score: tags.score + title.score + content.score,
        matched_tags: tags.matched_items,
        matched_title_fragments: title.matched_items,
        matched_content_fragments: content_fragments,
    })
}

/// Sort by score descending; ties keep their scan order.
pub fn rank_results(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

#[async_trait]
impl<C: DocumentCorpus> NoteSearch for SearchEngine<C> {
    #[instrument(skip(self, criteria), fields(subsystem = "search", component = "engine", op = "search"))]
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<SearchResult>> {
        let start = Instant::now();
        let criteria = criteria.clone().normalized();

        if !criteria.has_criteria() {
            debug!("No search terms, returning empty result");
            return Ok(Vec::new());
        }

        debug!(
            active_dimensions = criteria.active_dimension_count(),
            two_dimension_relation = %criteria.two_dimension_relation,
            three_dimension_mode = %criteria.three_dimension_mode,
            time_range = criteria.time_range.is_active(),
            "Normalized search criteria"
        );

        let documents = self.list_documents().await?;
        let mut results = Vec::new();
        let mut skipped = 0usize;

        for doc in &documents {
            match self.evaluate_document(doc, &criteria).await {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {}
                Err(e) if e.is_document_local() => {
                    skipped += 1;
                    warn!(
                        doc_path = %doc.path,
                        error = %e,
                        "Skipping unreadable document"
                    );
                }
                Err(e) => {
                    skipped += 1;
                    error!(
                        doc_path = %doc.path,
                        error = %e,
                        "Skipping document after unexpected corpus error"
                    );
                }
            }
        }

        rank_results(&mut results);

        info!(
            doc_count = documents.len(),
            skipped_count = skipped,
            result_count = results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Search completed"
        );

        Ok(results)
    }

    #[instrument(skip(self), fields(subsystem = "search", component = "suggestions", op = "all_tag_suggestions"))]
    async fn all_tag_suggestions(&self) -> Result<Vec<TagSuggestion>> {
        let documents = self.list_documents().await?;
        let mut tally = TagTally::new();

        for doc in &documents {
            if let Some(tags) = self.document_tags(doc).await {
                tally.add_document(&tags);
            }
        }

        let suggestions = tally.into_suggestions();
        debug!(
            doc_count = documents.len(),
            result_count = suggestions.len(),
            "Tag suggestions computed"
        );
        Ok(suggestions)
    }

    async fn matching_tag_suggestions(&self, input: &str) -> Result<Vec<TagSuggestion>> {
        let all = self.all_tag_suggestions().await?;
        Ok(filter_suggestions(all, input))
    }
}
