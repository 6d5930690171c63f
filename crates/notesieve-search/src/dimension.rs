//! Dimension evaluation: one dimension's terms against one document field.
//!
//! The three dimensions share the AND/OR accumulation in [`evaluate_terms`]
//! and differ only in how a single term is matched:
//!
//! | Dimension | Field | Strategies | Recorded item | Score per hit |
//! |-----------|-------|------------|---------------|---------------|
//! | tags | every tag | exact, substring, initials | the tag, marker stripped | 10 |
//! | title | basename | substring | the keyword | 5 |
//! | content | full text | substring | context fragment | 1 |
//!
//! Under AND the first failing term ends evaluation with no evidence at all,
//! even if earlier terms hit. Under OR every term is tried and the dimension
//! matches if anything hit.

use notesieve_core::defaults::{
    CONTENT_HIT_SCORE, FRAGMENT_CONTEXT_CHARS, TAG_HIT_SCORE, TITLE_HIT_SCORE,
};
use notesieve_core::{strip_tag_marker, Dimension, DimensionResult, MatchMode, SearchCriteria};

use crate::matching::{fold_case, match_unit, FoldedText};

/// The three fields of a document a query can look at.
#[derive(Debug, Clone, Copy)]
pub struct DocumentFields<'a> {
    pub title: &'a str,
    pub tags: &'a [String],
    pub content: &'a str,
}

/// Evaluate one dimension of `criteria` against a document.
pub fn evaluate_dimension(
    dimension: Dimension,
    criteria: &SearchCriteria,
    fields: &DocumentFields<'_>,
) -> DimensionResult {
    let terms = criteria.terms(dimension);
    let mode = criteria.mode(dimension);
    match dimension {
        Dimension::Tags => evaluate_tags(terms, mode, fields.tags),
        Dimension::Title => evaluate_title(terms, mode, fields.title),
        Dimension::Content => evaluate_content(terms, mode, fields.content),
    }
}

/// Match tag terms against a document's tag set.
///
/// A term hits on the first tag satisfying any strategy; that tag, without
/// its `#` marker, is recorded.
pub fn evaluate_tags(terms: &[String], mode: MatchMode, tags: &[String]) -> DimensionResult {
    if terms.is_empty() {
        return DimensionResult::vacuous();
    }

    let candidates: Vec<(&str, String)> = tags
        .iter()
        .map(|tag| {
            let stripped = strip_tag_marker(tag);
            (stripped, fold_case(stripped))
        })
        .collect();

    evaluate_terms(terms, mode, TAG_HIT_SCORE, |_, term| {
        candidates
            .iter()
            .find(|(_, lowered)| match_unit(lowered, term).is_some())
            .map(|(stripped, _)| stripped.to_string())
    })
}

/// Match title keywords by case-insensitive containment.
pub fn evaluate_title(terms: &[String], mode: MatchMode, title: &str) -> DimensionResult {
    if terms.is_empty() {
        return DimensionResult::vacuous();
    }

    let lowered = fold_case(title);
    evaluate_terms(terms, mode, TITLE_HIT_SCORE, |keyword, term| {
        lowered.contains(term).then(|| keyword.to_string())
    })
}

/// Match content keywords by case-insensitive containment, capturing a
/// context window around the first occurrence of each keyword.
pub fn evaluate_content(terms: &[String], mode: MatchMode, content: &str) -> DimensionResult {
    if terms.is_empty() {
        return DimensionResult::vacuous();
    }

    let text = FoldedText::new(content);
    evaluate_terms(terms, mode, CONTENT_HIT_SCORE, |_, term| {
        text.find_span(term)
            .map(|(start, end)| text.excerpt(start, end, FRAGMENT_CONTEXT_CHARS))
    })
}

/// Shared AND/OR accumulation.
///
/// `match_term` receives each term trimmed, then trimmed and case-folded, and
/// returns the evidence to record on a hit. Blank terms are skipped.
pub fn evaluate_terms<F>(
    terms: &[String],
    mode: MatchMode,
    weight: u32,
    mut match_term: F,
) -> DimensionResult
where
    F: FnMut(&str, &str) -> Option<String>,
{
    let mut matched_items = Vec::new();

    for term in terms {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            continue;
        }
        match match_term(trimmed, &fold_case(trimmed)) {
            Some(item) => matched_items.push(item),
            None if mode == MatchMode::And => return DimensionResult::no_match(),
            None => {}
        }
    }

    let matches = match mode {
        MatchMode::And => true,
        MatchMode::Or => !matched_items.is_empty(),
    };
    let score = weight * matched_items.len() as u32;

    DimensionResult {
        matches,
        matched_items,
        score,
    }
}
