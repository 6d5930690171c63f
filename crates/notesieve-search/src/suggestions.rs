//! Tag suggestions for autocomplete, derived from corpus metadata.

use std::collections::BTreeMap;

use notesieve_core::{normalize_tag, TagSuggestion};

use crate::matching::{fold_case, matches_initials};

/// Tallies how often each tag occurs across the corpus.
///
/// Tags are compared marker-stripped and lowercased. Every occurrence counts,
/// including repeats within one document.
#[derive(Debug, Default)]
pub struct TagTally {
    counts: BTreeMap<String, usize>,
}

impl TagTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the tags of one document.
    pub fn add_document<S: AsRef<str>>(&mut self, tags: &[S]) {
        for tag in tags.iter().map(|t| normalize_tag(t.as_ref())) {
            if !tag.is_empty() {
                *self.counts.entry(tag).or_insert(0) += 1;
            }
        }
    }

    /// Suggestions by occurrence count descending, then alphabetically.
    pub fn into_suggestions(self) -> Vec<TagSuggestion> {
        let mut suggestions: Vec<TagSuggestion> = self
            .counts
            .into_iter()
            .map(|(tag, count)| TagSuggestion { tag, count })
            .collect();
        // Stable sort keeps the alphabetical order of the BTreeMap for ties.
        suggestions.sort_by(|a, b| b.count.cmp(&a.count));
        suggestions
    }
}

/// Keep suggestions matching `input` by substring, initials, or prefix.
///
/// Blank input keeps everything.
pub fn filter_suggestions(suggestions: Vec<TagSuggestion>, input: &str) -> Vec<TagSuggestion> {
    let input = fold_case(input.trim());
    if input.is_empty() {
        return suggestions;
    }

    suggestions
        .into_iter()
        .filter(|s| {
            let tag = fold_case(&s.tag);
            tag.contains(&input) || matches_initials(&tag, &input) || tag.starts_with(&input)
        })
        .collect()
}
