//! Combination of the three dimension verdicts into a final match decision.
//!
//! Which formula applies depends on how many dimensions are active (have at
//! least one term), not on which of them happened to match:
//!
//! - 1 active: that dimension's verdict, unchanged.
//! - 2 active: the two active verdicts under the two-dimension relation. The
//!   inactive dimension's vacuous `true` never takes part.
//! - 3 active: the [`ThreeDimensionMode`] table.

use notesieve_core::{Dimension, DimensionResult, MatchMode, SearchCriteria, ThreeDimensionMode};
use tracing::debug;

/// The per-dimension results of one document.
#[derive(Debug, Clone, Copy)]
pub struct DimensionVerdicts<'a> {
    pub tags: &'a DimensionResult,
    pub title: &'a DimensionResult,
    pub content: &'a DimensionResult,
}

impl DimensionVerdicts<'_> {
    pub fn get(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Tags => self.tags.matches,
            Dimension::Title => self.title.matches,
            Dimension::Content => self.content.matches,
        }
    }
}

/// Final verdict for a document.
///
/// With no active dimension there is nothing to satisfy and the document does
/// not match; `search` never gets that far.
pub fn resolve(criteria: &SearchCriteria, verdicts: &DimensionVerdicts<'_>) -> bool {
    let active = criteria.active_dimensions();
    match active.as_slice() {
        [] => false,
        [only] => verdicts.get(*only),
        [first, second] => resolve_two(
            criteria.two_dimension_relation,
            verdicts.get(*first),
            verdicts.get(*second),
        ),
        _ => apply_three_dimension_mode(
            criteria.three_dimension_mode,
            verdicts.tags.matches,
            verdicts.title.matches,
            verdicts.content.matches,
        ),
    }
}

/// Combine two active dimensions.
pub fn resolve_two(relation: MatchMode, first: bool, second: bool) -> bool {
    relation.combine(&[first, second])
}

/// Evaluate one row of the three-dimension table.
///
/// `Unrecognized` fails closed.
pub fn apply_three_dimension_mode(
    mode: ThreeDimensionMode,
    tags: bool,
    title: bool,
    content: bool,
) -> bool {
    match mode {
        ThreeDimensionMode::AllAnd => tags && title && content,
        ThreeDimensionMode::AllOr => tags || title || content,
        ThreeDimensionMode::TagsAndTitleOrContent => (tags && title) || content,
        ThreeDimensionMode::TagsOrTitleAndContent => (tags || title) && content,
        ThreeDimensionMode::TagsAndTitleOrContent2 => tags && (title || content),
        ThreeDimensionMode::TagsOrTitleAndContent2 => tags || (title && content),
        ThreeDimensionMode::Unrecognized => {
            debug!(
                component = "resolver",
                three_dimension_mode = %mode,
                "Unrecognized combination mode, treating document as non-matching"
            );
            false
        }
    }
}
