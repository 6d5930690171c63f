//! Centralized default constants for notesieve.
//!
//! **This module is the single source of truth** for shared default values.
//! Other crates reference these constants instead of defining their own magic
//! numbers.

use crate::criteria::{MatchMode, ThreeDimensionMode};

// =============================================================================
// SCORING
// =============================================================================

/// Score contributed by each matched tag term.
pub const TAG_HIT_SCORE: u32 = 10;

/// Score contributed by each matched title keyword.
pub const TITLE_HIT_SCORE: u32 = 5;

/// Score contributed by each matched content keyword.
pub const CONTENT_HIT_SCORE: u32 = 1;

// =============================================================================
// FRAGMENTS
// =============================================================================

/// Characters of context captured on each side of a content hit.
pub const FRAGMENT_CONTEXT_CHARS: usize = 20;

/// Maximum content fragments attached to a search result.
pub const MAX_CONTENT_FRAGMENTS: usize = 3;

// =============================================================================
// TAGS
// =============================================================================

/// Marker character prefixing tags in the host's tag cache.
pub const TAG_MARKER: char = '#';

// =============================================================================
// PAGINATION
// =============================================================================

/// Default number of results shown per page.
pub const RESULT_PAGE_SIZE: usize = 20;

// =============================================================================
// MODES
// =============================================================================

/// Default intra-dimension mode for tags.
pub const TAGS_MODE: MatchMode = MatchMode::Or;

/// Default intra-dimension mode for title keywords.
pub const TITLE_MODE: MatchMode = MatchMode::Or;

/// Default intra-dimension mode for content keywords.
pub const CONTENT_MODE: MatchMode = MatchMode::And;

/// Default relation when exactly two dimensions are active.
pub const TWO_DIMENSION_RELATION: MatchMode = MatchMode::And;

/// Default combination when all three dimensions are active.
pub const THREE_DIMENSION_MODE: ThreeDimensionMode = ThreeDimensionMode::AllAnd;

// =============================================================================
// VAULT
// =============================================================================

/// File extension of notes enumerated from a vault directory.
pub const NOTE_EXTENSION: &str = "md";
