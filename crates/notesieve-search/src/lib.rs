//! # notesieve-search
//!
//! Multi-dimensional note search: filter a corpus by tags, title keywords and
//! content keywords at once, each with its own AND/OR rule, combined by a
//! two-dimension relation or a three-dimension mode table.
//!
//! This crate provides:
//! - Term matching (exact, substring, initials-prefix)
//! - Per-dimension evaluation with evidence capture
//! - Combination of dimension verdicts
//! - A sequential search engine with scoring and stable ranking
//! - Tag suggestions for autocomplete
//! - Result paging
//!
//! ## Example
//!
//! ```ignore
//! use notesieve_search::{NoteSearch, SearchCriteria, SearchEngine};
//! use notesieve_vault::VaultCorpus;
//!
//! let engine = SearchEngine::new(VaultCorpus::open("/path/to/vault")?);
//!
//! let results = engine
//!     .search(&SearchCriteria::new().with_tags(["work"]).with_content_keywords(["deadline"]))
//!     .await?;
//!
//! let suggestions = engine.matching_tag_suggestions("ml").await?;
//! ```

pub mod dimension;
pub mod engine;
pub mod matching;
pub mod paging;
pub mod resolver;
pub mod suggestions;

// Re-export core types
pub use notesieve_core::*;

// Re-export search types
pub use dimension::{
    evaluate_content, evaluate_dimension, evaluate_tags, evaluate_title, DocumentFields,
};
pub use engine::{rank_results, score_document, NoteSearch, SearchEngine};
pub use matching::{
    fold_case, initials, match_unit, matches_initials, FoldedText, MatchStrategy,
};
pub use paging::{paginate, ResultPage};
pub use resolver::{apply_three_dimension_mode, resolve, resolve_two, DimensionVerdicts};
pub use suggestions::{filter_suggestions, TagTally};
