//! # notesieve-core
//!
//! Core types, traits, and abstractions for the notesieve library.
//!
//! This crate provides the query model ([`SearchCriteria`]), the document and
//! result types, the corpus accessor trait and the shared defaults that the
//! search and vault crates depend on.

pub mod criteria;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod settings;
pub mod tags;
pub mod temporal;
pub mod traits;

// Re-export commonly used types at crate root
pub use criteria::{Dimension, MatchMode, SearchCriteria, ThreeDimensionMode};
pub use error::{Error, Result};
pub use models::*;
pub use settings::SearchSettings;
pub use tags::{normalize_tag, strip_tag_marker, with_tag_marker};
pub use temporal::{NamedTimeRange, TimeRange};
pub use traits::*;
