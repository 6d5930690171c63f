//! Search defaults read from the host's settings store.
//!
//! The engine does not own persisted settings; the host hands it a
//! [`SearchSettings`] (or lets it read one from the environment) and new
//! queries start from [`SearchSettings::criteria`].
//!
//! Environment variables, all optional:
//! - `NOTESIEVE_TAGS_MODE` (default: OR)
//! - `NOTESIEVE_TITLE_MODE` (default: OR)
//! - `NOTESIEVE_CONTENT_MODE` (default: AND)
//! - `NOTESIEVE_TWO_DIMENSION_RELATION` (default: AND)
//! - `NOTESIEVE_THREE_DIMENSION_MODE` (default: all_and)
//! - `NOTESIEVE_PAGE_SIZE` (default: 20)
//!
//! Missing or unparsable values fall back to the default.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::criteria::{MatchMode, SearchCriteria, ThreeDimensionMode};
use crate::defaults;

pub const ENV_TAGS_MODE: &str = "NOTESIEVE_TAGS_MODE";
pub const ENV_TITLE_MODE: &str = "NOTESIEVE_TITLE_MODE";
pub const ENV_CONTENT_MODE: &str = "NOTESIEVE_CONTENT_MODE";
pub const ENV_TWO_DIMENSION_RELATION: &str = "NOTESIEVE_TWO_DIMENSION_RELATION";
pub const ENV_THREE_DIMENSION_MODE: &str = "NOTESIEVE_THREE_DIMENSION_MODE";
pub const ENV_PAGE_SIZE: &str = "NOTESIEVE_PAGE_SIZE";

/// Default modes and paging for new queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub default_tags_mode: MatchMode,
    pub default_title_mode: MatchMode,
    pub default_content_mode: MatchMode,
    pub default_two_dimension_relation: MatchMode,
    pub default_three_dimension_mode: ThreeDimensionMode,
    /// Results shown per page before "show more".
    pub result_page_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_tags_mode: defaults::TAGS_MODE,
            default_title_mode: defaults::TITLE_MODE,
            default_content_mode: defaults::CONTENT_MODE,
            default_two_dimension_relation: defaults::TWO_DIMENSION_RELATION,
            default_three_dimension_mode: defaults::THREE_DIMENSION_MODE,
            result_page_size: defaults::RESULT_PAGE_SIZE,
        }
    }
}

impl SearchSettings {
    /// Constructs settings from environment variables.
    ///
    /// # Example
    /// ```no_run
    /// use notesieve_core::{MatchMode, SearchSettings};
    ///
    /// std::env::set_var("NOTESIEVE_CONTENT_MODE", "OR");
    /// let settings = SearchSettings::from_env();
    /// assert_eq!(settings.default_content_mode, MatchMode::Or);
    /// ```
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            default_tags_mode: parse_env(ENV_TAGS_MODE, base.default_tags_mode),
            default_title_mode: parse_env(ENV_TITLE_MODE, base.default_title_mode),
            default_content_mode: parse_env(ENV_CONTENT_MODE, base.default_content_mode),
            default_two_dimension_relation: parse_env(
                ENV_TWO_DIMENSION_RELATION,
                base.default_two_dimension_relation,
            ),
            default_three_dimension_mode: parse_env(
                ENV_THREE_DIMENSION_MODE,
                base.default_three_dimension_mode,
            ),
            result_page_size: match parse_env(ENV_PAGE_SIZE, base.result_page_size) {
                0 => base.result_page_size,
                n => n,
            },
        }
    }

    /// Empty criteria seeded with these default modes.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::new()
            .with_tags_mode(self.default_tags_mode)
            .with_title_mode(self.default_title_mode)
            .with_content_mode(self.default_content_mode)
            .with_two_dimension_relation(self.default_two_dimension_relation)
            .with_three_dimension_mode(self.default_three_dimension_mode)
    }
}

/// Parses an environment variable with a default fallback.
///
/// Missing variables return the default silently; unparsable ones are logged.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    subsystem = "config",
                    key,
                    value = %raw,
                    "Ignoring unparsable setting, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
