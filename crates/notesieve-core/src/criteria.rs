//! Search criteria: the structured query evaluated against every document.
//!
//! A query filters along three independent dimensions (tags, title, content).
//! Each dimension carries its own term list and intra-dimension [`MatchMode`];
//! the verdicts are then combined by a two-dimension relation or a
//! [`ThreeDimensionMode`], depending on how many dimensions are active.
//!
//! # Example
//!
//! ```
//! use notesieve_core::{MatchMode, SearchCriteria, ThreeDimensionMode};
//!
//! let criteria = SearchCriteria::new()
//!     .with_tags(["work", "  "])
//!     .with_tags_mode(MatchMode::And)
//!     .with_content_keywords(["deadline"])
//!     .with_three_dimension_mode(ThreeDimensionMode::AllOr)
//!     .normalized();
//!
//! assert_eq!(criteria.tags, vec!["work".to_string()]);
//! assert_eq!(criteria.active_dimension_count(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::Error;
use crate::tags::strip_tag_marker;
use crate::temporal::TimeRange;

// =============================================================================
// MATCH MODE
// =============================================================================

/// Boolean rule combining terms within a dimension, or two active dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchMode {
    /// Every term must hit.
    And,
    /// At least one term must hit.
    Or,
}

impl MatchMode {
    /// Apply this mode to a list of boolean verdicts.
    ///
    /// An empty list is vacuously true under `And` and false under `Or`.
    pub fn combine(self, verdicts: &[bool]) -> bool {
        match self {
            Self::And => verdicts.iter().all(|v| *v),
            Self::Or => verdicts.iter().any(|v| *v),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            _ => Err(Error::InvalidInput(format!("unknown match mode: {}", s))),
        }
    }
}

// =============================================================================
// THREE DIMENSION MODE
// =============================================================================

/// Combination formula applied when tags (T), title (I) and content (C) are
/// all active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThreeDimensionMode {
    /// `T ∧ I ∧ C`
    AllAnd,
    /// `T ∨ I ∨ C`
    AllOr,
    /// `(T ∧ I) ∨ C`
    TagsAndTitleOrContent,
    /// `(T ∨ I) ∧ C`
    TagsOrTitleAndContent,
    /// `T ∧ (I ∨ C)`
    TagsAndTitleOrContent2,
    /// `T ∨ (I ∧ C)`
    TagsOrTitleAndContent2,
    /// A mode name this build does not know. Never matches.
    ///
    /// The unknown name is not kept: this serializes back as
    /// `"unrecognized"`.
    Unrecognized,
}

impl ThreeDimensionMode {
    /// Every mode with a defined formula.
    pub const ALL: [ThreeDimensionMode; 6] = [
        Self::AllAnd,
        Self::AllOr,
        Self::TagsAndTitleOrContent,
        Self::TagsOrTitleAndContent,
        Self::TagsAndTitleOrContent2,
        Self::TagsOrTitleAndContent2,
    ];

    /// Stored name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllAnd => "all_and",
            Self::AllOr => "all_or",
            Self::TagsAndTitleOrContent => "tags_and_title_or_content",
            Self::TagsOrTitleAndContent => "tags_or_title_and_content",
            Self::TagsAndTitleOrContent2 => "tags_and_title_or_content_2",
            Self::TagsOrTitleAndContent2 => "tags_or_title_and_content_2",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for ThreeDimensionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreeDimensionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("unknown three-dimension mode: {}", s)))
    }
}

impl From<String> for ThreeDimensionMode {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Unrecognized)
    }
}

impl From<ThreeDimensionMode> for String {
    fn from(mode: ThreeDimensionMode) -> Self {
        mode.as_str().to_string()
    }
}

// =============================================================================
// DIMENSION
// =============================================================================

/// One of the three independent filter axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Tags,
    Title,
    Content,
}

impl Dimension {
    /// All dimensions in evaluation order.
    pub const ALL: [Dimension; 3] = [Self::Tags, Self::Title, Self::Content];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SEARCH CRITERIA
// =============================================================================

/// The query supplied on every search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Raw tag terms.
    pub tags: Vec<String>,
    /// Intra-dimension rule for tags.
    pub tags_mode: MatchMode,
    /// Title keywords.
    pub title_keywords: Vec<String>,
    /// Intra-dimension rule for title keywords.
    pub title_mode: MatchMode,
    /// Content keywords.
    pub content_keywords: Vec<String>,
    /// Intra-dimension rule for content keywords.
    pub content_mode: MatchMode,
    /// Relation used when exactly two dimensions are active.
    pub two_dimension_relation: MatchMode,
    /// Formula used when all three dimensions are active.
    pub three_dimension_mode: ThreeDimensionMode,
    /// Optional modification-time window, ANDed with the dimension verdict.
    pub time_range: TimeRange,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            tags_mode: defaults::TAGS_MODE,
            title_keywords: Vec::new(),
            title_mode: defaults::TITLE_MODE,
            content_keywords: Vec::new(),
            content_mode: defaults::CONTENT_MODE,
            two_dimension_relation: defaults::TWO_DIMENSION_RELATION,
            three_dimension_mode: defaults::THREE_DIMENSION_MODE,
            time_range: TimeRange::default(),
        }
    }
}

impl SearchCriteria {
    /// Create empty criteria with default modes.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    /// Set tag terms.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the intra-dimension mode for tags.
    pub fn with_tags_mode(mut self, mode: MatchMode) -> Self {
        self.tags_mode = mode;
        self
    }

    /// Set title keywords.
    pub fn with_title_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the intra-dimension mode for title keywords.
    pub fn with_title_mode(mut self, mode: MatchMode) -> Self {
        self.title_mode = mode;
        self
    }

    /// Set content keywords.
    pub fn with_content_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the intra-dimension mode for content keywords.
    pub fn with_content_mode(mut self, mode: MatchMode) -> Self {
        self.content_mode = mode;
        self
    }

    /// Set the relation used when two dimensions are active.
    pub fn with_two_dimension_relation(mut self, relation: MatchMode) -> Self {
        self.two_dimension_relation = relation;
        self
    }

    /// Set the formula used when all three dimensions are active.
    pub fn with_three_dimension_mode(mut self, mode: ThreeDimensionMode) -> Self {
        self.three_dimension_mode = mode;
        self
    }

    /// Set the modification-time window.
    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = range;
        self
    }

    // =========================================================================
    // NORMALIZATION
    // =========================================================================

    /// Trim every term and drop the blank ones. Tag terms also lose one
    /// leading `#` marker.
    pub fn normalized(mut self) -> Self {
        for tag in &mut self.tags {
            *tag = strip_tag_marker(tag.trim()).to_string();
        }
        normalize_terms(&mut self.tags);
        normalize_terms(&mut self.title_keywords);
        normalize_terms(&mut self.content_keywords);
        self
    }

    /// Check if any dimension has at least one term.
    pub fn has_criteria(&self) -> bool {
        Dimension::ALL.iter().any(|d| self.is_active(*d))
    }

    // =========================================================================
    // DIMENSION ACCESS
    // =========================================================================

    /// Terms of a dimension.
    pub fn terms(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Tags => &self.tags,
            Dimension::Title => &self.title_keywords,
            Dimension::Content => &self.content_keywords,
        }
    }

    /// Intra-dimension mode of a dimension.
    pub fn mode(&self, dimension: Dimension) -> MatchMode {
        match dimension {
            Dimension::Tags => self.tags_mode,
            Dimension::Title => self.title_mode,
            Dimension::Content => self.content_mode,
        }
    }

    /// A dimension is active iff its term list is non-empty.
    pub fn is_active(&self, dimension: Dimension) -> bool {
        !self.terms(dimension).is_empty()
    }

    /// Active dimensions in evaluation order.
    pub fn active_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.is_active(*d))
            .collect()
    }

    /// Get the number of active dimensions.
    pub fn active_dimension_count(&self) -> usize {
        self.active_dimensions().len()
    }
}

fn normalize_terms(terms: &mut Vec<String>) {
    *terms = terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
}
