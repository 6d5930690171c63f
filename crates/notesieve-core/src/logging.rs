//! Structured logging schema and field name constants for notesieve.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log tooling can query every subsystem by the same names.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, document skipped or fallback applied |
//! | INFO  | Operation completions (a finished search) |
//! | DEBUG | Decision points, normalized criteria, config choices |
//! | TRACE | Per-document verdicts, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "search", "vault", "config"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "engine", "resolver", "suggestions", "scan"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "search", "all_tag_suggestions", "list_documents"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Vault-relative path of the document being operated on.
pub const DOC_PATH: &str = "doc_path";

/// Root directory of a vault corpus.
pub const VAULT_ROOT: &str = "vault_root";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by a search.
pub const RESULT_COUNT: &str = "result_count";

/// Number of documents enumerated from the corpus.
pub const DOC_COUNT: &str = "doc_count";

/// Number of documents skipped because they could not be read.
pub const SKIPPED_COUNT: &str = "skipped_count";

// ─── Search-specific fields ────────────────────────────────────────────────

/// Number of dimensions with at least one search term.
pub const ACTIVE_DIMENSIONS: &str = "active_dimensions";

/// Combination mode applied to three active dimensions.
pub const THREE_DIMENSION_MODE: &str = "three_dimension_mode";

/// Relation applied to two active dimensions.
pub const TWO_DIMENSION_RELATION: &str = "two_dimension_relation";

/// Aggregate score of a matched document.
pub const SCORE: &str = "score";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Final match verdict for a document.
pub const MATCHED: &str = "matched";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
