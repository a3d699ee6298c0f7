//! Structured logging field name constants for the kaigi client.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Operation failed and was surfaced to the caller |
//! | WARN  | Recoverable issue, operation continues (e.g. a missed poll tick) |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-chunk progress, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "upload", "jobs", "notion", "crm", "config"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "upload_file", "poll_job_status", "get_job"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Backend job identifier being operated on.
pub const JOB_ID: &str = "job_id";

/// Job status reported by the backend.
pub const JOB_STATUS: &str = "job_status";

/// Filename of the upload candidate.
pub const FILENAME: &str = "filename";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Upload progress percentage in [0, 100].
pub const PROGRESS_PERCENT: &str = "progress_percent";

/// Payload size in bytes.
pub const SIZE_BYTES: &str = "size_bytes";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// HTTP status code returned by the backend.
pub const HTTP_STATUS: &str = "http_status";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
