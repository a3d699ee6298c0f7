//! Centralized default constants for the kaigi client.
//!
//! **This module is the single source of truth** for all shared default
//! values. Crates and binaries reference these constants instead of defining
//! their own magic numbers.

// =============================================================================
// UPLOAD
// =============================================================================

/// Maximum upload size in bytes (200 MiB).
///
/// Files exactly at the limit are accepted; limit + 1 byte is rejected.
pub const MAX_UPLOAD_SIZE_BYTES: u64 = 200 * 1024 * 1024;

/// Per-call upload timeout in milliseconds (10 minutes for long recordings).
pub const UPLOAD_TIMEOUT_MS: u64 = 600_000;

/// Chunk size for the progress-counting upload body stream.
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

// =============================================================================
// POLLING
// =============================================================================

/// Fixed interval between job status fetches in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 5_000;

// =============================================================================
// API
// =============================================================================

/// Default backend base URL (local development).
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Timeout for ordinary (non-upload) API requests in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

/// Backend base URL override.
pub const ENV_API_URL: &str = "KAIGI_API_URL";

/// Upload timeout override (milliseconds).
pub const ENV_UPLOAD_TIMEOUT_MS: &str = "KAIGI_UPLOAD_TIMEOUT_MS";

/// Poll interval override (milliseconds).
pub const ENV_POLL_INTERVAL_MS: &str = "KAIGI_POLL_INTERVAL_MS";
