//! # kaigi-client
//!
//! Typed HTTP client for the kaigi meeting-transcription/CRM backend.
//!
//! This crate provides:
//! - Upload transport: multipart POST with progress reporting
//! - Job API: fetch, list, edit, approve, metadata extraction
//! - Job status poller with a cancelable handle
//! - Notion sync and CRM wrappers (customers, deals, tasks)
//!
//! # Example
//!
//! ```rust,no_run
//! use kaigi_client::{ApiClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> kaigi_core::Result<()> {
//!     let client = ApiClient::new(ClientConfig::new("http://localhost:8000"))?;
//!     let payload = tokio::fs::read("meeting.wav").await?;
//!     let accepted = client
//!         .upload_file(payload, "meeting.wav", "audio/wav", None)
//!         .await?;
//!
//!     let handle = client.poll_job_status(&accepted.job_id, |job| {
//!         println!("{}: {}", job.job_id, job.status.label());
//!     });
//!     handle.wait().await;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod crm;
pub mod jobs;
pub mod notion;
pub mod upload;

// Re-export core types
pub use kaigi_core::*;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use jobs::PollHandle;
pub use upload::ProgressCallback;
