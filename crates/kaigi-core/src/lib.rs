//! # kaigi-core
//!
//! Core types, constants, and upload validation for the kaigi client.
//!
//! This crate provides the wire models, error type, default constants, and
//! the pure upload validator that `kaigi-client` builds on. It performs no
//! I/O of its own.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{
    ApiErrorBody, ApproveOptions, ApproveResponse, Customer, CustomerCreate, CustomerUpdate, Deal,
    DealCreate, DealStatus, DealUpdate, ExtractMetadataResponse, ExtractedTask, FileCategory, Job,
    JobDetail, JobStatus, JobUpdate, MeetingMetadata, NotionProject, NotionUpdateResponse, SubTask,
    SubTaskCreate, Task, TaskCreate, TaskDecomposeResponse, TaskExtractResponse, TaskFilters,
    TaskPriority, TaskRegisterResponse, TaskStatus, TaskUpdate, UploadResponse,
};
pub use validation::{
    expected_mime_for_extension, is_supported_extension, supported_formats_text, validate_upload,
    ValidationResult,
};
