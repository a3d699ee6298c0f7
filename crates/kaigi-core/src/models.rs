//! Wire types for the kaigi backend API.
//!
//! The meeting/job endpoints speak snake_case JSON while the CRM endpoints
//! (customers, deals, tasks) speak camelCase, matching the backend as
//! deployed. Field renames below are deliberate, not stylistic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// FILE CLASSIFICATION
// =============================================================================

/// Category a validated upload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Audio,
    Video,
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Video => write!(f, "video"),
        }
    }
}

// =============================================================================
// JOB STATUS
// =============================================================================

/// Status of a job as reported by the backend.
///
/// The backend owns this state machine; the client only reads it. The
/// display mapping lives here as exhaustively-checked methods so a new
/// server status is a single-enum edit caught at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Uploading,
    Uploaded,
    ExtractingAudio,
    Transcribing,
    Summarizing,
    ExtractingMetadata,
    Reviewing,
    CreatingNotion,
    Pending,
    Synced,
    Processing,
    Live,
    Failed,
}

impl JobStatus {
    /// Whether this status is shown with the shared "in progress" treatment
    /// on the dashboard (spinner, disabled actions).
    pub fn is_processing(&self) -> bool {
        match self {
            JobStatus::Uploading
            | JobStatus::Uploaded
            | JobStatus::ExtractingAudio
            | JobStatus::Transcribing
            | JobStatus::Summarizing
            | JobStatus::CreatingNotion
            | JobStatus::Processing => true,
            JobStatus::ExtractingMetadata
            | JobStatus::Reviewing
            | JobStatus::Pending
            | JobStatus::Synced
            | JobStatus::Live
            | JobStatus::Failed => false,
        }
    }

    /// Whether the client should expect further server-side progress.
    /// Polling stops once a terminal status is observed.
    pub fn is_terminal(&self) -> bool {
        match self {
            JobStatus::Pending | JobStatus::Synced | JobStatus::Failed => true,
            JobStatus::Uploading
            | JobStatus::Uploaded
            | JobStatus::ExtractingAudio
            | JobStatus::Transcribing
            | JobStatus::Summarizing
            | JobStatus::ExtractingMetadata
            | JobStatus::Reviewing
            | JobStatus::CreatingNotion
            | JobStatus::Processing
            | JobStatus::Live => false,
        }
    }

    /// Fixed display label. Every processing status shares one label;
    /// statuses without an agreed label fall back to their wire name.
    pub fn label(&self) -> &'static str {
        if self.is_processing() {
            return "処理中...";
        }
        match self {
            JobStatus::Pending => "レビュー待ち",
            JobStatus::Synced => "同期済み",
            JobStatus::Failed => "失敗",
            JobStatus::Live => "ライブ中",
            // No agreed display state yet (backend state machine in flux).
            JobStatus::Reviewing => "REVIEWING",
            JobStatus::ExtractingMetadata => "EXTRACTING_METADATA",
            // Covered by is_processing above.
            JobStatus::Uploading
            | JobStatus::Uploaded
            | JobStatus::ExtractingAudio
            | JobStatus::Transcribing
            | JobStatus::Summarizing
            | JobStatus::CreatingNotion
            | JobStatus::Processing => "処理中...",
        }
    }

    /// Wire name of this status (SCREAMING_SNAKE_CASE).
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Uploading => "UPLOADING",
            JobStatus::Uploaded => "UPLOADED",
            JobStatus::ExtractingAudio => "EXTRACTING_AUDIO",
            JobStatus::Transcribing => "TRANSCRIBING",
            JobStatus::Summarizing => "SUMMARIZING",
            JobStatus::ExtractingMetadata => "EXTRACTING_METADATA",
            JobStatus::Reviewing => "REVIEWING",
            JobStatus::CreatingNotion => "CREATING_NOTION",
            JobStatus::Pending => "PENDING",
            JobStatus::Synced => "SYNCED",
            JobStatus::Processing => "PROCESSING",
            JobStatus::Live => "LIVE",
            JobStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// MEETING / JOB RECORDS
// =============================================================================

/// A meeting/job summary as returned by `GET /api/jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub date: String,
    pub status: JobStatus,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub original_file_type: Option<FileCategory>,
    #[serde(default)]
    pub audio_file_url: Option<String>,
    #[serde(default)]
    pub notion_page_url: Option<String>,
}

/// Full job record as returned by `GET /api/jobs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    pub job_id: String,
    pub filename: String,
    pub status: JobStatus,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub notion_page_url: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub metadata: Option<MeetingMetadata>,
    #[serde(default)]
    pub extracted_tasks: Option<Vec<ExtractedTask>>,
}

/// Success response from `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub job_id: String,
    pub filename: String,
    pub status: JobStatus,
    pub original_file_type: FileCategory,
}

/// Structured error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Meeting metadata extracted from a transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MeetingMetadata {
    #[serde(default)]
    pub meeting_type: Option<String>,
    #[serde(default)]
    pub meeting_date: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub key_stakeholders: Vec<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// A task candidate extracted from a meeting summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    pub is_abstract: bool,
    #[serde(default)]
    pub subtasks: Option<Vec<SubTask>>,
}

/// A decomposed sub-task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order: i32,
}

/// Editable fields for `PUT /api/jobs/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MeetingMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_tasks: Option<Vec<ExtractedTask>>,
}

/// Response from `POST /api/jobs/{id}/extract-metadata`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractMetadataResponse {
    pub job_id: String,
    pub status: JobStatus,
    pub metadata: MeetingMetadata,
    #[serde(default)]
    pub extracted_tasks: Vec<ExtractedTask>,
    pub message: String,
}

/// Options for `POST /api/jobs/{id}/approve`.
#[derive(Debug, Clone, Serialize)]
pub struct ApproveOptions {
    pub register_tasks: bool,
    pub send_notifications: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Default for ApproveOptions {
    fn default() -> Self {
        Self {
            register_tasks: true,
            send_notifications: true,
            project_id: None,
        }
    }
}

/// Response from `POST /api/jobs/{id}/approve`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveResponse {
    pub job_id: String,
    pub status: JobStatus,
    #[serde(default)]
    pub notion_page_url: Option<String>,
    pub tasks_registered: i64,
    pub notifications_sent: i64,
    pub message: String,
}

// =============================================================================
// NOTION
// =============================================================================

/// Response from `PUT /api/notion/update`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionUpdateResponse {
    pub job_id: String,
    pub notion_page_url: String,
    pub updated_at: String,
}

/// A project record from the Notion projects database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionProject {
    pub id: String,
    pub name: String,
    pub status: String,
    pub importance: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub expected_close_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub url: String,
}

// =============================================================================
// CRM: CUSTOMERS
// =============================================================================

/// Stage of a deal. Wire values are the backend's Japanese labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealStatus {
    #[serde(rename = "リード")]
    Lead,
    #[serde(rename = "商談中")]
    InTalks,
    #[serde(rename = "提案済み")]
    Proposed,
    #[serde(rename = "交渉中")]
    Negotiating,
    #[serde(rename = "成約")]
    Won,
    #[serde(rename = "失注")]
    Lost,
}

impl DealStatus {
    /// Wire (and display) label for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStatus::Lead => "リード",
            DealStatus::InTalks => "商談中",
            DealStatus::Proposed => "提案済み",
            DealStatus::Negotiating => "交渉中",
            DealStatus::Won => "成約",
            DealStatus::Lost => "失注",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub meeting_count: i64,
    pub task_count: i64,
    #[serde(default)]
    pub latest_deal_status: Option<DealStatus>,
    pub notion_page_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub company_name: String,
    pub contact_person: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// CRM: DEALS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub expected_close_date: Option<String>,
    pub status: DealStatus,
    #[serde(default)]
    pub close_date: Option<String>,
    pub notion_page_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealCreate {
    pub customer_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DealStatus>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DealStatus>,
}

// =============================================================================
// CRM: TASKS
// =============================================================================

/// Task progress state. Wire values are the backend's Japanese labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "未着手")]
    NotStarted,
    #[serde(rename = "進行中")]
    InProgress,
    #[serde(rename = "完了")]
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "未着手",
            TaskStatus::InProgress => "進行中",
            TaskStatus::Done => "完了",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "高",
            TaskPriority::Medium => "中",
            TaskPriority::Low => "低",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    pub due_date: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub project_id: String,
    pub project_name: String,
    pub meeting_id: String,
    #[serde(default)]
    pub parent_task_id: Option<String>,
    pub subtask_count: i64,
    pub completed_subtask_count: i64,
    pub is_overdue: bool,
    #[serde(default)]
    pub completion_date: Option<String>,
    pub notion_page_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<SubTaskCreate>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubTaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

/// Server-side filters for `GET /api/tasks`.
#[derive(Debug, Clone, Default)]
pub struct TaskFilters {
    pub project_id: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

/// Response from `POST /api/tasks/extract`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskExtractResponse {
    pub job_id: String,
    pub tasks: Vec<ExtractedTask>,
}

/// Response from `POST /api/tasks/decompose`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDecomposeResponse {
    pub parent_task: String,
    pub subtasks: Vec<SubTask>,
}

/// Response from `POST /api/tasks/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRegisterResponse {
    pub job_id: String,
    pub registered_count: i64,
    pub task_ids: Vec<String>,
}
