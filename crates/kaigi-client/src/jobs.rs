//! Job API: fetch, list, edit, approve, and poll to a terminal status.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use kaigi_core::{
    ApproveOptions, ApproveResponse, ExtractMetadataResponse, Job, JobDetail, JobUpdate, Result,
};

use crate::client::ApiClient;

/// Handle for a running poll task.
///
/// The task stops on its own once a terminal status is observed;
/// [`cancel`](PollHandle::cancel) stops it immediately and is idempotent —
/// calling it after the task already finished is a no-op. Callers owning a
/// handle are expected to cancel it on teardown to avoid leaking timers.
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Stop polling immediately. Safe to call any number of times.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the poll task has stopped (terminal status or cancellation).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait until the poll task stops.
    pub async fn wait(self) {
        // JoinError here means the task was cancelled, which is fine.
        let _ = self.task.await;
    }
}

impl ApiClient {
    /// Fetch a single job record from `GET /api/jobs/{id}`.
    pub async fn get_job(&self, job_id: &str) -> Result<JobDetail> {
        let url = self.url(&format!("/api/jobs/{}", job_id));
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "ジョブステータスの取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// Fetch all jobs from `GET /api/jobs`.
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        let url = self.url("/api/jobs");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "ジョブ一覧の取得に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// Update a job's editable fields via `PUT /api/jobs/{id}`.
    pub async fn update_job(&self, job_id: &str, update: &JobUpdate) -> Result<JobDetail> {
        let url = self.url(&format!("/api/jobs/{}", job_id));
        let response = self.http.put(&url).json(update).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "Job更新に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// Trigger metadata/task extraction via
    /// `POST /api/jobs/{id}/extract-metadata`.
    pub async fn extract_metadata(&self, job_id: &str) -> Result<ExtractMetadataResponse> {
        let url = self.url(&format!("/api/jobs/{}/extract-metadata", job_id));
        let response = self.http.post(&url).send().await?;
        if !response.status().is_success() {
            return Err(
                Self::error_from_response(response, "メタデータ抽出に失敗しました").await,
            );
        }
        Self::parse_json(response).await
    }

    /// Approve a reviewed job via `POST /api/jobs/{id}/approve`.
    pub async fn approve_job(
        &self,
        job_id: &str,
        options: &ApproveOptions,
    ) -> Result<ApproveResponse> {
        let url = self.url(&format!("/api/jobs/{}/approve", job_id));
        let response = self.http.post(&url).json(options).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response, "承認に失敗しました").await);
        }
        Self::parse_json(response).await
    }

    /// Poll a job's status at the configured interval.
    ///
    /// See [`poll_job_status_with_interval`](Self::poll_job_status_with_interval).
    pub fn poll_job_status<F>(&self, job_id: &str, on_update: F) -> PollHandle
    where
        F: FnMut(JobDetail) + Send + 'static,
    {
        let interval = Duration::from_millis(self.config.poll_interval_ms);
        self.poll_job_status_with_interval(job_id, interval, on_update)
    }

    /// Poll a job's status at a fixed interval until a terminal status.
    ///
    /// `on_update` is invoked exactly once per successful fetch with the full
    /// job record. After an update carrying a terminal status (PENDING,
    /// SYNCED, FAILED) the timer stops and no further fetch occurs. Fetch
    /// failures are logged and swallowed; polling continues at the next
    /// tick. Ticks never overlap: a slow fetch delays the next one.
    pub fn poll_job_status_with_interval<F>(
        &self,
        job_id: &str,
        interval: Duration,
        mut on_update: F,
    ) -> PollHandle
    where
        F: FnMut(JobDetail) + Send + 'static,
    {
        let client = self.clone();
        let job_id = job_id.to_string();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval yields immediately; consume that tick so the first
            // fetch happens one full period after the call
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match client.get_job(&job_id).await {
                    Ok(job) => {
                        let status = job.status;
                        on_update(job);
                        if status.is_terminal() {
                            debug!(
                                job_id = %job_id,
                                job_status = %status,
                                "terminal status reached, polling stopped"
                            );
                            break;
                        }
                    }
                    Err(e) => {
                        // Transient failures must not abort a long-running
                        // job; retry on the next tick.
                        warn!(
                            job_id = %job_id,
                            error = %e,
                            "job status fetch failed, retrying next tick"
                        );
                    }
                }
            }
        });

        PollHandle { task }
    }
}
