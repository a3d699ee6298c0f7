//! Upload transport: one multipart POST with progress reporting.
//!
//! Progress is driven by a byte-counting body stream, so callbacks arrive in
//! non-decreasing percentage order and always within [0, 100]. Zero or more
//! progress notifications are followed by exactly one terminal outcome.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Body;
use tracing::{debug, info, trace};

use kaigi_core::defaults::UPLOAD_CHUNK_SIZE;
use kaigi_core::{Error, Result, UploadResponse};

use crate::client::ApiClient;

/// Progress sink invoked with a percentage in [0, 100].
pub type ProgressCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Chunked byte stream that reports cumulative progress as chunks are
/// handed to the transport.
fn progress_stream(
    payload: Vec<u8>,
    progress: Option<ProgressCallback>,
) -> impl futures::Stream<Item = std::io::Result<Bytes>> + Send + 'static {
    let total = payload.len() as u64;
    let sent = Arc::new(AtomicU64::new(0));

    let chunks: Vec<Bytes> = payload
        .chunks(UPLOAD_CHUNK_SIZE)
        .map(Bytes::copy_from_slice)
        .collect();

    futures::stream::iter(chunks.into_iter().map(move |chunk| {
        if let Some(cb) = &progress {
            let loaded = sent.fetch_add(chunk.len() as u64, Ordering::SeqCst) + chunk.len() as u64;
            let percent = if total > 0 {
                (loaded as f64 / total as f64) * 100.0
            } else {
                100.0
            };
            let percent = percent.clamp(0.0, 100.0);
            trace!(progress_percent = percent, "upload progress");
            cb(percent);
        }
        Ok::<Bytes, std::io::Error>(chunk)
    }))
}

fn progress_body(payload: Vec<u8>, progress: Option<ProgressCallback>) -> Body {
    Body::wrap_stream(progress_stream(payload, progress))
}

impl ApiClient {
    /// Upload a recording to `POST /api/upload`.
    ///
    /// The optional `progress` callback receives
    /// `min(100, max(0, loaded/total*100))` as the body is sent. Failure
    /// categories carry fixed user-displayable messages: network failure,
    /// timeout, server rejection (backend `detail` passed through when
    /// present), and a malformed success body.
    pub async fn upload_file(
        &self,
        payload: Vec<u8>,
        filename: &str,
        mime_type: &str,
        progress: Option<ProgressCallback>,
    ) -> Result<UploadResponse> {
        let url = self.url("/api/upload");
        let size = payload.len() as u64;
        let started = Instant::now();

        debug!(
            filename = %filename,
            size_bytes = size,
            "starting upload"
        );

        let part = Part::stream_with_length(progress_body(payload, progress), size)
            .file_name(filename.to_string())
            .mime_str(mime_type)
            .map_err(|e| Error::Internal(format!("Failed to create multipart: {}", e)))?;

        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .timeout(Duration::from_millis(self.config.upload_timeout_ms))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout("アップロードがタイムアウトしました".to_string())
                } else {
                    Error::Network("ネットワークエラーが発生しました".to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let fallback = format!("アップロードに失敗しました (status: {})", status);
            return Err(Self::error_from_response(response, &fallback).await);
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout("アップロードがタイムアウトしました".to_string())
            } else {
                Error::Network("ネットワークエラーが発生しました".to_string())
            }
        })?;

        let result: UploadResponse = serde_json::from_str(&text)
            .map_err(|_| Error::Parse("レスポンスの解析に失敗しました".to_string()))?;

        info!(
            job_id = %result.job_id,
            filename = %result.filename,
            job_status = %result.status,
            duration_ms = started.elapsed().as_millis() as u64,
            "upload accepted"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::sync::Mutex;

    fn collecting_callback() -> (ProgressCallback, Arc<Mutex<Vec<f64>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let cb: ProgressCallback = Arc::new(move |p| sink.lock().unwrap().push(p));
        (cb, seen)
    }

    // Pulling the stream mimics the transport sending chunks.
    async fn drain(
        stream: impl futures::Stream<Item = std::io::Result<Bytes>> + Send + 'static,
    ) {
        let mut stream = Box::pin(stream);
        while stream.next().await.is_some() {}
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_and_bounded() {
        let payload = vec![0u8; UPLOAD_CHUNK_SIZE * 3 + 17];
        let (cb, seen) = collecting_callback();

        drain(progress_stream(payload, Some(cb))).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        for window in seen.windows(2) {
            assert!(window[0] <= window[1], "progress must be non-decreasing");
        }
        for &p in seen.iter() {
            assert!((0.0..=100.0).contains(&p));
        }
        assert_eq!(*seen.last().unwrap(), 100.0);
    }

    #[tokio::test]
    async fn test_progress_single_chunk_reaches_hundred() {
        let (cb, seen) = collecting_callback();
        drain(progress_stream(vec![1u8; 100], Some(cb))).await;
        assert_eq!(*seen.lock().unwrap(), vec![100.0]);
    }

    #[tokio::test]
    async fn test_empty_payload_sends_no_progress() {
        let (cb, seen) = collecting_callback();
        drain(progress_stream(Vec::new(), Some(cb))).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_callback_is_fine() {
        drain(progress_stream(vec![0u8; 1024], None)).await;
    }
}
