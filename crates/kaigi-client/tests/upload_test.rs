//! Integration tests for the upload transport against a mock backend.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kaigi_client::{ApiClient, ClientConfig, ProgressCallback};
use kaigi_core::{Error, FileCategory, JobStatus};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.uri())).expect("failed to create client")
}

fn upload_accepted_body() -> serde_json::Value {
    serde_json::json!({
        "job_id": "job-001",
        "filename": "meeting.wav",
        "status": "UPLOADED",
        "original_file_type": "audio"
    })
}

#[tokio::test]
async fn test_upload_success_parses_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_accepted_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .upload_file(vec![0u8; 4_000], "meeting.wav", "audio/wav", None)
        .await
        .expect("upload should succeed");

    assert_eq!(result.job_id, "job-001");
    assert_eq!(result.status, JobStatus::Uploaded);
    assert_eq!(result.original_file_type, FileCategory::Audio);
}

#[tokio::test]
async fn test_upload_reports_progress_up_to_hundred() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upload_accepted_body()))
        .mount(&server)
        .await;

    let seen = Arc::new(Mutex::new(Vec::<f64>::new()));
    let sink = seen.clone();
    let progress: ProgressCallback = Arc::new(move |p| sink.lock().unwrap().push(p));

    let client = client_for(&server);
    // Several chunks' worth of payload so multiple callbacks fire
    client
        .upload_file(vec![0u8; 200_000], "meeting.wav", "audio/wav", Some(progress))
        .await
        .expect("upload should succeed");

    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty(), "progress callback never fired");
    for window in seen.windows(2) {
        assert!(window[0] <= window[1], "progress went backwards");
    }
    for &p in seen.iter() {
        assert!((0.0..=100.0).contains(&p));
    }
    assert_eq!(*seen.last().unwrap(), 100.0);
}

#[tokio::test]
async fn test_upload_passes_through_server_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "detail": "サポートされていないファイル形式です"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .upload_file(vec![0u8; 100], "meeting.wav", "audio/wav", None)
        .await
        .expect_err("upload should fail");

    match err {
        Error::Server { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "サポートされていないファイル形式です");
        }
        other => panic!("expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_generic_message_when_body_not_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal server error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .upload_file(vec![0u8; 100], "meeting.wav", "audio/wav", None)
        .await
        .expect_err("upload should fail");

    match err {
        Error::Server { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "アップロードに失敗しました (status: 500)");
        }
        other => panic!("expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_malformed_success_body_is_parse_error() {
    let server = MockServer::start().await;

    // 2xx but not the expected JSON shape
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .upload_file(vec![0u8; 100], "meeting.wav", "audio/wav", None)
        .await
        .expect_err("upload should fail");

    match err {
        Error::Parse(message) => {
            assert_eq!(message, "レスポンスの解析に失敗しました");
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_network_error() {
    // Nothing listens here; connection is refused before any response
    let config = ClientConfig::new("http://127.0.0.1:1");
    let client = ApiClient::new(config).unwrap();

    let err = client
        .upload_file(vec![0u8; 100], "meeting.wav", "audio/wav", None)
        .await
        .expect_err("upload should fail");

    match err {
        Error::Network(message) => {
            assert_eq!(message, "ネットワークエラーが発生しました");
        }
        other => panic!("expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(upload_accepted_body())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_upload_timeout_ms(50);
    let client = ApiClient::new(config).unwrap();

    let err = client
        .upload_file(vec![0u8; 100], "meeting.wav", "audio/wav", None)
        .await
        .expect_err("upload should time out");

    match err {
        Error::Timeout(message) => {
            assert_eq!(message, "アップロードがタイムアウトしました");
        }
        other => panic!("expected Timeout error, got {:?}", other),
    }
}
