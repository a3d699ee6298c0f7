//! Upload candidate validation.
//!
//! Dual whitelist check: the declared MIME type and the filename extension
//! must each be recognized, and both must agree on the media category
//! (audio or video). A known audio MIME paired with a known video extension
//! is rejected, not reconciled.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::defaults::MAX_UPLOAD_SIZE_BYTES;
use crate::error::{Error, Result};
use crate::models::FileCategory;

/// Allowed audio MIME types (WAV, MP3, M4A, AAC, FLAC, OGG).
pub static ALLOWED_AUDIO_MIME_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "audio/wav",
        "audio/mpeg",
        "audio/mp3",
        "audio/mp4",
        "audio/x-m4a",
        "audio/aac",
        "audio/flac",
        "audio/ogg",
    ]
    .into_iter()
    .collect()
});

/// Allowed video MIME types (MP4, MOV, AVI, WebM, MKV).
pub static ALLOWED_VIDEO_MIME_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "video/mp4",
        "video/quicktime",
        "video/x-msvideo",
        "video/webm",
        "video/x-matroska",
    ]
    .into_iter()
    .collect()
});

/// Audio extension → canonical MIME type.
pub static AUDIO_EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("wav", "audio/wav"),
        ("mp3", "audio/mpeg"),
        ("m4a", "audio/mp4"),
        ("aac", "audio/aac"),
        ("flac", "audio/flac"),
        ("ogg", "audio/ogg"),
    ]
    .into_iter()
    .collect()
});

/// Video extension → canonical MIME type.
pub static VIDEO_EXTENSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("mp4", "video/mp4"),
        ("mov", "video/quicktime"),
        ("avi", "video/x-msvideo"),
        ("webm", "video/webm"),
        ("mkv", "video/x-matroska"),
    ]
    .into_iter()
    .collect()
});

/// Result of upload candidate validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub valid: bool,
    pub file_type: Option<FileCategory>,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid(file_type: FileCategory) -> Self {
        Self {
            valid: true,
            file_type: Some(file_type),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            file_type: None,
            error: Some(error.into()),
        }
    }

    /// Convert into a `Result`, surfacing a reject as [`Error::Validation`]
    /// carrying the user-facing message.
    pub fn into_result(self) -> Result<FileCategory> {
        match (self.valid, self.file_type) {
            (true, Some(file_type)) => Ok(file_type),
            _ => Err(Error::Validation(self.error.unwrap_or_default())),
        }
    }
}

/// Extension of a filename: substring after the last `.`, lowercased.
fn extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    Some(ext.to_lowercase())
}

/// Whether an extension is supported at all (audio or video).
pub fn is_supported_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    AUDIO_EXTENSIONS.contains_key(lower.as_str()) || VIDEO_EXTENSIONS.contains_key(lower.as_str())
}

/// Canonical MIME type for a supported extension.
pub fn expected_mime_for_extension(ext: &str) -> Option<&'static str> {
    let lower = ext.to_lowercase();
    AUDIO_EXTENSIONS
        .get(lower.as_str())
        .or_else(|| VIDEO_EXTENSIONS.get(lower.as_str()))
        .copied()
}

/// Human-readable listing of every supported format.
pub fn supported_formats_text() -> String {
    let mut audio: Vec<String> = AUDIO_EXTENSIONS.keys().map(|e| e.to_uppercase()).collect();
    let mut video: Vec<String> = VIDEO_EXTENSIONS.keys().map(|e| e.to_uppercase()).collect();
    audio.sort();
    video.sort();
    format!("音声: {} / 動画: {}", audio.join(", "), video.join(", "))
}

/// Validate an upload candidate. Checks run in order; first failure wins:
/// size limit, extension presence, MIME whitelist, extension whitelist,
/// category agreement.
pub fn validate_upload(filename: &str, mime_type: &str, size: u64) -> ValidationResult {
    let result = run_checks(filename, mime_type, size);
    if let Some(error) = &result.error {
        debug!(
            filename = %filename,
            size_bytes = size,
            error = %error,
            "upload candidate rejected"
        );
    }
    result
}

fn run_checks(filename: &str, mime_type: &str, size: u64) -> ValidationResult {
    if size > MAX_UPLOAD_SIZE_BYTES {
        return ValidationResult::invalid("ファイルサイズが200MBを超えています");
    }

    let Some(ext) = extension(filename) else {
        return ValidationResult::invalid("ファイル拡張子が見つかりません");
    };

    let mime_is_audio = ALLOWED_AUDIO_MIME_TYPES.contains(mime_type);
    let mime_is_video = ALLOWED_VIDEO_MIME_TYPES.contains(mime_type);
    if !mime_is_audio && !mime_is_video {
        let shown = if mime_type.is_empty() { "不明" } else { mime_type };
        return ValidationResult::invalid(format!(
            "サポートされていないファイル形式です: {}",
            shown
        ));
    }

    let ext_is_audio = AUDIO_EXTENSIONS.contains_key(ext.as_str());
    let ext_is_video = VIDEO_EXTENSIONS.contains_key(ext.as_str());
    if !ext_is_audio && !ext_is_video {
        return ValidationResult::invalid(format!(
            "サポートされていないファイル拡張子です: .{}",
            ext
        ));
    }

    // Both halves are individually known; they must agree on category.
    if mime_is_audio && ext_is_audio {
        return ValidationResult::valid(FileCategory::Audio);
    }
    if mime_is_video && ext_is_video {
        return ValidationResult::valid(FileCategory::Video);
    }

    ValidationResult::invalid("ファイルのMIMEタイプと拡張子が一致しません")
}
