//! Kaigi Upload Runner
//!
//! Validate a local recording, upload it to the backend, and poll the job
//! until it reaches a terminal status.
//!
//! Usage:
//!   cargo run --bin kaigi-upload -- meeting.wav
//!   cargo run --bin kaigi-upload -- clip.mp4 --base-url http://localhost:8000
//!   cargo run --bin kaigi-upload -- memo.m4a --mime audio/mp4 --no-poll

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kaigi_client::{ApiClient, ClientConfig, ProgressCallback};
use kaigi_core::{expected_mime_for_extension, supported_formats_text, validate_upload};

#[derive(Debug)]
struct Args {
    file: PathBuf,
    mime: Option<String>,
    base_url: Option<String>,
    poll: bool,
}

fn usage() -> ! {
    eprintln!("Usage: kaigi-upload <file> [--mime <type>] [--base-url <url>] [--no-poll]");
    eprintln!();
    eprintln!("Supported formats — {}", supported_formats_text());
    std::process::exit(2);
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut file: Option<PathBuf> = None;
    let mut mime: Option<String> = None;
    let mut base_url: Option<String> = None;
    let mut poll = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mime" | "-m" => {
                i += 1;
                if i < args.len() {
                    mime = Some(args[i].clone());
                } else {
                    usage();
                }
            }
            "--base-url" | "-u" => {
                i += 1;
                if i < args.len() {
                    base_url = Some(args[i].clone());
                } else {
                    usage();
                }
            }
            "--no-poll" => poll = false,
            "--help" | "-h" => usage(),
            other if !other.starts_with('-') && file.is_none() => {
                file = Some(PathBuf::from(other));
            }
            _ => usage(),
        }
        i += 1;
    }

    match file {
        Some(file) => Args {
            file,
            mime,
            base_url,
            poll,
        },
        None => usage(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "kaigi_client=info".into()),
        )
        .init();

    let args = parse_args();

    let filename = args
        .file
        .file_name()
        .and_then(|f| f.to_str())
        .context("invalid file name")?
        .to_string();

    let payload = tokio::fs::read(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    // Outside a browser nothing declares a MIME type for us; fall back to
    // the canonical type for the extension.
    let mime = match args.mime {
        Some(m) => m,
        None => {
            let ext = filename.rsplit('.').next().unwrap_or("");
            match expected_mime_for_extension(ext) {
                Some(m) => m.to_string(),
                None => bail!(
                    "cannot infer MIME type for {}; pass --mime\nSupported formats — {}",
                    filename,
                    supported_formats_text()
                ),
            }
        }
    };

    let file_type = validate_upload(&filename, &mime, payload.len() as u64).into_result()?;
    info!(
        filename = %filename,
        size_bytes = payload.len() as u64,
        file_type = %file_type,
        "validation passed"
    );

    let config = match args.base_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let client = ApiClient::new(config)?;

    let progress: ProgressCallback = Arc::new(|percent| {
        print!("\rUploading... {:>5.1}%", percent);
        let _ = std::io::stdout().flush();
    });

    let accepted = client
        .upload_file(payload, &filename, &mime, Some(progress))
        .await?;
    println!();
    println!(
        "Accepted: job {} ({}) — {}",
        accepted.job_id,
        accepted.original_file_type,
        accepted.status.label()
    );

    if !args.poll {
        return Ok(());
    }

    let handle = client.poll_job_status(&accepted.job_id, |job| {
        println!("  {} — {}", job.status, job.status.label());
        if let Some(url) = &job.notion_page_url {
            println!("  Notion: {}", url);
        }
        if let Some(msg) = &job.error_message {
            eprintln!("  error: {}", msg);
        }
    });
    handle.wait().await;

    Ok(())
}
