use std::path::{Path, PathBuf};

use async_trait::async_trait;
use url::Url;

use crate::application::ports::{FetchError, FetchedMedia, MediaFetcher};

use super::command::{CommandError, run_command};

const FORMAT: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

/// Downloads remote media with `yt-dlp`.
pub struct YtDlpFetcher {
    program: String,
}

impl YtDlpFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for YtDlpFetcher {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

/// Rejects anything but absolute http(s) URLs before a download is attempted.
pub fn validate_source_url(raw: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", raw, e)))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        scheme => Err(FetchError::InvalidUrl(format!("unsupported url: {}", scheme))),
    }
}

pub fn ytdlp_args(url: &Url, work_dir: &Path) -> Vec<String> {
    vec![
        "--no-playlist".to_string(),
        "--no-warnings".to_string(),
        "--quiet".to_string(),
        "--no-simulate".to_string(),
        "-f".to_string(),
        FORMAT.to_string(),
        "--merge-output-format".to_string(),
        "mp4".to_string(),
        "-o".to_string(),
        work_dir.join("source.%(ext)s").display().to_string(),
        "--print".to_string(),
        "title".to_string(),
        "--print".to_string(),
        "after_move:filepath".to_string(),
        url.to_string(),
    ]
}

/// Splits yt-dlp's `--print` output into title and file path.
pub fn parse_ytdlp_output(stdout: &str) -> Option<(String, PathBuf)> {
    let lines: Vec<&str> = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    match lines.as_slice() {
        [title, .., path] => Some((title.to_string(), PathBuf::from(path))),
        _ => None,
    }
}

fn classify(error: CommandError) -> FetchError {
    if let CommandError::Spawn { source, .. } = error {
        return FetchError::Io(source);
    }
    let stderr = error.stderr();
    if stderr.contains("Unsupported URL") || stderr.contains("is not a valid URL") {
        FetchError::InvalidUrl(stderr.to_string())
    } else if stderr.contains("Unable to download")
        || stderr.contains("HTTP Error")
        || stderr.contains("Failed to resolve")
    {
        FetchError::Unreachable(stderr.to_string())
    } else {
        FetchError::DownloadFailed(error.to_string())
    }
}

#[async_trait]
impl MediaFetcher for YtDlpFetcher {
    async fn fetch(&self, url: &str, work_dir: &Path) -> Result<FetchedMedia, FetchError> {
        let parsed = validate_source_url(url)?;

        let stdout = run_command(&self.program, &ytdlp_args(&parsed, work_dir))
            .await
            .map_err(classify)?;

        let (title, path) = parse_ytdlp_output(&stdout).ok_or_else(|| {
            FetchError::DownloadFailed("yt-dlp did not report a file".to_string())
        })?;

        if tokio::fs::metadata(&path).await.is_err() {
            return Err(FetchError::DownloadFailed(format!(
                "downloaded file missing: {}",
                path.display()
            )));
        }

        tracing::info!(title = %title, "Media downloaded");
        Ok(FetchedMedia { path, title })
    }
}
