//! Media fetching via yt-dlp.
//!
//! The fetcher is a two-phase protocol:
//! 1. [`MediaFetcher::probe`] resolves metadata (title, thumbnails,
//!    container extension) without downloading.
//! 2. [`MediaFetcher::materialize`] performs the full download, transcoded
//!    to the configured codec/bitrate, under a name the caller has already
//!    resolved.
//!
//! The split exists because the output filename depends on the cleaned
//! title, which in turn depends on the probe's raw title - so every run
//! fetches twice by design.

pub mod dto;
mod ytdlp;

pub use ytdlp::{get_ytdlp_version, is_ytdlp_available};

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::RawMediaInfo;
use crate::sanitize::sanitize_filename;

/// Errors from the media extraction collaborator.
///
/// These are the pipeline's fatal class: a URL that cannot be resolved or
/// downloaded aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("yt-dlp not found. Install it: https://github.com/yt-dlp/yt-dlp/wiki/Installation")]
    ToolMissing,

    #[error("Media extraction failed: {0}")]
    Extractor(String),

    #[error("Failed to parse extractor output: {0}")]
    Parse(String),

    #[error("No media info resolved for this URL")]
    NoMediaInfo,

    #[error("Download produced no output file at {0}")]
    MissingOutput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Container extensions yt-dlp may leave behind before transcoding.
/// Only files with one of these extensions are cleaned up after a download,
/// so sidecar artifacts (cover images) with the same stem survive.
const CONTAINER_EXTS: &[&str] = &[
    "webm", "m4a", "mp4", "mkv", "opus", "ogg", "aac", "wav", "flac",
];

/// Media fetcher configured with an output directory and transcode target.
pub struct MediaFetcher {
    output_dir: PathBuf,
    codec: String,
    bitrate: String,
}

impl MediaFetcher {
    /// Create a fetcher from the application config.
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: config.output.directory.clone(),
            codec: config.audio.codec.clone(),
            bitrate: config.audio.bitrate.clone(),
        }
    }

    /// Resolve metadata for the URL without downloading.
    pub fn probe(&self, url: &str) -> Result<RawMediaInfo, FetchError> {
        ytdlp::probe(url)
    }

    /// Download and transcode the URL, naming the output after `name`.
    ///
    /// Returns the path of the final single-codec file. Any leftover file in
    /// a pre-transcode container format at the same base name is deleted.
    pub fn materialize(&self, url: &str, name: &str) -> Result<PathBuf, FetchError> {
        let safe_name = sanitize_filename(name);

        std::fs::create_dir_all(&self.output_dir)?;

        let final_path = self
            .output_dir
            .join(format!("{}.{}", safe_name, self.codec));
        let template = self.output_dir.join(format!("{}.%(ext)s", safe_name));

        ytdlp::download(url, &template, &self.codec, &self.bitrate)?;

        if !final_path.exists() {
            return Err(FetchError::MissingOutput(final_path));
        }

        self.cleanup_leftovers(&safe_name)?;

        Ok(final_path)
    }

    /// Remove intermediate container files left next to the transcoded
    /// output (e.g. `name.webm` beside `name.mp3`).
    fn cleanup_leftovers(&self, stem: &str) -> Result<(), FetchError> {
        for entry in std::fs::read_dir(&self.output_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !is_leftover_container(&path, stem, &self.codec) {
                continue;
            }
            tracing::debug!("Removing intermediate file {:?}", path);
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// True for files with the given stem whose extension is a known media
/// container other than the final codec.
fn is_leftover_container(path: &Path, stem: &str, codec: &str) -> bool {
    let Some(file_stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    file_stem == stem && !ext.eq_ignore_ascii_case(codec) && CONTAINER_EXTS.contains(&ext)
}
