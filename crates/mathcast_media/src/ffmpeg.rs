//! Thin async wrapper over the ffmpeg and ffprobe binaries.
//!
//! The wrapper reports what the tool did; callers classify failures into
//! their own error categories (synchronization vs. assembly).

use std::path::Path;
use tokio::process::Command;

/// A failed ffmpeg or ffprobe invocation.
///
/// Carries the tool's stderr (or the spawn error) as a plain message for the
/// caller to wrap.
#[derive(Debug, Clone, derive_more::Display)]
#[display("{}", message)]
pub struct FfmpegFailure {
    /// Description of what went wrong
    pub message: String,
}

impl FfmpegFailure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Locations of the ffmpeg and ffprobe binaries.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    ffmpeg: String,
    ffprobe: String,
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Ffmpeg {
    /// Resolves binary paths from `FFMPEG_PATH` / `FFPROBE_PATH`, falling
    /// back to the names on `PATH`.
    pub fn from_env() -> Self {
        Self {
            ffmpeg: std::env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffprobe: std::env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
        }
    }

    async fn run(&self, program: &str, args: &[&str]) -> Result<String, FfmpegFailure> {
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| FfmpegFailure::new(format!("failed to run {program}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FfmpegFailure::new(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Returns the container duration of a media file in seconds.
    #[tracing::instrument(skip(self))]
    pub async fn probe_duration(&self, path: &Path) -> Result<f64, FfmpegFailure> {
        let path_str = path.to_string_lossy();
        let stdout = self
            .run(
                &self.ffprobe,
                &[
                    "-v",
                    "error",
                    "-show_entries",
                    "format=duration",
                    "-of",
                    "default=noprint_wrappers=1:nokey=1",
                    &path_str,
                ],
            )
            .await?;
        stdout
            .trim()
            .parse::<f64>()
            .map_err(|e| FfmpegFailure::new(format!("unparseable duration '{}': {e}", stdout.trim())))
    }

    /// Extracts a single frame at `at` seconds into `output` (PNG).
    pub async fn extract_frame(
        &self,
        video: &Path,
        at: f64,
        output: &Path,
    ) -> Result<(), FfmpegFailure> {
        let at = format!("{at}");
        self.run(
            &self.ffmpeg,
            &[
                "-y",
                "-ss",
                &at,
                "-i",
                &video.to_string_lossy(),
                "-vframes",
                "1",
                &output.to_string_lossy(),
            ],
        )
        .await
        .map(|_| ())
    }

    /// Turns a still image into a video clip of the given duration.
    pub async fn still_clip(
        &self,
        frame: &Path,
        duration: f64,
        output: &Path,
    ) -> Result<(), FfmpegFailure> {
        let duration = format!("{duration}");
        self.run(
            &self.ffmpeg,
            &[
                "-y",
                "-loop",
                "1",
                "-i",
                &frame.to_string_lossy(),
                "-t",
                &duration,
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                &output.to_string_lossy(),
            ],
        )
        .await
        .map(|_| ())
    }

    /// Concatenates clips with stream copy via a concat list file.
    ///
    /// All inputs must share codec parameters; rendered and still clips do
    /// because the still clip is encoded to match.
    pub async fn concat(
        &self,
        inputs: &[&Path],
        list_file: &Path,
        output: &Path,
    ) -> Result<(), FfmpegFailure> {
        let listing: String = inputs
            .iter()
            .map(|p| format!("file '{}'\n", p.to_string_lossy()))
            .collect();
        tokio::fs::write(list_file, listing)
            .await
            .map_err(|e| FfmpegFailure::new(format!("failed to write concat list: {e}")))?;

        self.run(
            &self.ffmpeg,
            &[
                "-y",
                "-f",
                "concat",
                "-safe",
                "0",
                "-i",
                &list_file.to_string_lossy(),
                "-c",
                "copy",
                &output.to_string_lossy(),
            ],
        )
        .await
        .map(|_| ())
    }

    /// Muxes an audio track onto a video: video stream copied untouched,
    /// audio re-encoded to AAC, output runs to the longer stream.
    pub async fn mux(
        &self,
        video: &Path,
        audio: &Path,
        output: &Path,
    ) -> Result<(), FfmpegFailure> {
        self.run(
            &self.ffmpeg,
            &[
                "-y",
                "-i",
                &video.to_string_lossy(),
                "-i",
                &audio.to_string_lossy(),
                "-c:v",
                "copy",
                "-c:a",
                "aac",
                &output.to_string_lossy(),
            ],
        )
        .await
        .map(|_| ())
    }
}
