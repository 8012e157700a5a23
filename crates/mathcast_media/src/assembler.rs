//! Final video assembly.

use crate::Ffmpeg;
use mathcast_error::{AssemblyError, AssemblyErrorKind, MathcastResult};
use mathcast_core::MediaSegment;
use std::path::{Path, PathBuf};

/// Concatenates synchronized segments into the final deliverable.
#[derive(Debug, Clone)]
pub struct VideoAssembler {
    ffmpeg: Ffmpeg,
    output_dir: PathBuf,
}

impl VideoAssembler {
    /// Creates an assembler writing into `output_dir`.
    pub fn new(ffmpeg: Ffmpeg, output_dir: PathBuf) -> Self {
        Self { ffmpeg, output_dir }
    }

    /// Filesystem-safe form of a video title.
    pub fn safe_title(title: &str) -> String {
        title
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Combines segments into `<output_dir>/<safe_title>.mp4`.
    ///
    /// Segments are ordered by section id regardless of completion order, so
    /// the result is deterministic. Every input is verified to exist before
    /// the muxer runs; a missing clip means an earlier scene failed without
    /// degrading to a placeholder, which is fatal. If the target already
    /// exists it is returned untouched, making re-runs resumable.
    #[tracing::instrument(skip(self, segments, metadata), fields(segments = segments.len()))]
    pub async fn combine(
        &self,
        segments: &[MediaSegment],
        title: &str,
        workdir: &Path,
        metadata: Option<&serde_json::Value>,
    ) -> MathcastResult<PathBuf> {
        if segments.is_empty() {
            return Err(AssemblyError::new(AssemblyErrorKind::NoSegments))?;
        }

        let mut ordered: Vec<&MediaSegment> = segments.iter().collect();
        ordered.sort_by(|a, b| a.section_id().cmp(b.section_id()));

        for segment in &ordered {
            if !segment.video_path().exists() {
                return Err(AssemblyError::new(AssemblyErrorKind::MissingSegment {
                    section_id: segment.section_id().clone(),
                    path: segment.video_path().display().to_string(),
                }))?;
            }
        }

        let safe = Self::safe_title(title);
        let target = self.output_dir.join(format!("{safe}.mp4"));
        if target.exists() {
            tracing::info!(path = %target.display(), "final video already exists, reusing");
            return Ok(target);
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AssemblyError::new(AssemblyErrorKind::Concat(e.to_string())))?;

        let inputs: Vec<&Path> = ordered.iter().map(|s| s.video_path().as_path()).collect();
        self.ffmpeg
            .concat(&inputs, &workdir.join("concat_final.txt"), &target)
            .await
            .map_err(|e| AssemblyError::new(AssemblyErrorKind::Concat(e.message)))?;

        if let Some(metadata) = metadata {
            let sidecar = self.output_dir.join(format!("{safe}_metadata.json"));
            let body = serde_json::to_string_pretty(metadata)
                .map_err(|e| AssemblyError::new(AssemblyErrorKind::Metadata(e.to_string())))?;
            tokio::fs::write(&sidecar, body)
                .await
                .map_err(|e| AssemblyError::new(AssemblyErrorKind::Metadata(e.to_string())))?;
        }

        tracing::info!(path = %target.display(), "final video created");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_sanitized_for_the_filesystem() {
        assert_eq!(
            VideoAssembler::safe_title("Pythagorean Theorem: a^2 + b^2"),
            "Pythagorean_Theorem__a_2___b_2"
        );
        assert_eq!(VideoAssembler::safe_title("chain-rule_v2"), "chain-rule_v2");
    }
}
