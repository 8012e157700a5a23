//! Audio/video synchronization.
//!
//! Narration regularly outlasts the rendered animation. When it does, the
//! final frame is held for the difference so the voiceover finishes over a
//! stable image. The video is never shortened: when the animation outlasts
//! the narration the picture plays out past the audio.

use crate::Ffmpeg;
use mathcast_error::{MathcastResult, SynchronizationError, SynchronizationErrorKind};
use std::path::Path;

/// Offset before the end of the video where the held frame is sampled.
///
/// Sampling exactly at the end can land past the last frame.
const FRAME_SAMPLE_OFFSET: f64 = 0.1;

/// The decision of how to combine one audio and one video track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncPlan {
    /// Mux directly; the video already covers the audio
    MuxOnly,
    /// Hold the final frame for this many seconds, then mux
    ExtendVideo {
        /// Duration of the held-frame still clip in seconds
        hold: f64,
    },
}

impl SyncPlan {
    /// Decides the plan for a measured video and audio duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathcast_media::SyncPlan;
    ///
    /// assert_eq!(SyncPlan::for_durations(10.0, 8.0), SyncPlan::MuxOnly);
    /// assert_eq!(
    ///     SyncPlan::for_durations(8.0, 10.0),
    ///     SyncPlan::ExtendVideo { hold: 2.0 }
    /// );
    /// ```
    pub fn for_durations(video: f64, audio: f64) -> Self {
        if audio > video {
            SyncPlan::ExtendVideo { hold: audio - video }
        } else {
            SyncPlan::MuxOnly
        }
    }
}

/// Combines a rendered clip with its narration track.
#[derive(Debug, Clone, Default)]
pub struct Synchronizer {
    ffmpeg: Ffmpeg,
}

impl Synchronizer {
    /// Creates a synchronizer using the given ffmpeg binaries.
    pub fn new(ffmpeg: Ffmpeg) -> Self {
        Self { ffmpeg }
    }

    async fn probe(&self, path: &Path) -> MathcastResult<f64> {
        self.ffmpeg.probe_duration(path).await.map_err(|e| {
            SynchronizationError::new(SynchronizationErrorKind::Probe {
                path: path.display().to_string(),
                message: e.message,
            })
            .into()
        })
    }

    /// Synchronizes `video` and `audio` into `output`, returning the
    /// measured duration of the result.
    ///
    /// Intermediates (held frame, still clip, extended video, concat list)
    /// land in `workdir`.
    #[tracing::instrument(skip(self), fields(video = %video.display(), audio = %audio.display()))]
    pub async fn synchronize(
        &self,
        video: &Path,
        audio: &Path,
        workdir: &Path,
        output: &Path,
    ) -> MathcastResult<f64> {
        let video_duration = self.probe(video).await?;
        let audio_duration = self.probe(audio).await?;
        let plan = SyncPlan::for_durations(video_duration, audio_duration);
        tracing::info!(video_duration, audio_duration, ?plan, "synchronizing");

        let extended = workdir.join("extended_video.mp4");
        let video_to_use: &Path = match plan {
            SyncPlan::MuxOnly => video,
            SyncPlan::ExtendVideo { hold } => {
                let frame = workdir.join("last_frame.png");
                self.ffmpeg
                    .extract_frame(video, video_duration - FRAME_SAMPLE_OFFSET, &frame)
                    .await
                    .map_err(|e| {
                        SynchronizationError::new(SynchronizationErrorKind::FrameExtraction(
                            e.message,
                        ))
                    })?;

                let still = workdir.join("last_frame_video.mp4");
                self.ffmpeg
                    .still_clip(&frame, hold, &still)
                    .await
                    .map_err(|e| {
                        SynchronizationError::new(SynchronizationErrorKind::StillClip(e.message))
                    })?;

                self.ffmpeg
                    .concat(&[video, &still], &workdir.join("concat.txt"), &extended)
                    .await
                    .map_err(|e| {
                        SynchronizationError::new(SynchronizationErrorKind::Mux(e.message))
                    })?;
                &extended
            }
        };

        self.ffmpeg
            .mux(video_to_use, audio, output)
            .await
            .map_err(|e| SynchronizationError::new(SynchronizationErrorKind::Mux(e.message)))?;

        self.probe(output).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_durations_mux_directly() {
        assert_eq!(SyncPlan::for_durations(5.0, 5.0), SyncPlan::MuxOnly);
    }

    #[test]
    fn longer_video_is_never_shortened() {
        assert_eq!(SyncPlan::for_durations(12.0, 3.0), SyncPlan::MuxOnly);
    }

    #[test]
    fn longer_audio_holds_the_final_frame() {
        match SyncPlan::for_durations(4.0, 9.5) {
            SyncPlan::ExtendVideo { hold } => assert!((hold - 5.5).abs() < 1e-9),
            other => panic!("expected ExtendVideo, got {other:?}"),
        }
    }
}
