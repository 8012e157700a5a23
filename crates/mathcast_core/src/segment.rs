//! Synchronized media segments.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A synchronized audio/video clip for one section.
///
/// Created per scene after synchronization; immutable afterwards. Ownership
/// passes to the video assembler for the duration of final concatenation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct MediaSegment {
    /// Section this segment belongs to
    section_id: String,
    /// Path to the synchronized video clip
    video_path: PathBuf,
    /// Path to the narration audio used for the clip
    audio_path: PathBuf,
    /// Narration script spoken in the clip
    script: String,
    /// Measured duration of the synchronized clip in seconds
    duration: f64,
    /// Offset of the clip within the final video in seconds
    start_time: f64,
}

impl MediaSegment {
    /// Creates a segment starting at offset zero.
    pub fn new(
        section_id: impl Into<String>,
        video_path: PathBuf,
        audio_path: PathBuf,
        script: impl Into<String>,
        duration: f64,
    ) -> Self {
        Self {
            section_id: section_id.into(),
            video_path,
            audio_path,
            script: script.into(),
            duration,
            start_time: 0.0,
        }
    }
}
