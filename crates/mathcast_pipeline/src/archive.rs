//! Intermediate artifact archival.
//!
//! Each run can leave its intermediate products behind for debugging and
//! analysis: the validated request, the raw explanation, the enriched plan,
//! the narration scripts, and the generated scene code.

use mathcast_core::{AnimationPlan, VideoRequest};
use mathcast_error::{JsonError, MathcastResult};
use mathcast_interface::GeneratedContent;
use std::path::{Path, PathBuf};

/// Writes a run's intermediate artifacts under a timestamped directory.
#[derive(Debug, Clone)]
pub struct RunArchive {
    dir: PathBuf,
}

impl RunArchive {
    /// Creates `<output_dir>/intermediate_<unix_timestamp>/`.
    pub async fn create(output_dir: &Path) -> MathcastResult<Self> {
        let dir = output_dir.join(format!("intermediate_{}", chrono::Utc::now().timestamp()));
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| JsonError::new(format!("failed to create archive directory: {e}")))?;
        Ok(Self { dir })
    }

    /// Directory the artifacts land in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn write_json<T: serde::Serialize>(&self, name: &str, value: &T) -> MathcastResult<()> {
        let body = serde_json::to_string_pretty(value)
            .map_err(|e| JsonError::new(format!("failed to serialize {name}: {e}")))?;
        tokio::fs::write(self.dir.join(name), body)
            .await
            .map_err(|e| JsonError::new(format!("failed to write {name}: {e}")))?;
        Ok(())
    }

    async fn write_text(&self, name: &str, body: &str) -> MathcastResult<()> {
        tokio::fs::write(self.dir.join(name), body)
            .await
            .map_err(|e| JsonError::new(format!("failed to write {name}: {e}")))?;
        Ok(())
    }

    /// Persists all intermediate artifacts for one run.
    #[tracing::instrument(skip_all, fields(dir = %self.dir.display()))]
    pub async fn save(
        &self,
        request: &VideoRequest,
        explanation: &str,
        plan: &AnimationPlan,
        content: &GeneratedContent,
    ) -> MathcastResult<()> {
        self.write_json("request.json", request).await?;
        self.write_text("explanation.txt", explanation).await?;
        self.write_json("animation_plan.json", plan).await?;
        self.write_json("scripts.json", &content.scripts).await?;

        // Scene code concatenated in section order for easy reading.
        let mut sections: Vec<(&String, &String)> = content.manim_code.iter().collect();
        sections.sort_by(|a, b| a.0.cmp(b.0));
        let code: String = sections
            .iter()
            .map(|(id, code)| format!("# --- {id} ---\n{code}\n\n"))
            .collect();
        self.write_text("animation_code.py", &code).await?;

        tracing::info!("saved intermediate artifacts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathcast_core::VideoRequest;
    use std::collections::HashMap;

    #[tokio::test]
    async fn all_artifacts_are_written() {
        let base = std::env::temp_dir().join(format!("mathcast-archive-{}", std::process::id()));
        let archive = RunArchive::create(&base).await.unwrap();

        let request = VideoRequest::builder("Explain the chain rule").build().unwrap();
        let plan = AnimationPlan {
            title: "Chain Rule".to_string(),
            sections: vec![],
            estimated_duration: 0.0,
            visual_style: Default::default(),
        };
        let content = GeneratedContent {
            scripts: HashMap::from([("section1".to_string(), "Narration.".to_string())]),
            manim_code: HashMap::from([("section1".to_string(), "pass".to_string())]),
        };

        archive.save(&request, "Explanation body.", &plan, &content).await.unwrap();

        for name in [
            "request.json",
            "explanation.txt",
            "animation_plan.json",
            "scripts.json",
            "animation_code.py",
        ] {
            assert!(archive.dir().join(name).exists(), "{name} missing");
        }

        std::fs::remove_dir_all(&base).unwrap();
    }
}
