//! Manim subprocess renderer.

use async_trait::async_trait;
use mathcast_error::{MathcastResult, RenderError, RenderErrorKind};
use mathcast_interface::Renderer;
use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Renders Manim scene source by invoking `python3 -m manim`.
///
/// Manim's output location depends on its version and quality settings, so
/// after a clean exit the renderer probes the conventional candidate paths
/// and copies the first hit to a stable per-scene name.
#[derive(Debug, Clone)]
pub struct ManimRenderer {
    python: String,
    quality_flag: String,
}

impl Default for ManimRenderer {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ManimRenderer {
    /// Resolves the interpreter from `MATHCAST_PYTHON`, defaulting to
    /// `python3`, rendering at medium quality.
    pub fn from_env() -> Self {
        Self {
            python: std::env::var("MATHCAST_PYTHON").unwrap_or_else(|_| "python3".to_string()),
            quality_flag: "-qm".to_string(),
        }
    }

    /// Extracts the Scene subclass name from scene source, or wraps the code
    /// in a generated class when none is declared.
    ///
    /// Models sometimes emit a bare `construct` body; wrapping keeps those
    /// renderable instead of failing on a missing class.
    fn prepare_code(section_id: &str, code: &str) -> (String, String) {
        let class_re = Regex::new(r"class\s+(\w+)\s*\(\s*(?:Voice\w*Scene|Scene)\s*\)")
            .expect("scene class pattern is valid");
        if let Some(captures) = class_re.captures(code) {
            return (captures[1].to_string(), code.to_string());
        }

        let class_name = format!("{}Scene", capitalize(section_id));
        let body: String = code
            .lines()
            .map(|line| format!("        {line}\n"))
            .collect();
        let wrapped = format!(
            "from manim import *\n\nclass {class_name}(Scene):\n    def construct(self):\n{body}"
        );
        (class_name, wrapped)
    }

    /// Conventional locations Manim may have written the video to.
    fn candidate_paths(workdir: &Path, section_id: &str, class_name: &str) -> Vec<PathBuf> {
        let file = format!("{class_name}.mp4");
        vec![
            workdir.join("media/videos").join(section_id).join("720p30").join(&file),
            workdir.join("media/videos").join(section_id).join("1080p60").join(&file),
            workdir.join("media/videos").join(section_id).join(&file),
            workdir.join("media/videos").join(&file),
            workdir.join("videos").join(section_id).join("720p30").join(&file),
            workdir.join("videos").join(section_id).join("1080p60").join(&file),
            workdir.join("videos").join(section_id).join(&file),
            workdir.join("videos").join(&file),
        ]
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[async_trait]
impl Renderer for ManimRenderer {
    #[tracing::instrument(skip(self, code), fields(workdir = %workdir.display()))]
    async fn render(
        &self,
        section_id: &str,
        code: &str,
        workdir: &Path,
    ) -> MathcastResult<PathBuf> {
        let (class_name, code) = Self::prepare_code(section_id, code);
        let scene_file = workdir.join(format!("{section_id}.py"));
        tokio::fs::write(&scene_file, &code)
            .await
            .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?;

        let output = Command::new(&self.python)
            .arg("-m")
            .arg("manim")
            .arg(&scene_file)
            .arg(&class_name)
            .arg(&self.quality_flag)
            .arg("--media_dir")
            .arg(workdir.join("media"))
            .output()
            .await
            .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::warn!(section_id, exit = ?output.status.code(), "manim render failed");
            return Err(RenderError::new(RenderErrorKind::Failed {
                exit_code: output.status.code().unwrap_or(-1),
                stderr,
            }))?;
        }

        for candidate in Self::candidate_paths(workdir, section_id, &class_name) {
            if candidate.exists() {
                let stable = workdir.join(format!("{section_id}_video.mp4"));
                tokio::fs::copy(&candidate, &stable)
                    .await
                    .map_err(|e| RenderError::new(RenderErrorKind::Io(e.to_string())))?;
                tracing::info!(section_id, path = %stable.display(), "render complete");
                return Ok(stable);
            }
        }

        Err(RenderError::new(RenderErrorKind::ArtifactNotFound(
            workdir.display().to_string(),
        )))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_class_name_is_extracted() {
        let code = "from manim import *\n\nclass PythagoreanProof(Scene):\n    def construct(self):\n        pass\n";
        let (name, prepared) = ManimRenderer::prepare_code("section1", code);
        assert_eq!(name, "PythagoreanProof");
        assert_eq!(prepared, code);
    }

    #[test]
    fn voiceover_scene_subclasses_are_recognized() {
        let code = "class Narrated(VoiceoverScene):\n    pass\n";
        let (name, _) = ManimRenderer::prepare_code("section1", code);
        assert_eq!(name, "Narrated");
    }

    #[test]
    fn bare_bodies_are_wrapped_in_a_class() {
        let code = "circle = Circle()\nself.play(Create(circle))";
        let (name, prepared) = ManimRenderer::prepare_code("section2", code);
        assert_eq!(name, "Section2Scene");
        assert!(prepared.starts_with("from manim import *"));
        assert!(prepared.contains("class Section2Scene(Scene):"));
        assert!(prepared.contains("        circle = Circle()"));
    }
}
