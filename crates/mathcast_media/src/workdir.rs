//! Scoped scratch directories for render and synthesis intermediates.

use mathcast_error::{ConfigError, MathcastResult};
use std::path::{Path, PathBuf};

/// A per-run scratch directory, removed when the handle drops.
///
/// Cleanup runs on both success and failure paths; a cleanup failure is
/// logged and swallowed since the artifacts have already left the directory.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
}

impl WorkDir {
    /// Creates a uniquely named directory under `base`.
    pub fn create(base: &Path) -> MathcastResult<Self> {
        let path = base.join(format!("mathcast-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).map_err(|e| {
            ConfigError::new(format!(
                "failed to create work directory {}: {e}",
                path.display()
            ))
        })?;
        tracing::debug!(path = %path.display(), "created work directory");
        Ok(Self { path })
    }

    /// Creates a uniquely named directory under the system temp directory.
    pub fn create_temp() -> MathcastResult<Self> {
        Self::create(&std::env::temp_dir())
    }

    /// Path of the directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file inside the directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::warn!(path = %self.path.display(), "failed to remove work directory: {e}");
        }
    }
}
