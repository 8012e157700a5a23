//! Voice synthesis with a content-addressed cache and a bounded worker pool.

use async_trait::async_trait;
use mathcast_error::{ConfigError, MathcastResult, SynthesisError, SynthesisErrorKind};
use mathcast_interface::VoiceSynthesizer;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::process::Command;
use tokio::sync::Semaphore;

/// Default number of concurrent synthesis jobs.
const DEFAULT_POOL_SIZE: usize = 4;

/// A speech engine that turns text into an audio file.
///
/// Seam below [`CachedSynthesizer`] so caching and pooling are testable
/// without a real TTS backend.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Synthesize `text` into the audio file at `output`.
    async fn speak(&self, text: &str, output: &Path) -> MathcastResult<()>;

    /// Engine identifier used in cache keys.
    fn service(&self) -> &str;

    /// Voice identifier used in cache keys.
    fn voice(&self) -> &str;

    /// Language code used in cache keys.
    fn lang(&self) -> &str;
}

/// Kokoro TTS invoked as a subprocess.
#[derive(Debug, Clone)]
pub struct KokoroEngine {
    command: String,
    model_path: String,
    voices_path: String,
    voice: String,
    speed: f64,
    lang: String,
}

impl KokoroEngine {
    /// Builds the engine from `KOKORO_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when `KOKORO_MODEL_PATH` or
    /// `KOKORO_VOICES_PATH` is unset.
    pub fn from_env() -> MathcastResult<Self> {
        let model_path = std::env::var("KOKORO_MODEL_PATH")
            .map_err(|_| ConfigError::new("KOKORO_MODEL_PATH not set"))?;
        let voices_path = std::env::var("KOKORO_VOICES_PATH")
            .map_err(|_| ConfigError::new("KOKORO_VOICES_PATH not set"))?;
        let speed = std::env::var("KOKORO_DEFAULT_SPEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        Ok(Self {
            command: std::env::var("KOKORO_COMMAND").unwrap_or_else(|_| "kokoro-tts".to_string()),
            model_path,
            voices_path,
            voice: std::env::var("KOKORO_DEFAULT_VOICE").unwrap_or_else(|_| "af_sarah".to_string()),
            speed,
            lang: std::env::var("KOKORO_DEFAULT_LANG").unwrap_or_else(|_| "en-us".to_string()),
        })
    }
}

#[async_trait]
impl SpeechEngine for KokoroEngine {
    async fn speak(&self, text: &str, output: &Path) -> MathcastResult<()> {
        let out = Command::new(&self.command)
            .arg("--model")
            .arg(&self.model_path)
            .arg("--voices")
            .arg(&self.voices_path)
            .arg("--voice")
            .arg(&self.voice)
            .arg("--speed")
            .arg(self.speed.to_string())
            .arg("--lang")
            .arg(&self.lang)
            .arg("--output")
            .arg(output)
            .arg(text)
            .output()
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Io(e.to_string())))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
            return Err(SynthesisError::new(SynthesisErrorKind::Engine(stderr)))?;
        }
        Ok(())
    }

    fn service(&self) -> &str {
        "kokoro"
    }

    fn voice(&self) -> &str {
        &self.voice
    }

    fn lang(&self) -> &str {
        &self.lang
    }
}

/// Content-addressed caching wrapper around a speech engine.
///
/// Identical narration with the same engine, voice, and language reuses the
/// cached audio without touching the engine; concurrent synthesis across
/// scenes is bounded by a semaphore pool.
pub struct CachedSynthesizer<E> {
    engine: E,
    cache_dir: PathBuf,
    pool: Arc<Semaphore>,
}

impl<E: SpeechEngine> CachedSynthesizer<E> {
    /// Creates a synthesizer caching into `cache_dir` with the default pool.
    pub fn new(engine: E, cache_dir: PathBuf) -> Self {
        Self::with_pool_size(engine, cache_dir, DEFAULT_POOL_SIZE)
    }

    /// Creates a synthesizer with an explicit worker pool size.
    pub fn with_pool_size(engine: E, cache_dir: PathBuf, pool_size: usize) -> Self {
        Self {
            engine,
            cache_dir,
            pool: Arc::new(Semaphore::new(pool_size)),
        }
    }

    /// Cache key: sha256 of the canonical JSON of the synthesis inputs.
    ///
    /// `serde_json` maps are ordered, so the JSON is key-sorted and the hash
    /// stable across runs.
    pub fn cache_key(&self, text: &str) -> String {
        let input = serde_json::json!({
            "text": text,
            "service": self.engine.service(),
            "voice": self.engine.voice(),
            "lang": self.engine.lang(),
        });
        let mut hasher = Sha256::new();
        hasher.update(input.to_string().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl<E: SpeechEngine> VoiceSynthesizer for CachedSynthesizer<E> {
    #[tracing::instrument(skip(self, text))]
    async fn synthesize(&self, text: &str) -> MathcastResult<PathBuf> {
        let key = self.cache_key(text);
        let path = self.cache_dir.join(format!("{key}.wav"));
        if path.exists() {
            tracing::debug!(path = %path.display(), "synthesis cache hit");
            return Ok(path);
        }

        let _permit = self
            .pool
            .acquire()
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Engine(e.to_string())))?;

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Cache(e.to_string())))?;

        // The engine writes to a staging name; only a completed run is
        // renamed to the cache path, so an interrupted engine can never
        // leave a truncated file that reads as a cache hit.
        let staging = self
            .cache_dir
            .join(format!("{key}.{}.part", uuid::Uuid::new_v4()));
        if let Err(e) = self.engine.speak(text, &staging).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e);
        }
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| SynthesisError::new(SynthesisErrorKind::Cache(e.to_string())))?;
        tracing::info!(path = %path.display(), "narration synthesized");
        Ok(path)
    }

    fn service(&self) -> &str {
        self.engine.service()
    }

    fn voice(&self) -> &str {
        self.engine.voice()
    }
}
