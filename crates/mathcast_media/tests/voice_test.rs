use async_trait::async_trait;
use mathcast_error::{MathcastResult, SynthesisError, SynthesisErrorKind};
use mathcast_interface::VoiceSynthesizer;
use mathcast_media::{CachedSynthesizer, SpeechEngine, WorkDir};
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

struct CountingEngine {
    calls: AtomicU32,
}

impl CountingEngine {
    fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }
}

#[async_trait]
impl SpeechEngine for CountingEngine {
    async fn speak(&self, _text: &str, output: &Path) -> MathcastResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::fs::write(output, b"riff").await.unwrap();
        Ok(())
    }

    fn service(&self) -> &str {
        "mock"
    }

    fn voice(&self) -> &str {
        "test_voice"
    }

    fn lang(&self) -> &str {
        "en-us"
    }
}

/// Engine that dies mid-write on its first run and succeeds afterwards.
struct FlakyEngine {
    calls: AtomicU32,
}

#[async_trait]
impl SpeechEngine for FlakyEngine {
    async fn speak(&self, _text: &str, output: &Path) -> MathcastResult<()> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::fs::write(output, b"trunc").await.unwrap();
            return Err(SynthesisError::new(SynthesisErrorKind::Engine(
                "killed".to_string(),
            )))?;
        }
        tokio::fs::write(output, b"full audio").await.unwrap();
        Ok(())
    }

    fn service(&self) -> &str {
        "flaky"
    }

    fn voice(&self) -> &str {
        "test_voice"
    }

    fn lang(&self) -> &str {
        "en-us"
    }
}

#[tokio::test]
async fn failed_synthesis_does_not_poison_the_cache() {
    let workdir = WorkDir::create_temp().unwrap();
    let synth = CachedSynthesizer::new(
        FlakyEngine {
            calls: AtomicU32::new(0),
        },
        workdir.path().to_path_buf(),
    );

    assert!(synth.synthesize("Interrupted narration.").await.is_err());

    // The partial output must not read back as a cached result.
    let path = synth.synthesize("Interrupted narration.").await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"full audio");
}

#[tokio::test]
async fn repeated_text_hits_the_cache() {
    let workdir = WorkDir::create_temp().unwrap();
    let synth = CachedSynthesizer::new(CountingEngine::new(), workdir.path().to_path_buf());

    let first = synth.synthesize("The derivative of x squared.").await.unwrap();
    let second = synth.synthesize("The derivative of x squared.").await.unwrap();

    assert_eq!(first, second);
    assert!(first.exists());
}

#[tokio::test]
async fn cache_hit_skips_the_engine() {
    let workdir = WorkDir::create_temp().unwrap();
    let synth = CachedSynthesizer::new(CountingEngine::new(), workdir.path().to_path_buf());

    // Pre-seed the cache entry for this exact text.
    let key = synth.cache_key("Pre-seeded narration.");
    std::fs::write(workdir.file(&format!("{key}.wav")), b"cached").unwrap();

    let path = synth.synthesize("Pre-seeded narration.").await.unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"cached");
}

#[tokio::test]
async fn distinct_text_synthesizes_separately() {
    let workdir = WorkDir::create_temp().unwrap();
    let synth = CachedSynthesizer::new(CountingEngine::new(), workdir.path().to_path_buf());

    let a = synth.synthesize("First narration.").await.unwrap();
    let b = synth.synthesize("Second narration.").await.unwrap();
    assert_ne!(a, b);
}

#[test]
fn cache_key_is_stable() {
    let synth = CachedSynthesizer::new(CountingEngine::new(), "/tmp".into());
    assert_eq!(synth.cache_key("same text"), synth.cache_key("same text"));
    assert_ne!(synth.cache_key("same text"), synth.cache_key("other text"));
}
