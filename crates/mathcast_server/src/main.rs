//! MathCast job server binary.

use mathcast_error::MathcastResult;
use mathcast_media::{CachedSynthesizer, KokoroEngine, ManimRenderer};
use mathcast_models::ChatClient;
use mathcast_pipeline::{PipelineConfig, VideoPipeline};
use mathcast_server::{run_worker, serve, ServerState};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> MathcastResult<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = PipelineConfig::from_env();
    let model = Arc::new(ChatClient::from_env()?);
    let renderer = Arc::new(ManimRenderer::from_env());
    let engine = KokoroEngine::from_env()?;
    let synthesizer = Arc::new(CachedSynthesizer::with_pool_size(
        engine,
        config.output_dir.join("tts_cache"),
        config.synthesis_pool,
    ));
    let pipeline = Arc::new(VideoPipeline::new(model, renderer, synthesizer, config));

    let state = ServerState::new();
    tokio::spawn(run_worker(state.clone(), pipeline));

    let addr =
        std::env::var("MATHCAST_BIND").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    serve(&addr, state).await
}
