//! The generate command.

use crate::cli::Cli;
use mathcast::{
    CachedSynthesizer, ChatClient, KokoroEngine, ManimRenderer, MathcastResult, PipelineConfig,
    RunMetrics, VideoPipeline, VideoRequest,
};
use std::sync::Arc;

/// Runs one generation to completion and prints the timing breakdown.
pub async fn run_generation(cli: Cli) -> MathcastResult<()> {
    let mut config = PipelineConfig::from_env();
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    config.retry_budget = cli.max_retries.into();

    let model = Arc::new(ChatClient::from_env()?);
    let renderer = Arc::new(ManimRenderer::from_env());
    let synthesizer = Arc::new(CachedSynthesizer::with_pool_size(
        KokoroEngine::from_env()?,
        config.output_dir.join("tts_cache"),
        config.synthesis_pool,
    ));
    let output_dir = config.output_dir.clone();
    let pipeline = VideoPipeline::new(model, renderer, synthesizer, config);

    let mut builder = VideoRequest::builder(cli.query)
        .focus_areas(cli.focus)
        .priority(cli.priority);
    if let Some(category) = cli.category {
        builder = builder.category_str(category);
    }
    if let Some(difficulty) = cli.difficulty {
        builder = builder.difficulty_str(difficulty);
    }
    if let Some(seconds) = cli.max_duration {
        builder = builder.max_duration(seconds);
    }

    let output = pipeline.generate(builder).await?;

    print_breakdown(&output.metrics);
    println!("Video: {}", output.video_path.display());

    if cli.save_metrics {
        let path = output_dir.join(format!(
            "metrics_{}.json",
            output.metrics.started_at.timestamp()
        ));
        let body = serde_json::to_string_pretty(&output.metrics)
            .map_err(|e| mathcast_error::JsonError::new(e.to_string()))?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| mathcast_error::JsonError::new(e.to_string()))?;
        println!("Metrics: {}", path.display());
    }

    Ok(())
}

fn print_breakdown(metrics: &RunMetrics) {
    println!("Generation completed in {:.1}s", metrics.total_duration);
    let mut stages: Vec<(&String, &f64)> = metrics.stages.stage_times.iter().collect();
    stages.sort_by(|a, b| b.1.total_cmp(a.1));
    for (stage, seconds) in stages {
        let percent = metrics
            .stages
            .stage_percentages
            .get(stage)
            .copied()
            .unwrap_or(0.0);
        println!("  {stage:<22} {seconds:>7.2}s  {percent:>5.1}%");
    }
}
