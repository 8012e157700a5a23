//! The pipeline worker task.

use crate::ServerState;
use mathcast_interface::{MathModel, Renderer, VoiceSynthesizer};
use mathcast_pipeline::VideoPipeline;
use std::sync::Arc;

/// Drains the priority queue, running one job at a time.
///
/// The single consumer keeps queue ordering meaningful; rendering itself is
/// already parallel across scenes, so jobs run sequentially.
pub async fn run_worker<M, R, S>(state: ServerState, pipeline: Arc<VideoPipeline<M, R, S>>)
where
    M: MathModel,
    R: Renderer,
    S: VoiceSynthesizer,
{
    loop {
        let next = match state.next_job().await {
            Ok(next) => next,
            Err(e) => {
                tracing::error!(error = %e, "could not take the next job");
                continue;
            }
        };
        let Some((job_id, request)) = next else {
            state.wait_for_work().await;
            continue;
        };

        state.registry().mark_processing(job_id).await;
        tracing::info!(%job_id, "worker picked up job");

        match pipeline.generate_validated(request).await {
            Ok(output) => {
                state
                    .registry()
                    .complete(job_id, output.video_path, output.metrics)
                    .await;
                tracing::info!(%job_id, "job completed");
            }
            Err(e) => {
                tracing::error!(%job_id, error = %e, "job failed");
                state.registry().fail(job_id, e.to_string()).await;
            }
        }
    }
}
