//! HTTP job server for MathCast.
//!
//! Exposes video generation as an asynchronous job API: `POST /generate`
//! validates and queues a request, a single worker drains the priority
//! queue through the pipeline, and the job registry keeps every job
//! queryable for the life of the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod handlers;
mod job;
mod state;
mod types;
mod worker;

pub use job::{Job, JobRegistry, JobState};
pub use state::ServerState;
pub use types::{
    BannerResponse, ErrorBody, GenerateRequest, GenerateResponse, StatusResponse,
};
pub use worker::run_worker;

use axum::routing::{get, post};
use axum::Router;
use mathcast_error::{MathcastResult, ServerError, ServerErrorKind};

/// Builds the API router over shared state.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(handlers::banner))
        .route("/generate", post(handlers::generate))
        .route("/status/:id", get(handlers::status))
        .route("/video/:id", get(handlers::video))
        .route("/metrics/:id", get(handlers::metrics))
        .with_state(state)
}

/// Binds and serves the API until the process exits.
pub async fn serve(addr: &str, state: ServerState) -> MathcastResult<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    tracing::info!(%addr, "mathcast server listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    Ok(())
}
