//! HTTP handlers for the job API.

use crate::{
    BannerResponse, ErrorBody, GenerateRequest, GenerateResponse, JobState, ServerState,
    StatusResponse,
};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use mathcast_core::VideoRequest;
use mathcast_error::{ServerError, ServerErrorKind};
use uuid::Uuid;

type ApiError = (StatusCode, Json<ErrorBody>);

fn reject(status: StatusCode, err: impl std::fmt::Display) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

fn server_error(err: ServerError) -> ApiError {
    let status = match &err.kind {
        ServerErrorKind::JobNotFound(_) => StatusCode::NOT_FOUND,
        ServerErrorKind::JobNotCompleted { .. } => StatusCode::CONFLICT,
        ServerErrorKind::ArtifactMissing(_) | ServerErrorKind::Bind(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    reject(status, err.kind)
}

/// `GET /` service banner.
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        service: "mathcast",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: &["/generate", "/status/{id}", "/video/{id}", "/metrics/{id}"],
    })
}

/// `POST /generate` validates the query and queues a job.
///
/// Validation failures come back as 400 immediately; everything after
/// acceptance is observable through the status endpoint.
pub async fn generate(
    State(state): State<ServerState>,
    Json(body): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), ApiError> {
    let mut builder = VideoRequest::builder(body.query)
        .focus_areas(body.focus_areas)
        .priority(body.priority);
    if let Some(category) = body.category {
        builder = builder.category_str(category);
    }
    if let Some(difficulty) = body.difficulty {
        builder = builder.difficulty_str(difficulty);
    }
    if let Some(seconds) = body.max_duration {
        builder = builder.max_duration(seconds);
    }
    let request = builder
        .build()
        .map_err(|e| reject(StatusCode::BAD_REQUEST, e))?;

    let job = state.submit(request).await;
    Ok((
        StatusCode::ACCEPTED,
        Json(GenerateResponse {
            job_id: job.id,
            status: job.state,
        }),
    ))
}

/// `GET /status/{id}` reports the job lifecycle.
pub async fn status(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusResponse>, ApiError> {
    let job = state
        .registry()
        .get(id)
        .await
        .ok_or_else(|| server_error(ServerError::new(ServerErrorKind::JobNotFound(id.to_string()))))?;
    Ok(Json(StatusResponse::from(&job)))
}

/// `GET /video/{id}` serves the final mp4 of a completed job.
pub async fn video(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let job = state
        .registry()
        .get(id)
        .await
        .ok_or_else(|| server_error(ServerError::new(ServerErrorKind::JobNotFound(id.to_string()))))?;

    if job.state != JobState::Completed {
        return Err(server_error(ServerError::new(
            ServerErrorKind::JobNotCompleted {
                job_id: id.to_string(),
                status: job.state.to_string(),
            },
        )));
    }

    let Some(path) = job.video_path else {
        return Err(server_error(ServerError::new(
            ServerErrorKind::ArtifactMissing(id.to_string()),
        )));
    };
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        tracing::error!(job_id = %id, path = %path.display(), error = %e, "completed video unreadable");
        server_error(ServerError::new(ServerErrorKind::ArtifactMissing(
            id.to_string(),
        )))
    })?;

    Ok(([(header::CONTENT_TYPE, "video/mp4")], bytes))
}

/// `GET /metrics/{id}` returns run metrics for a completed job.
pub async fn metrics(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let job = state
        .registry()
        .get(id)
        .await
        .ok_or_else(|| server_error(ServerError::new(ServerErrorKind::JobNotFound(id.to_string()))))?;

    match job.metrics {
        Some(metrics) => {
            let value = serde_json::to_value(&metrics)
                .map_err(|e| reject(StatusCode::INTERNAL_SERVER_ERROR, e))?;
            Ok(Json(value))
        }
        None => Err(server_error(ServerError::new(
            ServerErrorKind::JobNotCompleted {
                job_id: id.to_string(),
                status: job.state.to_string(),
            },
        ))),
    }
}
