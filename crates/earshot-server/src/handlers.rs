use std::{any::Any, sync::Arc};

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;

use crate::{envelope::SuccessEnvelope, error::ProcessError, pipeline::Pipeline, upload::AudioUpload};

/// `POST /api/process-audio`
pub async fn process_audio(
    State(pipeline): State<Arc<Pipeline>>,
    AudioUpload(upload): AudioUpload,
) -> Result<Json<SuccessEnvelope>, ProcessError> {
    let output = pipeline.run(upload).await?;

    tracing::info!(
        transcript_chars = output.transcript.len(),
        answer_chars = output.answer.len(),
        "audio processed"
    );

    Ok(Json(SuccessEnvelope::new(output.transcript, output.answer)))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Turn a handler panic into the failure envelope
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    tracing::error!(panic = message, "request handler panicked");

    ProcessError::Internal.into_response()
}
