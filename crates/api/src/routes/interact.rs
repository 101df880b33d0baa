//! The interaction endpoint.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use engine::InteractionEngine;
use protocol::InteractRequest;

use crate::AppState;
use crate::error::ApiError;

/// POST /interact — decode an interaction request, run the engine, reply
/// with the updated state token and point groups.
///
/// Registered for every method so the method check happens here and a
/// non-POST request answers 400 instead of 405.
#[tracing::instrument(skip(state, request))]
pub async fn interact<E: InteractionEngine + 'static>(
    State(state): State<Arc<AppState<E>>>,
    request: Request,
) -> Result<Response, ApiError> {
    if request.method() != Method::POST {
        return Err(ApiError::UnsupportedMethod(request.method().clone()));
    }

    // Content-Type is deliberately not inspected; the body alone is the
    // protocol.
    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(ApiError::BodyRead)?;

    let input: InteractRequest = serde_json::from_slice(&body).map_err(ApiError::MalformedJson)?;
    tracing::info!(x = input.x, y = input.y, state = %input.state, "interaction request");

    let output = state.engine.interact(input);
    let body = serde_json::to_vec(&output).map_err(ApiError::ResponseEncoding)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
