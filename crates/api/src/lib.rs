//! HTTP server for the interaction service.
//!
//! Exposes a single `POST /interact` endpoint that decodes an interaction
//! request, runs it through the configured engine and replies with the
//! updated state token and the point groups to draw.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use engine::InteractionEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
///
/// Everything a handler needs arrives through here via axum `State`;
/// today that is only the engine.
pub struct AppState<E: InteractionEngine> {
    pub engine: E,
}

/// Creates the axum application router.
///
/// The interaction route is registered for all methods; the handler
/// itself rejects everything but POST because the wire protocol answers
/// 400 there, not axum's default 405.
pub fn create_app<E: InteractionEngine + 'static>(engine: E) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/interact", any(routes::interact::interact::<E>))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
