//! chatbot-lambda
//!
//! The chat relay service: one Lambda behind API Gateway that forwards a
//! user message to the text-generation backend and echoes the updated
//! conversation history back to the caller.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the service router.
///
/// `/health` is unauthenticated; `/chat` sits behind the gateway's Cognito
/// authorizer in the deployed stack. The header middleware is outermost so
/// even router-generated responses (405s) carry the fixed header set.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/chat", post(routes::chat::chat))
        .layer(axum_mw::from_fn(middleware::identity::log_identity))
        .layer(axum_mw::from_fn(middleware::access_log::request_log))
        .layer(axum_mw::from_fn(middleware::headers::fixed_headers))
        .with_state(state)
}
