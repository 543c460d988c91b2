use reqwest::Client;

/// Shared application state, injected into route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub generate_endpoint: String,
    pub model_id: String,
}
