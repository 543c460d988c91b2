use std::env;

use tracing_subscriber::EnvFilter;

use chatbot_lambda::app;
use chatbot_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let generate_endpoint = env::var("GENERATE_ENDPOINT")
        .unwrap_or_else(|_| chatbot_textgen::generate::DEFAULT_ENDPOINT.to_string());
    // Leftover knob from the Bedrock integration; logged per request but
    // never used to route anything.
    let model_id =
        env::var("MODEL_ID").unwrap_or_else(|_| "us.amazon.nova-lite-v1:0".to_string());

    let state = AppState {
        http: reqwest::Client::new(),
        generate_endpoint,
        model_id,
    };

    lambda_http::run(app(state)).await.map_err(|e| eyre::eyre!(e))
}
