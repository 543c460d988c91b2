//! Calls against the text-generation `/generate` endpoint.
//!
//! The backend exposes a single prompt-in, text-out operation. Sampling
//! parameters are fixed here and never configurable from inbound requests.

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::TextGenError;

/// Default upstream endpoint, used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://0b95-34-142-240-196.ngrok-free.app/generate";

const MAX_NEW_TOKENS: u32 = 512;
const DO_SAMPLE: bool = true;
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.9;

/// Payload sent to the `/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub do_sample: bool,
    pub temperature: f64,
    pub top_p: f64,
}

impl GenerateRequest {
    /// Build a payload for `prompt` with the fixed sampling parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerateRequest {
            prompt: prompt.into(),
            max_new_tokens: MAX_NEW_TOKENS,
            do_sample: DO_SAMPLE,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

/// Successful response from the `/generate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub generated_text: String,
}

/// Send a prompt to the text-generation endpoint and return the generated
/// text.
///
/// One POST, no retries, no explicit timeout. An HTTP error status and a
/// network-level failure come back as distinct variants so the caller can
/// decide how much to surface; a 2xx body without a parsable
/// `generated_text` is `ResponseParse`.
pub async fn generate(
    client: &reqwest::Client,
    endpoint: &str,
    prompt: &str,
) -> Result<String, TextGenError> {
    let call_id = Uuid::new_v4();
    info!(call_id = %call_id, endpoint, "sending generation request");

    let response = client
        .post(endpoint)
        .json(&GenerateRequest::new(prompt))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(
            call_id = %call_id,
            status = status.as_u16(),
            body = %body,
            "generation endpoint returned an error"
        );
        return Err(TextGenError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    let parsed: GenerateResponse = serde_json::from_str(&body)
        .map_err(|e| TextGenError::ResponseParse(format!("{e}. Response: {body}")))?;

    info!(call_id = %call_id, "generation complete");

    Ok(parsed.generated_text)
}
