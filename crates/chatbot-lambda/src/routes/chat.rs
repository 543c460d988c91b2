use axum::Json;
use axum::extract::State;
use tracing::{error, info};

use chatbot_core::models::api::{ChatReply, ChatRequest};
use chatbot_core::models::chat::ChatMessage;
use chatbot_textgen::error::TextGenError;
use chatbot_textgen::generate::generate;

use crate::error::ApiError;
use crate::state::AppState;

/// Relay a chat message to the text-generation backend.
///
/// The body is parsed from the raw string rather than through the `Json`
/// extractor: malformed input must answer with the 500 error envelope, not
/// an extractor rejection.
pub async fn chat(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ChatReply>, ApiError> {
    let request = ChatRequest::from_body(&body)?;

    info!(message = %request.message, model = %state.model_id, "processing message");

    let mut messages = request.conversation_history;
    messages.push(ChatMessage::user(request.message.clone()));

    // A failed upstream call degrades to a placeholder reply inside a 200
    // envelope; the caller cannot tell it apart from a real generation
    // except by the literal text. Only an unparsable 2xx body escapes as a
    // real error.
    let output_text = match generate(&state.http, &state.generate_endpoint, &request.message).await
    {
        Ok(text) => text,
        Err(err @ (TextGenError::Status { .. } | TextGenError::Network(_))) => {
            error!(error = %err, "generation failed, returning placeholder");
            "error".to_string()
        }
        Err(TextGenError::ResponseParse(msg)) => {
            return Err(ApiError::Internal(msg));
        }
    };

    Ok(Json(ChatReply {
        success: true,
        response: output_text,
        conversation_history: messages,
    }))
}
