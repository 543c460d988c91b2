//! Request and response bodies for the `/chat` endpoint.
//!
//! The frontend sends `conversationHistory` in camelCase and omits it on the
//! first turn, so the field defaults to empty. Responses always carry a
//! `success` flag: the payload fields on 200, an `error` string on 500.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::chat::ChatMessage;

/// Inbound chat request body.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Parse a request from the raw body string.
    ///
    /// Malformed JSON and a missing `message` field both fail here, so the
    /// caller can surface them through its top-level error path.
    pub fn from_body(body: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Successful chat response body.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatReply {
    pub success: bool,
    pub response: String,
    pub conversation_history: Vec<ChatMessage>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorReply {
    pub success: bool,
    pub error: String,
}
