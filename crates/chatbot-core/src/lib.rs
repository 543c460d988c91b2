//! chatbot-core
//!
//! Pure wire and domain types for the chat API.
//! No HTTP or AWS dependency. This is the shared vocabulary between the
//! Lambda backend and the React frontend.

pub mod error;
pub mod models;
