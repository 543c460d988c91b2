//! chatbot-textgen
//!
//! HTTP client for the external text-generation service.

pub mod error;
pub mod generate;
