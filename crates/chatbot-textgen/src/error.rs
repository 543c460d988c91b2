use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextGenError {
    #[error("generation endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("generation request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
