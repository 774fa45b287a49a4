use thiserror::Error;

/// Anything that can go wrong between pressing a button and getting a payload.
///
/// The page never branches on the variant; the `Display` text is what the
/// user sees in the error box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    /// Non-success HTTP status. `message` is the endpoint's `error` field when
    /// it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, error: Option<String>) -> Self {
        let message = error.unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ApiError::Status { status, message }
    }
}
