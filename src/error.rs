//! Error types surfaced to the user
//!
//! Both kinds end up in a panel's error line verbatim. Neither is fatal.

use thiserror::Error;

/// Required form fields were empty after trimming.
///
/// Raised before any request is built, so it never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} 必填", .missing.join(" 和 "))]
pub struct ValidationError {
    /// JSON names of the missing fields, in schema order
    pub missing: Vec<&'static str>,
}

/// A request to the backend did not produce a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Non-2xx response; displays the raw body
    #[error("{body}")]
    Status { status: u16, body: String },

    /// Connection refused, DNS failure, timeout, ...
    #[error("{0}")]
    Transport(String),

    /// 2xx response whose body could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}

/// Anything a panel can put in its error line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),
}
