use std::error::Error;
use std::fmt;

/// Failures talking to the listings API. The distinction only exists
/// inside the service layer; both public adapters collapse every
/// variant into the same fallback behavior.
#[derive(Debug)]
pub enum ServiceError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Status(code) => write!(f, "server returned status {code}"),
            ServiceError::Decode(msg) => write!(f, "response decode error: {msg}"),
        }
    }
}

impl Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ServiceError::Status(status.as_u16())
        } else if e.is_decode() {
            ServiceError::Decode(e.to_string())
        } else {
            ServiceError::Network(e.to_string())
        }
    }
}
