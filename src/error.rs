//! Error types for the Teamwork API client.
//!
//! Every API call resolves to exactly one `Ok` or one [`Error`]; there is
//! no retry or partial success. Failures fall into two wire-level
//! categories: the transport could not complete the call at all
//! ([`Error::Transport`]), or the server answered with a status outside
//! `200..300` ([`Error::Api`]).

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Teamwork API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Teamwork API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP call itself failed: DNS, connection refused, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization of the request body failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server completed the call with a non-2xx status.
    ///
    /// The decoded response body is attached so callers can inspect the
    /// server's error payload. An empty or non-JSON body decodes to
    /// `Value::Null`.
    #[error("response error: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Human-readable message embedding the numeric status.
        message: String,
        /// Decoded response body, for diagnostics.
        body: Value,
    },

    /// Invalid input provided to a function (e.g. credentials that cannot
    /// form a valid header value).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Endpoint exists upstream but is not wired up in this crate.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl Error {
    /// Returns `true` if the network call itself failed, as opposed to the
    /// server returning an error status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns `true` if this is a 4xx response from the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if (400..500).contains(status))
    }

    /// Returns `true` if this is a 5xx response from the server.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// The HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a response error from a status code and decoded body.
    pub(crate) fn from_response(status: u16, body: Value) -> Self {
        Error::Api {
            status,
            message: format!("Status: {status}"),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response() {
        let body = serde_json::json!({"error": "not found"});
        let err = Error::from_response(404, body.clone());
        match err {
            Error::Api {
                status,
                message,
                body: b,
            } => {
                assert_eq!(status, 404);
                assert!(message.contains("404"));
                assert_eq!(b, body);
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_classification() {
        assert!(Error::from_response(404, Value::Null).is_client_error());
        assert!(!Error::from_response(404, Value::Null).is_server_error());
        assert!(Error::from_response(503, Value::Null).is_server_error());
        assert!(!Error::NotImplemented("x").is_client_error());
        assert_eq!(Error::from_response(418, Value::Null).status(), Some(418));
        assert_eq!(Error::NotImplemented("x").status(), None);
    }
}
