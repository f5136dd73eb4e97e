//! Error types for the API client.
//!
//! Every failed call surfaces as a [`RequestFailure`]: a code, a message and
//! optional details taken from the backend's `{ code, message, details? }`
//! payload when there is one, falling back to what the transport knows. The
//! underlying [`TransportError`] stays reachable through `raw` and
//! [`std::error::Error::source`].

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message used when neither the payload nor the transport provides one.
pub const DEFAULT_MESSAGE: &str = "Network error";

/// Code used when neither the payload nor the transport provides one.
pub const DEFAULT_CODE: i64 = 500;

/// The raw failure observed while performing a request.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The server answered with a non-2xx status. `data` is the decoded body:
    /// JSON when it parses, the raw text otherwise, `None` when empty.
    #[error("Request failed with status {status}")]
    Status { status: u16, data: Option<Value> },
    /// Connection, timeout, TLS or request-building failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The resolved URL could not be turned into an absolute URL.
    #[error("Invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    /// A 2xx body was not valid JSON for the expected type.
    #[error("Failed to parse response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl TransportError {
    /// HTTP status carried by the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response payload carried by the failure, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Status { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// Transport-level message. For status failures this is the canonical
    /// reason phrase, which unregistered codes do not have.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Status { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string),
            other => Some(other.to_string()),
        }
    }
}

/// Normalized failure returned by every client operation.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct RequestFailure {
    /// Application code from the payload, else the HTTP status, else 500.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
    /// Structured details passed through from the payload.
    pub details: Option<Value>,
    /// The failure this error was built from.
    #[source]
    pub raw: TransportError,
}

impl RequestFailure {
    /// The `{ code, message, details? }` view of this failure.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code,
            message: self.message.clone(),
            details: self.details.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Error payload shape returned by the backend alongside a non-2xx status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Converts a raw transport failure into a [`RequestFailure`].
///
/// The payload is the response data when present. Without data the failure
/// itself stands in, so code and message come from its status and message.
pub fn normalize(raw: TransportError) -> RequestFailure {
    let (code, message, details) = normalized_parts(raw.data(), raw.status(), raw.message());
    tracing::debug!("Normalized request failure: code={} message={}", code, message);
    RequestFailure {
        code,
        message,
        details,
        raw,
    }
}

fn normalized_parts(
    payload: Option<&Value>,
    status: Option<u16>,
    transport_message: Option<String>,
) -> (i64, String, Option<Value>) {
    let code = payload
        .and_then(|p| p.get("code"))
        .and_then(numeric_code)
        .or(status.map(i64::from))
        .unwrap_or(DEFAULT_CODE);

    let message = payload
        .and_then(|p| p.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .or(transport_message.filter(|m| !m.is_empty()))
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

    let details = payload.and_then(|p| p.get("details")).cloned();

    (code, message, details)
}

fn numeric_code(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}
