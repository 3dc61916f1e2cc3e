//! Interpretation of whatever came back from the summarization service.
//!
//! Three terminal paths, mirroring what the user can see:
//! - transport failure → the failure's own description
//! - non-success status → the server's `error` string, or a generic fallback
//! - success status → the server's `summary` string

use bytes::Bytes;
use serde::Deserialize;
use std::fmt;

/// Shown when a failed response carries no usable `error` string.
pub const GENERIC_FAILURE: &str = "Something went wrong.";
/// Shown when the transport gave up waiting for a response.
pub const TIMED_OUT: &str = "Request timed out.";
/// Shown when a success response does not carry a `summary` string.
pub const MALFORMED_SUMMARY: &str = "Invalid response from summarization service.";

/// Raw HTTP reply, before any JSON parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    pub status: u16,
    pub body: Bytes,
}

impl ServerReply {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailureKind {
    /// Unreachable host, DNS failure, refused connection, broken body.
    Unreachable,
    /// The configured request timeout elapsed.
    TimedOut,
}

/// Failure that happened before a response was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    pub kind: TransportFailureKind,
    pub message: String,
}

impl TransportFailure {
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            kind: TransportFailureKind::Unreachable,
            message: message.into(),
        }
    }

    pub fn timed_out(message: impl Into<String>) -> Self {
        Self {
            kind: TransportFailureKind::TimedOut,
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The single thing a submission ends in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Summary(String),
    Failure(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    summary: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

pub fn interpret(result: Result<ServerReply, TransportFailure>) -> Outcome {
    let reply = match result {
        Ok(reply) => reply,
        Err(failure) => return transport_outcome(failure),
    };

    if !reply.is_success() {
        return Outcome::Failure(declared_error(&reply.body));
    }

    match serde_json::from_slice::<SummaryBody>(&reply.body) {
        Ok(body) => Outcome::Summary(body.summary),
        Err(e) => {
            tracing::warn!("Success response without a usable summary: {e}");
            Outcome::Failure(MALFORMED_SUMMARY.to_string())
        }
    }
}

fn transport_outcome(failure: TransportFailure) -> Outcome {
    match failure.kind {
        TransportFailureKind::TimedOut => Outcome::Failure(TIMED_OUT.to_string()),
        TransportFailureKind::Unreachable => Outcome::Failure(failure.message),
    }
}

/// The server's `error` string, or the generic fallback when the body is not
/// JSON, has no `error` field, or the field is empty or not a string.
fn declared_error(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|v| v.as_str().map(str::to_owned))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}
