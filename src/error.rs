// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the IPX800 library.
//!
//! Failures are layered so callers can tell an unreachable gateway apart
//! from a gateway that rejected a request or refused the credentials:
//!
//! - [`ProtocolError::CannotConnect`]: every attempt failed at the transport
//!   level (timeout, DNS, connection refused).
//! - [`ProtocolError::AuthenticationFailed`]: the legacy CGI endpoint answered
//!   HTTP 401. Never retried.
//! - [`ProtocolError::RequestRejected`]: the gateway answered, but without the
//!   expected success indicator, on every attempt.

use std::time::Duration;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the gateway.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The client configuration cannot be used.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl Error {
    /// Returns `true` if the gateway could not be reached at all.
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::CannotConnect { .. }))
    }

    /// Returns `true` if the gateway refused the configured credentials.
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::AuthenticationFailed))
    }

    /// Returns `true` if the gateway answered without acknowledging the request.
    #[must_use]
    pub fn is_request_rejected(&self) -> bool {
        matches!(self, Self::Protocol(ProtocolError::RequestRejected { .. }))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// An unknown pilot-wire mode code was provided.
    #[error("invalid pilot-wire mode: {0}")]
    InvalidPilotWireMode(String),
}

/// Errors related to HTTP communication with the gateway.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The HTTP client could not be created.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Every attempt failed before a response was received.
    #[error("cannot connect to the IPX800 after {attempts} attempt(s): {source}")]
    CannotConnect {
        /// Number of attempts performed.
        attempts: u32,
        /// Transport failure of the last attempt.
        #[source]
        source: TransportError,
    },

    /// The legacy CGI endpoint answered HTTP 401.
    #[error("authentication failed on the IPX800")]
    AuthenticationFailed,

    /// The gateway answered every attempt without a success indicator.
    #[error("IPX800 rejected the request after {attempts} attempt(s): {reason}")]
    RequestRejected {
        /// Number of attempts performed.
        attempts: u32,
        /// Why the last answer was not accepted.
        reason: String,
    },

    /// Invalid host or URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// A single failed exchange that never produced a response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The attempt did not complete within the per-attempt timeout.
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// The connection could not be established or was interrupted.
    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),
}

/// Errors related to decoding gateway responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected key is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// A key is present but holds a value of the wrong shape.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The key that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [0, 100]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidPilotWireMode("9".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidPilotWireMode(_))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::MissingField("R1".to_string());
        assert_eq!(err.to_string(), "missing field in response: R1");
    }

    #[test]
    fn rejected_error_display() {
        let err = ProtocolError::RequestRejected {
            attempts: 3,
            reason: "missing success status".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "IPX800 rejected the request after 3 attempt(s): missing success status"
        );
    }

    #[test]
    fn timeout_display() {
        let err = TransportError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "request timed out after 250 ms");
    }

    #[test]
    fn classification_helpers() {
        let auth: Error = ProtocolError::AuthenticationFailed.into();
        assert!(auth.is_auth_error());
        assert!(!auth.is_connection_error());
        assert!(!auth.is_request_rejected());

        let connect: Error = ProtocolError::CannotConnect {
            attempts: 2,
            source: TransportError::Timeout(Duration::from_secs(1)),
        }
        .into();
        assert!(connect.is_connection_error());
        assert!(!connect.is_auth_error());

        let rejected: Error = ProtocolError::RequestRejected {
            attempts: 1,
            reason: "HTTP 500".to_string(),
        }
        .into();
        assert!(rejected.is_request_rejected());
    }
}
