// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Request and transport errors.

use std::error::Error as StdError;

/// Text shown to the user when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The host's request adapter could not deliver a command or its answer.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    /// Creates an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping the adapter's own error.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The adapter's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a request did not produce its payload.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The host answered with a non-zero code.
    #[error("request rejected with code {code}: {message}")]
    Rejected {
        /// Code from the envelope.
        code: i32,
        /// Message from the envelope.
        message: String,
    },
    /// The command never got a well-formed answer.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
    /// Arguments could not be encoded, or the answer did not match the
    /// expected shape.
    #[error("malformed payload: {0}")]
    Codec(#[from] serde_json::Error),
}

impl RequestError {
    /// The host's status code, for rejections.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Rejected { code, .. } => Some(*code),
            Self::Transport(_) | Self::Codec(_) => None,
        }
    }

    /// Message suitable for a toast or status line.
    ///
    /// Falls back to [`UNKNOWN_ERROR_MESSAGE`] when the failure carries no
    /// text.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport(err) => err.message().to_owned(),
            Self::Codec(err) => err.to_string(),
        };
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_owned()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::{RequestError, TransportError, UNKNOWN_ERROR_MESSAGE};

    #[test]
    fn blank_rejection_falls_back_to_unknown() {
        let err = RequestError::Rejected {
            code: 99999,
            message: "  ".into(),
        };
        assert_eq!(err.code(), Some(99999));
        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn transport_error_keeps_its_source() {
        let io = std::io::Error::other("bridge closed");
        let err = RequestError::from(TransportError::with_source("invoke failed", io));
        assert_eq!(err.code(), None);
        assert_eq!(err.user_message(), "invoke failed");
        let transport = err.source().expect("transport is the source");
        assert!(transport.source().is_some());
    }

    #[test]
    fn rejection_display_includes_code() {
        let err = RequestError::Rejected {
            code: 12,
            message: "no such season".into(),
        };
        assert_eq!(
            err.to_string(),
            "request rejected with code 12: no such season"
        );
    }
}
