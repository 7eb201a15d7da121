// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `{ code, message, data }` answer wrapper.

use serde::{Deserialize, Serialize};

use crate::RequestError;

/// Code the host uses for a successful command.
pub const SUCCESS_CODE: i32 = 0;

/// Code the host uses for a generic failure.
pub const FAILURE_CODE: i32 = 99999;

/// The `{ code, message, data }` wrapper every host command answers with.
///
/// `code == 0` means success and `data` is the payload. Any other code is a
/// failure; `message` then explains it and `data` is usually a placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Status code, [`SUCCESS_CODE`] on success.
    pub code: i32,
    /// Human-readable status message.
    pub message: String,
    /// Payload.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Creates an envelope with an explicit code.
    pub fn new(code: i32, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    /// Creates a success envelope.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(SUCCESS_CODE, message, data)
    }

    /// Creates a failure envelope with [`FAILURE_CODE`].
    pub fn fail(message: impl Into<String>, data: T) -> Self {
        Self::new(FAILURE_CODE, message, data)
    }

    /// Returns `true` if the code signals success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwraps the payload, turning a failure code into
    /// [`RequestError::Rejected`].
    pub fn into_result(self) -> Result<T, RequestError> {
        if self.is_ok() {
            Ok(self.data)
        } else {
            Err(RequestError::Rejected {
                code: self.code,
                message: self.message,
            })
        }
    }
}
