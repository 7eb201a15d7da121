// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_response --heading-base-level=0

//! Sightline Response: typed results from host commands.
//!
//! The item sequences a list view shows (search results, favorites, the
//! seasons and files of a resource) come from named host commands. Each
//! command answers with the same [`Envelope`]: a status `code`, a `message`,
//! and the `data`. This crate turns that into `Result<T, RequestError>`:
//!
//! - [`Transport`]: the host's request adapter. How commands travel is not
//!   this crate's concern.
//! - [`Client`]: encodes arguments, invokes, checks the envelope code, decodes
//!   the payload, and keeps a [`LoadingFlag`] raised for the duration.
//! - [`RequestError`]: rejections (non-zero code), transport failures, and
//!   payloads of the wrong shape, each with a
//!   [`user_message`](RequestError::user_message) that never comes back
//!   empty.
//!
//! ```rust
//! use serde_json::{Value, json};
//! use sightline_response::{Client, TransportError};
//!
//! let mut client = Client::new(|command: &str, args: Value| -> Result<Value, TransportError> {
//!     assert_eq!(command, "search");
//!     let keyword = args["keyword"].as_str().unwrap_or_default();
//!     if keyword.is_empty() {
//!         return Ok(json!({ "code": 99999, "message": "keyword is required", "data": [] }));
//!     }
//!     Ok(json!({ "code": 0, "message": "", "data": [format!("{keyword} (2017)")] }))
//! });
//!
//! let found: Vec<String> = client.request("search", &json!({ "keyword": "Dark" })).unwrap();
//! assert_eq!(found, ["Dark (2017)"]);
//!
//! let err = client
//!     .request::<Vec<String>, _>("search", &json!({ "keyword": "" }))
//!     .unwrap_err();
//! assert_eq!(err.code(), Some(99999));
//! assert_eq!(err.user_message(), "keyword is required");
//! assert!(!client.is_loading());
//! ```

mod client;
mod envelope;
mod error;

pub use client::{Client, LoadingFlag, Transport};
pub use envelope::{Envelope, FAILURE_CODE, SUCCESS_CODE};
pub use error::{RequestError, TransportError, UNKNOWN_ERROR_MESSAGE};
