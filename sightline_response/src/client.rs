// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sending host commands and decoding their answers.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{Envelope, RequestError, TransportError};

/// The host's request adapter: sends one named command and returns the raw
/// answer.
///
/// How the command reaches the host (an IPC bridge, an in-process call, a
/// test double) is up to the implementation. The answer is expected to be an
/// [`Envelope`] encoded as JSON.
pub trait Transport {
    /// Sends `command` with `args` and returns the host's answer.
    fn invoke(&mut self, command: &str, args: Value) -> Result<Value, TransportError>;
}

impl<F> Transport for F
where
    F: FnMut(&str, Value) -> Result<Value, TransportError>,
{
    fn invoke(&mut self, command: &str, args: Value) -> Result<Value, TransportError> {
        self(command, args)
    }
}

/// Shared "a request is in flight" flag.
///
/// Clones observe the same flag, so a view can hold one while the
/// [`Client`] owns another.
#[derive(Clone, Debug, Default)]
pub struct LoadingFlag(Rc<Cell<bool>>);

impl LoadingFlag {
    /// Returns `true` while a request is running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.0.get()
    }

    fn begin(&self) -> LoadingGuard<'_> {
        self.0.set(true);
        LoadingGuard(self)
    }
}

struct LoadingGuard<'a>(&'a LoadingFlag);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.0.set(false);
    }
}

/// Sends commands through a [`Transport`] and normalizes the answers.
///
/// Every request goes through the same steps: raise the loading flag, encode
/// the arguments, invoke, decode the [`Envelope`], check its code, decode the
/// payload, and lower the flag again whatever happened.
#[derive(Debug)]
pub struct Client<A> {
    transport: A,
    loading: LoadingFlag,
}

impl<A: Transport> Client<A> {
    /// Creates a client over `transport`.
    pub fn new(transport: A) -> Self {
        Self {
            transport,
            loading: LoadingFlag::default(),
        }
    }

    /// Sends `command` with `args` and returns the decoded payload.
    ///
    /// A non-zero envelope code becomes [`RequestError::Rejected`] with the
    /// host's message, whatever the shape of the failure payload. Failures are
    /// logged at `warn` with the message a user would see.
    pub fn request<T, D>(&mut self, command: &str, args: &D) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
        D: Serialize + ?Sized,
    {
        let result = {
            let _loading = self.loading.begin();
            serde_json::to_value(args)
                .map_err(RequestError::from)
                .and_then(|args| dispatch(&mut self.transport, command, args))
        };
        if let Err(err) = &result {
            warn!(
                command,
                code = ?err.code(),
                message = %err.user_message(),
                "host request failed"
            );
        }
        result
    }

    /// Sends `command` without arguments.
    pub fn request_without_args<T>(&mut self, command: &str) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        self.request(command, &Value::Null)
    }

    /// Returns `true` while a request is running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Returns a handle to the loading flag.
    #[must_use]
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &A {
        &self.transport
    }

    /// Returns the transport mutably.
    pub fn transport_mut(&mut self) -> &mut A {
        &mut self.transport
    }

    /// Consumes the client and returns the transport.
    pub fn into_inner(self) -> A {
        self.transport
    }
}

fn dispatch<A: Transport, T: DeserializeOwned>(
    transport: &mut A,
    command: &str,
    args: Value,
) -> Result<T, RequestError> {
    debug!(command, "invoking host command");
    let answer = transport.invoke(command, args)?;
    let envelope: Envelope<Value> = serde_json::from_value(answer)?;
    let data = envelope.into_result()?;
    Ok(serde_json::from_value(data)?)
}
