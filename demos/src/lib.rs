// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Sightline demos: an in-memory pane, a canned
//! catalog host, and config loading.

use std::cell::Cell;
use std::env::{self, VarError};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sightline_host::ViewportHost;
use sightline_response::{Envelope, TransportError};
use sightline_window::WindowConfig;
use tracing::info;

/// Environment variable holding a JSON [`WindowConfig`].
pub const CONFIG_VAR: &str = "SIGHTLINE_CONFIG";

/// Why [`load_config`] could not produce a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// The variable is set but not valid Unicode.
    #[error("SIGHTLINE_CONFIG is not valid unicode")]
    NotUnicode,
    /// The variable does not hold a JSON window config.
    #[error("SIGHTLINE_CONFIG is not a valid window config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the window config from [`CONFIG_VAR`], falling back to defaults.
///
/// Missing fields take their default values, so `{"overscan": 2}` is a
/// complete config.
pub fn load_config() -> Result<WindowConfig, ConfigLoadError> {
    config_from_var(env::var(CONFIG_VAR))
}

/// Turns the result of reading [`CONFIG_VAR`] into a config.
pub fn config_from_var(var: Result<String, VarError>) -> Result<WindowConfig, ConfigLoadError> {
    match var {
        Ok(raw) => {
            let config: WindowConfig = serde_json::from_str(&raw)?;
            info!(var = CONFIG_VAR, ?config, "window config loaded");
            Ok(config)
        }
        Err(VarError::NotPresent) => Ok(WindowConfig::default()),
        Err(VarError::NotUnicode(_)) => Err(ConfigLoadError::NotUnicode),
    }
}

/// One row of the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResult {
    /// Resource id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Channel the resource belongs to.
    pub channel: String,
}

/// A pane whose height can be changed from outside, like a window the user
/// drags.
#[derive(Clone, Debug)]
pub struct Pane {
    height: Rc<Cell<f64>>,
    listening: Rc<Cell<bool>>,
}

impl Pane {
    /// Creates a pane `height` pixels tall.
    pub fn new(height: f64) -> Self {
        Self {
            height: Rc::new(Cell::new(height)),
            listening: Rc::new(Cell::new(false)),
        }
    }

    /// Changes the height. Returns `true` if a view is listening for it.
    pub fn resize(&self, height: f64) -> bool {
        self.height.set(height);
        self.listening.get()
    }

    /// Returns `true` while a view holds a resize registration.
    pub fn is_listening(&self) -> bool {
        self.listening.get()
    }
}

impl ViewportHost for Pane {
    type Scalar = f64;
    type Registration = ();

    fn viewport_height(&self) -> f64 {
        self.height.get()
    }

    fn register_resize(&mut self) {
        self.listening.set(true);
    }

    fn unregister_resize(&mut self, (): ()) {
        self.listening.set(false);
    }
}

/// Answers `search` with `len` generated results, and anything else with a
/// failure envelope.
pub fn catalog_host(len: u64) -> impl FnMut(&str, Value) -> Result<Value, TransportError> {
    move |command, args| {
        let answer = match command {
            "search" => {
                let keyword = args["keyword"].as_str().unwrap_or_default();
                let results: Vec<SearchResult> = (0..len)
                    .map(|id| SearchResult {
                        id,
                        name: format!("{keyword} #{id}"),
                        channel: if id % 3 == 0 { "movie" } else { "tv" }.to_owned(),
                    })
                    .collect();
                serde_json::to_value(Envelope::ok("", results))
            }
            other => serde_json::to_value(Envelope::fail(
                format!("unknown command `{other}`"),
                json!(null),
            )),
        };
        answer.map_err(|err| TransportError::with_source("could not encode answer", err))
    }
}
