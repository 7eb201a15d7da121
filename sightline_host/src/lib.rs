// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_host --heading-base-level=0

//! Sightline Host: mount a windowed list on a live viewport.
//!
//! [`sightline_window`] answers which rows to realize. This crate adds the
//! parts that depend on a host being around:
//!
//! - [`ViewportHost`]: the capability a toolkit provides for the scroll
//!   container (measure its height, register and unregister a resize
//!   listener).
//! - [`Renderer`]: a pure function from one item to one displayable unit.
//! - [`ListView`]: owns a [`WindowedList`](sightline_window::WindowedList)
//!   and a renderer, measures on [`ListView::attach`], re-measures on
//!   [`ListView::handle_resize`], releases the listener on
//!   [`ListView::detach`] or drop, and assembles a [`Frame`] of positioned
//!   [`Row`]s on [`ListView::render`].
//! - [`ResizePolicy`]: measure on every resize notification, or coalesce them
//!   until [`ListView::flush_resize`].
//!
//! ## Minimal example
//!
//! ```rust
//! use sightline_host::{ListView, ViewportHost};
//! use sightline_window::WindowConfig;
//!
//! struct Pane {
//!     height: f64,
//!     listening: bool,
//! }
//!
//! impl ViewportHost for Pane {
//!     type Scalar = f64;
//!     type Registration = ();
//!
//!     fn viewport_height(&self) -> f64 {
//!         self.height
//!     }
//!     fn register_resize(&mut self) {
//!         self.listening = true;
//!     }
//!     fn unregister_resize(&mut self, _: ()) {
//!         self.listening = false;
//!     }
//! }
//!
//! let episodes: Vec<String> = (1..=40).map(|n| format!("S01E{n:02}")).collect();
//! let config = WindowConfig::new(60.0);
//! let mut view = ListView::<Pane, _>::new(config, |e: &String| e.clone()).unwrap();
//!
//! view.attach(Pane { height: 300.0, listening: false });
//! view.handle_scroll(185.0);
//!
//! let frame = view.render(&episodes);
//! assert_eq!(frame.content_height, 2400.0);
//! assert_eq!(frame.rows[0].node, "S01E04");
//! assert_eq!(frame.rows[0].top, 180.0);
//!
//! let pane = view.detach().unwrap();
//! assert!(!pane.listening);
//! ```
//!
//! Everything is single-threaded and synchronous: each handler finishes its
//! recomputation before it returns. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod render;
mod view;

pub use host::ViewportHost;
pub use render::{Frame, Renderer, Row};
pub use view::{ListView, ResizePolicy};
