// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sightline_window --heading-base-level=0

//! Sightline Window: windowing core for fixed-row lists.
//!
//! Given a full ordered item sequence, a fixed row height, and a viewport
//! height, this crate answers which rows have to be realized at the current
//! scroll position and where each of them goes. Everything else (the
//! widgets, the scroll container, the resize listener) belongs to the host.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` for heights and offsets.
//! - [`WindowConfig`]: row height plus overscan, validated at construction and
//!   reported through [`ConfigError`].
//! - [`VisibleWindow`] and [`compute_window`]: the `{ start, count }` pair and
//!   the math that derives it.
//! - [`WindowedList`]: the per-view controller. [`WindowedList::measure`]
//!   sets `count` from the viewport, [`WindowedList::on_scroll`] sets `start`
//!   from the scroll offset, and [`WindowedList::visible_slice`] projects the
//!   window over the caller's items as [`Placed`] rows.
//!
//! ## Minimal example
//!
//! ```rust
//! use sightline_window::WindowedList;
//!
//! let titles: Vec<String> = (0..100).map(|i| format!("Episode {i}")).collect();
//!
//! // 60px rows, four rows of overscan.
//! let mut list = WindowedList::with_overscan(60.0, 4).unwrap();
//!
//! // First attach: the viewport is 300px tall, so 5 rows fit, plus overscan.
//! assert_eq!(list.measure(300.0), 9);
//!
//! // The container scrolled.
//! list.on_scroll(185.0);
//! assert_eq!(list.start_index(), 3);
//!
//! // Size the scroll container and place the realized rows.
//! assert_eq!(list.total_height(&titles), 6000.0);
//! for row in list.visible_slice(&titles) {
//!     assert_eq!(row.top, row.index as f64 * 60.0);
//! }
//! ```
//!
//! `start + count` is not clamped to the sequence length: slicing truncates,
//! so a short list never gets padded and a window past the end yields nothing.
//!
//! All extents live in a caller-chosen 1D coordinate space, typically logical
//! pixels. This crate is `no_std` and does not allocate.

#![no_std]

mod config;
mod projector;
mod scalar;
mod slice;
mod window;

pub use config::{ConfigError, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, WindowConfig};
pub use projector::WindowedList;
pub use scalar::Scalar;
pub use slice::{Placed, VisibleSlice};
pub use window::{VisibleWindow, compute_window, row_at_offset, rows_for_viewport};
