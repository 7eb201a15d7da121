// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful window controller for one list view.

use core::ops::Range;

use tracing::{debug, trace};

use crate::config::validate_row_height;
use crate::window::{row_at_offset, rows_for_viewport};
use crate::{ConfigError, Scalar, VisibleSlice, VisibleWindow, WindowConfig};

/// Windowed projection of a fixed-row list.
///
/// `WindowedList` owns the two pieces of state that decide which rows are
/// realized:
///
/// - `count`, set from the viewport by [`WindowedList::measure`] (on attach
///   and on every resize), and
/// - `start`, set from the scroll offset by [`WindowedList::on_scroll`].
///
/// Neither operation touches the other's state. The item sequence itself is
/// never stored; callers pass it to [`WindowedList::visible_slice`] and
/// [`WindowedList::total_height`] on every render.
///
/// Until the first measurement the window holds no rows.
#[derive(Clone, Debug)]
pub struct WindowedList<S = f64> {
    row_height: S,
    overscan: usize,
    viewport_extent: Option<S>,
    scroll_offset: S,
    start: usize,
    count: usize,
}

impl<S: Scalar> WindowedList<S> {
    /// Creates a list with [`DEFAULT_OVERSCAN`](crate::DEFAULT_OVERSCAN).
    ///
    /// Fails if `row_height` is not positive and finite.
    pub fn new(row_height: S) -> Result<Self, ConfigError<S>> {
        Self::from_config(WindowConfig::new(row_height))
    }

    /// Creates a list with an explicit overscan.
    pub fn with_overscan(row_height: S, overscan: usize) -> Result<Self, ConfigError<S>> {
        Self::from_config(WindowConfig::new(row_height).with_overscan(overscan))
    }

    /// Creates a list from a [`WindowConfig`].
    pub fn from_config(config: WindowConfig<S>) -> Result<Self, ConfigError<S>> {
        let row_height = validate_row_height(config.row_height).inspect_err(|err| {
            debug!(%err, "rejected windowed list configuration");
        })?;
        Ok(Self {
            row_height,
            overscan: config.overscan,
            viewport_extent: None,
            scroll_offset: S::zero(),
            start: 0,
            count: 0,
        })
    }

    /// Returns the configuration this list was built from.
    #[must_use]
    pub fn config(&self) -> WindowConfig<S> {
        WindowConfig {
            row_height: self.row_height,
            overscan: self.overscan,
        }
    }

    /// Returns the uniform row height.
    #[must_use]
    pub fn row_height(&self) -> S {
        self.row_height
    }

    /// Returns the overscan row count.
    #[must_use]
    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Returns the most recent viewport measurement, if any.
    #[must_use]
    pub fn viewport_extent(&self) -> Option<S> {
        self.viewport_extent
    }

    /// Returns `true` once [`WindowedList::measure`] has been called.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.viewport_extent.is_some()
    }

    /// Returns the last scroll offset passed to [`WindowedList::on_scroll`].
    #[must_use]
    pub fn scroll_offset(&self) -> S {
        self.scroll_offset
    }

    /// First row of the window.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Number of rows the window holds, overscan included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Current window.
    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        VisibleWindow {
            start: self.start,
            count: self.count,
        }
    }

    /// Records a viewport measurement and recomputes `count`.
    ///
    /// Call this when the list is first attached to a live viewport and again
    /// whenever the viewport is resized. A zero, negative, or non-finite
    /// extent (a hidden element, for instance) leaves only the overscan rows;
    /// the next measurement of a visible viewport recovers.
    ///
    /// The scroll position is left alone. Returns the new `count`.
    pub fn measure(&mut self, viewport_extent: S) -> usize {
        let count = rows_for_viewport(viewport_extent, self.row_height, self.overscan);
        if !viewport_extent.is_finite() || !viewport_extent.is_positive() {
            debug!(
                viewport = ?viewport_extent,
                count, "viewport has no usable extent, keeping overscan rows only"
            );
        } else if count != self.count {
            debug!(viewport = ?viewport_extent, from = self.count, to = count, "window resized");
        }
        self.viewport_extent = Some(viewport_extent);
        self.count = count;
        count
    }

    /// Updates `start` from the container's scroll offset.
    ///
    /// `start = floor(offset / row_height)`. Repeating a call with the same
    /// offset leaves the state unchanged. Negative and non-finite offsets are
    /// treated as `0`. No upper bound is applied; a window past the end of the
    /// sequence simply projects nothing.
    pub fn on_scroll(&mut self, scroll_offset: S) {
        let offset = scroll_offset.sanitize_non_negative();
        let start = row_at_offset(offset, self.row_height);
        if start != self.start {
            trace!(offset = ?offset, from = self.start, to = start, "window moved");
        }
        self.scroll_offset = offset;
        self.start = start;
    }

    /// Index range of `items` the window covers, truncated at `len`.
    #[must_use]
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        self.window().range_for_len(len)
    }

    /// Rows to render for `items`, each paired with its absolute top offset.
    ///
    /// Yields `items[start..start + count]`, truncated at the end of `items`,
    /// with `top = index * row_height`. Pure: calling it on every render costs
    /// one slice and one map.
    ///
    /// ```rust
    /// use sightline_window::WindowedList;
    ///
    /// let items: Vec<u32> = (0..100).collect();
    /// let mut list = WindowedList::with_overscan(60.0, 4).unwrap();
    /// list.measure(300.0);
    /// list.on_scroll(185.0);
    ///
    /// let rows: Vec<_> = list.visible_slice(&items).collect();
    /// assert_eq!(rows.len(), 9);
    /// assert_eq!(*rows[0].item, 3);
    /// assert_eq!(rows[0].top, 180.0);
    /// ```
    #[must_use]
    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> VisibleSlice<'a, T, S> {
        let range = self.visible_range(items.len());
        VisibleSlice::new(&items[range.clone()], range.start, self.row_height)
    }

    /// Height of the whole content: `items.len() * row_height`.
    ///
    /// Size the scrollable container with this so the native scrollbar keeps
    /// the right proportions.
    #[must_use]
    pub fn total_height<T>(&self, items: &[T]) -> S {
        self.content_extent(items.len())
    }

    /// Height of `len` rows.
    #[must_use]
    pub fn content_extent(&self, len: usize) -> S {
        S::from_usize(len) * self.row_height
    }

    /// Absolute top offset of row `index`.
    #[must_use]
    pub fn row_top(&self, index: usize) -> S {
        S::from_usize(index) * self.row_height
    }
}
