// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible window and the math that derives it.

use core::ops::Range;

use crate::Scalar;

/// Contiguous run of rows eligible for rendering: `[start, start + count)`.
///
/// `start + count` may exceed the length of the item sequence; consumers
/// truncate when slicing (see [`VisibleWindow::range_for_len`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VisibleWindow {
    /// First row index in the window.
    pub start: usize,
    /// Number of rows the window can hold.
    pub count: usize,
}

impl VisibleWindow {
    /// A window that realizes nothing.
    pub const EMPTY: Self = Self { start: 0, count: 0 };

    /// Exclusive end index, saturating at `usize::MAX`.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.count)
    }

    /// Index range of rows to realize for a sequence of `len` items.
    ///
    /// The range is empty when `start >= len`.
    #[must_use]
    pub fn range_for_len(&self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        let end = self.end().min(len);
        start..end
    }

    /// Number of rows realized for a sequence of `len` items.
    #[must_use]
    pub fn len_for(&self, len: usize) -> usize {
        self.range_for_len(len).len()
    }

    /// Returns `true` if `index` falls inside the window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}

/// Number of rows needed to cover `viewport_extent`, plus `overscan`.
///
/// This is `ceil(viewport_extent / row_height) + overscan`. A viewport that
/// measures zero, negative, or non-finite (for example a hidden element)
/// yields just `overscan`.
///
/// `row_height` is expected to be positive and finite; a non-positive height
/// contributes no rows.
#[must_use]
pub fn rows_for_viewport<S: Scalar>(viewport_extent: S, row_height: S, overscan: usize) -> usize {
    if !viewport_extent.is_finite() || !row_height.is_positive() {
        return overscan;
    }
    (viewport_extent / row_height)
        .ceil_to_usize()
        .saturating_add(overscan)
}

/// First row at `scroll_offset`: `floor(scroll_offset / row_height)`.
///
/// Negative and non-finite offsets map to row `0`.
#[must_use]
pub fn row_at_offset<S: Scalar>(scroll_offset: S, row_height: S) -> usize {
    if !row_height.is_positive() {
        return 0;
    }
    (scroll_offset.sanitize_non_negative() / row_height).floor_to_usize()
}

/// Computes the visible window in one step.
///
/// Equivalent to measuring `viewport_extent` and then scrolling to
/// `scroll_offset` on a [`WindowedList`](crate::WindowedList).
///
/// ```rust
/// use sightline_window::{VisibleWindow, compute_window};
///
/// let window = compute_window(185.0, 300.0, 60.0, 4);
/// assert_eq!(window, VisibleWindow { start: 3, count: 9 });
/// assert_eq!(window.range_for_len(100), 3..12);
/// ```
#[must_use]
pub fn compute_window<S: Scalar>(
    scroll_offset: S,
    viewport_extent: S,
    row_height: S,
    overscan: usize,
) -> VisibleWindow {
    VisibleWindow {
        start: row_at_offset(scroll_offset, row_height),
        count: rows_for_viewport(viewport_extent, row_height, overscan),
    }
}
