// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration and its validation error.

use core::fmt;

use crate::Scalar;

/// Row count added on top of the rows that fit in the viewport.
///
/// Hides the blank band that appears for a frame when the user scrolls faster
/// than the host can render.
pub const DEFAULT_OVERSCAN: usize = 4;

/// Row height used by [`WindowConfig::default`], in logical pixels.
pub const DEFAULT_ROW_HEIGHT: usize = 60;

/// Configuration for a [`WindowedList`](crate::WindowedList).
///
/// Both values are fixed for the lifetime of one list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        default,
        bound(
            serialize = "S: serde::Serialize",
            deserialize = "S: Scalar + serde::Deserialize<'de>"
        )
    )
)]
pub struct WindowConfig<S = f64> {
    /// Uniform height of every row. Must be positive and finite.
    pub row_height: S,
    /// Extra rows realized beyond the viewport.
    pub overscan: usize,
}

impl<S: Scalar> Default for WindowConfig<S> {
    fn default() -> Self {
        Self {
            row_height: S::from_usize(DEFAULT_ROW_HEIGHT),
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl<S: Scalar> WindowConfig<S> {
    /// Creates a configuration with the given row height and [`DEFAULT_OVERSCAN`].
    #[must_use]
    pub fn new(row_height: S) -> Self {
        Self {
            row_height,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Returns a copy with a different row height.
    #[must_use]
    pub fn with_row_height(mut self, row_height: S) -> Self {
        self.row_height = row_height;
        self
    }

    /// Returns a copy with a different overscan.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Checks that the row height is usable for windowing math.
    pub fn validate(&self) -> Result<(), ConfigError<S>> {
        validate_row_height(self.row_height).map(|_| ())
    }
}

pub(crate) fn validate_row_height<S: Scalar>(row_height: S) -> Result<S, ConfigError<S>> {
    if !row_height.is_finite() {
        return Err(ConfigError::NonFiniteRowHeight(row_height));
    }
    if !row_height.is_positive() {
        return Err(ConfigError::NonPositiveRowHeight(row_height));
    }
    Ok(row_height)
}

/// Error returned when a list is configured with an unusable row height.
///
/// Not recoverable at runtime: the caller has to construct a new list with a
/// valid height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError<S = f64> {
    /// The row height was zero or negative.
    NonPositiveRowHeight(S),
    /// The row height was NaN or infinite.
    NonFiniteRowHeight(S),
}

impl<S: fmt::Debug> fmt::Display for ConfigError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRowHeight(h) => {
                write!(f, "row height must be greater than zero, got {h:?}")
            }
            Self::NonFiniteRowHeight(h) => write!(f, "row height must be finite, got {h:?}"),
        }
    }
}

impl<S: fmt::Debug> core::error::Error for ConfigError<S> {}
