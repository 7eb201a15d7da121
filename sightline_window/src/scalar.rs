// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for row heights, offsets, and viewport extents.
//!
//! Only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for row heights, scroll offsets, and viewport extents.
///
/// The trait is deliberately minimal and geared toward floating-point pixel
/// coordinates. Rounding helpers avoid `floor`/`ceil` so that the crate stays
/// usable without `std` or `libm`.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Converts toward zero, saturating at `0` and `usize::MAX`. NaN maps to `0`.
    fn trunc_to_usize(self) -> usize;

    /// Returns `true` if the value is strictly greater than zero.
    ///
    /// NaN is not positive.
    fn is_positive(self) -> bool {
        self > Self::zero()
    }

    /// Maps NaN, infinities, and negative values to zero.
    fn sanitize_non_negative(self) -> Self {
        if self.is_finite() && self.is_positive() {
            self
        } else {
            Self::zero()
        }
    }

    /// Rounds down to a row index. Non-positive values and NaN yield `0`.
    fn floor_to_usize(self) -> usize {
        if !self.is_positive() {
            return 0;
        }
        self.trunc_to_usize()
    }

    /// Rounds up to a row count. Non-positive values and NaN yield `0`.
    fn ceil_to_usize(self) -> usize {
        if !self.is_positive() {
            return 0;
        }
        let truncated = self.trunc_to_usize();
        if Self::from_usize(truncated) < self {
            truncated.saturating_add(1)
        } else {
            truncated
        }
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn trunc_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate; callers only pass non-negative values"
        )]
        {
            self as usize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn trunc_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Float to int casts saturate; callers only pass non-negative values"
        )]
        {
            self as usize
        }
    }
}
