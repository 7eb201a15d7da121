// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy projection of the visible window over an item slice.

use core::iter::{Enumerate, FusedIterator};
use core::slice;

use crate::Scalar;

/// One realized row: the item plus where to place it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placed<'a, T, S = f64> {
    /// Index of the item in the full sequence.
    pub index: usize,
    /// The item itself.
    pub item: &'a T,
    /// Absolute offset of the row's top edge from the top of the content.
    pub top: S,
}

/// Iterator over the rows in the visible window.
///
/// Returned by [`WindowedList::visible_slice`](crate::WindowedList::visible_slice).
/// Yields at most `count` rows, in index order, and nothing at all when the
/// window starts past the end of the sequence.
#[derive(Clone, Debug)]
pub struct VisibleSlice<'a, T, S = f64> {
    rows: Enumerate<slice::Iter<'a, T>>,
    start: usize,
    row_height: S,
}

impl<'a, T, S: Scalar> VisibleSlice<'a, T, S> {
    pub(crate) fn new(items: &'a [T], start: usize, row_height: S) -> Self {
        Self {
            rows: items.iter().enumerate(),
            start,
            row_height,
        }
    }

    /// Index of the first row this slice was cut from.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    fn place(&self, (local, item): (usize, &'a T)) -> Placed<'a, T, S> {
        let index = self.start + local;
        Placed {
            index,
            item,
            top: S::from_usize(index) * self.row_height,
        }
    }
}

impl<'a, T, S: Scalar> Iterator for VisibleSlice<'a, T, S> {
    type Item = Placed<'a, T, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.place(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<T, S: Scalar> DoubleEndedIterator for VisibleSlice<'_, T, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let row = self.rows.next_back()?;
        Some(self.place(row))
    }
}

impl<T, S: Scalar> ExactSizeIterator for VisibleSlice<'_, T, S> {}

impl<T, S: Scalar> FusedIterator for VisibleSlice<'_, T, S> {}
