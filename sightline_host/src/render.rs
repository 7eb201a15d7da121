// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer capability and the frame it produces.

use alloc::vec::Vec;

/// Turns one item into whatever the host displays for a row.
///
/// Implemented for every `Fn(&T) -> O`, so a closure is usually enough:
///
/// ```rust
/// use sightline_host::Renderer;
///
/// let label = |title: &String| format!("[{title}]");
/// assert_eq!(label.render(&"Pilot".to_string()), "[Pilot]");
/// ```
pub trait Renderer<T: ?Sized> {
    /// Displayable unit for one row (a widget, a view node, a line of text).
    type Output;

    /// Renders one item. Should not depend on where the row is placed.
    fn render(&self, item: &T) -> Self::Output;
}

impl<T: ?Sized, O, F> Renderer<T> for F
where
    F: Fn(&T) -> O,
{
    type Output = O;

    fn render(&self, item: &T) -> O {
        self(item)
    }
}

/// One realized row of a [`Frame`].
///
/// Hosts place `node` absolutely at `top`, spanning the full container width,
/// with the fixed row `height`.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<O, S = f64> {
    /// Index of the item in the full sequence.
    pub index: usize,
    /// Offset of the row's top edge from the top of the content.
    pub top: S,
    /// Height of the row.
    pub height: S,
    /// Rendered output for the item.
    pub node: O,
}

/// Everything a host needs to draw one pass of a list view.
///
/// `content_height` sizes the relatively positioned container so scrollbar
/// proportions match the full sequence; `rows` are the realized children.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<O, S = f64> {
    /// Height of the full content (`len * row_height`).
    pub content_height: S,
    /// Realized rows, in index order.
    pub rows: Vec<Row<O, S>>,
}

impl<O, S> Frame<O, S> {
    /// Number of realized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows are realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the realized row for item `index`, if it is in this frame.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row<O, S>> {
        let first = self.rows.first()?.index;
        self.rows.get(index.checked_sub(first)?)
    }

    /// Iterates over the rendered outputs in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &O> {
        self.rows.iter().map(|row| &row.node)
    }
}
