// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A windowed list bound to a live viewport, and its resize policy.

use alloc::vec::Vec;
use core::fmt;

use sightline_window::{ConfigError, WindowConfig, WindowedList};
use tracing::{debug, trace};

use crate::{Frame, Renderer, Row, ViewportHost};

/// When a resize notification turns into a measurement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResizePolicy {
    /// Re-measure inside [`ListView::handle_resize`].
    #[default]
    Immediate,
    /// Only remember that a resize happened; re-measure once in
    /// [`ListView::flush_resize`].
    ///
    /// Useful when the host delivers a burst of resize events per frame and
    /// reading the container height is not free.
    Coalesce,
}

struct Attachment<H: ViewportHost> {
    host: H,
    registration: H::Registration,
}

/// A windowed list bound to one live viewport.
///
/// `ListView` owns a [`WindowedList`] and a [`Renderer`] and manages the
/// viewport lifecycle around them:
///
/// - [`attach`](Self::attach) measures the container and registers for resize
///   notifications,
/// - [`handle_resize`](Self::handle_resize) and
///   [`handle_scroll`](Self::handle_scroll) are the two event entry points,
/// - [`detach`](Self::detach), or dropping the view, releases the registration
///   so nothing is ever measured against a torn-down container.
///
/// Events that arrive while detached are ignored.
///
/// Each view owns its own state; nothing is shared between views.
pub struct ListView<H: ViewportHost, R> {
    list: WindowedList<H::Scalar>,
    renderer: R,
    attachment: Option<Attachment<H>>,
    policy: ResizePolicy,
    resize_pending: bool,
}

impl<H: ViewportHost, R> ListView<H, R> {
    /// Creates a detached view.
    ///
    /// Fails if the configured row height is not positive and finite.
    pub fn new(
        config: WindowConfig<H::Scalar>,
        renderer: R,
    ) -> Result<Self, ConfigError<H::Scalar>> {
        Ok(Self::with_list(
            WindowedList::from_config(config)?,
            renderer,
        ))
    }

    /// Creates a detached view around an existing projector.
    pub fn with_list(list: WindowedList<H::Scalar>, renderer: R) -> Self {
        Self {
            list,
            renderer,
            attachment: None,
            policy: ResizePolicy::default(),
            resize_pending: false,
        }
    }

    /// Sets the resize policy while building the view.
    #[must_use]
    pub fn with_policy(mut self, policy: ResizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attaches to a live container, replacing any previous one.
    ///
    /// Reads the container height, sets the window size from it, and
    /// registers for resize notifications. A previously attached host is
    /// detached first and dropped. Returns the new row count.
    pub fn attach(&mut self, mut host: H) -> usize {
        self.detach();
        let height = host.viewport_height();
        let count = self.list.measure(height);
        let registration = host.register_resize();
        debug!(viewport = ?height, count, "list view attached");
        self.attachment = Some(Attachment { host, registration });
        count
    }

    /// Releases the resize registration and hands the host back.
    ///
    /// Returns `None` if the view was not attached. Scroll state and the last
    /// measurement are kept, so re-attaching resumes where the view left off.
    pub fn detach(&mut self) -> Option<H> {
        let Attachment {
            mut host,
            registration,
        } = self.attachment.take()?;
        host.unregister_resize(registration);
        self.resize_pending = false;
        debug!("list view detached");
        Some(host)
    }

    /// Returns `true` while a host is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Returns the attached host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&H> {
        self.attachment.as_ref().map(|a| &a.host)
    }

    /// Resize notification from the host.
    ///
    /// Under [`ResizePolicy::Immediate`] the container is re-measured now;
    /// under [`ResizePolicy::Coalesce`] the measurement waits for
    /// [`flush_resize`](Self::flush_resize). Ignored while detached.
    pub fn handle_resize(&mut self) {
        if !self.is_attached() {
            trace!("ignoring resize on a detached list view");
            return;
        }
        match self.policy {
            ResizePolicy::Immediate => {
                self.remeasure();
            }
            ResizePolicy::Coalesce => self.resize_pending = true,
        }
    }

    /// Applies a coalesced resize, if one is pending.
    ///
    /// Call once per frame before rendering. Returns `true` if the container
    /// was re-measured.
    pub fn flush_resize(&mut self) -> bool {
        if !core::mem::take(&mut self.resize_pending) {
            return false;
        }
        self.remeasure().is_some()
    }

    /// Returns `true` if a coalesced resize is waiting for
    /// [`flush_resize`](Self::flush_resize).
    #[must_use]
    pub fn is_resize_pending(&self) -> bool {
        self.resize_pending
    }

    /// Scroll notification from the host, carrying the container's offset.
    ///
    /// Scroll state lives in the projector, so this works whether or not a
    /// host is attached.
    pub fn handle_scroll(&mut self, scroll_offset: H::Scalar) {
        self.list.on_scroll(scroll_offset);
    }

    /// Returns the resize policy.
    #[must_use]
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Changes the resize policy.
    ///
    /// Switching to [`ResizePolicy::Immediate`] applies any pending resize.
    pub fn set_policy(&mut self, policy: ResizePolicy) {
        self.policy = policy;
        if policy == ResizePolicy::Immediate {
            self.flush_resize();
        }
    }

    /// Returns the underlying projector.
    #[must_use]
    pub fn projector(&self) -> &WindowedList<H::Scalar> {
        &self.list
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Height to give the scroll container's content for `items`.
    #[must_use]
    pub fn content_height<T>(&self, items: &[T]) -> H::Scalar {
        self.list.total_height(items)
    }

    /// Renders the rows of `items` that fall in the current window.
    #[must_use]
    pub fn render<T>(&self, items: &[T]) -> Frame<R::Output, H::Scalar>
    where
        R: Renderer<T>,
    {
        let height = self.list.row_height();
        let rows: Vec<_> = self
            .list
            .visible_slice(items)
            .map(|placed| Row {
                index: placed.index,
                top: placed.top,
                height,
                node: self.renderer.render(placed.item),
            })
            .collect();
        Frame {
            content_height: self.list.total_height(items),
            rows,
        }
    }

    fn remeasure(&mut self) -> Option<usize> {
        let height = self.attachment.as_ref()?.host.viewport_height();
        Some(self.list.measure(height))
    }
}

impl<H: ViewportHost, R> Drop for ListView<H, R> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: ViewportHost, R> fmt::Debug for ListView<H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("list", &self.list)
            .field("attached", &self.is_attached())
            .field("policy", &self.policy)
            .field("resize_pending", &self.resize_pending)
            .finish_non_exhaustive()
    }
}
