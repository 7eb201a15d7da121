// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport capability a host provides to a list view.

use sightline_window::Scalar;

/// A live, measurable scroll container that can notify about resizes.
///
/// Implement this for whatever handle your toolkit gives you for the list's
/// scroll container. [`ListView`](crate::ListView) uses it in three places:
///
/// - on attach it reads [`viewport_height`](Self::viewport_height) and calls
///   [`register_resize`](Self::register_resize),
/// - on every resize notification it reads the height again,
/// - on detach (or drop) it hands the registration back through
///   [`unregister_resize`](Self::unregister_resize).
///
/// The registration is whatever token the host needs to remove its listener
/// later: a listener id, a closure handle, or `()` when the host forwards
/// resizes by other means.
pub trait ViewportHost {
    /// Coordinate type of the container's measurements.
    type Scalar: Scalar;

    /// Token identifying a resize registration.
    type Registration;

    /// Current rendered height of the container.
    ///
    /// A hidden container may report `0`; that is not an error.
    fn viewport_height(&self) -> Self::Scalar;

    /// Starts delivering resize notifications for this container.
    fn register_resize(&mut self) -> Self::Registration;

    /// Stops delivering the notifications started by `registration`.
    fn unregister_resize(&mut self, registration: Self::Registration);
}

impl<H: ViewportHost + ?Sized> ViewportHost for &mut H {
    type Scalar = H::Scalar;
    type Registration = H::Registration;

    fn viewport_height(&self) -> Self::Scalar {
        (**self).viewport_height()
    }

    fn register_resize(&mut self) -> Self::Registration {
        (**self).register_resize()
    }

    fn unregister_resize(&mut self, registration: Self::Registration) {
        (**self).unregister_resize(registration);
    }
}
