// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport/content extents and the derived scroll distance.

use kurbo::Size;

/// The extents an engine normalizes offsets against.
///
/// The host updates this on every layout or viewport change. Both sizes
/// default to zero, which yields the minimum scroll distance of `(1, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// The visible region the sheets are presented in.
    pub viewport: Size,
    /// The full extent of the parallax content.
    pub content: Size,
}

impl Geometry {
    /// Creates a geometry from viewport and content extents.
    #[inline]
    #[must_use]
    pub const fn new(viewport: Size, content: Size) -> Self {
        Self { viewport, content }
    }

    /// Returns the scrollable distance per axis.
    ///
    /// Each component is `max(content - viewport, 1)`. The floor of 1 keeps
    /// the progress ratio finite when content fits within the viewport.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> Size {
        Size::new(
            (self.content.width - self.viewport.width).max(1.0),
            (self.content.height - self.viewport.height).max(1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_content_minus_viewport() {
        let geometry = Geometry::new(Size::new(300.0, 500.0), Size::new(300.0, 1000.0));
        assert_eq!(geometry.distance(), Size::new(1.0, 500.0));
    }

    #[test]
    fn distance_floors_at_one() {
        let fits = Geometry::new(Size::new(300.0, 500.0), Size::new(300.0, 500.0));
        assert_eq!(fits.distance(), Size::new(1.0, 1.0));

        let smaller = Geometry::new(Size::new(300.0, 500.0), Size::new(100.0, 100.0));
        assert_eq!(smaller.distance(), Size::new(1.0, 1.0));
    }

    #[test]
    fn default_geometry_has_unit_distance() {
        assert_eq!(Geometry::default().distance(), Size::new(1.0, 1.0));
    }
}
