// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag-driven offset source.
//!
//! [`ScrollSource`] wraps an external scrollable surface: its published
//! offset is the surface's live scroll position. Scroll events are delivered
//! on the ordering thread, so the host forwards each position change
//! directly to [`Engine::source_updated`](crate::engine::Engine::source_updated)
//! and the aggregation refresh is synchronous with the input event. No
//! smoothing, no threshold.

use alloc::string::String;

use kurbo::{Size, Vec2};

use crate::source::OffsetSource;

/// The identifier a [`ScrollSource`] links under by default.
pub const SCROLL_IDENTIFIER: &str = "scroll";

/// Offset source backed by an external scrollable surface.
///
/// The source does not own the surface; it records the surface's live
/// position and derives the scrollable region the surface should adopt from
/// the engine's geometry.
#[derive(Clone, Debug)]
pub struct ScrollSource {
    identifier: String,
    offset: Vec2,
    region: Size,
}

impl ScrollSource {
    /// Creates a scroll source with the [default identifier](SCROLL_IDENTIFIER).
    #[must_use]
    pub fn new() -> Self {
        Self::with_identifier(SCROLL_IDENTIFIER)
    }

    /// Creates a scroll source with a custom identifier.
    ///
    /// Use this when more than one scrollable surface feeds the same engine.
    #[must_use]
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            offset: Vec2::ZERO,
            region: Size::ZERO,
        }
    }

    /// Returns the region the backing surface should make scrollable.
    ///
    /// Componentwise `max(viewport, content)`, so the surface always covers
    /// at least the viewport. Updated on every geometry change while linked.
    #[inline]
    #[must_use]
    pub const fn scroll_region(&self) -> Size {
        self.region
    }
}

impl Default for ScrollSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OffsetSource for ScrollSource {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn offset_changed(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn geometry_changed(&mut self, viewport: Size, content: Size) {
        self.region = Size::new(
            viewport.width.max(content.width),
            viewport.height.max(content.height),
        );
    }
}
