// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The offset-source contract.
//!
//! An offset source turns an external stimulus (touch drag, device tilt)
//! into a 2-D offset signal. Sources are owned by the engine for their
//! linked lifetime; the engine is the sole destination for their updates.
//!
//! Updates always flow through
//! [`Engine::source_updated`](crate::engine::Engine::source_updated) on the
//! ordering thread. Sources whose stimulus arrives on a background thread
//! (e.g. a motion sensor) marshal each update onto the ordering thread
//! before it reaches the engine; sources driven by input events deliver
//! synchronously. Either way, [`offset_changed`](OffsetSource::offset_changed)
//! is invoked once per delivered update, and [`offset`](OffsetSource::offset)
//! reflects the last delivered value.

use alloc::string::String;
use core::fmt;

use kurbo::{Size, Vec2};

/// A producer of a 2-D offset signal with a link/unlink lifecycle.
///
/// Implementations must use an identifier that is globally unique among the
/// sources linked to one engine; linking a duplicate is rejected with
/// [`LinkError::DuplicateIdentifier`].
pub trait OffsetSource {
    /// A unique identifier for this source while it is linked.
    fn identifier(&self) -> &str;

    /// The current published offset.
    ///
    /// A source whose stimulus never arrives (e.g. missing sensor hardware)
    /// keeps reporting zero; the engine treats it as a constant-zero
    /// contribution rather than an error.
    fn offset(&self) -> Vec2;

    /// Accepts an offset update delivered on the ordering thread.
    ///
    /// Called by the engine exactly once per delivered update, immediately
    /// before the layout pass that consumes it.
    fn offset_changed(&mut self, offset: Vec2);

    /// Called when the source is linked to an engine.
    fn linked(&mut self) {}

    /// Called when the source is unlinked from an engine.
    ///
    /// After this returns, the source must not post further updates; a
    /// delivery already in flight is discarded by the engine.
    fn unlinked(&mut self) {}

    /// Called whenever the engine's geometry changes.
    ///
    /// Sources that size an internal scrollable region use this; sources
    /// that don't need geometry keep the default no-op.
    fn geometry_changed(&mut self, viewport: Size, content: Size) {
        let _ = (viewport, content);
    }
}

/// Error returned by [`Engine::link_source`](crate::engine::Engine::link_source).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkError {
    /// A source with the same identifier is already linked.
    ///
    /// The currently linked source is left untouched; the rejected source is
    /// dropped.
    DuplicateIdentifier {
        /// The identifier that was already in use.
        identifier: String,
    },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateIdentifier { identifier } => {
                write!(f, "a source with identifier {identifier:?} is already linked")
            }
        }
    }
}

impl core::error::Error for LinkError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn duplicate_identifier_display_names_the_identifier() {
        let err = LinkError::DuplicateIdentifier {
            identifier: "scroll".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "a source with identifier \"scroll\" is already linked"
        );
    }
}
