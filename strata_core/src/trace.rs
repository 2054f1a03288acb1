// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the layout loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the engine calls at each stage. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

use kurbo::{Size, Vec2};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the host updates the engine's geometry.
#[derive(Clone, Copy, Debug)]
pub struct GeometryEvent {
    /// The new viewport extent.
    pub viewport: Size,
    /// The new content extent.
    pub content: Size,
    /// The derived scroll distance.
    pub distance: Size,
}

/// Emitted when a source is linked to or unlinked from the engine.
#[derive(Clone, Copy, Debug)]
pub struct SourceEvent<'a> {
    /// The source's identifier.
    pub identifier: &'a str,
    /// The source's offset at the time of the event.
    pub offset: Vec2,
}

/// Emitted for every offset update reaching the engine.
#[derive(Clone, Copy, Debug)]
pub struct OffsetUpdateEvent<'a> {
    /// The identifier the update was addressed to.
    pub identifier: &'a str,
    /// The delivered offset.
    pub offset: Vec2,
    /// Whether a linked source accepted the update. `false` means the
    /// delivery raced an unlink and was discarded.
    pub delivered: bool,
}

/// Emitted at the end of every layout pass.
#[derive(Clone, Copy, Debug)]
pub struct LayoutPassEvent {
    /// Monotonic pass counter.
    pub pass_index: u64,
    /// The aggregate offset the pass consumed.
    pub aggregate: Vec2,
    /// The progress ratio the curve was evaluated at.
    pub ratio: Vec2,
    /// Number of sheets in the stack.
    pub sheet_count: u32,
    /// Number of sheets whose position changed.
    pub moved: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the engine's geometry changes.
    fn on_geometry_changed(&mut self, e: &GeometryEvent) {
        _ = e;
    }

    /// Called when a source is linked.
    fn on_source_linked(&mut self, e: &SourceEvent<'_>) {
        _ = e;
    }

    /// Called when a source is unlinked.
    fn on_source_unlinked(&mut self, e: &SourceEvent<'_>) {
        _ = e;
    }

    /// Called for every offset update reaching the engine.
    fn on_offset_update(&mut self, e: &OffsetUpdateEvent<'_>) {
        _ = e;
    }

    /// Called at the end of every layout pass.
    fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`GeometryEvent`].
    #[inline]
    pub fn geometry_changed(&mut self, e: &GeometryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_geometry_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a link [`SourceEvent`].
    #[inline]
    pub fn source_linked(&mut self, e: &SourceEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_source_linked(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an unlink [`SourceEvent`].
    #[inline]
    pub fn source_unlinked(&mut self, e: &SourceEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_source_unlinked(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`OffsetUpdateEvent`].
    #[inline]
    pub fn offset_update(&mut self, e: &OffsetUpdateEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_offset_update(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutPassEvent`].
    #[inline]
    pub fn layout_pass(&mut self, e: &LayoutPassEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout_pass(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pass() -> LayoutPassEvent {
        LayoutPassEvent {
            pass_index: 7,
            aggregate: Vec2::new(0.0, 125.0),
            ratio: Vec2::new(0.0, 0.25),
            sheet_count: 2,
            moved: 1,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_layout_pass(&sample_pass());
        sink.on_offset_update(&OffsetUpdateEvent {
            identifier: "scroll",
            offset: Vec2::ZERO,
            delivered: true,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.layout_pass(&sample_pass());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            passes: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
                self.passes.push(e.pass_index);
            }
        }

        let mut sink = RecordingSink { passes: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.layout_pass(&sample_pass());
        drop(tracer);
        assert_eq!(sink.passes, &[7]);
    }
}
