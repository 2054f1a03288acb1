// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use strata_core::trace::{
    GeometryEvent, LayoutPassEvent, OffsetUpdateEvent, SourceEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_geometry_changed(&mut self, e: &GeometryEvent) {
        let _ = writeln!(
            self.writer,
            "[geometry] viewport={:.0}x{:.0} content={:.0}x{:.0} distance={:.0}x{:.0}",
            e.viewport.width,
            e.viewport.height,
            e.content.width,
            e.content.height,
            e.distance.width,
            e.distance.height,
        );
    }

    fn on_source_linked(&mut self, e: &SourceEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[link] id={} offset=({:.1},{:.1})",
            e.identifier, e.offset.x, e.offset.y,
        );
    }

    fn on_source_unlinked(&mut self, e: &SourceEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[unlink] id={} offset=({:.1},{:.1})",
            e.identifier, e.offset.x, e.offset.y,
        );
    }

    fn on_offset_update(&mut self, e: &OffsetUpdateEvent<'_>) {
        let dropped = if e.delivered { "" } else { " DROPPED" };
        let _ = writeln!(
            self.writer,
            "[update] id={} offset=({:.1},{:.1}){dropped}",
            e.identifier, e.offset.x, e.offset.y,
        );
    }

    fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] pass={} ratio=({:.3},{:.3}) sheets={} moved={}",
            e.pass_index, e.ratio.x, e.ratio.y, e.sheet_count, e.moved,
        );
    }
}
