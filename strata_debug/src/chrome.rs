// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`ChromeTraceSink`] implements [`TraceSink`], accumulating events as it
//! receives them; [`ChromeTraceSink::write`] emits [Chrome Trace Event
//! Format][spec] JSON suitable for loading into `chrome://tracing` or
//! [Perfetto](https://ui.perfetto.dev/).
//!
//! The engine's events carry no wall-clock timestamps (layout passes are
//! triggered, not scheduled), so the exporter uses the event sequence number
//! as the time axis. Layout passes additionally emit counter tracks for the
//! progress ratio, which renders as a scrubbing graph of the parallax input.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use strata_core::trace::{
    GeometryEvent, LayoutPassEvent, OffsetUpdateEvent, SourceEvent, TraceSink,
};

/// Accumulates trace events and exports them as Chrome Trace Event JSON.
#[derive(Debug, Default)]
pub struct ChromeTraceSink {
    events: Vec<Value>,
    seq: u64,
}

impl ChromeTraceSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of recorded trace entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Writes the recorded events as a complete JSON array.
    pub fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(writer, &self.events).map_err(io::Error::other)
    }

    fn next_ts(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

impl TraceSink for ChromeTraceSink {
    fn on_geometry_changed(&mut self, e: &GeometryEvent) {
        let ts = self.next_ts();
        self.events.push(json!({
            "ph": "i",
            "name": "GeometryChanged",
            "cat": "Engine",
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "s": "g",
            "args": {
                "viewport": [e.viewport.width, e.viewport.height],
                "content": [e.content.width, e.content.height],
                "distance": [e.distance.width, e.distance.height],
            }
        }));
    }

    fn on_source_linked(&mut self, e: &SourceEvent<'_>) {
        let ts = self.next_ts();
        self.events.push(json!({
            "ph": "i",
            "name": "SourceLinked",
            "cat": "Sources",
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "s": "g",
            "args": {
                "identifier": e.identifier,
                "offset": [e.offset.x, e.offset.y],
            }
        }));
    }

    fn on_source_unlinked(&mut self, e: &SourceEvent<'_>) {
        let ts = self.next_ts();
        self.events.push(json!({
            "ph": "i",
            "name": "SourceUnlinked",
            "cat": "Sources",
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "s": "g",
            "args": {
                "identifier": e.identifier,
            }
        }));
    }

    fn on_offset_update(&mut self, e: &OffsetUpdateEvent<'_>) {
        let ts = self.next_ts();
        self.events.push(json!({
            "ph": "i",
            "name": "OffsetUpdate",
            "cat": "Sources",
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "s": "t",
            "args": {
                "identifier": e.identifier,
                "offset": [e.offset.x, e.offset.y],
                "delivered": e.delivered,
            }
        }));
    }

    fn on_layout_pass(&mut self, e: &LayoutPassEvent) {
        let ts = self.next_ts();
        self.events.push(json!({
            "ph": "C",
            "name": "ProgressRatio",
            "cat": "Layout",
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "args": {
                "ratio_x": e.ratio.x,
                "ratio_y": e.ratio.y,
            }
        }));
        self.events.push(json!({
            "ph": "i",
            "name": "LayoutPass",
            "cat": "Layout",
            "ts": ts,
            "pid": 0,
            "tid": 0,
            "s": "t",
            "args": {
                "pass_index": e.pass_index,
                "aggregate": [e.aggregate.x, e.aggregate.y],
                "sheet_count": e.sheet_count,
                "moved": e.moved,
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;

    #[test]
    fn export_is_valid_json_with_expected_names() {
        let mut sink = ChromeTraceSink::new();
        sink.on_source_linked(&SourceEvent {
            identifier: "scroll",
            offset: Vec2::ZERO,
        });
        sink.on_layout_pass(&LayoutPassEvent {
            pass_index: 1,
            aggregate: Vec2::new(0.0, 125.0),
            ratio: Vec2::new(0.0, 0.25),
            sheet_count: 2,
            moved: 1,
        });

        let mut out = Vec::new();
        sink.write(&mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed.len(), 3, "link + counter + instant");
        let names: Vec<&str> = parsed
            .iter()
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["SourceLinked", "ProgressRatio", "LayoutPass"]);
        assert_eq!(parsed[1]["args"]["ratio_y"], 0.25);
    }

    #[test]
    fn timestamps_increase_monotonically() {
        let mut sink = ChromeTraceSink::new();
        for _ in 0..3 {
            sink.on_offset_update(&OffsetUpdateEvent {
                identifier: "motion",
                offset: Vec2::ZERO,
                delivered: true,
            });
        }
        let ts: Vec<u64> = sink
            .events
            .iter()
            .map(|e| e["ts"].as_u64().unwrap())
            .collect();
        assert_eq!(ts, [1, 2, 3]);
    }

    #[test]
    fn empty_sink_writes_an_empty_array() {
        let sink = ChromeTraceSink::new();
        assert!(sink.is_empty());
        let mut out = Vec::new();
        sink.write(&mut out).unwrap();
        assert_eq!(out, b"[]");
    }
}
