// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordering-thread end of the tilt marshaling channel.

use std::fmt;
use std::sync::mpsc::Receiver;

use kurbo::Vec2;
use strata_core::engine::{Engine, Presenter};

/// Drains marshaled tilt offsets into an engine.
///
/// Obtained from [`MotionSource::new`](crate::source::MotionSource::new).
/// The host calls [`dispatch_pending`](Self::dispatch_pending) from its
/// event loop on the ordering thread; each queued offset is forwarded to
/// [`Engine::source_updated`] in arrival order, one layout pass per update,
/// never coalesced.
pub struct MotionPump {
    identifier: String,
    rx: Receiver<Vec2>,
}

impl fmt::Debug for MotionPump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionPump")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl MotionPump {
    pub(crate) fn new(identifier: String, rx: Receiver<Vec2>) -> Self {
        Self { identifier, rx }
    }

    /// Returns the identifier of the source this pump feeds.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Forwards already-queued offsets without blocking.
    ///
    /// Returns the number of updates delivered. Updates addressed to an
    /// unlinked identifier are discarded inside the engine, so pumping after
    /// an unlink is harmless.
    pub fn dispatch_pending<P: Presenter>(&mut self, engine: &mut Engine<P>) -> usize {
        let mut delivered = 0;
        while let Ok(offset) = self.rx.try_recv() {
            engine.source_updated(&self.identifier, offset);
            delivered += 1;
        }
        delivered
    }
}
