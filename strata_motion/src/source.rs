// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tilt-driven offset source.
//!
//! [`MotionSource`] owns a background thread that polls a
//! [`MotionSampler`] at a fixed 60 Hz cadence, remaps each gravity sample
//! for the configured [`Orientation`], and runs it through a [`TiltFilter`].
//! Filtered values that cross a whole-pixel boundary are posted into an mpsc
//! channel; the ordering thread drains the channel through a [`MotionPump`]
//! and forwards each value to the engine in arrival order.
//!
//! The sampling thread never touches engine state. It checks the source's
//! linked flag before posting, and the engine independently discards
//! deliveries for identifiers that are no longer linked, so unlinking
//! guarantees no further notifications even with a sample in flight.
//! Dropping the source stops and joins the thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use kurbo::Vec2;
use strata_core::source::OffsetSource;

use crate::filter::TiltFilter;
use crate::pump::MotionPump;
use crate::sampler::{MotionSampler, Orientation};

/// The identifier a [`MotionSource`] links under by default.
pub const MOTION_IDENTIFIER: &str = "motion";

/// Sampling cadence of the background thread.
const SAMPLE_INTERVAL: Duration = Duration::from_micros(16_667);

/// Flags shared between the source and its sampling thread.
#[derive(Debug, Default)]
struct SharedState {
    linked: AtomicBool,
    stop: AtomicBool,
}

/// Offset source driven by a device-motion sensor.
///
/// Constructed together with the [`MotionPump`] that marshals its updates
/// onto the ordering thread. The source side is handed to
/// [`Engine::link_source`](strata_core::engine::Engine::link_source); the
/// pump side stays with the host's event loop.
#[derive(Debug)]
pub struct MotionSource {
    identifier: String,
    offset: Vec2,
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl MotionSource {
    /// Creates a motion source with the [default identifier](MOTION_IDENTIFIER).
    ///
    /// The sampling thread starts immediately but posts nothing until the
    /// source is linked.
    #[must_use]
    pub fn new<S: MotionSampler + 'static>(
        sampler: S,
        orientation: Orientation,
    ) -> (Self, MotionPump) {
        Self::with_identifier(sampler, orientation, MOTION_IDENTIFIER)
    }

    /// Creates a motion source with a custom identifier.
    #[must_use]
    pub fn with_identifier<S: MotionSampler + 'static>(
        sampler: S,
        orientation: Orientation,
        identifier: impl Into<String>,
    ) -> (Self, MotionPump) {
        let identifier = identifier.into();
        let shared = Arc::new(SharedState::default());
        let (tx, rx) = mpsc::channel();

        let worker = thread::spawn({
            let shared = Arc::clone(&shared);
            move || sample_loop(sampler, orientation, &shared, &tx)
        });

        let source = Self {
            identifier: identifier.clone(),
            offset: Vec2::ZERO,
            shared,
            worker: Some(worker),
        };
        (source, MotionPump::new(identifier, rx))
    }
}

impl OffsetSource for MotionSource {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn offset_changed(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn linked(&mut self) {
        self.shared.linked.store(true, Ordering::Release);
    }

    fn unlinked(&mut self) {
        self.shared.linked.store(false, Ordering::Release);
    }
}

impl Drop for MotionSource {
    fn drop(&mut self) {
        self.shared.stop.store(true, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Body of the sampling thread.
fn sample_loop<S: MotionSampler>(
    mut sampler: S,
    orientation: Orientation,
    shared: &SharedState,
    tx: &Sender<Vec2>,
) {
    let mut filter = TiltFilter::new();
    while !shared.stop.load(Ordering::Acquire) {
        if shared.linked.load(Ordering::Acquire) {
            if let Some(sample) = sampler.sample() {
                if let Some(published) = filter.ingest(orientation.remap(sample)) {
                    // Re-check immediately before posting; an unlink that
                    // lands after this point is handled by the engine
                    // discarding the delivery.
                    if shared.linked.load(Ordering::Acquire) {
                        let _ = tx.send(published);
                    }
                }
            }
        }
        thread::park_timeout(SAMPLE_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use strata_core::engine::{Engine, NoopPresenter, Presenter};
    use strata_core::sheet::Sheet;

    use crate::sampler::GravitySample;

    use super::*;

    /// A sampler reporting a fixed gravity vector.
    struct SteadySampler(GravitySample);

    impl MotionSampler for SteadySampler {
        fn sample(&mut self) -> Option<GravitySample> {
            Some(self.0)
        }
    }

    /// A sampler with no hardware behind it.
    struct AbsentSampler;

    impl MotionSampler for AbsentSampler {
        fn sample(&mut self) -> Option<GravitySample> {
            None
        }
    }

    fn pump_until<P: Presenter>(
        pump: &mut MotionPump,
        engine: &mut Engine<P>,
        deadline: Duration,
        mut done: impl FnMut(&Engine<P>) -> bool,
    ) -> bool {
        let start = Instant::now();
        while start.elapsed() < deadline {
            pump.dispatch_pending(engine);
            if done(engine) {
                return true;
            }
            thread::sleep(Duration::from_millis(1));
        }
        false
    }

    #[test]
    fn tilt_reaches_the_engine_after_linking() {
        let (source, mut pump) = MotionSource::new(
            SteadySampler(GravitySample {
                x: -0.5,
                y: 0.0,
                z: 0.0,
            }),
            Orientation::Vertical,
        );

        let mut engine = Engine::new(NoopPresenter);
        engine.add_sheet(Sheet::with_depth(kurbo::Point::ZERO, 0.0));
        engine.link_source(Box::new(source)).unwrap();

        // Steady -0.5 g remapped to +0.5 converges on +50 px.
        let reached = pump_until(
            &mut pump,
            &mut engine,
            Duration::from_secs(5),
            |engine| engine.aggregate_offset() == Vec2::new(50.0, 0.0),
        );
        assert!(reached, "filtered tilt offset never reached the engine");
    }

    #[test]
    fn unlinked_source_stops_notifying() {
        let (source, mut pump) = MotionSource::new(
            SteadySampler(GravitySample {
                x: -1.0,
                y: 0.0,
                z: 0.0,
            }),
            Orientation::Vertical,
        );

        let mut engine = Engine::new(NoopPresenter);
        engine.link_source(Box::new(source)).unwrap();

        let reached = pump_until(
            &mut pump,
            &mut engine,
            Duration::from_secs(5),
            |engine| engine.aggregate_offset().x > 0.0,
        );
        assert!(reached, "source produced no updates while linked");

        // Dropping the returned source stops the sampling thread; anything
        // still queued is addressed to an unlinked identifier and discarded.
        drop(engine.unlink_source(MOTION_IDENTIFIER));
        pump.dispatch_pending(&mut engine);
        assert_eq!(engine.aggregate_offset(), Vec2::ZERO);
    }

    #[test]
    fn absent_hardware_degrades_to_zero_offset() {
        let (source, mut pump) = MotionSource::new(AbsentSampler, Orientation::Vertical);

        let mut engine = Engine::new(NoopPresenter);
        engine.link_source(Box::new(source)).unwrap();

        thread::sleep(Duration::from_millis(50));
        assert_eq!(pump.dispatch_pending(&mut engine), 0);
        assert_eq!(engine.aggregate_offset(), Vec2::ZERO);
    }

    #[test]
    fn custom_identifier_is_reported() {
        let (source, pump) =
            MotionSource::with_identifier(AbsentSampler, Orientation::Horizontal, "tilt-2");
        assert_eq!(source.identifier(), "tilt-2");
        assert_eq!(pump.identifier(), "tilt-2");
    }
}
