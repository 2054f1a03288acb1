// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition engine.
//!
//! [`Engine`] owns the four inputs of the parallax effect — geometry, the
//! sheet stack, the linked offset sources, and the active curve — and runs a
//! layout pass whenever any of them changes. Each pass:
//!
//! 1. Sums the linked sources' current offsets into one aggregate (an empty
//!    set aggregates to zero).
//! 2. Normalizes the aggregate by the scroll distance into a progress ratio.
//! 3. Resolves sheet depths if the stack changed, evaluates the curve per
//!    sheet axis, and recomputes positions.
//! 4. Publishes the resulting [`LayoutChanges`] to the [`Presenter`].
//!
//! # Threading
//!
//! The engine is single-owner state: every public call must happen on one
//! ordering thread. This is what makes each layout pass atomic with respect
//! to the update that triggered it — there is no locking because there is
//! nothing to lock against. Background producers (see `strata_motion`)
//! marshal their updates onto the ordering thread and feed them through
//! [`source_updated`](Engine::source_updated).

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Size, Vec2};

use crate::curve::Curve;
use crate::geometry::Geometry;
use crate::sheet::{LayoutChanges, Sheet, SheetId, SheetSet};
use crate::source::{LinkError, OffsetSource};
use crate::trace::{
    GeometryEvent, LayoutPassEvent, OffsetUpdateEvent, SourceEvent, TraceSink, Tracer,
};

/// Applies layout changes to a host-side presentation of the sheet stack.
///
/// The engine invokes this synchronously at the end of every layout pass.
/// Current positions are read from the [`SheetSet`] accessors; the
/// [`LayoutChanges`] lists say which sheets need attention, enabling
/// incremental updates and test doubles.
pub trait Presenter {
    /// Applies the given [`LayoutChanges`], reading current sheet state from
    /// `sheets` as needed.
    fn apply(&mut self, sheets: &SheetSet, changes: &LayoutChanges);
}

/// A [`Presenter`] that discards all updates.
///
/// Useful when the engine is driven purely for its computed state, which
/// remains readable through [`Engine::sheets`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPresenter;

impl Presenter for NoopPresenter {
    fn apply(&mut self, _sheets: &SheetSet, _changes: &LayoutChanges) {}
}

/// Composes linked offset sources into per-sheet positions.
pub struct Engine<P: Presenter> {
    geometry: Geometry,
    sheets: SheetSet,
    sources: Vec<Box<dyn OffsetSource>>,
    curve: Curve,
    presenter: P,

    // Reused across passes to avoid allocation.
    changes: LayoutChanges,
    pass_index: u64,
    trace_sink: Option<Box<dyn TraceSink>>,
}

impl<P: Presenter> fmt::Debug for Engine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("geometry", &self.geometry)
            .field("sheets", &self.sheets)
            .field("sources", &self.sources.len())
            .field("pass_index", &self.pass_index)
            .finish_non_exhaustive()
    }
}

impl<P: Presenter> Engine<P> {
    /// Creates an engine with zero geometry, no sheets, no sources, and the
    /// linear curve.
    #[must_use]
    pub fn new(presenter: P) -> Self {
        Self {
            geometry: Geometry::default(),
            sheets: SheetSet::new(),
            sources: Vec::new(),
            curve: Curve::linear(),
            presenter,
            changes: LayoutChanges::default(),
            pass_index: 0,
            trace_sink: None,
        }
    }

    // -- Host-facing mutation API --

    /// Updates the viewport and content extents.
    ///
    /// Notifies every linked source via
    /// [`geometry_changed`](OffsetSource::geometry_changed), then runs a
    /// layout pass against the new scroll distance. The host must call this
    /// on every layout or viewport change.
    pub fn set_geometry(&mut self, viewport: Size, content: Size) {
        self.geometry = Geometry::new(viewport, content);
        for source in &mut self.sources {
            source.geometry_changed(viewport, content);
        }
        let event = GeometryEvent {
            viewport,
            content,
            distance: self.geometry.distance(),
        };
        self.with_tracer(|t| t.geometry_changed(&event));
        self.run_layout();
    }

    /// Appends a sheet to the stack and returns its handle.
    ///
    /// Depth resolution happens at layout time, so sheets added without an
    /// explicit depth are evenly redistributed as the stack grows.
    pub fn add_sheet(&mut self, sheet: Sheet) -> SheetId {
        let id = self.sheets.add(sheet);
        self.run_layout();
        id
    }

    /// Removes every sheet, invalidating all issued handles.
    pub fn clear_sheets(&mut self) {
        self.sheets.clear();
        self.run_layout();
    }

    /// Links an offset source.
    ///
    /// Fails with [`LinkError::DuplicateIdentifier`] if a source with the
    /// same identifier is already linked, leaving the linked source
    /// untouched and dropping `source`. On success the source's
    /// [`linked`](OffsetSource::linked) and
    /// [`geometry_changed`](OffsetSource::geometry_changed) hooks run,
    /// followed by a layout pass that includes the source's current offset.
    pub fn link_source(&mut self, mut source: Box<dyn OffsetSource>) -> Result<(), LinkError> {
        if self
            .sources
            .iter()
            .any(|s| s.identifier() == source.identifier())
        {
            return Err(LinkError::DuplicateIdentifier {
                identifier: source.identifier().to_string(),
            });
        }

        source.linked();
        source.geometry_changed(self.geometry.viewport, self.geometry.content);
        let event = SourceEvent {
            identifier: source.identifier(),
            offset: source.offset(),
        };
        self.with_tracer(|t| t.source_linked(&event));

        self.sources.push(source);
        self.run_layout();
        Ok(())
    }

    /// Unlinks the source with the given identifier and returns it.
    ///
    /// Runs a layout pass with the source's contribution excluded. Returns
    /// `None` if no such source is linked. Updates from the source that are
    /// still in flight when it is unlinked are discarded by
    /// [`source_updated`](Self::source_updated).
    pub fn unlink_source(&mut self, identifier: &str) -> Option<Box<dyn OffsetSource>> {
        let idx = self
            .sources
            .iter()
            .position(|s| s.identifier() == identifier)?;
        let mut source = self.sources.remove(idx);
        source.unlinked();

        let event = SourceEvent {
            identifier,
            offset: source.offset(),
        };
        self.with_tracer(|t| t.source_unlinked(&event));

        self.run_layout();
        Some(source)
    }

    /// Replaces the active curve and runs a layout pass with it.
    pub fn set_curve(&mut self, curve: Curve) {
        self.curve = curve;
        self.run_layout();
    }

    /// Delivers an offset update to the named source and runs a layout pass.
    ///
    /// This is the single update channel for all sources: input handlers call
    /// it directly on the ordering thread, and background producers reach it
    /// through their marshaling pump. An identifier with no linked source
    /// (delivery racing an unlink) is a no-op.
    pub fn source_updated(&mut self, identifier: &str, offset: Vec2) {
        let delivered = match self
            .sources
            .iter_mut()
            .find(|s| s.identifier() == identifier)
        {
            Some(source) => {
                source.offset_changed(offset);
                true
            }
            None => false,
        };

        let event = OffsetUpdateEvent {
            identifier,
            offset,
            delivered,
        };
        self.with_tracer(|t| t.offset_update(&event));

        if delivered {
            self.run_layout();
        }
    }

    /// Installs a trace sink receiving engine events.
    ///
    /// Has no observable effect unless the `trace` feature is enabled.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.trace_sink = Some(sink);
    }

    // -- Read accessors --

    /// Returns the current geometry.
    #[inline]
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the componentwise sum of all linked sources' offsets.
    #[must_use]
    pub fn aggregate_offset(&self) -> Vec2 {
        self.sources
            .iter()
            .fold(Vec2::ZERO, |acc, s| acc + s.offset())
    }

    /// Returns the aggregate offset normalized by the scroll distance.
    #[must_use]
    pub fn offset_ratio(&self) -> Vec2 {
        let aggregate = self.aggregate_offset();
        let distance = self.geometry.distance();
        Vec2::new(aggregate.x / distance.width, aggregate.y / distance.height)
    }

    /// Returns the sheet stack with its computed depths and positions.
    #[inline]
    #[must_use]
    pub const fn sheets(&self) -> &SheetSet {
        &self.sheets
    }

    /// Returns the identifiers of the currently linked sources.
    pub fn source_identifiers(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.identifier())
    }

    /// Returns the presenter.
    #[inline]
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    #[inline]
    #[must_use]
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    // -- Internal helpers --

    /// Runs one layout pass and publishes the result to the presenter.
    fn run_layout(&mut self) {
        let aggregate = self.aggregate_offset();
        let distance = self.geometry.distance();
        let ratio = Vec2::new(aggregate.x / distance.width, aggregate.y / distance.height);

        self.sheets
            .layout(ratio, distance, &self.curve, &mut self.changes);
        self.presenter.apply(&self.sheets, &self.changes);

        self.pass_index += 1;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "sheet counts are far below u32::MAX"
        )]
        let event = LayoutPassEvent {
            pass_index: self.pass_index,
            aggregate,
            ratio,
            sheet_count: self.sheets.len(),
            moved: self.changes.moved.len() as u32,
        };
        self.with_tracer(|t| t.layout_pass(&event));
    }

    /// Invokes `f` with a tracer over the installed sink, if any.
    fn with_tracer(&mut self, f: impl FnOnce(&mut Tracer<'_>)) {
        let mut tracer = match self.trace_sink.as_mut() {
            Some(sink) => Tracer::new(sink.as_mut()),
            None => Tracer::none(),
        };
        f(&mut tracer);
    }
}
