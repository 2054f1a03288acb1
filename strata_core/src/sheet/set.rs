// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays sheet storage.

use alloc::vec::Vec;

use kurbo::Point;

use super::id::SheetId;

/// One depth-layered visual plane.
///
/// The base offset anchors the sheet at rest; the optional depth controls how
/// strongly the sheet follows the aggregate offset. Depth 0 travels the full
/// parallax distance, depth 1 stays stationary. A sheet without an explicit
/// depth is assigned one at layout time by even distribution across the
/// stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    base_offset: Point,
    depth: Option<f64>,
}

impl Sheet {
    /// Creates a sheet anchored at `base_offset` with distributed depth.
    #[inline]
    #[must_use]
    pub const fn new(base_offset: Point) -> Self {
        Self {
            base_offset,
            depth: None,
        }
    }

    /// Creates a sheet anchored at `base_offset` with an explicit depth.
    ///
    /// Depths outside `[0, 1]` are accepted numerically but are a caller
    /// error.
    #[inline]
    #[must_use]
    pub const fn with_depth(base_offset: Point, depth: f64) -> Self {
        Self {
            base_offset,
            depth: Some(depth),
        }
    }

    /// Returns the rest anchor of the sheet.
    #[inline]
    #[must_use]
    pub const fn base_offset(&self) -> Point {
        self.base_offset
    }

    /// Returns the explicit depth, if one was set.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> Option<f64> {
        self.depth
    }
}

/// Struct-of-arrays storage for all sheets of an engine.
///
/// Sheets are addressed by [`SheetId`] handles issued at append time.
/// Local properties are set by the caller; resolved depths and positions are
/// written by the layout pass.
#[derive(Debug, Default)]
pub struct SheetSet {
    // -- Local properties (set by callers) --
    pub(crate) base_offset: Vec<Point>,
    pub(crate) explicit_depth: Vec<Option<f64>>,

    // -- Computed properties (written by layout) --
    pub(crate) resolved_depth: Vec<f64>,
    pub(crate) position: Vec<Point>,

    // -- Lifecycle tracking --
    pub(crate) depths_stale: bool,
    pub(crate) pending_added: Vec<SheetId>,
    pub(crate) pending_cleared: bool,
}

impl SheetSet {
    /// Creates an empty sheet set.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sheets in the stack.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "sheet counts are far below u32::MAX"
    )]
    pub fn len(&self) -> u32 {
        self.base_offset.len() as u32
    }

    /// Returns whether the stack is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base_offset.is_empty()
    }

    /// Appends a sheet and returns its handle.
    ///
    /// The position starts at the base offset until the next layout pass.
    pub(crate) fn add(&mut self, sheet: Sheet) -> SheetId {
        let id = SheetId { idx: self.len() };
        self.base_offset.push(sheet.base_offset());
        self.explicit_depth.push(sheet.depth());
        self.resolved_depth.push(0.0);
        self.position.push(sheet.base_offset());
        self.depths_stale = true;
        self.pending_added.push(id);
        id
    }

    /// Removes every sheet, invalidating all issued handles.
    pub(crate) fn clear(&mut self) {
        self.base_offset.clear();
        self.explicit_depth.clear();
        self.resolved_depth.clear();
        self.position.clear();
        self.pending_added.clear();
        self.depths_stale = true;
        self.pending_cleared = true;
    }

    /// Returns the base anchor of a sheet.
    #[must_use]
    pub fn base_offset(&self, id: SheetId) -> Point {
        self.validate(id);
        self.base_offset[id.idx as usize]
    }

    /// Returns the explicit depth of a sheet, if one was set.
    #[must_use]
    pub fn explicit_depth(&self, id: SheetId) -> Option<f64> {
        self.validate(id);
        self.explicit_depth[id.idx as usize]
    }

    /// Returns the depth the sheet was laid out with.
    ///
    /// Only valid after a layout pass has run since the stack last changed.
    #[must_use]
    pub fn resolved_depth(&self, id: SheetId) -> f64 {
        self.validate(id);
        self.resolved_depth[id.idx as usize]
    }

    /// Returns the computed position of a sheet.
    ///
    /// Only valid after a layout pass has run since the stack last changed.
    #[must_use]
    pub fn position(&self, id: SheetId) -> Point {
        self.validate(id);
        self.position[id.idx as usize]
    }

    /// Panics if the handle is stale.
    fn validate(&self, id: SheetId) {
        assert!(
            id.idx < self.len(),
            "stale SheetId: {id:?} (stack len {})",
            self.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_query() {
        let mut set = SheetSet::new();
        let a = set.add(Sheet::new(Point::new(1.0, 2.0)));
        let b = set.add(Sheet::with_depth(Point::new(3.0, 4.0), 0.5));

        assert_eq!(set.len(), 2);
        assert_eq!(set.base_offset(a), Point::new(1.0, 2.0));
        assert_eq!(set.explicit_depth(a), None);
        assert_eq!(set.explicit_depth(b), Some(0.5));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
    }

    #[test]
    fn position_starts_at_base_offset() {
        let mut set = SheetSet::new();
        let id = set.add(Sheet::new(Point::new(7.0, -3.0)));
        assert_eq!(set.position(id), Point::new(7.0, -3.0));
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut set = SheetSet::new();
        set.add(Sheet::new(Point::ZERO));
        set.add(Sheet::new(Point::ZERO));
        set.clear();
        assert!(set.is_empty());
        assert!(set.pending_cleared);
    }

    #[test]
    #[should_panic(expected = "stale SheetId")]
    fn cleared_handle_panics() {
        let mut set = SheetSet::new();
        let id = set.add(Sheet::new(Point::ZERO));
        set.clear();
        let _ = set.position(id);
    }
}
