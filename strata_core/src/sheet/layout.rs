// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-pass position computation and change tracking.
//!
//! A layout pass follows a resolve-then-displace pattern:
//!
//! 1. **Depth resolution** — If the stack changed since the last pass,
//!    recompute every sheet's effective depth: an explicit depth wins;
//!    sheets without one receive `index / (count - 1)` over the full stack.
//!    A single sheet with no explicit depth resolves to depth 0 rather than
//!    dividing by zero.
//! 2. **Displacement** — For each sheet, evaluate the curve per axis at the
//!    progress ratio and the sheet's depth, then set
//!    `position = base_offset - distance ⊙ displacement`. The subtraction is
//!    intentional: a positive ratio moves sheets opposite to the user's
//!    motion, which is what creates the parallax illusion.
//!
//! [`LayoutChanges`] carries the [`SheetId`]s of sheets whose position
//! actually changed, so presenters can apply incremental updates.

use alloc::vec::Vec;

use kurbo::{Size, Vec2};

use crate::curve::Curve;

use super::id::SheetId;
use super::set::SheetSet;

/// The set of changes produced by a single layout pass.
///
/// Presenters use these lists to apply incremental updates; current values
/// are read from the [`SheetSet`] accessors.
#[derive(Clone, Debug, Default)]
pub struct LayoutChanges {
    /// Sheets added since the last pass.
    pub added: Vec<SheetId>,
    /// Sheets whose position changed in this pass.
    pub moved: Vec<SheetId>,
    /// Whether the depth distribution was recomputed in this pass.
    pub depths_resolved: bool,
    /// Whether the whole stack was reset since the last pass.
    pub cleared: bool,
}

impl LayoutChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.added.clear();
        self.moved.clear();
        self.depths_resolved = false;
        self.cleared = false;
    }
}

impl SheetSet {
    /// Runs one layout pass, reusing a caller-provided change buffer.
    ///
    /// `ratio` is the progress ratio per axis, `distance` the scrollable
    /// range per axis (already floored at 1).
    pub(crate) fn layout(
        &mut self,
        ratio: Vec2,
        distance: Size,
        curve: &Curve,
        changes: &mut LayoutChanges,
    ) {
        changes.clear();
        changes.cleared = self.pending_cleared;
        self.pending_cleared = false;
        core::mem::swap(&mut self.pending_added, &mut changes.added);

        if self.depths_stale {
            self.resolve_depths();
            self.depths_stale = false;
            changes.depths_resolved = true;
        }

        for idx in 0..self.base_offset.len() {
            let depth = self.resolved_depth[idx];
            let shift = Vec2::new(
                distance.width * curve.value(ratio.x, depth),
                distance.height * curve.value(ratio.y, depth),
            );
            let new_position = self.base_offset[idx] - shift;
            if new_position != self.position[idx] {
                self.position[idx] = new_position;
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "sheet counts are far below u32::MAX"
                )]
                changes.moved.push(SheetId { idx: idx as u32 });
            }
        }
    }

    /// Recomputes every sheet's effective depth from the full stack.
    fn resolve_depths(&mut self) {
        let count = self.base_offset.len();
        let step = if count > 1 {
            1.0 / (count as f64 - 1.0)
        } else {
            0.0
        };
        for idx in 0..count {
            self.resolved_depth[idx] = self.explicit_depth[idx].unwrap_or(step * idx as f64);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use crate::sheet::Sheet;

    use super::*;

    fn run(set: &mut SheetSet, ratio: Vec2, distance: Size) -> LayoutChanges {
        let mut changes = LayoutChanges::default();
        set.layout(ratio, distance, &Curve::linear(), &mut changes);
        changes
    }

    #[test]
    fn depths_distribute_evenly_in_display_order() {
        let mut set = SheetSet::new();
        let a = set.add(Sheet::new(Point::ZERO));
        let b = set.add(Sheet::new(Point::ZERO));
        let c = set.add(Sheet::new(Point::ZERO));

        let changes = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));

        assert!(changes.depths_resolved);
        assert_eq!(set.resolved_depth(a), 0.0);
        assert_eq!(set.resolved_depth(b), 0.5);
        assert_eq!(set.resolved_depth(c), 1.0);
    }

    #[test]
    fn explicit_depth_wins_over_distribution() {
        let mut set = SheetSet::new();
        let a = set.add(Sheet::new(Point::ZERO));
        let b = set.add(Sheet::with_depth(Point::ZERO, 0.25));
        let c = set.add(Sheet::new(Point::ZERO));

        let _ = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));

        // Distributed sheets still use their own index over the full stack.
        assert_eq!(set.resolved_depth(a), 0.0);
        assert_eq!(set.resolved_depth(b), 0.25);
        assert_eq!(set.resolved_depth(c), 1.0);
    }

    #[test]
    fn single_sheet_resolves_to_depth_zero() {
        let mut set = SheetSet::new();
        let only = set.add(Sheet::new(Point::ZERO));
        let _ = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));
        assert_eq!(set.resolved_depth(only), 0.0);
    }

    #[test]
    fn distribution_is_recomputed_when_the_stack_grows() {
        let mut set = SheetSet::new();
        let a = set.add(Sheet::new(Point::ZERO));
        let b = set.add(Sheet::new(Point::ZERO));
        let _ = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));
        assert_eq!(set.resolved_depth(b), 1.0);

        let c = set.add(Sheet::new(Point::ZERO));
        let changes = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));
        assert!(changes.depths_resolved);
        assert_eq!(set.resolved_depth(a), 0.0);
        assert_eq!(set.resolved_depth(b), 0.5);
        assert_eq!(set.resolved_depth(c), 1.0);
    }

    #[test]
    fn displacement_opposes_the_offset() {
        let mut set = SheetSet::new();
        let fore = set.add(Sheet::with_depth(Point::new(0.0, 10.0), 0.0));
        let back = set.add(Sheet::with_depth(Point::new(5.0, 20.0), 1.0));

        let changes = run(&mut set, Vec2::new(0.0, 0.25), Size::new(1.0, 500.0));

        assert_eq!(set.position(fore), Point::new(0.0, 10.0 - 125.0));
        assert_eq!(set.position(back), Point::new(5.0, 20.0));
        assert_eq!(changes.moved, [fore]);
    }

    #[test]
    fn unchanged_positions_are_not_reported() {
        let mut set = SheetSet::new();
        let id = set.add(Sheet::new(Point::ZERO));

        let first = run(&mut set, Vec2::new(0.5, 0.0), Size::new(100.0, 1.0));
        assert_eq!(first.added, [id]);
        assert_eq!(first.moved, [id]);

        let second = run(&mut set, Vec2::new(0.5, 0.0), Size::new(100.0, 1.0));
        assert!(second.added.is_empty());
        assert!(second.moved.is_empty());
        assert!(!second.depths_resolved);
    }

    #[test]
    fn clear_is_reported_once() {
        let mut set = SheetSet::new();
        set.add(Sheet::new(Point::ZERO));
        let _ = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));

        set.clear();
        let first = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));
        assert!(first.cleared);
        assert!(first.added.is_empty());

        let second = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));
        assert!(!second.cleared);
    }

    #[test]
    fn added_sheets_are_drained_into_changes() {
        let mut set = SheetSet::new();
        let a = set.add(Sheet::new(Point::ZERO));
        let b = set.add(Sheet::new(Point::ZERO));

        let first = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));
        assert_eq!(first.added, [a, b]);

        let second = run(&mut set, Vec2::ZERO, Size::new(1.0, 1.0));
        assert!(second.added.is_empty());
    }
}
