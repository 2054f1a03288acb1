// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet identity.

use core::fmt;

/// A handle to a sheet in a [`SheetSet`](super::SheetSet).
///
/// Sheets are append-only and removable only as a whole reset, so the handle
/// is a plain index. After a reset
/// ([`Engine::clear_sheets`](crate::engine::Engine::clear_sheets)), all
/// previously issued handles are stale and accessors panic on them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SheetId {
    pub(crate) idx: u32,
}

impl SheetId {
    /// Returns the position of the sheet in display order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }
}

impl fmt::Debug for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SheetId({})", self.idx)
    }
}
