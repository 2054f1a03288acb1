// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet stack data model.
//!
//! A *sheet* is one depth-layered visual plane positioned by the engine.
//! Each sheet has:
//!
//! - An identity ([`SheetId`]) — an index handle into the stack. Sheets are
//!   appended in display order, never reordered, and removable only as a
//!   whole reset, so handles stay valid until
//!   [`Engine::clear_sheets`](crate::engine::Engine::clear_sheets).
//! - **Local properties** set at creation: a base anchor offset and an
//!   optional explicit depth in `[0, 1]`.
//! - **Computed properties** produced by the layout pass: the resolved depth
//!   (explicit, or evenly distributed by index across the stack) and the
//!   final position.
//!
//! Sheets are stored in struct-of-arrays layout for cache-friendly layout
//! passes over the whole stack.

mod id;
mod layout;
mod set;

pub use id::SheetId;
pub use layout::LayoutChanges;
pub use set::{Sheet, SheetSet};
