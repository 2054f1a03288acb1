// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset composition and depth mapping for parallax sheet stacks.
//!
//! `strata_core` provides the data model and layout engine for a parallax
//! effect: a stack of flat *sheets* at different perceived depths, all
//! displaced in response to one aggregated 2-D offset signal. It is `no_std`
//! compatible (with `alloc`) and leaves rendering, input handling, and
//! sensor access to host and satellite crates.
//!
//! # Architecture
//!
//! The crate is organized around a layout pass that turns offset updates
//! into incremental per-sheet position changes:
//!
//! ```text
//!   Offset sources (scroll, motion, …)
//!       │
//!       ▼
//!   Engine::source_updated ──► aggregate = Σ source offsets
//!                                   │
//!                                   ▼
//!                       ratio = aggregate / distance
//!                                   │
//!                                   ▼
//!             Curve::value(ratio, depth) per sheet ──► SheetSet positions
//!                                                          │
//!                                                          ▼
//!                                               Presenter::apply(changes)
//! ```
//!
//! **[`curve`]** — Pure timing functions mapping (progress, depth) to a
//! displacement factor. Linear and sigmoid ease-in-out built-ins, plus
//! arbitrary custom closures.
//!
//! **[`geometry`]** — Viewport/content extents and the derived scroll
//! distance used to normalize offsets.
//!
//! **[`sheet`]** — Struct-of-arrays sheet storage with index handles,
//! global depth distribution, and the per-pass position computation.
//!
//! **[`source`]** — The [`OffsetSource`](source::OffsetSource) contract that
//! offset producers implement, and the link-time error type.
//!
//! **[`scroll`]** — The drag-driven source: a thin wrapper over an external
//! scrollable surface's live position.
//!
//! **[`engine`]** — The composition engine. Owns geometry, sheets, linked
//! sources, and the active curve; re-lays-out whenever any of them changes
//! and publishes changes through the [`Presenter`](engine::Presenter) trait.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! layout instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Threading
//!
//! All engine state lives on one *ordering thread*: every public engine
//! call, every layout pass, and every delivered source notification runs
//! there. Sources that sample hardware on background threads (see the
//! `strata_motion` crate) marshal their updates onto the ordering thread
//! before touching the engine.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod curve;
pub mod engine;
pub mod geometry;
pub mod scroll;
pub mod sheet;
pub mod source;
pub mod trace;
