// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device-tilt offset source for strata.
//!
//! This crate provides the tilt-driven counterpart to
//! [`strata_core::scroll::ScrollSource`]: a source that turns a device's
//! gravity vector into a parallax offset. Unlike the drag source, whose
//! updates arrive on the ordering thread already, tilt samples come from a
//! sensor polled on a dedicated background thread and must be marshaled
//! back before they may touch engine state.
//!
//! # Data flow
//!
//! ```text
//!   MotionSampler (platform sensor)           background thread
//!       │ 60 Hz gravity samples
//!       ▼
//!   Orientation::remap ──► TiltFilter ──► quantized change? ──► channel
//!                                                                  │
//!   ─────────────────────────────────────────────────────────────────────
//!                                                                  │
//!   MotionPump::dispatch_pending ──► Engine::source_updated    ordering
//!                                                              thread
//! ```
//!
//! **[`sampler`]** — The [`MotionSampler`](sampler::MotionSampler) trait
//! platform integrations implement, plus [`Orientation`](sampler::Orientation)
//! axis remapping.
//!
//! **[`filter`]** — The single-pole low-pass filter with quantized
//! publication gating.
//!
//! **[`source`]** — [`MotionSource`](source::MotionSource), the
//! `OffsetSource` implementation owning the sampling thread.
//!
//! **[`pump`]** — [`MotionPump`](pump::MotionPump), the ordering-thread end
//! of the marshaling channel.

pub mod filter;
pub mod pump;
pub mod sampler;
pub mod source;
