// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Low-pass filtering and quantized publication gating.
//!
//! Raw gravity samples are noisy, and forwarding every sample would flood
//! the ordering thread with sub-pixel updates. [`TiltFilter`] addresses both:
//!
//! - A single-pole low-pass filter smooths each sample into the running
//!   state: `state' = state * (1 - α) + raw * α * K`, with more weight on
//!   history than on the new sample. `K` scales the g-unit reading into
//!   pixels, so a steady tilt of `g` settles at `g * K` pixels.
//! - The filtered value is quantized to whole pixels for publication, and a
//!   value is published only when it differs from the previously published
//!   one. The floating-point state is retained unquantized between samples,
//!   so slow drifts still accumulate and eventually cross a pixel boundary.

use kurbo::Vec2;

/// Smoothing ratio of the low-pass filter: the weight of the new sample.
pub const LOW_PASS_RATIO: f64 = 0.25;

/// Raw-to-pixel scale applied to each incoming sample.
pub const PIXEL_SCALE: f64 = 100.0;

/// Single-pole low-pass filter with whole-pixel publication gating.
#[derive(Clone, Debug, Default)]
pub struct TiltFilter {
    state: Vec2,
    published: (i64, i64),
}

impl TiltFilter {
    /// Creates a filter at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one remapped sample into the filter.
    ///
    /// Returns the new offset when its whole-pixel value changed from the
    /// last published one, `None` otherwise.
    pub fn ingest(&mut self, raw: Vec2) -> Option<Vec2> {
        self.state = Vec2::new(
            self.state.x * (1.0 - LOW_PASS_RATIO) + raw.x * LOW_PASS_RATIO * PIXEL_SCALE,
            self.state.y * (1.0 - LOW_PASS_RATIO) + raw.y * LOW_PASS_RATIO * PIXEL_SCALE,
        );

        #[expect(
            clippy::cast_possible_truncation,
            reason = "gravity-scaled offsets are bounded far below i64 range"
        )]
        let quantized = (self.state.x.round() as i64, self.state.y.round() as i64);
        if quantized == self.published {
            return None;
        }
        self.published = quantized;
        Some(Vec2::new(quantized.0 as f64, quantized.1 as f64))
    }

    /// Returns the unquantized filter state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> Vec2 {
        self.state
    }
}
