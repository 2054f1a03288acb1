// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves mapping (progress, depth) to a displacement factor.
//!
//! A [`Curve`] is a stateless pure function of two arguments: the progress
//! ratio along an axis (unbounded in practice, 0..=1 for in-range scrolling)
//! and the sheet depth in `[0, 1]`. The result is the fraction of the scroll
//! distance the sheet is displaced by.
//!
//! Every built-in curve shares the same depth-attenuation contract: full
//! weight at depth 0, always zero at depth 1.

use alloc::sync::Arc;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Guards the sigmoid denominator as progress approaches 1.
const SIGMOID_EPSILON: f64 = 1e-8;

/// A timing curve evaluated once per sheet axis on every layout pass.
///
/// Curves are cheap to clone (`Arc` bump) and safe to evaluate from any
/// thread. The engine treats all curves uniformly; custom curves built with
/// [`Curve::new`] are not distinguished from the built-ins.
#[derive(Clone)]
pub struct Curve {
    f: Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>,
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve").finish_non_exhaustive()
    }
}

impl Default for Curve {
    /// The default curve is [`linear`](Self::linear).
    fn default() -> Self {
        Self::linear()
    }
}

impl Curve {
    /// Creates a curve from a custom timing function.
    ///
    /// The function must be pure: same inputs, same output, no side effects.
    pub fn new<F: Fn(f64, f64) -> f64 + Send + Sync + 'static>(f: F) -> Self {
        Self { f: Arc::new(f) }
    }

    /// Evaluates the curve at the given progress and depth.
    #[inline]
    #[must_use]
    pub fn value(&self, progress: f64, depth: f64) -> f64 {
        (self.f)(progress, depth)
    }

    /// The linear curve: `t * (1 - depth)`.
    ///
    /// At depth 0 the displacement equals the full progress; at depth 1 it is
    /// always zero.
    #[must_use]
    pub fn linear() -> Self {
        Self::new(|t, depth| t * (1.0 - depth))
    }

    /// A sigmoid ease-in-out curve with the given integer slope.
    ///
    /// Defined as `sigmoid(t, slope) * (1 - depth)` with
    /// `sigmoid(t, n) = 1 / (1 + (t / max(1 - t, ε))^(-n))`. Steeper slopes
    /// hold sheets closer to their rest position near the ends of the scroll
    /// range. Shares the linear curve's depth-attenuation contract.
    #[must_use]
    pub fn ease_in_out(slope: i32) -> Self {
        Self::new(move |t, depth| {
            let sigmoid = 1.0 / (1.0 + (t / (1.0 - t).max(SIGMOID_EPSILON)).powi(-slope));
            sigmoid * (1.0 - depth)
        })
    }

    /// Ease-in-out with slope 2.
    #[must_use]
    pub fn ease_in_out_quad() -> Self {
        Self::ease_in_out(2)
    }

    /// Ease-in-out with slope 3.
    #[must_use]
    pub fn ease_in_out_cubic() -> Self {
        Self::ease_in_out(3)
    }

    /// Ease-in-out with slope 4.
    #[must_use]
    pub fn ease_in_out_quart() -> Self {
        Self::ease_in_out(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn linear_identities() {
        let linear = Curve::linear();

        // Depth 0: displacement equals progress.
        assert_close(linear.value(0.0, 0.0), 0.0);
        assert_close(linear.value(0.5, 0.0), 0.5);
        assert_close(linear.value(1.0, 0.0), 1.0);

        // Depth 0.2.
        assert_close(linear.value(0.0, 0.2), 0.0);
        assert_close(linear.value(0.2, 0.2), 0.16);
        assert_close(linear.value(1.0, 0.2), 0.8);

        // Depth 1: stationary at any progress.
        assert_close(linear.value(0.0, 1.0), 0.0);
        assert_close(linear.value(0.5, 1.0), 0.0);
        assert_close(linear.value(1.0, 1.0), 0.0);
    }

    #[test]
    fn ease_in_out_quad_identities() {
        let quad = Curve::ease_in_out_quad();

        assert_close(quad.value(0.0, 0.0), 0.0);
        assert_close(quad.value(0.5, 0.0), 0.5);
        assert_close(quad.value(1.0, 0.0), 1.0);

        assert_close(quad.value(0.0, 0.2), 0.0);
        assert_close(quad.value(0.5, 0.2), 0.4);
        assert_close(quad.value(1.0, 0.2), 0.8);

        assert_close(quad.value(0.0, 1.0), 0.0);
        assert_close(quad.value(0.5, 1.0), 0.0);
        assert_close(quad.value(1.0, 1.0), 0.0);
    }

    #[test]
    fn ease_in_out_is_symmetric_around_midpoint() {
        for curve in [Curve::ease_in_out_cubic(), Curve::ease_in_out_quart()] {
            for t in [0.1, 0.25, 0.4] {
                let low = curve.value(t, 0.0);
                let high = curve.value(1.0 - t, 0.0);
                assert_close(low + high, 1.0);
            }
        }
    }

    #[test]
    fn ease_in_out_is_defined_outside_unit_range() {
        let quad = Curve::ease_in_out_quad();
        assert!(quad.value(-0.5, 0.0).is_finite());
        assert!(quad.value(1.5, 0.0).is_finite());
    }

    #[test]
    fn steeper_slopes_stay_flatter_near_zero() {
        let quad = Curve::ease_in_out_quad();
        let quart = Curve::ease_in_out_quart();
        assert!(
            quart.value(0.2, 0.0) < quad.value(0.2, 0.0),
            "slope 4 should attenuate more than slope 2 at low progress"
        );
    }

    #[test]
    fn custom_curve_is_evaluated_verbatim() {
        let constant = Curve::new(|_, _| 0.25);
        assert_close(constant.value(0.9, 0.9), 0.25);
    }

    #[test]
    fn default_is_linear() {
        let default = Curve::default();
        assert_close(default.value(0.3, 0.5), 0.15);
    }
}
