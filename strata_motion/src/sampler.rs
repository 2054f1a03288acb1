// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sensor collaborator contract and orientation axis remapping.

use kurbo::Vec2;

/// One gravity reading in device coordinates.
///
/// Components are in g units: `x` across the device, `y` along it, `z` out
/// of the screen. How the reading is obtained is platform business.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GravitySample {
    /// Gravity along the device's short edge.
    pub x: f64,
    /// Gravity along the device's long edge.
    pub y: f64,
    /// Gravity out of the screen plane.
    pub z: f64,
}

/// Polls a platform motion sensor.
///
/// Implementations are driven at a fixed cadence from the sampling thread.
/// Returning `None` (no hardware, sensor warming up) produces no offset
/// updates; the source then contributes a constant zero offset, which is a
/// silent degradation rather than an error.
pub trait MotionSampler: Send {
    /// Returns the current gravity reading, if one is available.
    fn sample(&mut self) -> Option<GravitySample>;
}

/// How the device is held, selecting which gravity axes feed the offset.
///
/// The raw-to-screen sign flip is folded into the axis selection, so the
/// filter's pixel scale stays positive: tilting toward the vanishing point
/// always moves the offset the same way on screen regardless of rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Portrait: screen x follows device x, screen y follows device y.
    #[default]
    Vertical,
    /// Landscape: screen x follows device y, screen y follows device z.
    Horizontal,
}

impl Orientation {
    /// Maps a gravity sample onto screen axes.
    #[inline]
    #[must_use]
    pub fn remap(self, sample: GravitySample) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(-sample.x, sample.y),
            Self::Horizontal => Vec2::new(-sample.y, -sample.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_uses_device_x_and_y() {
        let sample = GravitySample {
            x: 0.5,
            y: -0.25,
            z: 1.0,
        };
        assert_eq!(
            Orientation::Vertical.remap(sample),
            Vec2::new(-0.5, -0.25)
        );
    }

    #[test]
    fn horizontal_uses_device_y_and_z() {
        let sample = GravitySample {
            x: 1.0,
            y: 0.5,
            z: -0.25,
        };
        assert_eq!(
            Orientation::Horizontal.remap(sample),
            Vec2::new(-0.5, 0.25)
        );
    }

    #[test]
    fn default_orientation_is_vertical() {
        assert_eq!(Orientation::default(), Orientation::Vertical);
    }
}
