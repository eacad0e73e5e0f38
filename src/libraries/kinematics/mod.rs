//! Ackermann steering kinematics
//!
//! Converts a single commanded center steering angle into per-wheel target
//! angles for a vehicle with independently steered left and right wheels.
//! The inner and outer wheels follow concentric turning arcs, so the inner
//! wheel must steer harder than the outer one.

use libm::{atan2f, fabsf, tanf};

/// Wheelbase geometry for the Ackermann conversion
///
/// `wheelbase` is the front-to-rear axle distance, `track` the left-to-right
/// wheel distance, both in the same length unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AckermannGeometry {
    pub wheelbase: f32,
    pub track: f32,
}

impl Default for AckermannGeometry {
    fn default() -> Self {
        // Reference vehicle, measured in studs
        Self {
            wheelbase: 25.0,
            track: 9.0,
        }
    }
}

impl AckermannGeometry {
    /// Create a geometry from wheelbase length and track width.
    pub const fn new(wheelbase: f32, track: f32) -> Self {
        Self { wheelbase, track }
    }

    /// Convert a center steering angle into `(left, right)` wheel angles.
    ///
    /// All angles are in degrees. A zero input returns exactly `(0.0, 0.0)`.
    /// For a positive center angle the result is `(inner, outer)`; for a
    /// negative one it is `(-outer, -inner)`. This side assignment matches the
    /// motor mounting of the reference vehicle and must not be swapped without
    /// re-checking the physical wiring.
    ///
    /// `atan2` keeps the result well-defined and correctly signed even when
    /// the inner wheel's arc center distance approaches or crosses zero on
    /// sharp turns, where a plain `atan(wheelbase / distance)` would blow up.
    pub fn wheel_angles(&self, center_degrees: f32) -> (f32, f32) {
        if center_degrees == 0.0 {
            return (0.0, 0.0);
        }

        let angle = fabsf(center_degrees).to_radians();

        let turn_radius = self.wheelbase / tanf(angle);
        let inner_distance = turn_radius - self.track / 2.0;
        let outer_distance = turn_radius + self.track / 2.0;

        let inner_degrees = atan2f(self.wheelbase, inner_distance).to_degrees();
        let outer_degrees = atan2f(self.wheelbase, outer_distance).to_degrees();

        if center_degrees > 0.0 {
            (inner_degrees, outer_degrees)
        } else {
            (-outer_degrees, -inner_degrees)
        }
    }
}
