//! Vehicle state machine
//!
//! Accumulates desired speed and desired steering angle from edge- and
//! level-triggered button input. The per-tick transition is a pure function
//! of the previous state and the sampled button set, so it is unit-testable
//! without a real remote.
//!
//! ## Button mapping
//!
//! - `LEFT_PLUS`: drive reverse (wins over forward when both are pressed)
//! - `LEFT_MINUS`: drive forward
//! - `RIGHT_MINUS`: steer toward the positive bound
//! - `RIGHT_PLUS`: steer toward the negative bound
//! - `RIGHT`: recenter steering
//! - `CENTER`: shift gear (on release)

use crate::platform::ButtonSet;

use super::gear::{Gear, GearTable};

/// Control state carried across ticks
///
/// Mutated only by [`VehicleState::apply_buttons`], once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    desired_speed: i16,
    desired_angle: f32,
    gear: Gear,
    shift_was_pressed: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleState {
    /// Initial state: stopped, centered, first gear.
    pub const fn new() -> Self {
        Self {
            desired_speed: 0,
            desired_angle: 0.0,
            gear: Gear::First,
            shift_was_pressed: false,
        }
    }

    /// Desired drive duty in signed percent.
    pub fn desired_speed(&self) -> i16 {
        self.desired_speed
    }

    /// Desired center steering angle in degrees.
    ///
    /// Always within the active gear's `[-max_angle, +max_angle]`.
    pub fn desired_angle(&self) -> f32 {
        self.desired_angle
    }

    /// The active gear.
    pub fn gear(&self) -> Gear {
        self.gear
    }

    /// Advance the state machine by one tick of button input.
    ///
    /// Returns `true` when the gear changed on this tick, so the caller can
    /// update the remote's indicator light.
    pub fn apply_buttons(&mut self, pressed: ButtonSet, gears: &GearTable) -> bool {
        let profile = gears.select(self.gear);

        // Drive is level-triggered; reverse is checked first.
        self.desired_speed = if pressed.contains(ButtonSet::LEFT_PLUS) {
            -profile.speed
        } else if pressed.contains(ButtonSet::LEFT_MINUS) {
            profile.speed
        } else {
            0
        };

        // Steering integrates by the gear's sensitivity and saturates at its
        // bound. With no steer input the angle persists.
        if pressed.contains(ButtonSet::RIGHT_MINUS) {
            self.desired_angle = (self.desired_angle + profile.sensitivity).min(profile.max_angle);
        } else if pressed.contains(ButtonSet::RIGHT_PLUS) {
            self.desired_angle = (self.desired_angle - profile.sensitivity).max(-profile.max_angle);
        } else if pressed.contains(ButtonSet::RIGHT) {
            self.desired_angle = 0.0;
        }

        // Shift fires on the falling edge of the center button, so one
        // press-and-release shifts exactly once however long it is held.
        let shifted = !pressed.contains(ButtonSet::CENTER) && self.shift_was_pressed;
        if shifted {
            self.gear = self.gear.next();
            // Keep the angle inside the new gear's bound.
            let bound = gears.select(self.gear).max_angle;
            self.desired_angle = self.desired_angle.clamp(-bound, bound);
        }
        self.shift_was_pressed = pressed.contains(ButtonSet::CENTER);

        shifted
    }
}
