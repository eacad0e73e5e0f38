//! Dead-band filtering for servo tracking commands
//!
//! Servo position feedback carries sensor noise and settle jitter. Re-issuing
//! a near-identical target every tick makes the servo oscillate around it and
//! wastes driver bandwidth, so targets are only forwarded when they differ
//! from the current position by more than a tolerance.

use libm::fabsf;

use crate::platform::{Result, SteeringServo};

/// Minimum-delta filter wrapping servo tracking commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadBand {
    tolerance: f32,
}

impl Default for DeadBand {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}

impl DeadBand {
    /// Default tolerance in degrees
    pub const DEFAULT_TOLERANCE: f32 = 3.0;

    /// Create a filter with the given tolerance in degrees.
    pub const fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Forward `target_degrees` to the servo unless it is within tolerance of
    /// the servo's current position.
    ///
    /// Returns whether a tracking command was issued.
    ///
    /// # Errors
    ///
    /// Propagates the servo's error if the command is rejected.
    pub fn track<S: SteeringServo>(&self, servo: &mut S, target_degrees: f32) -> Result<bool> {
        if fabsf(target_degrees - servo.angle()) > self.tolerance {
            servo.track_target(target_degrees)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
