//! Steering and drive motor interface traits
//!
//! Both traits model a position/velocity-controlled motor driver: the driver
//! converges toward a commanded target asynchronously to the control loop's
//! polling rate, and the core never waits for convergence.

use crate::platform::Result;

/// Steering servo interface
///
/// One instance per steered side in the dual-servo configuration, or a single
/// instance driving the mechanically linked axle.
pub trait SteeringServo {
    /// Last reported shaft angle in degrees.
    ///
    /// Position feedback carries sensor noise and settle jitter; callers that
    /// compare it against a target should allow a tolerance.
    fn angle(&self) -> f32;

    /// Command the servo to converge on a target angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Servo(ServoError::CommandRejected)` if the
    /// driver refuses the command.
    fn track_target(&mut self, degrees: f32) -> Result<()>;
}

/// Drive motor interface
pub trait DriveMotor {
    /// Run at a signed duty cycle in percent (-100 = full reverse, +100 = full
    /// forward).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Drive(DriveError::InvalidDuty)` if the duty is
    /// outside [-100, +100], or `DriveError::CommandRejected` if the driver
    /// refuses the command.
    fn set_duty(&mut self, duty: i16) -> Result<()>;

    /// Cut power and let the motor coast to a stop.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Drive(DriveError::CommandRejected)` if the
    /// driver refuses the command.
    fn stop(&mut self) -> Result<()>;
}
