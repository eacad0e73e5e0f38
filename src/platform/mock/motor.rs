//! Mock steering servo and drive motor

use crate::platform::{
    error::{DriveError, PlatformError, ServoError},
    traits::{DriveMotor, SteeringServo},
    Result,
};

/// Mock steering servo
///
/// Records every tracking command and converges on the target instantly.
/// Tests can override the reported angle with [`MockServo::set_angle`] to
/// simulate feedback jitter or a servo still in motion.
#[derive(Debug, Default)]
pub struct MockServo {
    angle: f32,
    targets: heapless::Vec<f32, 32>,
    reject: bool,
}

impl MockServo {
    /// Create a mock servo reporting 0 degrees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the reported shaft angle.
    pub fn set_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    /// Make every subsequent tracking command fail.
    pub fn reject_commands(&mut self) {
        self.reject = true;
    }

    /// Tracking commands issued so far, oldest first.
    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    /// Number of tracking commands issued so far.
    pub fn command_count(&self) -> usize {
        self.targets.len()
    }
}

impl SteeringServo for MockServo {
    fn angle(&self) -> f32 {
        self.angle
    }

    fn track_target(&mut self, degrees: f32) -> Result<()> {
        if self.reject {
            return Err(PlatformError::Servo(ServoError::CommandRejected));
        }
        let _ = self.targets.push(degrees);
        self.angle = degrees;
        Ok(())
    }
}

/// Drive motor command record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveCommand {
    Duty(i16),
    Stop,
}

/// Mock drive motor
///
/// Validates duty range like a real driver and records the command history.
#[derive(Debug, Default)]
pub struct MockDrive {
    last: Option<DriveCommand>,
    duty_commands: usize,
    stop_commands: usize,
    reject: bool,
}

impl MockDrive {
    /// Create a stopped mock drive motor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent command fail.
    pub fn reject_commands(&mut self) {
        self.reject = true;
    }

    /// The most recent command, if any.
    pub fn last_command(&self) -> Option<DriveCommand> {
        self.last
    }

    /// Number of duty commands issued so far.
    pub fn duty_commands(&self) -> usize {
        self.duty_commands
    }

    /// Number of stop commands issued so far.
    pub fn stop_commands(&self) -> usize {
        self.stop_commands
    }
}

impl DriveMotor for MockDrive {
    fn set_duty(&mut self, duty: i16) -> Result<()> {
        if self.reject {
            return Err(PlatformError::Drive(DriveError::CommandRejected));
        }
        if !(-100..=100).contains(&duty) {
            return Err(PlatformError::Drive(DriveError::InvalidDuty));
        }
        self.last = Some(DriveCommand::Duty(duty));
        self.duty_commands += 1;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.reject {
            return Err(PlatformError::Drive(DriveError::CommandRejected));
        }
        self.last = Some(DriveCommand::Stop);
        self.stop_commands += 1;
        Ok(())
    }
}
