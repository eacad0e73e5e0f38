//! Platform error types
//!
//! This module defines error types for collaborator operations. The control
//! core performs no retries and no local recovery: any of these propagates out
//! of the control loop and terminates the run.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All collaborator implementations map their device-specific failures to
/// these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Remote input operation failed
    Remote(RemoteError),
    /// Steering servo operation failed
    Servo(ServoError),
    /// Drive motor operation failed
    Drive(DriveError),
}

/// Remote-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteError {
    /// Connection to the remote was lost
    Disconnected,
    /// Button state could not be sampled
    ReadFailed,
}

/// Steering-servo-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError {
    /// Servo refused or could not execute a target command
    CommandRejected,
}

/// Drive-motor-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    /// Duty value outside [-100, +100] percent
    InvalidDuty,
    /// Motor refused or could not execute a command
    CommandRejected,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Remote(e) => write!(f, "remote error: {:?}", e),
            PlatformError::Servo(e) => write!(f, "servo error: {:?}", e),
            PlatformError::Drive(e) => write!(f, "drive error: {:?}", e),
        }
    }
}

impl From<RemoteError> for PlatformError {
    fn from(e: RemoteError) -> Self {
        PlatformError::Remote(e)
    }
}

impl From<ServoError> for PlatformError {
    fn from(e: ServoError) -> Self {
        PlatformError::Servo(e)
    }
}

impl From<DriveError> for PlatformError {
    fn from(e: DriveError) -> Self {
        PlatformError::Drive(e)
    }
}
