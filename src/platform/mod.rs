//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the control core's external
//! collaborators: steering servos, the drive motor, and the handheld remote.
//! All hardware-specific code stays behind these traits.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{DriveError, PlatformError, RemoteError, Result, ServoError};
pub use traits::{Button, ButtonSet, DriveMotor, IndicatorColor, RemoteControl, SteeringServo};
