//! Mock platform implementations for testing
//!
//! Host-side stand-ins for the steering servos, drive motor, and remote.
//! They record every command issued so tests can verify actuation behavior
//! without hardware.

pub mod motor;
pub mod remote;

pub use motor::{DriveCommand, MockDrive, MockServo};
pub use remote::MockRemote;
