//! Common libraries
//!
//! Vehicle-agnostic building blocks shared by steering configurations.
//!
//! ## Libraries
//!
//! - `kinematics`: Ackermann steering geometry (center angle → per-wheel angles)
//! - `deadband`: minimum-delta filter for servo tracking commands

pub mod deadband;
pub mod kinematics;

// Re-export commonly used types
pub use deadband::DeadBand;
pub use kinematics::AckermannGeometry;
