//! Steering output strategies
//!
//! The two vehicle configurations differ only in how a desired center angle
//! reaches the hardware: the dual-servo variant splits it per wheel with the
//! Ackermann conversion and dead-band-filters each servo, the linked variant
//! feeds it straight to one mechanically linked motor. The strategy is chosen
//! at construction; the control loop is identical for both.

use crate::libraries::{AckermannGeometry, DeadBand};
use crate::platform::{Result, SteeringServo};

/// Steering output strategy, selected at construction
#[derive(Debug)]
pub enum Steering<S: SteeringServo> {
    /// Independently steered left/right wheels
    Ackermann {
        left: S,
        right: S,
        geometry: AckermannGeometry,
        filter: DeadBand,
    },
    /// Single motor steering both wheels through a mechanical linkage
    Linked { servo: S },
}

impl<S: SteeringServo> Steering<S> {
    /// Dual-servo steering with the default dead-band tolerance.
    pub fn ackermann(left: S, right: S, geometry: AckermannGeometry) -> Self {
        Steering::Ackermann {
            left,
            right,
            geometry,
            filter: DeadBand::default(),
        }
    }

    /// Mechanically linked steering.
    pub fn linked(servo: S) -> Self {
        Steering::Linked { servo }
    }

    /// Drive the steering hardware toward a center angle in degrees.
    ///
    /// # Errors
    ///
    /// Propagates the first rejected servo command.
    pub fn apply(&mut self, center_degrees: f32) -> Result<()> {
        match self {
            Steering::Ackermann {
                left,
                right,
                geometry,
                filter,
            } => {
                let (left_target, right_target) = geometry.wheel_angles(center_degrees);
                filter.track(left, left_target)?;
                filter.track(right, right_target)?;
                Ok(())
            }
            // The linked motor's tracking call is idempotent for identical
            // targets, so it is issued unconditionally every tick.
            Steering::Linked { servo } => servo.track_target(center_degrees),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockServo;

    #[test]
    fn test_ackermann_splits_center_angle() {
        let mut steering = Steering::ackermann(
            MockServo::new(),
            MockServo::new(),
            AckermannGeometry::default(),
        );

        steering.apply(30.0).unwrap();

        let Steering::Ackermann { left, right, .. } = &steering else {
            unreachable!()
        };
        assert_eq!(left.command_count(), 1);
        assert_eq!(right.command_count(), 1);
        // Inner (left for a positive angle) steers harder than outer
        assert!(left.targets()[0] > right.targets()[0]);
    }

    #[test]
    fn test_ackermann_suppresses_settled_servos() {
        let mut left = MockServo::new();
        let mut right = MockServo::new();
        // Both servos already within tolerance of the straight-ahead target
        left.set_angle(2.0);
        right.set_angle(-1.5);

        let mut steering = Steering::ackermann(left, right, AckermannGeometry::default());
        steering.apply(0.0).unwrap();

        let Steering::Ackermann { left, right, .. } = &steering else {
            unreachable!()
        };
        assert_eq!(left.command_count(), 0);
        assert_eq!(right.command_count(), 0);
    }

    #[test]
    fn test_linked_tracks_every_tick() {
        let mut steering = Steering::linked(MockServo::new());

        steering.apply(10.0).unwrap();
        steering.apply(10.0).unwrap();
        steering.apply(10.0).unwrap();

        let Steering::Linked { servo } = &steering else {
            unreachable!()
        };
        // No dead band: identical targets are re-issued unconditionally
        assert_eq!(servo.targets(), &[10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_linked_passes_angle_through_unchanged() {
        let mut steering = Steering::linked(MockServo::new());
        steering.apply(-17.25).unwrap();

        let Steering::Linked { servo } = &steering else {
            unreachable!()
        };
        assert_eq!(servo.targets(), &[-17.25]);
    }

    #[test]
    fn test_rejected_command_propagates() {
        let mut left = MockServo::new();
        left.reject_commands();
        let mut steering =
            Steering::ackermann(left, MockServo::new(), AckermannGeometry::default());

        assert!(steering.apply(20.0).is_err());
    }
}
