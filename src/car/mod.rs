//! Vehicle logic
//!
//! Ties the state machine, steering strategy, and collaborators together into
//! the polling control loop: sample buttons, advance the state machine, drive
//! the actuators, repeat.

pub mod gear;
pub mod state;
pub mod steering;

// Re-export vehicle types
pub use gear::{Gear, GearProfile, GearTable};
pub use state::VehicleState;
pub use steering::Steering;

use crate::platform::{DriveMotor, RemoteControl, Result, SteeringServo};

/// Remote-operated car control loop
///
/// Owns the vehicle state and all collaborator handles; nothing else touches
/// them while the loop runs. A fault in any collaborator propagates out of
/// [`Car::tick`] unhandled: continuing with stale input or half-applied
/// actuation is unsafe on directly operated hardware.
pub struct Car<S: SteeringServo, D: DriveMotor, R: RemoteControl> {
    steering: Steering<S>,
    drive: D,
    remote: R,
    gears: GearTable,
    state: VehicleState,
}

impl<S: SteeringServo, D: DriveMotor, R: RemoteControl> Car<S, D, R> {
    /// Assemble a car and show the initial gear on the remote's indicator.
    pub fn new(steering: Steering<S>, drive: D, mut remote: R, gears: GearTable) -> Self {
        let state = VehicleState::new();
        remote.set_indicator(gears.select(state.gear()).indicator);

        Self {
            steering,
            drive,
            remote,
            gears,
            state,
        }
    }

    /// Current control state.
    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    /// Steering strategy (for inspection in tests).
    pub fn steering(&self) -> &Steering<S> {
        &self.steering
    }

    /// Drive motor handle (for inspection in tests).
    pub fn drive(&self) -> &D {
        &self.drive
    }

    /// Remote handle (for inspection in tests).
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// One read → update → actuate cycle.
    ///
    /// # Errors
    ///
    /// Propagates a failed input sample or a rejected actuator command
    /// without retrying.
    pub fn tick(&mut self) -> Result<()> {
        let pressed = self.remote.pressed()?;

        if self.state.apply_buttons(pressed, &self.gears) {
            self.remote
                .set_indicator(self.gears.select(self.state.gear()).indicator);
            crate::log_info!("gear shifted");
        }

        self.steering.apply(self.state.desired_angle())?;

        if self.state.desired_speed() == 0 {
            self.drive.stop()?;
        } else {
            self.drive.set_duty(self.state.desired_speed())?;
        }

        Ok(())
    }

    /// Run the control loop until `cancelled` returns true.
    ///
    /// The cancellation hook is checked once per tick boundary; in production
    /// it never fires and the loop runs for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator failure; the loop performs no retries.
    pub fn run<C>(&mut self, mut cancelled: C) -> Result<()>
    where
        C: FnMut() -> bool,
    {
        crate::log_info!("control loop started");
        while !cancelled() {
            self.tick()?;
        }
        crate::log_info!("control loop cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libraries::AckermannGeometry;
    use crate::platform::mock::{DriveCommand, MockDrive, MockRemote, MockServo};
    use crate::platform::{ButtonSet, IndicatorColor};

    fn dual_servo_car(remote: MockRemote) -> Car<MockServo, MockDrive, MockRemote> {
        let steering = Steering::ackermann(
            MockServo::new(),
            MockServo::new(),
            AckermannGeometry::default(),
        );
        Car::new(steering, MockDrive::new(), remote, GearTable::default())
    }

    #[test]
    fn test_construction_shows_first_gear() {
        let car = dual_servo_car(MockRemote::new());
        assert_eq!(car.remote().indicator(), Some(IndicatorColor::Green));
        assert_eq!(car.remote().indicator_changes(), 1);
    }

    #[test]
    fn test_forward_button_drives_at_gear_speed() {
        let mut remote = MockRemote::new();
        remote.push_held(ButtonSet::LEFT_MINUS, 3);
        let mut car = dual_servo_car(remote);

        for _ in 0..3 {
            car.tick().unwrap();
        }
        assert_eq!(car.drive().last_command(), Some(DriveCommand::Duty(50)));
        assert_eq!(car.drive().duty_commands(), 3);
    }

    #[test]
    fn test_no_drive_input_stops() {
        let mut car = dual_servo_car(MockRemote::new());
        car.tick().unwrap();

        assert_eq!(car.drive().last_command(), Some(DriveCommand::Stop));
    }

    #[test]
    fn test_shift_updates_indicator() {
        let mut remote = MockRemote::new();
        remote.push_frame(ButtonSet::CENTER);
        remote.push_frame(ButtonSet::empty());
        let mut car = dual_servo_car(remote);

        car.tick().unwrap();
        assert_eq!(car.remote().indicator(), Some(IndicatorColor::Green));

        car.tick().unwrap();
        assert_eq!(car.state().gear(), Gear::Second);
        assert_eq!(car.remote().indicator(), Some(IndicatorColor::Orange));
        assert_eq!(car.remote().indicator_changes(), 2);
    }

    #[test]
    fn test_steering_reaches_servos_through_dead_band() {
        let mut remote = MockRemote::new();
        // 0.1°/tick for 50 ticks integrates to 5°, past the 3° dead band
        remote.push_held(ButtonSet::RIGHT_MINUS, 50);
        let mut car = dual_servo_car(remote);

        for _ in 0..50 {
            car.tick().unwrap();
        }

        let Steering::Ackermann { left, right, .. } = car.steering() else {
            unreachable!()
        };
        assert!(left.command_count() >= 1);
        assert!(right.command_count() >= 1);
        // Each servo tracks its exact kinematic target for a 5° center angle
        // (inner ≈ 5.08°, outer ≈ 4.92°) to within the dead-band tolerance
        assert!((left.angle() - 5.08).abs() <= 3.0);
        assert!((right.angle() - 4.92).abs() <= 3.0);
    }

    #[test]
    fn test_remote_failure_is_fatal() {
        let mut remote = MockRemote::new();
        remote.push_frame(ButtonSet::empty());
        remote.disconnect_when_exhausted();
        let mut car = dual_servo_car(remote);

        car.tick().unwrap();
        assert!(car.tick().is_err());
    }

    #[test]
    fn test_rejected_drive_command_is_fatal() {
        let mut remote = MockRemote::new();
        remote.push_frame(ButtonSet::LEFT_MINUS);
        let steering = Steering::ackermann(
            MockServo::new(),
            MockServo::new(),
            AckermannGeometry::default(),
        );
        let mut drive = MockDrive::new();
        drive.reject_commands();
        let mut car = Car::new(steering, drive, remote, GearTable::default());

        assert!(car.tick().is_err());
    }

    #[test]
    fn test_run_until_cancelled() {
        let mut remote = MockRemote::new();
        remote.push_held(ButtonSet::LEFT_MINUS, 10);
        let mut car = dual_servo_car(remote);

        let mut ticks = 0;
        car.run(|| {
            ticks += 1;
            ticks > 10
        })
        .unwrap();

        assert_eq!(car.remote().samples_taken(), 10);
        assert_eq!(car.drive().duty_commands(), 10);
    }

    #[test]
    fn test_linked_car_tracks_unconditionally() {
        let mut remote = MockRemote::new();
        remote.push_held(ButtonSet::empty(), 4);
        let steering = Steering::linked(MockServo::new());
        let mut car = Car::new(steering, MockDrive::new(), remote, GearTable::linked());

        for _ in 0..4 {
            car.tick().unwrap();
        }

        let Steering::Linked { servo } = car.steering() else {
            unreachable!()
        };
        assert_eq!(servo.command_count(), 4);
    }
}
