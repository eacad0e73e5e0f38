//! Gear profiles and selection
//!
//! A gear bundles the tuning the state machine applies each tick: drive
//! speed, steering range, steering sensitivity, and the indicator color shown
//! on the remote. Exactly two gears exist; the active one is selected by a
//! [`Gear`] value carried in the vehicle state.

use crate::platform::IndicatorColor;

/// Immutable tuning preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearProfile {
    /// Drive duty in signed percent
    pub speed: i16,
    /// Indicator color shown while this gear is active
    pub indicator: IndicatorColor,
    /// Symmetric steering bound in degrees
    pub max_angle: f32,
    /// Steering change per tick in degrees
    pub sensitivity: f32,
}

/// Selector for the active gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gear {
    #[default]
    First,
    Second,
}

impl Gear {
    /// The other gear.
    pub const fn next(self) -> Self {
        match self {
            Gear::First => Gear::Second,
            Gear::Second => Gear::First,
        }
    }
}

/// The two gear profiles of a vehicle, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearTable {
    pub first: GearProfile,
    pub second: GearProfile,
}

impl GearTable {
    /// Look up the profile for a gear.
    pub const fn select(&self, gear: Gear) -> &GearProfile {
        match gear {
            Gear::First => &self.first,
            Gear::Second => &self.second,
        }
    }

    /// Tuning used by the mechanically linked steering configuration: the
    /// narrower range and finer sensitivity in both gears.
    pub const fn linked() -> Self {
        Self {
            first: GearProfile {
                speed: 50,
                indicator: IndicatorColor::Green,
                max_angle: 30.0,
                sensitivity: 0.05,
            },
            second: GearProfile {
                speed: 100,
                indicator: IndicatorColor::Orange,
                max_angle: 30.0,
                sensitivity: 0.05,
            },
        }
    }
}

impl Default for GearTable {
    /// Tuning used by the dual-servo configuration.
    fn default() -> Self {
        Self {
            first: GearProfile {
                speed: 50,
                indicator: IndicatorColor::Green,
                max_angle: 35.0,
                sensitivity: 0.1,
            },
            second: GearProfile {
                speed: 100,
                indicator: IndicatorColor::Orange,
                max_angle: 30.0,
                sensitivity: 0.05,
            },
        }
    }
}
