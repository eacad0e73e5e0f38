//! Remote input interface
//!
//! The handheld remote exposes a set of momentary buttons sampled once per
//! control tick, plus an indicator light used to show the active gear.

use bitflags::bitflags;

use crate::platform::Result;

/// Remote buttons
///
/// Named after their physical layout: a +/- pair on each side, a shortcut
/// button below each pair, and a center button between the clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    LeftPlus,
    LeftMinus,
    Left,
    RightPlus,
    RightMinus,
    Right,
    Center,
}

bitflags! {
    /// Set of buttons reported pressed in one input sample
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ButtonSet: u8 {
        const LEFT_PLUS = 0b0000_0001;
        const LEFT_MINUS = 0b0000_0010;
        const LEFT = 0b0000_0100;
        const RIGHT_PLUS = 0b0000_1000;
        const RIGHT_MINUS = 0b0001_0000;
        const RIGHT = 0b0010_0000;
        const CENTER = 0b0100_0000;
    }
}

impl From<Button> for ButtonSet {
    fn from(button: Button) -> Self {
        match button {
            Button::LeftPlus => ButtonSet::LEFT_PLUS,
            Button::LeftMinus => ButtonSet::LEFT_MINUS,
            Button::Left => ButtonSet::LEFT,
            Button::RightPlus => ButtonSet::RIGHT_PLUS,
            Button::RightMinus => ButtonSet::RIGHT_MINUS,
            Button::Right => ButtonSet::RIGHT,
            Button::Center => ButtonSet::CENTER,
        }
    }
}

/// Indicator light colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorColor {
    Green,
    Orange,
    Red,
    Blue,
}

/// Remote control interface
pub trait RemoteControl {
    /// Sample the currently pressed button set.
    ///
    /// Called exactly once per control tick; the call may block for up to the
    /// remote link's polling latency.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Remote` if the remote cannot be sampled
    /// (connectivity loss).
    fn pressed(&mut self) -> Result<ButtonSet>;

    /// Set the remote's indicator light. Fire-and-forget.
    fn set_indicator(&mut self, color: IndicatorColor);
}
