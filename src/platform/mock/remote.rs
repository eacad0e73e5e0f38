//! Mock remote with scripted button input

use crate::platform::{
    error::{PlatformError, RemoteError},
    traits::{ButtonSet, IndicatorColor, RemoteControl},
    Result,
};

/// Mock remote control
///
/// Plays back a scripted sequence of button samples, one per `pressed()` call.
/// Once the script is exhausted it reports no buttons pressed, or fails with
/// `RemoteError::Disconnected` if configured to simulate link loss.
#[derive(Debug, Default)]
pub struct MockRemote {
    frames: heapless::Vec<ButtonSet, 64>,
    cursor: usize,
    disconnect_when_exhausted: bool,
    indicator: Option<IndicatorColor>,
    indicator_changes: usize,
}

impl MockRemote {
    /// Create a remote with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one input sample to the script.
    pub fn push_frame(&mut self, frame: ButtonSet) {
        self.frames
            .push(frame)
            .expect("mock remote script capacity exceeded");
    }

    /// Append the same input sample `count` times (a held button).
    pub fn push_held(&mut self, frame: ButtonSet, count: usize) {
        for _ in 0..count {
            self.push_frame(frame);
        }
    }

    /// Simulate connectivity loss after the script runs out.
    pub fn disconnect_when_exhausted(&mut self) {
        self.disconnect_when_exhausted = true;
    }

    /// The most recently commanded indicator color.
    pub fn indicator(&self) -> Option<IndicatorColor> {
        self.indicator
    }

    /// Number of indicator changes commanded so far.
    pub fn indicator_changes(&self) -> usize {
        self.indicator_changes
    }

    /// Number of samples consumed so far.
    pub fn samples_taken(&self) -> usize {
        self.cursor
    }
}

impl RemoteControl for MockRemote {
    fn pressed(&mut self) -> Result<ButtonSet> {
        match self.frames.get(self.cursor) {
            Some(&frame) => {
                self.cursor += 1;
                Ok(frame)
            }
            None if self.disconnect_when_exhausted => {
                Err(PlatformError::Remote(RemoteError::Disconnected))
            }
            None => {
                self.cursor += 1;
                Ok(ButtonSet::empty())
            }
        }
    }

    fn set_indicator(&mut self, color: IndicatorColor) {
        self.indicator = Some(color);
        self.indicator_changes += 1;
    }
}
