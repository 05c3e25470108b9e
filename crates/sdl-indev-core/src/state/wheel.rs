use crate::indev::IndevState;

/// Encoder state shared by all displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WheelState {
    /// Rotation not yet reported to a poll
    pub delta: i16,
    /// Middle button state
    pub button_state: IndevState,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add steps to the pending rotation, saturating at the i16 range
    pub fn rotate(&mut self, steps: i16) {
        self.delta = self.delta.saturating_add(steps);
    }

    /// Take the pending rotation, leaving zero behind
    pub fn take_delta(&mut self) -> i16 {
        std::mem::take(&mut self.delta)
    }
}
