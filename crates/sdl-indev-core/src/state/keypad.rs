/// Press/release sequencing for the keypad poll.
///
/// Each queued character is reported as a press on one poll and a
/// release on the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeypadPhase {
    /// No release owed; the next poll may press a queued character
    #[default]
    Idle,
    /// The given character was pressed on the previous poll
    PendingRelease(char),
}

impl KeypadPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, KeypadPhase::Idle)
    }
}
