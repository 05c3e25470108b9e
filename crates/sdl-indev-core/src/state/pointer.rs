use crate::indev::IndevState;

/// Pointer state of one display, in logical coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// True while the primary button or a finger is held
    pub button_down: bool,
    pub last_x: i16,
    pub last_y: i16,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-scaled position
    pub fn move_to(&mut self, x: i16, y: i16) {
        self.last_x = x;
        self.last_y = y;
    }

    pub fn indev_state(&self) -> IndevState {
        IndevState::from_pressed(self.button_down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_state_default() {
        let state = PointerState::new();
        assert!(!state.button_down);
        assert_eq!((state.last_x, state.last_y), (0, 0));
        assert_eq!(state.indev_state(), IndevState::Released);
    }

    #[test]
    fn test_pointer_state_press() {
        let mut state = PointerState::new();
        state.button_down = true;
        state.move_to(-3, 12);
        assert_eq!(state.indev_state(), IndevState::Pressed);
        assert_eq!((state.last_x, state.last_y), (-3, 12));
    }
}
