use std::fmt;

/// Pressed/released state as reported to the toolkit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IndevState {
    #[default]
    Released,
    Pressed,
}

impl IndevState {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            IndevState::Pressed
        } else {
            IndevState::Released
        }
    }

    pub fn is_pressed(self) -> bool {
        matches!(self, IndevState::Pressed)
    }
}

impl fmt::Display for IndevState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndevState::Released => write!(f, "released"),
            IndevState::Pressed => write!(f, "pressed"),
        }
    }
}

/// Pointer poll result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerData {
    pub x: i16,
    pub y: i16,
    pub state: IndevState,
}

/// Encoder (wheel) poll result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderData {
    pub state: IndevState,
    pub encoder_delta: i16,
}

/// Keypad poll result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadData {
    pub state: IndevState,
    pub key: char,
    /// Ask the toolkit to poll again before its next period
    pub continue_reading: bool,
}

impl Default for KeypadData {
    fn default() -> Self {
        Self {
            state: IndevState::Released,
            key: '\0',
            continue_reading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indev_state() {
        assert_eq!(IndevState::from_pressed(true), IndevState::Pressed);
        assert_eq!(IndevState::from_pressed(false), IndevState::Released);
        assert!(IndevState::Pressed.is_pressed());
        assert!(!IndevState::default().is_pressed());
        assert_eq!(IndevState::Pressed.to_string(), "pressed");
    }

    #[test]
    fn test_keypad_data_default() {
        let data = KeypadData::default();
        assert_eq!(data.key, '\0');
        assert!(!data.continue_reading);
        assert_eq!(data.state, IndevState::Released);
    }
}
