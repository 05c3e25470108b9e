// Wheel handler: rotation and middle button feed the shared encoder

use crate::event::{MouseButton, NativeEvent};
use crate::indev::IndevState;
use crate::settings::WheelMode;
use crate::state::WheelState;

use super::clamp_i16;

/// Encoder steps for one wheel event.
///
/// Scrolling down reports a negative `y` but is a positive encoder turn,
/// so the sign is inverted.
pub fn rotation_steps(y: i32, mode: WheelMode) -> i16 {
    match mode {
        WheelMode::Accumulate => clamp_i16(y.saturating_neg()),
        WheelMode::UnitStep => match y.signum() {
            -1 => 1,
            1 => -1,
            _ => 0,
        },
    }
}

/// Apply a wheel or middle-button event to the shared wheel state
pub fn handle(event: &NativeEvent, mode: WheelMode, wheel: &mut WheelState) {
    match *event {
        NativeEvent::MouseWheel { y, .. } => {
            wheel.rotate(rotation_steps(y, mode));
        }
        NativeEvent::MouseButton {
            button: MouseButton::Middle,
            pressed,
            ..
        } => {
            wheel.button_state = IndevState::from_pressed(pressed);
        }
        _ => {}
    }
}
