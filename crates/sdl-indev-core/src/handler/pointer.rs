// Pointer/touch handler: button, motion and finger events per display

use crate::display::DisplayMap;
use crate::event::{FingerPhase, MouseButton, NativeEvent};
use crate::settings::Settings;
use crate::state::PointerState;

use super::clamp_i16;

/// Pointer states indexed by [`crate::display::DisplayId::index`]
pub type PointerStates = [PointerState; 2];

/// Scale a raw device coordinate to logical pixels (floor division)
pub fn scale_mouse(raw: i32, zoom: u16) -> i16 {
    clamp_i16(raw.div_euclid(i32::from(zoom.max(1))))
}

/// Scale a normalized touch coordinate to logical pixels
pub fn scale_touch(normalized: f32, resolution: u16, zoom: u16) -> i16 {
    // Float to int casts saturate, NaN becomes 0
    (f32::from(resolution) * normalized / f32::from(zoom.max(1))).floor() as i16
}

/// Apply a pointer or touch event to the pointer state of its display.
///
/// Events for windows that are not bound to a display are ignored, as
/// are non-pointer events.
pub fn handle(
    event: &NativeEvent,
    settings: &Settings,
    displays: &DisplayMap,
    pointers: &mut PointerStates,
) {
    let window_id = match event {
        NativeEvent::MouseButton { window_id, .. }
        | NativeEvent::MouseMotion { window_id, .. }
        | NativeEvent::Finger { window_id, .. }
        | NativeEvent::Window { window_id } => *window_id,
        _ => return,
    };

    let Some(display) = displays.resolve_window(window_id) else {
        log::trace!(
            "Ignoring {} event for unbound window {}",
            event.kind(),
            window_id
        );
        return;
    };
    let state = &mut pointers[display.index()];
    let zoom = settings.zoom;

    match *event {
        NativeEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
            x,
            y,
            ..
        } => {
            state.button_down = true;
            state.move_to(scale_mouse(x, zoom), scale_mouse(y, zoom));
        }
        NativeEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
            ..
        } => {
            state.button_down = false;
        }
        NativeEvent::MouseMotion { x, y, .. } => {
            state.move_to(scale_mouse(x, zoom), scale_mouse(y, zoom));
        }
        NativeEvent::Finger { phase, x, y, .. } => {
            match phase {
                FingerPhase::Down => state.button_down = true,
                FingerPhase::Up => state.button_down = false,
                FingerPhase::Motion => {}
            }
            state.move_to(
                scale_touch(x, settings.hor_res, zoom),
                scale_touch(y, settings.ver_res, zoom),
            );
        }
        // Other buttons and window events change nothing
        _ => {}
    }
}
