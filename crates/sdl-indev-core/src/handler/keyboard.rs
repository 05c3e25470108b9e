// Keyboard handler: control keys and text input feed the text queue

use crate::event::NativeEvent;
use crate::keymap::keycode_to_ctrl_key;
use crate::state::TextQueue;

/// Append the characters an event produces to the text queue.
///
/// Key-down events contribute their control character, if any. Text
/// input events contribute their literal text. Appends that do not fit
/// are dropped whole.
pub fn handle(event: &NativeEvent, queue: &mut TextQueue) {
    match event {
        NativeEvent::Key {
            keysym,
            keymod,
            pressed: true,
            ..
        } => {
            let Some(ctrl) = keycode_to_ctrl_key(*keysym, *keymod) else {
                return;
            };
            if !queue.push_char(ctrl.as_char()) {
                log::debug!(
                    "Keyboard queue full ({} queued), dropping {} key",
                    queue.len(),
                    ctrl
                );
            }
        }
        NativeEvent::TextInput { text, .. } => {
            if !queue.push_str(text) {
                log::debug!(
                    "Keyboard queue full ({} queued), dropping text {:?}",
                    queue.len(),
                    text
                );
            }
        }
        _ => {}
    }
}
