// sdl-indev Keycode Mapper
// Translates navigation/editing keys into toolkit control characters

use crate::key::{CtrlKey, Keysym};
use crate::modifier::Keymod;

/// Convert a native key symbol to its toolkit control character.
///
/// Returns `None` for symbols that are not control keys; those reach the
/// text queue (if at all) through text input events instead.
///
/// The modifier state is only consulted for TAB, where shift selects
/// the previous widget instead of the next one.
pub fn keycode_to_ctrl_key(sym: Keysym, mods: Keymod) -> Option<CtrlKey> {
    let key = match sym {
        Keysym::RIGHT | Keysym::KP_PLUS => CtrlKey::Right,
        Keysym::LEFT | Keysym::KP_MINUS => CtrlKey::Left,
        Keysym::UP => CtrlKey::Up,
        Keysym::DOWN => CtrlKey::Down,
        Keysym::ESCAPE => CtrlKey::Esc,
        Keysym::BACKSPACE => CtrlKey::Backspace,
        Keysym::DELETE => CtrlKey::Del,
        Keysym::KP_ENTER | Keysym::RETURN => CtrlKey::Enter,
        Keysym::TAB if mods.shift_held() => CtrlKey::Prev,
        Keysym::TAB => CtrlKey::Next,
        Keysym::PAGE_DOWN => CtrlKey::Next,
        Keysym::PAGE_UP => CtrlKey::Prev,
        _ => return None,
    };
    Some(key)
}
