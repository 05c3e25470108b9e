// sdl-indev Key Symbols
// Native key symbols and the toolkit control codes they map onto

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

include!(concat!(env!("OUT_DIR"), "/keysym.rs"));

/// Bit set on every key symbol derived from a scancode
pub const SCANCODE_MASK: u32 = 1 << 30;

impl Keysym {
    /// Key symbol for a printable ASCII character
    pub const fn from_ascii(c: u8) -> Keysym {
        Keysym(c as u32)
    }

    /// Returns true if this symbol was derived from a scancode
    pub fn is_scancode(self) -> bool {
        self.0 & SCANCODE_MASK != 0
    }
}

/// Display name for a key symbol
///
/// Printable ASCII symbols that are not in the named table are shown as
/// themselves ("a", "7", ...).
pub fn key_name(code: u32) -> &'static str {
    static ASCII: [&str; 95] = [
        " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", "0",
        "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?", "@", "A",
        "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
        "S", "T", "U", "V", "W", "X", "Y", "Z", "[", "\\", "]", "^", "_", "`", "a", "b", "c",
        "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t",
        "u", "v", "w", "x", "y", "z", "{", "|", "}", "~",
    ];

    if let Some((_, name)) = NAMED_KEYS.iter().find(|(sym, _)| sym.0 == code) {
        return *name;
    }
    match code {
        0x21..=0x7E => ASCII[(code - 0x20) as usize],
        _ => "UNKNOWN",
    }
}

/// Look up a key symbol by name (case-insensitive for named keys)
///
/// A single printable ASCII character resolves to its own symbol.
pub fn key_from_name(name: &str) -> Option<Keysym> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_graphic() {
            return Some(Keysym::from_ascii(c as u8));
        }
    }

    let upper = name.to_ascii_uppercase();
    let alias = match upper.as_str() {
        "ENTER" => "RETURN",
        "ESC" => "ESCAPE",
        "DEL" => "DELETE",
        "PAGEUP" => "PAGE_UP",
        "PAGEDOWN" => "PAGE_DOWN",
        other => other,
    };
    NAMED_KEYS
        .iter()
        .find(|(_, n)| *n == alias)
        .map(|(sym, _)| *sym)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeysymRepr {
    Code(u32),
    Name(String),
}

impl<'de> Deserialize<'de> for Keysym {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match KeysymRepr::deserialize(deserializer)? {
            KeysymRepr::Code(code) => Ok(Keysym(code)),
            KeysymRepr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Control characters understood by the toolkit's keypad input
///
/// Values are the toolkit's `LV_KEY_*` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[repr(u32)]
pub enum CtrlKey {
    #[strum(serialize = "backspace")]
    Backspace = 8,
    #[strum(serialize = "next")]
    Next = 9,
    #[strum(serialize = "enter")]
    Enter = 10,
    #[strum(serialize = "prev")]
    Prev = 11,
    #[strum(serialize = "up")]
    Up = 17,
    #[strum(serialize = "down")]
    Down = 18,
    #[strum(serialize = "right")]
    Right = 19,
    #[strum(serialize = "left")]
    Left = 20,
    #[strum(serialize = "esc")]
    Esc = 27,
    #[strum(serialize = "del")]
    Del = 127,
}

impl CtrlKey {
    /// The control code as a character, ready for the text queue
    pub fn as_char(self) -> char {
        // All codes are ASCII control characters
        char::from(self as u8)
    }

    /// Reverse lookup from a queued character
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c as u32 {
            8 => CtrlKey::Backspace,
            9 => CtrlKey::Next,
            10 => CtrlKey::Enter,
            11 => CtrlKey::Prev,
            17 => CtrlKey::Up,
            18 => CtrlKey::Down,
            19 => CtrlKey::Right,
            20 => CtrlKey::Left,
            27 => CtrlKey::Esc,
            127 => CtrlKey::Del,
            _ => return None,
        };
        Some(key)
    }
}
