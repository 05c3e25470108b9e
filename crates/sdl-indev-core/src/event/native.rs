// sdl-indev Native Events
// Tagged event objects as pushed by the windowing system's event loop

use serde::Deserialize;

use crate::key::Keysym;
use crate::modifier::Keymod;

/// Native window identifier
pub type WindowId = u32;

/// Mouse button carried by button events.
///
/// Native numbering: 1 = left, 2 = middle, 3 = right, 4/5 = extra buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
}

impl MouseButton {
    /// Create a MouseButton from its native index
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(MouseButton::Left),
            2 => Some(MouseButton::Middle),
            3 => Some(MouseButton::Right),
            4 => Some(MouseButton::X1),
            5 => Some(MouseButton::X2),
            _ => None,
        }
    }
}

/// Phase of a touch-screen finger event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FingerPhase {
    Down,
    Up,
    Motion,
}

/// An event delivered by the native windowing system.
///
/// Mouse coordinates are device pixels. Finger coordinates are normalized
/// to `0.0..=1.0` across the window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NativeEvent {
    Quit,
    MouseButton {
        window_id: WindowId,
        button: MouseButton,
        pressed: bool,
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
    },
    MouseMotion {
        window_id: WindowId,
        x: i32,
        y: i32,
    },
    MouseWheel {
        window_id: WindowId,
        #[serde(default)]
        x: i32,
        y: i32,
    },
    Finger {
        window_id: WindowId,
        phase: FingerPhase,
        x: f32,
        y: f32,
    },
    Key {
        window_id: WindowId,
        keysym: Keysym,
        #[serde(default)]
        keymod: Keymod,
        pressed: bool,
    },
    TextInput {
        window_id: WindowId,
        text: String,
    },
    Window {
        window_id: WindowId,
    },
    #[serde(other)]
    Other,
}

impl NativeEvent {
    /// Window the event was delivered to, if it carries one
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            NativeEvent::MouseButton { window_id, .. }
            | NativeEvent::MouseMotion { window_id, .. }
            | NativeEvent::MouseWheel { window_id, .. }
            | NativeEvent::Finger { window_id, .. }
            | NativeEvent::Key { window_id, .. }
            | NativeEvent::TextInput { window_id, .. }
            | NativeEvent::Window { window_id } => Some(*window_id),
            NativeEvent::Quit | NativeEvent::Other => None,
        }
    }

    /// Short kind name, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            NativeEvent::Quit => "quit",
            NativeEvent::MouseButton { .. } => "mouse_button",
            NativeEvent::MouseMotion { .. } => "mouse_motion",
            NativeEvent::MouseWheel { .. } => "mouse_wheel",
            NativeEvent::Finger { .. } => "finger",
            NativeEvent::Key { .. } => "key",
            NativeEvent::TextInput { .. } => "text_input",
            NativeEvent::Window { .. } => "window",
            NativeEvent::Other => "other",
        }
    }

    /// Convenience constructor for a key-down event
    pub fn key_down(window_id: WindowId, keysym: Keysym, keymod: Keymod) -> Self {
        NativeEvent::Key {
            window_id,
            keysym,
            keymod,
            pressed: true,
        }
    }

    /// Convenience constructor for a text input event
    pub fn text(window_id: WindowId, text: impl Into<String>) -> Self {
        NativeEvent::TextInput {
            window_id,
            text: text.into(),
        }
    }
}
