// sdl-indev Core Library
// Native input events in, toolkit input-device polls out

pub mod context;
pub mod display;
pub mod event;
pub mod handler;
pub mod indev;
pub mod key;
pub mod keymap;
pub mod modifier;
pub mod settings;
pub mod state;

#[cfg(feature = "settings-file")]
pub mod script;

pub use context::InputContext;
pub use display::{DisplayId, DisplayMap};
pub use event::{FingerPhase, MouseButton, NativeEvent, WindowId};
pub use indev::{
    EncoderData, EncoderIndev, IndevState, InputDevice, KeypadData, KeypadIndev, PointerData,
    PointerIndev,
};
pub use key::{CtrlKey, Keysym};
pub use keymap::keycode_to_ctrl_key;
pub use modifier::Keymod;
pub use settings::{Settings, SettingsError, WheelMode};
pub use state::{KeypadPhase, PointerState, TextQueue, WheelState};

#[cfg(feature = "settings-file")]
pub use script::{EventScript, ScriptError};
