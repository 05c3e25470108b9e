// sdl-indev Event Scripts
// Replay recorded native events through an input context

#![cfg(feature = "settings-file")]

use std::path::Path;

use serde::Deserialize;

use crate::context::InputContext;
use crate::event::NativeEvent;

/// Errors that can occur when loading an event script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// A recorded sequence of native events.
///
/// ```toml
/// [[event]]
/// type = "mouse_motion"
/// window_id = 1
/// x = 40
/// y = 20
///
/// [[event]]
/// type = "text_input"
/// window_id = 1
/// text = "hi"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventScript {
    #[serde(default, rename = "event")]
    events: Vec<NativeEvent>,
}

impl EventScript {
    pub fn new(events: Vec<NativeEvent>) -> Self {
        Self { events }
    }

    /// Load a script from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a script from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content).map_err(|e| ScriptError::TomlParse(e.to_string()))
    }

    pub fn events(&self) -> &[NativeEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Feed the events to `context` in order, calling `visit` after each.
    ///
    /// Stops after the event that raises the quit flag. Returns the
    /// number of events delivered.
    pub fn replay<F>(&self, context: &InputContext, mut visit: F) -> usize
    where
        F: FnMut(usize, &NativeEvent),
    {
        let mut delivered = 0;
        for (index, event) in self.events.iter().enumerate() {
            log::trace!("Replaying event {}: {:?}", index, event);
            context.handle_event(event);
            delivered += 1;
            visit(index, event);
            if context.quit_requested() {
                log::debug!("Quit raised after {} event(s), stopping replay", delivered);
                break;
            }
        }
        delivered
    }
}
