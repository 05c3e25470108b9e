use std::sync::Arc;

use crate::context::InputContext;
use crate::display::DisplayId;

use super::data::{EncoderData, KeypadData, PointerData};

/// A pollable input device, as registered with the toolkit.
///
/// `read` fills in the record the toolkit passes and may leave it
/// untouched when there is nothing to report.
pub trait InputDevice {
    type Data: Default;

    fn read(&self, data: &mut Self::Data);

    /// Poll into a fresh record
    fn poll(&self) -> Self::Data {
        let mut data = Self::Data::default();
        self.read(&mut data);
        data
    }
}

/// Pointer device bound to a display (`None` is the default display)
#[derive(Debug, Clone)]
pub struct PointerIndev {
    context: Arc<InputContext>,
    display: Option<DisplayId>,
}

impl PointerIndev {
    pub fn new(context: Arc<InputContext>, display: Option<DisplayId>) -> Self {
        Self { context, display }
    }
}

impl InputDevice for PointerIndev {
    type Data = PointerData;

    fn read(&self, data: &mut PointerData) {
        self.context.read_pointer(self.display, data);
    }
}

/// Encoder device fed by the mouse wheel
#[derive(Debug, Clone)]
pub struct EncoderIndev {
    context: Arc<InputContext>,
}

impl EncoderIndev {
    pub fn new(context: Arc<InputContext>) -> Self {
        Self { context }
    }
}

impl InputDevice for EncoderIndev {
    type Data = EncoderData;

    fn read(&self, data: &mut EncoderData) {
        self.context.read_wheel(data);
    }
}

/// Keypad device fed by the text queue
#[derive(Debug, Clone)]
pub struct KeypadIndev {
    context: Arc<InputContext>,
}

impl KeypadIndev {
    pub fn new(context: Arc<InputContext>) -> Self {
        Self { context }
    }
}

impl InputDevice for KeypadIndev {
    type Data = KeypadData;

    fn read(&self, data: &mut KeypadData) {
        self.context.read_keyboard(data);
    }
}
