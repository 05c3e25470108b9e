// sdl-indev Poll Devices
// Read callbacks the toolkit's input subsystem polls on its own schedule

mod data;
mod device;

pub use data::{EncoderData, IndevState, KeypadData, PointerData};
pub use device::{EncoderIndev, InputDevice, KeypadIndev, PointerIndev};
