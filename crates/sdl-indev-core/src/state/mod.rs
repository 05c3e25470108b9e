// sdl-indev Input State Store
// Per-display pointer state, shared wheel state and the text input queue

mod keypad;
mod pointer;
mod text_queue;
mod wheel;

pub use keypad::KeypadPhase;
pub use pointer::PointerState;
pub use text_queue::TextQueue;
pub use wheel::WheelState;
