// sdl-indev Event Vocabulary
// Native windowing-system events consumed by the ingestion handlers

mod native;

pub use native::{FingerPhase, MouseButton, NativeEvent, WindowId};
