// sdl-indev Event Ingestion
// Handlers that fold native events into the input state store

pub mod keyboard;
pub mod pointer;
pub mod quit;
pub mod wheel;

/// Narrow a coordinate or delta to the toolkit's 16-bit range
pub(crate) fn clamp_i16(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
