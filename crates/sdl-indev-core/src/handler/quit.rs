// Quit observer: raises the shared quit flag and passes every event on

use std::sync::atomic::{AtomicBool, Ordering};

use crate::event::NativeEvent;

/// Observe an event for a quit request.
///
/// Always returns true: the event continues to the other handlers.
pub fn filter(event: &NativeEvent, quit: &AtomicBool) -> bool {
    if matches!(event, NativeEvent::Quit) && !quit.swap(true, Ordering::SeqCst) {
        log::info!("Quit requested by the windowing system");
    }
    true
}
