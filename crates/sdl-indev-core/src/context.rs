// sdl-indev Input Context
// Owns the input state store and exposes the ingestion and poll entry points

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::display::{DisplayId, DisplayMap};
use crate::event::{NativeEvent, WindowId};
use crate::handler::{self, pointer::PointerStates};
use crate::indev::{
    EncoderData, EncoderIndev, IndevState, KeypadData, KeypadIndev, PointerData, PointerIndev,
};
use crate::settings::{Settings, SettingsError};
use crate::state::{KeypadPhase, PointerState, TextQueue, WheelState};

#[derive(Debug)]
struct KeyboardState {
    queue: TextQueue,
    phase: KeypadPhase,
}

/// Input state shared between the native event loop and the toolkit.
///
/// Every method takes `&self`; each store sits behind its own lock so
/// the event thread and the poll thread can share one context through
/// an `Arc`.
#[derive(Debug)]
pub struct InputContext {
    settings: Settings,
    displays: RwLock<DisplayMap>,
    pointers: Mutex<PointerStates>,
    wheel: Mutex<WheelState>,
    keyboard: Mutex<KeyboardState>,
    quit: Arc<AtomicBool>,
}

impl InputContext {
    /// Create a context with no windows bound yet
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        log::debug!(
            "Input context: zoom={} res={}x{} dual={} buffer={} wheel={}",
            settings.zoom,
            settings.hor_res,
            settings.ver_res,
            settings.dual_display,
            settings.keyboard_buffer_size,
            settings.wheel_mode
        );
        Ok(Self {
            displays: RwLock::new(DisplayMap::new(settings.dual_display)),
            pointers: Mutex::new(PointerStates::default()),
            wheel: Mutex::new(WheelState::new()),
            keyboard: Mutex::new(KeyboardState {
                queue: TextQueue::new(settings.keyboard_buffer_size),
                phase: KeypadPhase::Idle,
            }),
            quit: Arc::new(AtomicBool::new(false)),
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Bind the native window backing a display
    pub fn bind_window(&self, display: DisplayId, window_id: WindowId) {
        self.displays.write().bind(display, window_id);
    }

    pub fn display_map(&self) -> DisplayMap {
        self.displays.read().clone()
    }

    /// Feed one native event through the quit observer and all handlers
    pub fn handle_event(&self, event: &NativeEvent) {
        self.filter_quit(event);
        self.handle_pointer(event);
        self.handle_wheel(event);
        self.handle_keyboard(event);
    }

    /// Quit observer; returns true to let the event through
    pub fn filter_quit(&self, event: &NativeEvent) -> bool {
        handler::quit::filter(event, &self.quit)
    }

    pub fn handle_pointer(&self, event: &NativeEvent) {
        let displays = self.displays.read();
        let mut pointers = self.pointers.lock();
        handler::pointer::handle(event, &self.settings, &displays, &mut pointers);
    }

    pub fn handle_wheel(&self, event: &NativeEvent) {
        handler::wheel::handle(event, self.settings.wheel_mode, &mut self.wheel.lock());
    }

    pub fn handle_keyboard(&self, event: &NativeEvent) {
        handler::keyboard::handle(event, &mut self.keyboard.lock().queue);
    }

    /// Pointer poll: report position and button state of a display.
    ///
    /// Leaves `data` untouched if the display does not exist.
    pub fn read_pointer(&self, display: Option<DisplayId>, data: &mut PointerData) {
        let Some(display) = self.displays.read().resolve_display(display) else {
            return;
        };
        let state = self.pointers.lock()[display.index()];
        data.x = state.last_x;
        data.y = state.last_y;
        data.state = state.indev_state();
    }

    /// Wheel poll: report button state and the rotation since the last poll
    pub fn read_wheel(&self, data: &mut EncoderData) {
        let mut wheel = self.wheel.lock();
        data.state = wheel.button_state;
        data.encoder_delta = wheel.take_delta();
    }

    /// Keypad poll: report one press or release per call.
    ///
    /// A queued character is pressed (and dequeued) on one call and
    /// released on the next. With nothing queued and no release owed,
    /// `data` is left untouched.
    pub fn read_keyboard(&self, data: &mut KeypadData) {
        let mut keyboard = self.keyboard.lock();
        let phase = keyboard.phase;
        match phase {
            KeypadPhase::PendingRelease(key) => {
                keyboard.phase = KeypadPhase::Idle;
                data.state = IndevState::Released;
                data.key = key;
                data.continue_reading = !keyboard.queue.is_empty();
            }
            KeypadPhase::Idle => {
                if let Some(key) = keyboard.queue.pop_front() {
                    keyboard.phase = KeypadPhase::PendingRelease(key);
                    data.state = IndevState::Pressed;
                    data.key = key;
                    data.continue_reading = true;
                }
            }
        }
    }

    /// Snapshot of a display's pointer state
    pub fn pointer_state(&self, display: DisplayId) -> PointerState {
        self.pointers.lock()[display.index()]
    }

    /// Snapshot of the wheel state
    pub fn wheel_state(&self) -> WheelState {
        *self.wheel.lock()
    }

    /// Characters waiting in the text queue, oldest first
    pub fn pending_text(&self) -> String {
        self.keyboard.lock().queue.iter().collect()
    }

    pub fn keypad_phase(&self) -> KeypadPhase {
        self.keyboard.lock().phase
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }

    /// Shared quit flag, for signal handlers and outer loops
    pub fn quit_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    pub fn pointer_indev(self: &Arc<Self>, display: Option<DisplayId>) -> PointerIndev {
        PointerIndev::new(Arc::clone(self), display)
    }

    pub fn encoder_indev(self: &Arc<Self>) -> EncoderIndev {
        EncoderIndev::new(Arc::clone(self))
    }

    pub fn keypad_indev(self: &Arc<Self>) -> KeypadIndev {
        KeypadIndev::new(Arc::clone(self))
    }
}
