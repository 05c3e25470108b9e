// sdl-indev End-to-End Scenarios
//
// Native events in through InputContext::handle_event, toolkit polls out
// through the InputDevice handles.
//
// Run with: cargo test -p sdl-indev-core --test scenarios_test

use std::sync::Arc;
use std::thread;

use sdl_indev_core::{
    CtrlKey, DisplayId, IndevState, InputContext, InputDevice, KeypadData, Keymod, Keysym,
    MouseButton, NativeEvent, Settings, WheelMode,
};

const PRIMARY_WINDOW: u32 = 1;
const SECONDARY_WINDOW: u32 = 2;

fn shared_context(settings: Settings) -> Arc<InputContext> {
    let ctx = Arc::new(InputContext::new(settings).unwrap());
    ctx.bind_window(DisplayId::Primary, PRIMARY_WINDOW);
    ctx.bind_window(DisplayId::Secondary, SECONDARY_WINDOW);
    ctx
}

fn left(window_id: u32, pressed: bool, x: i32, y: i32) -> NativeEvent {
    NativeEvent::MouseButton {
        window_id,
        button: MouseButton::Left,
        pressed,
        x,
        y,
    }
}

fn keypad_report(data: &KeypadData) -> (IndevState, char, bool) {
    (data.state, data.key, data.continue_reading)
}

#[test]
fn text_drains_as_press_release_pairs() {
    let ctx = shared_context(Settings::new().with_keyboard_buffer_size(8));
    let keypad = ctx.keypad_indev();

    ctx.handle_event(&NativeEvent::text(PRIMARY_WINDOW, "ab"));

    let mut data = KeypadData::default();
    let mut reports = Vec::new();
    for _ in 0..4 {
        keypad.read(&mut data);
        reports.push(keypad_report(&data));
    }

    assert_eq!(
        reports,
        vec![
            (IndevState::Pressed, 'a', true),
            (IndevState::Released, 'a', true),
            (IndevState::Pressed, 'b', true),
            (IndevState::Released, 'b', false),
        ]
    );
}

#[test]
fn keypad_interleaves_control_keys_and_text_in_order() {
    let ctx = shared_context(Settings::new());
    let keypad = ctx.keypad_indev();

    ctx.handle_event(&NativeEvent::key_down(
        PRIMARY_WINDOW,
        Keysym::LEFT,
        Keymod::LSHIFT,
    ));
    ctx.handle_event(&NativeEvent::text(PRIMARY_WINDOW, "z"));
    ctx.handle_event(&NativeEvent::key_down(PRIMARY_WINDOW, Keysym::TAB, Keymod::empty()));

    let mut pressed = Vec::new();
    let mut data = KeypadData::default();
    loop {
        keypad.read(&mut data);
        if data.state == IndevState::Pressed {
            pressed.push(data.key);
        }
        if !data.continue_reading {
            break;
        }
    }

    assert_eq!(
        pressed,
        vec![CtrlKey::Left.as_char(), 'z', CtrlKey::Next.as_char()]
    );
    assert_eq!(ctx.pending_text(), "");
}

#[test]
fn overflowing_text_is_rejected_whole() {
    let ctx = shared_context(Settings::new().with_keyboard_buffer_size(8));

    ctx.handle_event(&NativeEvent::text(PRIMARY_WINDOW, "abcd"));
    ctx.handle_event(&NativeEvent::text(PRIMARY_WINDOW, "efg"));
    assert_eq!(ctx.pending_text(), "abcd");

    // Draining one character makes room again
    let mut data = KeypadData::default();
    ctx.keypad_indev().read(&mut data);
    ctx.handle_event(&NativeEvent::text(PRIMARY_WINDOW, "efg"));
    assert_eq!(ctx.pending_text(), "bcdefg");
}

#[test]
fn pointer_states_are_per_display() {
    let ctx = shared_context(Settings::new().with_dual_display(true).with_zoom(2));
    let primary = ctx.pointer_indev(None);
    let secondary = ctx.pointer_indev(Some(DisplayId::Secondary));

    ctx.handle_event(&left(PRIMARY_WINDOW, true, 100, 50));
    ctx.handle_event(&left(SECONDARY_WINDOW, true, 9, 9));
    ctx.handle_event(&left(SECONDARY_WINDOW, false, 0, 0));
    ctx.handle_event(&NativeEvent::MouseMotion {
        window_id: SECONDARY_WINDOW,
        x: 31,
        y: 77,
    });

    let p = primary.poll();
    assert_eq!((p.x, p.y, p.state), (50, 25, IndevState::Pressed));

    let s = secondary.poll();
    assert_eq!((s.x, s.y, s.state), (15, 38, IndevState::Released));

    ctx.handle_event(&left(PRIMARY_WINDOW, false, 0, 0));
    assert_eq!(primary.poll().state, IndevState::Released);
}

#[test]
fn unknown_window_changes_nothing() {
    let ctx = shared_context(Settings::new());
    ctx.handle_event(&left(42, true, 100, 100));
    ctx.handle_event(&NativeEvent::Finger {
        window_id: 42,
        phase: sdl_indev_core::FingerPhase::Down,
        x: 0.5,
        y: 0.5,
    });

    let p = ctx.pointer_indev(None).poll();
    assert_eq!((p.x, p.y, p.state), (0, 0, IndevState::Released));
}

#[test]
fn touch_uses_logical_resolution() {
    let ctx = shared_context(Settings::new().with_resolution(800, 600).with_zoom(2));
    ctx.handle_event(&NativeEvent::Finger {
        window_id: PRIMARY_WINDOW,
        phase: sdl_indev_core::FingerPhase::Down,
        x: 0.25,
        y: 0.5,
    });

    let p = ctx.pointer_indev(None).poll();
    assert_eq!((p.x, p.y, p.state), (100, 150, IndevState::Pressed));
}

#[test]
fn wheel_delta_is_since_last_poll() {
    let ctx = shared_context(Settings::new());
    let encoder = ctx.encoder_indev();

    for y in [-1, -1, -3, 2] {
        ctx.handle_event(&NativeEvent::MouseWheel {
            window_id: PRIMARY_WINDOW,
            x: 0,
            y,
        });
    }
    ctx.handle_event(&NativeEvent::MouseButton {
        window_id: PRIMARY_WINDOW,
        button: MouseButton::Middle,
        pressed: true,
        x: 0,
        y: 0,
    });

    let first = encoder.poll();
    assert_eq!(first.encoder_delta, 3);
    assert_eq!(first.state, IndevState::Pressed);

    let second = encoder.poll();
    assert_eq!(second.encoder_delta, 0);
    assert_eq!(second.state, IndevState::Pressed);

    // Middle button does not touch the pointer
    assert_eq!(ctx.pointer_indev(None).poll().state, IndevState::Released);
}

#[test]
fn unit_step_wheel_ignores_magnitude() {
    let ctx = shared_context(Settings::new().with_wheel_mode(WheelMode::UnitStep));
    for y in [-120, -240, -1] {
        ctx.handle_event(&NativeEvent::MouseWheel {
            window_id: PRIMARY_WINDOW,
            x: 0,
            y,
        });
    }
    assert_eq!(ctx.encoder_indev().poll().encoder_delta, 3);
}

#[test]
fn quit_is_idempotent_and_passes_events_through() {
    let ctx = shared_context(Settings::new());
    ctx.handle_event(&NativeEvent::Quit);
    assert!(ctx.quit_requested());
    ctx.handle_event(&NativeEvent::Quit);
    assert!(ctx.quit_requested());

    // Handlers keep running after quit; stopping is the caller's choice
    ctx.handle_event(&NativeEvent::text(PRIMARY_WINDOW, "q"));
    assert_eq!(ctx.pending_text(), "q");
}

#[test]
fn event_and_poll_threads_share_context() {
    let ctx = shared_context(Settings::new().with_keyboard_buffer_size(64));
    let text = "threaded input";

    let producer = {
        let ctx = Arc::clone(&ctx);
        thread::spawn(move || {
            for c in text.chars() {
                ctx.handle_event(&NativeEvent::text(PRIMARY_WINDOW, c.to_string()));
            }
            ctx.handle_event(&NativeEvent::Quit);
        })
    };

    let keypad = ctx.keypad_indev();
    let mut received = String::new();
    let mut data = KeypadData::default();
    loop {
        let before = (data.state, data.key, data.continue_reading);
        keypad.read(&mut data);
        if data.state == IndevState::Pressed && before != keypad_report(&data) {
            received.push(data.key);
        }
        if ctx.quit_requested() && ctx.pending_text().is_empty() && ctx.keypad_phase().is_idle() {
            break;
        }
        thread::yield_now();
    }
    producer.join().unwrap();

    assert_eq!(received, text);
}
