#[cfg(feature = "settings-file")]
mod tests {
    use std::path::PathBuf;

    use sdl_indev_core::{
        DisplayId, EventScript, IndevState, InputContext, InputDevice, KeypadData, Settings,
        WheelMode,
    };

    fn demo_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../demos")
            .join(name)
    }

    #[test]
    fn demo_settings_parse() {
        let path = demo_path("settings.toml");
        let settings = Settings::from_file(&path).expect("failed to parse demo settings");
        assert_eq!(settings.zoom, 2);
        assert_eq!((settings.hor_res, settings.ver_res), (800, 480));
        assert!(settings.dual_display);
        assert_eq!(settings.wheel_mode, WheelMode::Accumulate);
        assert_eq!(settings.source_path(), Some(path.as_path()));
    }

    #[test]
    fn demo_script_replays_to_expected_state() {
        let settings = Settings::from_file(demo_path("settings.toml")).unwrap();
        let script = EventScript::from_file(demo_path("events.toml")).expect("failed to parse demo script");
        assert_eq!(script.len(), 11);

        let ctx = std::sync::Arc::new(InputContext::new(settings).unwrap());
        ctx.bind_window(DisplayId::Primary, 1);
        ctx.bind_window(DisplayId::Secondary, 2);

        let delivered = script.replay(&ctx, |_, _| {});
        assert_eq!(delivered, 11);
        assert!(ctx.quit_requested());

        let primary = ctx.pointer_indev(None).poll();
        assert_eq!((primary.x, primary.y, primary.state), (100, 48, IndevState::Released));

        let secondary = ctx.pointer_indev(Some(DisplayId::Secondary)).poll();
        assert_eq!(
            (secondary.x, secondary.y, secondary.state),
            (200, 120, IndevState::Released)
        );

        let wheel = ctx.encoder_indev().poll();
        assert_eq!((wheel.encoder_delta, wheel.state), (2, IndevState::Released));

        let keypad = ctx.keypad_indev();
        let mut data = KeypadData::default();
        let mut pressed = String::new();
        loop {
            keypad.read(&mut data);
            if data.state == IndevState::Pressed {
                pressed.push(data.key);
            }
            if !data.continue_reading {
                break;
            }
        }
        assert_eq!(pressed, "hi\u{b}");
    }
}
