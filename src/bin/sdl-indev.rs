// sdl-indev CLI
// Replays recorded native input events and prints what the toolkit would poll

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use sdl_indev_core::{
    CtrlKey, DisplayId, EventScript, InputContext, InputDevice, KeypadData, NativeEvent, Settings,
    WheelMode,
};

/// Input bridge between native window events and toolkit input devices
#[derive(Parser, Debug)]
#[command(name = "sdl-indev")]
#[command(author = "sdl-indev contributors")]
#[command(version)]
#[command(about = "Replay native input events through the toolkit input bridge", long_about = None)]
struct Args {
    /// TOML settings file (default: ~/.config/sdl-indev/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// TOML event script to replay
    #[arg(short, long, value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Native window id of the primary display
    #[arg(long, value_name = "WINDOW_ID", default_value_t = 1)]
    primary_window: u32,

    /// Native window id of the secondary display (needs dual display)
    #[arg(long, value_name = "WINDOW_ID")]
    bind_secondary: Option<u32>,

    /// Override the wheel mode (accumulate, unit_step)
    #[arg(long, value_name = "MODE")]
    wheel_mode: Option<WheelMode>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,
}

/// Main application state
struct Application {
    args: Args,
    context: Arc<InputContext>,
}

impl Application {
    fn new(args: Args) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::load_default().context("loading default settings")?,
        };
        if let Some(mode) = args.wheel_mode {
            settings.wheel_mode = mode;
        }
        if args.bind_secondary.is_some() && !settings.dual_display {
            bail!("--bind-secondary needs dual display enabled in the settings");
        }

        let context = Arc::new(InputContext::new(settings)?);
        context.bind_window(DisplayId::Primary, args.primary_window);
        if let Some(window_id) = args.bind_secondary {
            context.bind_window(DisplayId::Secondary, window_id);
        }

        Ok(Self { args, context })
    }

    fn check_config(&self) {
        let settings = self.context.settings();
        match settings.source_path() {
            Some(path) => println!("Configuration {} is valid", path.display()),
            None => println!("Configuration is valid (no settings file, using defaults)"),
        }
        println!("  zoom = {}", settings.zoom);
        println!("  resolution = {}x{}", settings.hor_res, settings.ver_res);
        println!("  dual_display = {}", settings.dual_display);
        println!("  keyboard_buffer_size = {}", settings.keyboard_buffer_size);
        println!("  wheel_mode = {}", settings.wheel_mode);
    }

    /// Replay the script, polling every device after each event
    fn run(&self) -> Result<()> {
        let Some(path) = &self.args.script else {
            bail!("no event script given (use --script)");
        };
        let script = EventScript::from_file(path)
            .with_context(|| format!("loading event script from {}", path.display()))?;
        log::info!("Replaying {} event(s) from {}", script.len(), path.display());

        // SIGINT/SIGTERM behave like a native quit event
        let quit = self.context.quit_flag();
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&quit))?;
        signal_hook::flag::register(signal_hook::consts::SIGTERM, quit)?;

        let delivered = script.replay(&self.context, |index, event| {
            self.report(index, event);
        });

        if self.context.quit_requested() {
            println!("Quit requested after {} of {} event(s)", delivered, script.len());
        } else {
            println!("Replayed {} event(s)", delivered);
        }
        Ok(())
    }

    fn report(&self, index: usize, event: &NativeEvent) {
        println!("#{} {}", index, event.kind());

        let mut displays = vec![None];
        if self.context.display_map().window_of(DisplayId::Secondary).is_some() {
            displays.push(Some(DisplayId::Secondary));
        }
        for display in displays {
            let data = self.context.pointer_indev(display).poll();
            let name = display.unwrap_or(DisplayId::Primary);
            println!("  pointer[{}] x={} y={} {}", name, data.x, data.y, data.state);
        }

        let wheel = self.context.encoder_indev().poll();
        println!("  encoder delta={} {}", wheel.encoder_delta, wheel.state);

        // Drain the keypad the way the toolkit does within one period
        let keypad = self.context.keypad_indev();
        let mut data = KeypadData::default();
        loop {
            let before = data;
            keypad.read(&mut data);
            if data == before {
                break;
            }
            match CtrlKey::from_char(data.key) {
                Some(ctrl) => println!("  keypad <{}> {}", ctrl, data.state),
                None => println!("  keypad {:?} {}", data.key, data.state),
            }
            if !data.continue_reading {
                break;
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let app = Application::new(args)?;
    if app.args.check_config {
        app.check_config();
        return Ok(());
    }
    app.run()
}
