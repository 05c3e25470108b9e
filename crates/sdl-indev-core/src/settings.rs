// sdl-indev Settings Module
// Display geometry, keyboard buffer and wheel behavior for the input bridge

#[cfg(feature = "settings-file")]
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Size of the native text input payload, used as the default queue capacity
pub const DEFAULT_KEYBOARD_BUFFER_SIZE: usize = 32;

/// Smallest keyboard buffer that can hold a character
pub const MIN_KEYBOARD_BUFFER_SIZE: usize = 3;

/// How wheel rotation events are folded into the encoder delta
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WheelMode {
    /// Accumulate the sign-inverted vertical delta
    #[default]
    Accumulate,
    /// Count one step per event regardless of magnitude, for platforms
    /// that report scaled wheel values
    UnitStep,
}

/// Settings for one input bridge instance
///
/// These settings are loaded from a TOML file
/// (default: ~/.config/sdl-indev/settings.toml).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Display zoom factor; raw coordinates are divided by it
    pub zoom: u16,

    /// Logical horizontal resolution
    pub hor_res: u16,

    /// Logical vertical resolution
    pub ver_res: u16,

    /// Whether a second display (and its pointer state) exists
    pub dual_display: bool,

    /// Text queue capacity in characters
    pub keyboard_buffer_size: usize,

    pub wheel_mode: WheelMode,

    #[cfg(feature = "settings-file")]
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

#[cfg(feature = "settings-file")]
/// TOML representation for deserializing settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    display: Option<DisplaySettings>,

    #[serde(default)]
    keyboard: Option<KeyboardSettings>,

    #[serde(default)]
    wheel: Option<WheelSettings>,
}

#[cfg(feature = "settings-file")]
#[derive(Debug, Clone, Deserialize, Default)]
struct DisplaySettings {
    #[serde(default)]
    zoom: Option<u16>,
    #[serde(default)]
    hor_res: Option<u16>,
    #[serde(default)]
    ver_res: Option<u16>,
    #[serde(default)]
    dual: Option<bool>,
}

#[cfg(feature = "settings-file")]
#[derive(Debug, Clone, Deserialize, Default)]
struct KeyboardSettings {
    #[serde(default)]
    buffer_size: Option<usize>,
}

#[cfg(feature = "settings-file")]
#[derive(Debug, Clone, Deserialize, Default)]
struct WheelSettings {
    #[serde(default)]
    mode: Option<WheelMode>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings with the stock single-display geometry
    pub fn new() -> Self {
        Self {
            zoom: 1,
            hor_res: 480,
            ver_res: 320,
            dual_display: false,
            keyboard_buffer_size: DEFAULT_KEYBOARD_BUFFER_SIZE,
            wheel_mode: WheelMode::Accumulate,
            #[cfg(feature = "settings-file")]
            source_path: None,
        }
    }

    pub fn with_resolution(mut self, hor_res: u16, ver_res: u16) -> Self {
        self.hor_res = hor_res;
        self.ver_res = ver_res;
        self
    }

    pub fn with_zoom(mut self, zoom: u16) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_dual_display(mut self, dual: bool) -> Self {
        self.dual_display = dual;
        self
    }

    pub fn with_keyboard_buffer_size(mut self, size: usize) -> Self {
        self.keyboard_buffer_size = size;
        self
    }

    pub fn with_wheel_mode(mut self, mode: WheelMode) -> Self {
        self.wheel_mode = mode;
        self
    }

    /// Check the values the handlers rely on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.zoom == 0 {
            return Err(SettingsError::InvalidValue(
                "display zoom must be at least 1".to_string(),
            ));
        }
        if self.keyboard_buffer_size < MIN_KEYBOARD_BUFFER_SIZE {
            return Err(SettingsError::InvalidValue(format!(
                "keyboard buffer size {} leaves no room for text",
                self.keyboard_buffer_size
            )));
        }
        Ok(())
    }

    /// Load settings from a TOML file
    #[cfg(feature = "settings-file")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    #[cfg(feature = "settings-file")]
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(display) = toml_settings.display {
            if let Some(zoom) = display.zoom {
                settings.zoom = zoom;
            }
            if let Some(hor_res) = display.hor_res {
                settings.hor_res = hor_res;
            }
            if let Some(ver_res) = display.ver_res {
                settings.ver_res = ver_res;
            }
            if let Some(dual) = display.dual {
                settings.dual_display = dual;
            }
        }

        if let Some(size) = toml_settings.keyboard.and_then(|k| k.buffer_size) {
            settings.keyboard_buffer_size = size;
        }

        if let Some(mode) = toml_settings.wheel.and_then(|w| w.mode) {
            settings.wheel_mode = mode;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Get the default settings path
    #[cfg(feature = "settings-file")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sdl-indev").join("settings.toml"))
    }

    /// Load from default location (~/.config/sdl-indev/settings.toml)
    #[cfg(feature = "settings-file")]
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        log::debug!("No settings file found, using defaults");
        Ok(Self::new())
    }

    /// Path the settings were loaded from, if any
    #[cfg(feature = "settings-file")]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# sdl-indev Settings
# Place this file at: ~/.config/sdl-indev/settings.toml

[display]
# Raw pointer coordinates are divided by this factor
zoom = 1
# Logical resolution, used to scale normalized touch coordinates
hor_res = 480
ver_res = 320
# Enable the second display and its pointer state
dual = false

[keyboard]
# Text queue capacity in characters
buffer_size = 32

[wheel]
# "accumulate" or "unit_step" (for platforms with scaled wheel values)
mode = "accumulate"
"#
}
