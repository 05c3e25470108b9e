// sdl-indev Display Resolution
// Maps native window ids and toolkit display handles onto pointer states

use crate::event::WindowId;

/// Logical display a pointer state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DisplayId {
    Primary,
    Secondary,
}

impl DisplayId {
    /// Slot of this display in per-display storage
    pub fn index(self) -> usize {
        match self {
            DisplayId::Primary => 0,
            DisplayId::Secondary => 1,
        }
    }
}

/// Window bindings for the configured displays
///
/// Window ids are assigned by the windowing system when the display
/// windows are created, so they are bound at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMap {
    dual_display: bool,
    primary: Option<WindowId>,
    secondary: Option<WindowId>,
}

impl DisplayMap {
    pub fn new(dual_display: bool) -> Self {
        Self {
            dual_display,
            primary: None,
            secondary: None,
        }
    }

    /// Bind a native window to a display.
    ///
    /// Binding the secondary display is a no-op unless dual display is on.
    pub fn bind(&mut self, display: DisplayId, window_id: WindowId) {
        match display {
            DisplayId::Primary => self.primary = Some(window_id),
            DisplayId::Secondary if self.dual_display => self.secondary = Some(window_id),
            DisplayId::Secondary => {
                log::warn!(
                    "Ignoring window {} for secondary display: dual display is disabled",
                    window_id
                );
            }
        }
    }

    /// Window currently bound to a display
    pub fn window_of(&self, display: DisplayId) -> Option<WindowId> {
        match display {
            DisplayId::Primary => self.primary,
            DisplayId::Secondary => self.secondary,
        }
    }

    /// Resolve the display an event's window belongs to
    pub fn resolve_window(&self, window_id: WindowId) -> Option<DisplayId> {
        if self.primary == Some(window_id) {
            Some(DisplayId::Primary)
        } else if self.dual_display && self.secondary == Some(window_id) {
            Some(DisplayId::Secondary)
        } else {
            None
        }
    }

    /// Resolve the display a poll request targets.
    ///
    /// No handle means the default display, which is the primary one.
    pub fn resolve_display(&self, display: Option<DisplayId>) -> Option<DisplayId> {
        match display {
            None | Some(DisplayId::Primary) => Some(DisplayId::Primary),
            Some(DisplayId::Secondary) if self.dual_display => Some(DisplayId::Secondary),
            Some(DisplayId::Secondary) => None,
        }
    }
}
