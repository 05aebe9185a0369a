use eframe::egui::{Color32, Context, Visuals};

// ---------------------------------------------------------------------------
// Display configuration
// ---------------------------------------------------------------------------

/// Highlight color for score badges, winning bars, and active selections.
pub const ACCENT: Color32 = Color32::from_rgb(0xFF, 0xE6, 0x00);

/// Injected display configuration. Owned by `AppState` and passed by
/// reference into the UI functions; never a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme { dark_mode: true }
    }
}

impl Theme {
    /// Push the current mode onto the egui context. Called once at startup
    /// and again whenever the toggle flips.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });
    }

    /// Color for secondary card text that reads in both modes.
    pub fn muted_text(&self) -> Color32 {
        if self.dark_mode {
            Color32::from_gray(160)
        } else {
            Color32::from_gray(100)
        }
    }
}
