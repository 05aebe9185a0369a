use eframe::egui;

use crate::state::{AppState, View};
use crate::ui::{catalog, compare, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChipdexApp {
    pub state: AppState,
}

impl ChipdexApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::default();
        state.load_bundled();
        state.theme.apply(&cc.egui_ctx);
        ChipdexApp { state }
    }
}

impl eframe::App for ChipdexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and view switcher ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters (catalog views only) ----
        if let View::Catalog(kind) = self.state.view {
            egui::SidePanel::left("filter_panel")
                .default_width(220.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state, kind);
                });
        }

        // ---- Central panel: catalog list or comparison ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Catalog(kind) => catalog::catalog_view(ui, &mut self.state, kind),
            View::Compare => compare::compare_view(ui, &mut self.state),
        });
    }
}
