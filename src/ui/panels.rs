use eframe::egui::{self, Color32, ComboBox, RichText, ScrollArea, Ui};

use crate::data::filter::{FilterCriteria, NumericBucket, bucket_options};
use crate::data::loader;
use crate::data::model::HardwareKind;
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar: file menu, view switcher, record counts,
/// theme toggle, and the status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CPU CSV…").clicked() {
                open_file_dialog(state, HardwareKind::Cpu);
                ui.close_menu();
            }
            if ui.button("Open GPU CSV…").clicked() {
                open_file_dialog(state, HardwareKind::Gpu);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Reload bundled data").clicked() {
                state.load_bundled();
                ui.close_menu();
            }
        });

        ui.separator();

        let views = [
            ("CPUs", View::Catalog(HardwareKind::Cpu)),
            ("GPUs", View::Catalog(HardwareKind::Gpu)),
            ("Compare", View::Compare),
        ];
        for (label, view) in views {
            if ui.selectable_label(state.view == view, label).clicked() {
                state.view = view;
            }
        }

        ui.separator();

        if let View::Catalog(kind) = state.view {
            let catalog_state = state.catalog(kind);
            ui.label(format!(
                "{} records, {} match",
                catalog_state.catalog.len(),
                catalog_state.visible_indices.len()
            ));
            if !catalog_state.warnings.is_empty() {
                ui.label(
                    RichText::new(format!("{} rows skipped", catalog_state.warnings.len()))
                        .color(Color32::YELLOW),
                );
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            let toggle_label = if state.theme.dark_mode { "☀ Light" } else { "🌙 Dark" };
            if ui.button(toggle_label).clicked() {
                state.theme.dark_mode = !state.theme.dark_mode;
                state.theme.apply(ui.ctx());
            }

            if let Some(msg) = &state.status_message {
                let color = if msg.starts_with("Error") {
                    Color32::RED
                } else {
                    state.theme.muted_text()
                };
                ui.label(RichText::new(msg).color(color));
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel for the active catalog. All widgets edit a
/// working copy of the criteria; one `set_criteria` call at the end applies
/// the change and resets the page.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, kind: HardwareKind) {
    ui.heading("Filters");
    ui.separator();

    let catalog_state = state.catalog(kind);
    if catalog_state.catalog.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    let categories = catalog_state.catalog.categories.clone();
    let facets = catalog_state.catalog.facets.clone();
    let colors = catalog_state.colors.clone();
    let mut criteria = catalog_state.criteria.clone();
    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Free-text search ----
            ui.strong("Search");
            let mut text = criteria.text.clone().unwrap_or_default();
            if ui.text_edit_singleline(&mut text).changed() {
                criteria.text = (!text.is_empty()).then_some(text);
                changed = true;
            }
            ui.separator();

            // ---- Category ----
            ui.strong("Category");
            let selected = criteria
                .category
                .clone()
                .unwrap_or_else(|| "All".to_string());
            ComboBox::from_id_salt("category_filter")
                .selected_text(selected)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui.selectable_label(criteria.category.is_none(), "All").clicked()
                        && criteria.category.take().is_some()
                    {
                        changed = true;
                    }
                    for category in &categories {
                        let text = RichText::new(category).color(colors.color_for(category));
                        let is_selected = criteria.category.as_deref() == Some(category);
                        if ui.selectable_label(is_selected, text).clicked() && !is_selected {
                            criteria.category = Some(category.clone());
                            changed = true;
                        }
                    }
                });
            ui.separator();

            // ---- Facet (socket / brand) ----
            ui.strong(kind.facet_label());
            let selected = criteria.facet.clone().unwrap_or_else(|| "All".to_string());
            ComboBox::from_id_salt("facet_filter")
                .selected_text(selected)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui.selectable_label(criteria.facet.is_none(), "All").clicked()
                        && criteria.facet.take().is_some()
                    {
                        changed = true;
                    }
                    for facet in &facets {
                        let is_selected = criteria.facet.as_deref() == Some(facet);
                        if ui.selectable_label(is_selected, facet).clicked() && !is_selected {
                            criteria.facet = Some(facet.clone());
                            changed = true;
                        }
                    }
                });
            ui.separator();

            // ---- Numeric buckets ----
            for (field, buckets) in bucket_options(kind) {
                ui.strong(field.label());
                let active = criteria.bucket.filter(|b| b.field == *field);
                let selected = active.map_or("All", |b| b.bucket.label);
                ComboBox::from_id_salt(("bucket_filter", field.label()))
                    .selected_text(selected)
                    .show_ui(ui, |ui: &mut Ui| {
                        if ui.selectable_label(active.is_none(), "All").clicked()
                            && active.is_some()
                        {
                            criteria.bucket = None;
                            changed = true;
                        }
                        for bucket in *buckets {
                            let is_selected =
                                active.is_some_and(|b| b.bucket.label == bucket.label);
                            if ui.selectable_label(is_selected, bucket.label).clicked()
                                && !is_selected
                            {
                                criteria.bucket = Some(NumericBucket {
                                    field: *field,
                                    bucket: *bucket,
                                });
                                changed = true;
                            }
                        }
                    });
                ui.separator();
            }

            if ui.button("Clear filters").clicked() && !criteria.is_empty() {
                criteria = FilterCriteria::default();
                changed = true;
            }
        });

    if changed {
        state.catalog_mut(kind).set_criteria(criteria);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, kind: HardwareKind) {
    let file = rfd::FileDialog::new()
        .set_title(format!("Open {kind} dataset", kind = kind.label()))
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_path(&path, kind) {
            Ok(outcome) => {
                log::info!(
                    "loaded {} {kind} records from {} ({} skipped)",
                    outcome.catalog.len(),
                    path.display(),
                    outcome.warnings.len()
                );
                state.set_loaded(kind, outcome);
            }
            Err(e) => {
                log::error!("failed to load {}: {e:#}", path.display());
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
