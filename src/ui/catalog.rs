use eframe::egui::{self, Grid, RichText, ScrollArea, Ui, Window};

use crate::color::CategoryColors;
use crate::data::fields::{MISSING, spec_sections};
use crate::data::model::{HardwareKind, HardwareRecord};
use crate::data::numeric::leading_number;
use crate::data::paginate::paginate;
use crate::state::{AppState, CATALOG_PAGE_SIZE};
use crate::theme::{ACCENT, Theme};

// ---------------------------------------------------------------------------
// Catalog list (central panel)
// ---------------------------------------------------------------------------

/// Render the browsable record list with load-more pagination, plus the
/// detail window for the selected record.
pub fn catalog_view(ui: &mut Ui, state: &mut AppState, kind: HardwareKind) {
    let catalog_state = state.catalog(kind);
    if catalog_state.catalog.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records loaded  (File → Open…)");
        });
        return;
    }

    let page = paginate(
        &catalog_state.visible_indices,
        CATALOG_PAGE_SIZE,
        catalog_state.page,
    );
    let visible: Vec<usize> = page.visible.to_vec();
    let has_more = page.has_more;

    let mut open_detail = None;
    let mut load_more = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if visible.is_empty() {
                ui.label("No records match the current filters.");
            }
            for &idx in &visible {
                let record = &catalog_state.catalog.records[idx];
                if record_card(ui, record, &catalog_state.colors, &state.theme) {
                    open_detail = Some(idx);
                }
                ui.add_space(4.0);
            }
            if has_more {
                ui.vertical_centered(|ui: &mut Ui| {
                    if ui.button("Load more").clicked() {
                        load_more = true;
                    }
                });
            }
        });

    if load_more {
        state.catalog_mut(kind).load_more();
    }
    if open_detail.is_some() {
        state.catalog_mut(kind).detail = open_detail;
    }

    detail_window(ui.ctx(), state, kind);
}

/// One record card: name, category badge, key specs, score, details button.
/// Returns true when the details button was pressed.
fn record_card(
    ui: &mut Ui,
    record: &HardwareRecord,
    colors: &CategoryColors,
    theme: &Theme,
) -> bool {
    let mut clicked = false;

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui: &mut Ui| {
            ui.vertical(|ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new(record.name()).strong().size(16.0));
                    ui.label(
                        RichText::new(record.category())
                            .color(colors.color_for(record.category()))
                            .small(),
                    );
                });
                ui.label(RichText::new(summary_line(record)).color(theme.muted_text()));
            });

            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui: &mut Ui| {
                    if ui.button("Details").clicked() {
                        clicked = true;
                    }
                    match primary_score(record) {
                        Some(score) => ui.label(RichText::new(score).color(ACCENT).strong()),
                        None => ui.label(RichText::new(MISSING).color(theme.muted_text())),
                    };
                },
            );
        });
    });

    clicked
}

/// Headline benchmark shown on the card: PassMark for CPUs, 3DMark for GPUs.
fn primary_score(record: &HardwareRecord) -> Option<String> {
    match record {
        HardwareRecord::Cpu(c) => c.benchmarks.passmark.map(|s| format!("PassMark {s}")),
        HardwareRecord::Gpu(g) => g.score.as_ref().map(|s| format!("3DMark {s}")),
    }
}

/// Second card line: the specs a buyer scans first.
fn summary_line(record: &HardwareRecord) -> String {
    match record {
        HardwareRecord::Cpu(c) => {
            let threads = c
                .threads
                .map_or_else(|| MISSING.to_string(), |t| format!("{t} threads"));
            let tdp = c
                .tdp
                .as_deref()
                .and_then(leading_number)
                .map_or_else(|| MISSING.to_string(), |w| format!("{w} W"));
            let socket = c.socket.as_deref().unwrap_or(MISSING);
            format!("{threads} · {tdp} · {socket}")
        }
        HardwareRecord::Gpu(g) => {
            let memory = g.memory_size.as_deref().unwrap_or(MISSING);
            let tdp = g.tdp.as_deref().unwrap_or(MISSING);
            let architecture = if g.architecture.is_empty() {
                MISSING
            } else {
                g.architecture.as_str()
            };
            format!("{memory} · {architecture} · {tdp}")
        }
    }
}

// ---------------------------------------------------------------------------
// Detail window
// ---------------------------------------------------------------------------

/// The modal-style detail sheet: every spec section of the selected record
/// as a label/value grid, missing values shown as a dash.
fn detail_window(ctx: &egui::Context, state: &mut AppState, kind: HardwareKind) {
    let catalog_state = state.catalog(kind);
    let Some(idx) = catalog_state.detail else {
        return;
    };
    let Some(record) = catalog_state.catalog.records.get(idx) else {
        state.catalog_mut(kind).detail = None;
        return;
    };
    let record = record.clone();

    let mut open = true;
    Window::new(record.name())
        .id(egui::Id::new("detail_window"))
        .open(&mut open)
        .collapsible(false)
        .default_width(420.0)
        .show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical().max_height(500.0).show(ui, |ui: &mut Ui| {
                for section in spec_sections(kind) {
                    ui.strong(section.title);
                    Grid::new(section.title)
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui: &mut Ui| {
                            for row in section.rows {
                                ui.label(row.label);
                                ui.label(row.display(&record));
                                ui.end_row();
                            }
                        });
                    ui.add_space(8.0);
                }
            });
        });

    if !open {
        state.catalog_mut(kind).detail = None;
    }
}
