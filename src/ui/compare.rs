use eframe::egui::{self, Color32, RichText, ScrollArea, Ui, Window};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::compare::{BenchmarkKey, benchmark_tabs, compare};
use crate::data::fields::{MISSING, spec_sections};
use crate::data::filter::{FilterCriteria, filtered_indices};
use crate::data::model::{HardwareKind, HardwareRecord};
use crate::data::paginate::paginate;
use crate::state::{AppState, SELECTOR_PAGE_SIZE, Slot};
use crate::theme::ACCENT;

// ---------------------------------------------------------------------------
// Compare view (central panel)
// ---------------------------------------------------------------------------

/// Render the side-by-side comparison: kind switcher, two record pickers,
/// benchmark tabs with normalized bars, and the full spec table.
pub fn compare_view(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for kind in [HardwareKind::Cpu, HardwareKind::Gpu] {
            if ui
                .selectable_label(state.compare.kind == kind, kind.label())
                .clicked()
            {
                state.compare.set_kind(kind);
            }
        }
    });
    ui.separator();

    let kind = state.compare.kind;
    let slot_name = |selection: Option<usize>| {
        selection
            .and_then(|i| state.catalog(kind).catalog.records.get(i))
            .map(|r| r.name().to_string())
    };
    let a_name = slot_name(state.compare.a);
    let b_name = slot_name(state.compare.b);

    let mut open_slot = None;
    ui.horizontal(|ui: &mut Ui| {
        picker_button(ui, kind, a_name.as_deref(), Slot::A, &mut open_slot);
        ui.label("vs");
        picker_button(ui, kind, b_name.as_deref(), Slot::B, &mut open_slot);
    });
    if let Some(slot) = open_slot {
        state.compare.open_selector(slot);
    }
    ui.separator();

    let records = &state.catalog(kind).catalog.records;
    let pair = state
        .compare
        .a
        .zip(state.compare.b)
        .and_then(|(ai, bi)| Some((records.get(ai)?.clone(), records.get(bi)?.clone())));

    match pair {
        None => {
            ui.label(format!(
                "Pick two {}s to compare their benchmarks and specs.",
                kind.label()
            ));
        }
        Some((a, b)) => {
            let tabs = benchmark_tabs(kind);
            state.compare.tab = state.compare.tab.min(tabs.len() - 1);
            ui.horizontal(|ui: &mut Ui| {
                for (i, tab) in tabs.iter().enumerate() {
                    if ui.selectable_label(state.compare.tab == i, tab.label).clicked() {
                        state.compare.tab = i;
                    }
                }
            });
            ui.add_space(4.0);

            let tab_index = state.compare.tab;
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for (row, &key) in tabs[tab_index].keys.iter().enumerate() {
                        benchmark_row(ui, &a, &b, key, tab_index, row);
                    }
                    ui.separator();
                    spec_table(ui, &a, &b, kind);
                });
        }
    }

    selector_window(ui.ctx(), state);
}

fn picker_button(
    ui: &mut Ui,
    kind: HardwareKind,
    name: Option<&str>,
    slot: Slot,
    open_slot: &mut Option<Slot>,
) {
    let label = match name {
        Some(name) => name.to_string(),
        None => format!("Select a {}…", kind.label()),
    };
    if ui.button(label).clicked() {
        *open_slot = Some(slot);
    }
}

// ---------------------------------------------------------------------------
// Benchmark bars
// ---------------------------------------------------------------------------

/// One benchmark row: the two raw values (dash when absent) above a pair of
/// horizontal bars whose widths are the max-normalized ratios.
fn benchmark_row(
    ui: &mut Ui,
    a: &HardwareRecord,
    b: &HardwareRecord,
    key: BenchmarkKey,
    tab: usize,
    row: usize,
) {
    // The pickers are per-kind, so a kind mismatch cannot reach this point.
    let Ok(outcome) = compare(a, b, key) else {
        return;
    };

    ui.label(RichText::new(key.label()).strong());
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{}: {}", a.name(), format_value(outcome.a_value)));
        ui.separator();
        ui.label(format!("{}: {}", b.name(), format_value(outcome.b_value)));
    });

    let (a_color, b_color) = if outcome.a_ratio >= outcome.b_ratio {
        (ACCENT, Color32::GRAY)
    } else {
        (Color32::GRAY, ACCENT)
    };
    let a_bars = BarChart::new(vec![Bar::new(1.0, outcome.a_ratio).width(0.6)])
        .horizontal()
        .color(a_color)
        .name(a.name());
    let b_bars = BarChart::new(vec![Bar::new(0.0, outcome.b_ratio).width(0.6)])
        .horizontal()
        .color(b_color)
        .name(b.name());

    Plot::new(("benchmark_bars", tab, row))
        .height(64.0)
        .include_x(0.0)
        .include_x(1.05)
        .include_y(-0.6)
        .include_y(1.6)
        .show_axes([false, false])
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(a_bars);
            plot_ui.bar_chart(b_bars);
        });
    ui.add_space(8.0);
}

fn format_value(value: Option<f64>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.2}"),
    }
}

// ---------------------------------------------------------------------------
// Spec table
// ---------------------------------------------------------------------------

/// Side-by-side spec table over every detail-sheet section.
fn spec_table(ui: &mut Ui, a: &HardwareRecord, b: &HardwareRecord, kind: HardwareKind) {
    ui.strong("Specifications");
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(150.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Spec");
            });
            header.col(|ui| {
                ui.strong(a.name());
            });
            header.col(|ui| {
                ui.strong(b.name());
            });
        })
        .body(|mut body| {
            for section in spec_sections(kind) {
                body.row(22.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.strong(section.title);
                    });
                    table_row.col(|_| {});
                    table_row.col(|_| {});
                });
                for spec in section.rows {
                    body.row(18.0, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(spec.label);
                        });
                        table_row.col(|ui| {
                            ui.label(spec.display(a));
                        });
                        table_row.col(|ui| {
                            ui.label(spec.display(b));
                        });
                    });
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Selector window
// ---------------------------------------------------------------------------

/// The searchable, paginated record picker opened by either slot button.
fn selector_window(ctx: &egui::Context, state: &mut AppState) {
    if state.compare.picking.is_none() {
        return;
    }
    let kind = state.compare.kind;

    let criteria = FilterCriteria {
        text: (!state.compare.selector_search.is_empty())
            .then(|| state.compare.selector_search.clone()),
        ..FilterCriteria::default()
    };
    let records = &state.catalog(kind).catalog.records;
    let matches = filtered_indices(records, &criteria);
    let page = paginate(&matches, SELECTOR_PAGE_SIZE, state.compare.selector_page);
    let items: Vec<(usize, String)> = page
        .visible
        .iter()
        .map(|&i| (i, records[i].name().to_string()))
        .collect();
    let has_more = page.has_more;

    let mut open = true;
    let mut picked = None;
    let mut load_more = false;
    let mut search = state.compare.selector_search.clone();
    let mut search_changed = false;

    Window::new(format!("Select a {}", kind.label()))
        .id(egui::Id::new("compare_selector"))
        .open(&mut open)
        .collapsible(false)
        .default_width(320.0)
        .show(ctx, |ui: &mut Ui| {
            if ui.text_edit_singleline(&mut search).changed() {
                search_changed = true;
            }
            ui.separator();
            ScrollArea::vertical()
                .max_height(400.0)
                .show(ui, |ui: &mut Ui| {
                    if items.is_empty() {
                        ui.label("No matches.");
                    }
                    for (idx, name) in &items {
                        if ui.selectable_label(false, name).clicked() {
                            picked = Some(*idx);
                        }
                    }
                    if has_more {
                        ui.vertical_centered(|ui: &mut Ui| {
                            if ui.button("Load more").clicked() {
                                load_more = true;
                            }
                        });
                    }
                });
        });

    if search_changed {
        state.compare.selector_search = search;
        // New search, new first page.
        state.compare.selector_page = 1;
    }
    if load_more {
        state.compare.selector_page += 1;
    }
    if let Some(idx) = picked {
        state.compare.pick(idx);
    }
    if !open {
        state.compare.picking = None;
    }
}
