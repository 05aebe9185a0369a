use crate::color::CategoryColors;
use crate::data::filter::{FilterCriteria, filtered_indices};
use crate::data::loader::{self, LoadOutcome, ParseWarning};
use crate::data::model::{Catalog, HardwareKind};
use crate::theme::Theme;

/// Records revealed per "load more" press on the catalog list.
pub const CATALOG_PAGE_SIZE: usize = 10;

/// Records per page of the compare selector window.
pub const SELECTOR_PAGE_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Catalog state – one browsable list
// ---------------------------------------------------------------------------

/// Everything one catalog screen owns: the loaded records, the active
/// filter, the cached filtered view, and the pagination cursor.
pub struct CatalogState {
    pub catalog: Catalog,
    pub criteria: FilterCriteria,
    /// Indices of records passing `criteria`, in source order (cached).
    pub visible_indices: Vec<usize>,
    /// 1-based page of the prefix-growing list.
    pub page: usize,
    /// Record index whose detail window is open, if any.
    pub detail: Option<usize>,
    /// Rows skipped during the last load.
    pub warnings: Vec<ParseWarning>,
    /// Badge colours keyed by category, rebuilt per load.
    pub colors: CategoryColors,
}

impl CatalogState {
    pub fn new(kind: HardwareKind) -> Self {
        CatalogState {
            catalog: Catalog::empty(kind),
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            page: 1,
            detail: None,
            warnings: Vec::new(),
            colors: CategoryColors::default(),
        }
    }

    /// Ingest a (re)loaded catalog: filters are kept, the view is rebuilt,
    /// and selections into the old record list are dropped.
    pub fn set_catalog(&mut self, outcome: LoadOutcome) {
        self.colors = CategoryColors::new(&outcome.catalog.categories);
        self.catalog = outcome.catalog;
        self.warnings = outcome.warnings;
        self.detail = None;
        self.page = 1;
        self.refilter();
    }

    /// The single mutation path for criteria. Any change resets the list
    /// to its first page so the visible prefix always matches the filter.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.page = 1;
        self.refilter();
    }

    /// Reveal the next page of the filtered view.
    pub fn load_more(&mut self) {
        self.page += 1;
    }

    fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.catalog.records, &self.criteria);
    }
}

// ---------------------------------------------------------------------------
// Compare state
// ---------------------------------------------------------------------------

/// Which side of the comparison a selector is picking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

/// The compare screen: two picked records (indices into the active kind's
/// catalog), the active benchmark tab, and the selector-window state.
pub struct CompareState {
    pub kind: HardwareKind,
    pub a: Option<usize>,
    pub b: Option<usize>,
    pub tab: usize,
    /// `Some(slot)` while the selector window is open.
    pub picking: Option<Slot>,
    pub selector_search: String,
    pub selector_page: usize,
}

impl CompareState {
    fn new() -> Self {
        CompareState {
            kind: HardwareKind::Cpu,
            a: None,
            b: None,
            tab: 0,
            picking: None,
            selector_search: String::new(),
            selector_page: 1,
        }
    }

    /// Switch the comparison kind. Selections never survive the switch, so
    /// a CPU pick can never face a GPU pick.
    pub fn set_kind(&mut self, kind: HardwareKind) {
        if kind == self.kind {
            return;
        }
        self.kind = kind;
        self.a = None;
        self.b = None;
        self.tab = 0;
        self.picking = None;
    }

    /// Open the selector window for one slot with a fresh search.
    pub fn open_selector(&mut self, slot: Slot) {
        self.picking = Some(slot);
        self.selector_search.clear();
        self.selector_page = 1;
    }

    /// Assign the picked record to the open slot and close the selector.
    pub fn pick(&mut self, record_index: usize) {
        match self.picking {
            Some(Slot::A) => self.a = Some(record_index),
            Some(Slot::B) => self.b = Some(record_index),
            None => {}
        }
        self.picking = None;
    }

    /// Drop selections that point past the end of a freshly loaded catalog.
    pub fn clamp_to(&mut self, catalog_len: usize) {
        if self.a.is_some_and(|i| i >= catalog_len) {
            self.a = None;
        }
        if self.b.is_some_and(|i| i >= catalog_len) {
            self.b = None;
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Catalog(HardwareKind),
    Compare,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub cpu: CatalogState,
    pub gpu: CatalogState,
    pub view: View,
    pub compare: CompareState,
    pub theme: Theme,
    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            cpu: CatalogState::new(HardwareKind::Cpu),
            gpu: CatalogState::new(HardwareKind::Gpu),
            view: View::Catalog(HardwareKind::Cpu),
            compare: CompareState::new(),
            theme: Theme::default(),
            status_message: None,
        }
    }
}

impl AppState {
    pub fn catalog(&self, kind: HardwareKind) -> &CatalogState {
        match kind {
            HardwareKind::Cpu => &self.cpu,
            HardwareKind::Gpu => &self.gpu,
        }
    }

    pub fn catalog_mut(&mut self, kind: HardwareKind) -> &mut CatalogState {
        match kind {
            HardwareKind::Cpu => &mut self.cpu,
            HardwareKind::Gpu => &mut self.gpu,
        }
    }

    /// Parse the embedded datasets into both catalogs. Called at startup
    /// and from File → Reload; a corrupt asset degrades to an empty list.
    pub fn load_bundled(&mut self) {
        for kind in [HardwareKind::Cpu, HardwareKind::Gpu] {
            let outcome = loader::load_bundled(kind);
            log::info!("loaded {} bundled {kind} records", outcome.catalog.len());
            self.catalog_mut(kind).set_catalog(outcome);
        }
        self.compare.clamp_to(self.catalog(self.compare.kind).catalog.len());
        self.status_message = None;
    }

    /// Install a catalog loaded from a user-picked file.
    pub fn set_loaded(&mut self, kind: HardwareKind, outcome: LoadOutcome) {
        let total = outcome.catalog.len();
        let skipped = outcome.warnings.len();
        self.catalog_mut(kind).set_catalog(outcome);
        if self.compare.kind == kind {
            self.compare.clamp_to(total);
        }
        self.status_message = Some(if skipped == 0 {
            format!("Loaded {total} {kind} records")
        } else {
            format!("Loaded {total} {kind} records ({skipped} rows skipped)")
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{GpuRecord, HardwareRecord};

    fn gpu_catalog(n: usize) -> LoadOutcome {
        let records = (0..n)
            .map(|i| {
                HardwareRecord::Gpu(GpuRecord {
                    id: format!("g{i}"),
                    name: format!("Card {i}"),
                    brand: "NVIDIA".to_string(),
                    category: "Desktop".to_string(),
                    ..GpuRecord::default()
                })
            })
            .collect();
        LoadOutcome {
            catalog: Catalog::from_records(HardwareKind::Gpu, records),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn criteria_changes_reset_the_page() {
        let mut state = CatalogState::new(HardwareKind::Gpu);
        state.set_catalog(gpu_catalog(30));
        state.load_more();
        state.load_more();
        assert_eq!(state.page, 3);

        state.set_criteria(FilterCriteria {
            text: Some("card 1".to_string()),
            ..FilterCriteria::default()
        });
        assert_eq!(state.page, 1);

        // Setting identical criteria is not a change and keeps the page.
        state.load_more();
        state.set_criteria(state.criteria.clone());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn reloading_drops_the_open_detail() {
        let mut state = CatalogState::new(HardwareKind::Gpu);
        state.set_catalog(gpu_catalog(5));
        state.detail = Some(4);
        state.set_catalog(gpu_catalog(3));
        assert_eq!(state.detail, None);
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn switching_compare_kind_clears_selections() {
        let mut compare = CompareState::new();
        compare.open_selector(Slot::A);
        compare.pick(2);
        assert_eq!(compare.a, Some(2));
        assert_eq!(compare.picking, None);

        compare.set_kind(HardwareKind::Gpu);
        assert_eq!(compare.a, None);
        assert_eq!(compare.b, None);
        assert_eq!(compare.tab, 0);
    }

    #[test]
    fn stale_selections_are_clamped_after_reload() {
        let mut compare = CompareState::new();
        compare.open_selector(Slot::B);
        compare.pick(9);
        compare.clamp_to(4);
        assert_eq!(compare.b, None);

        compare.open_selector(Slot::B);
        compare.pick(2);
        compare.clamp_to(4);
        assert_eq!(compare.b, Some(2));
    }
}
