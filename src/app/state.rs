// SimHire - app/state.rs
//
// Application state management. Holds the loaded catalog, filter state,
// range-selector capture and selection.
// Owned by the eframe::App implementation.
//
// The visible subset is never stored: `visible_indices` recomputes it from
// the catalog and filter state on every call.

use crate::app::catalog_mgr::{CatalogSource, LoadedCatalog};
use crate::core::catalog::salary_domain;
use crate::core::filter::{self, FilterState};
use crate::core::model::ListingRecord;
use crate::core::range::RangeSelector;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Loaded listing records. Immutable until the catalog is replaced.
    pub records: Vec<ListingRecord>,

    /// Where `records` came from.
    pub catalog_source: CatalogSource,

    /// Current filter configuration.
    pub filter_state: FilterState,

    /// Pointer capture of the salary range track.
    pub range_selector: RangeSelector,

    /// Index into `records` of the selected listing.
    pub selected: Option<usize>,

    /// Floor for the salary domain (from config).
    pub salary_domain_floor: u32,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (skipped records, config problems).
    pub warnings: Vec<String>,

    /// Whether to show the warnings window.
    pub show_warnings: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from a loaded catalog.
    pub fn new(loaded: LoadedCatalog, salary_domain_floor: u32, debug_mode: bool) -> Self {
        let mut state = Self {
            records: Vec::new(),
            catalog_source: CatalogSource::Builtin,
            filter_state: FilterState::new(salary_domain_floor),
            range_selector: RangeSelector::new(),
            selected: None,
            salary_domain_floor,
            status_message: String::new(),
            warnings: Vec::new(),
            show_warnings: false,
            show_about: false,
            dark_mode: true,
            debug_mode,
        };
        state.replace_catalog(loaded);
        state
    }

    /// Swap in a newly loaded catalog. Filters reset to the new salary domain
    /// and the selection is cleared.
    pub fn replace_catalog(&mut self, loaded: LoadedCatalog) {
        let domain = salary_domain(&loaded.records, self.salary_domain_floor);
        self.records = loaded.records;
        self.catalog_source = loaded.source;
        self.filter_state = FilterState::new(domain);
        self.range_selector.release();
        self.selected = None;
        self.warnings
            .extend(loaded.errors.iter().map(|e| e.to_string()));
        self.status_message = format!(
            "Loaded {} listings from {}.",
            self.records.len(),
            self.catalog_source.describe()
        );
        tracing::info!(
            records = self.records.len(),
            salary_domain = domain,
            warnings = loaded.errors.len(),
            "Catalog ready"
        );
    }

    /// Indices into `records` of the listings passing the current filters,
    /// in catalog order.
    pub fn visible_indices(&self) -> Vec<usize> {
        filter::apply_filters(&self.records, &self.filter_state)
    }

    /// The selected listing, if one is selected and still passes the filters.
    pub fn selected_record(&self) -> Option<&ListingRecord> {
        let record = self.records.get(self.selected?)?;
        filter::included(record, &self.filter_state).then_some(record)
    }

    /// Clear every filter.
    pub fn reset_filters(&mut self) {
        self.filter_state.reset();
        self.range_selector.release();
        tracing::debug!("Filters reset");
    }

    /// Record a warning for display and logging.
    pub fn push_warning(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog_mgr::load_catalog;
    use crate::core::filter::CategoryFilter;
    use crate::core::model::Category;

    fn state() -> AppState {
        AppState::new(load_catalog(None), 200, false)
    }

    #[test]
    fn test_initial_state_shows_whole_catalog() {
        let state = state();
        assert_eq!(state.visible_indices().len(), state.records.len());
        let top = state.records.iter().map(|r| r.price).max().unwrap();
        assert_eq!(state.filter_state.salary.domain_max(), top.max(200));
    }

    #[test]
    fn test_visible_recomputed_after_filter_change() {
        let mut state = state();
        let all = state.visible_indices().len();
        state.filter_state.category = CategoryFilter::Only(Category::Tryout);
        let tryouts = state.visible_indices();
        assert!(tryouts.len() < all);
        assert!(tryouts
            .iter()
            .all(|&i| state.records[i].category == Category::Tryout));
        state.reset_filters();
        assert_eq!(state.visible_indices().len(), all);
    }

    #[test]
    fn test_selection_hidden_when_filtered_out() {
        let mut state = state();
        let idx = state
            .records
            .iter()
            .position(|r| r.category == Category::Apprenticeship)
            .unwrap();
        state.selected = Some(idx);
        assert!(state.selected_record().is_some());
        state.filter_state.category = CategoryFilter::Only(Category::Tryout);
        assert!(state.selected_record().is_none());
    }
}
