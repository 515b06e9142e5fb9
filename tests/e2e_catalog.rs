// SimHire - tests/e2e_catalog.rs
//
// End-to-end tests for the catalog -> filter -> visible-listings pipeline.
//
// These exercise real catalog files on disk, the embedded catalog, the
// filter engine and the range-selector state machine through the public
// library surface, with no mocks.

use simhire::app::catalog_mgr::{load_catalog, CatalogSource};
use simhire::app::state::AppState;
use simhire::core::catalog::{build_catalog, parse_catalog_toml};
use simhire::core::filter::{apply_filters, included, visible, CategoryFilter, FilterState, SalaryRange};
use simhire::core::model::{Category, Level, ListingRecord, WorkSchedule, WorkStyle};
use simhire::core::range::{Handle, RangeSelector};
use std::io::Write;
use std::path::Path;

// =============================================================================
// Helpers
// =============================================================================

fn builtin() -> Vec<ListingRecord> {
    simhire::core::catalog::load_builtin_catalog()
}

fn two_record_catalog() -> Vec<ListingRecord> {
    let content = r#"
[[listing]]
id = "first"
title = "Tryout"
organization = "A"
price = 299
category = "Tryout"

[[listing]]
id = "second"
title = "Apprenticeship"
organization = "B"
price = 499
category = "Apprenticeship"
"#;
    let path = Path::new("two.toml");
    let (records, errors) = build_catalog(parse_catalog_toml(content, path).unwrap(), path);
    assert!(errors.is_empty());
    records
}

fn full_filter(records: &[ListingRecord]) -> FilterState {
    FilterState::new(simhire::core::catalog::salary_domain(records, 200))
}

// =============================================================================
// Projection properties
// =============================================================================

/// Unrestricted filters show the entire catalog in source order.
#[test]
fn e2e_unrestricted_filter_shows_everything() {
    let records = builtin();
    let filter = full_filter(&records);
    let shown = visible(&records, &filter);
    assert_eq!(shown.len(), records.len());
    for (shown, original) in shown.iter().zip(&records) {
        assert_eq!(shown.id, original.id);
    }
}

/// Lowercase category text selects only the matching record.
#[test]
fn e2e_tryout_category_scenario() {
    let records = two_record_catalog();
    let mut filter = full_filter(&records);
    filter.category = "tryout".parse::<CategoryFilter>().unwrap();
    let shown = visible(&records, &filter);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "first");
}

/// A record failing any single active predicate is not visible.
#[test]
fn e2e_each_predicate_excludes_on_its_own() {
    let records = builtin();
    let base = full_filter(&records);

    let mut single_filters: Vec<FilterState> = Vec::new();

    let mut f = base.clone();
    f.category = CategoryFilter::Only(Category::Apprenticeship);
    single_filters.push(f);

    let mut f = base.clone();
    f.levels.insert(Level::Beginner);
    single_filters.push(f);

    let mut f = base.clone();
    f.salary = SalaryRange::new(200, 500, base.salary.domain_max());
    single_filters.push(f);

    let mut f = base.clone();
    f.schedules.insert(WorkSchedule::FullTime);
    single_filters.push(f);

    let mut f = base.clone();
    f.work_styles.insert(WorkStyle::Remote);
    single_filters.push(f);

    let mut f = base.clone();
    f.location = "houston".to_string();
    single_filters.push(f);

    let mut f = base.clone();
    f.text_search = "figma".to_string();
    single_filters.push(f);

    // Combining all of them must be the intersection of each alone.
    let mut combined = base.clone();
    for f in &single_filters {
        combined.category = if f.category != CategoryFilter::All {
            f.category
        } else {
            combined.category
        };
        combined.levels.extend(f.levels.iter().copied());
        combined.schedules.extend(f.schedules.iter().copied());
        combined.work_styles.extend(f.work_styles.iter().copied());
        if !f.salary.is_full() {
            combined.salary = f.salary;
        }
        if !f.location.is_empty() {
            combined.location = f.location.clone();
        }
        if !f.text_search.is_empty() {
            combined.text_search = f.text_search.clone();
        }
    }

    for f in &single_filters {
        let shown = apply_filters(&records, f);
        assert!(shown.len() < records.len(), "filter excluded nothing: {f:?}");
    }

    for (idx, record) in records.iter().enumerate() {
        let passes_all = single_filters.iter().all(|f| included(record, f));
        assert_eq!(included(record, &combined), passes_all, "record {}", record.id);
        assert_eq!(apply_filters(&records, &combined).contains(&idx), passes_all);
    }
}

/// Projecting twice with unchanged state gives the same result.
#[test]
fn e2e_projection_is_idempotent() {
    let records = builtin();
    let mut filter = full_filter(&records);
    filter.levels.insert(Level::Advanced);
    filter.text_search = "design".to_string();
    assert_eq!(apply_filters(&records, &filter), apply_filters(&records, &filter));
}

// =============================================================================
// Range selector
// =============================================================================

/// Domain [0, 200], min handle at half the track.
#[test]
fn e2e_range_selector_half_track() {
    let mut selector = RangeSelector::new();

    let mut wide = SalaryRange::new(60, 140, 200);
    selector.press(Handle::Min);
    selector.drag_to(0.5, &mut wide);
    selector.release();
    assert_eq!((wide.min(), wide.max()), (100, 140));

    // The active handle stops at the opposing one; the opposing one stays.
    let mut narrow = SalaryRange::new(0, 80, 200);
    selector.press(Handle::Min);
    selector.drag_to(0.5, &mut narrow);
    selector.release();
    assert_eq!((narrow.min(), narrow.max()), (80, 80));
}

/// Dragging the price range through the app state narrows the visible set.
#[test]
fn e2e_range_drag_filters_listings() {
    let mut state = AppState::new(load_catalog(None), 200, false);
    let domain = state.filter_state.salary.domain_max();

    assert!(state.range_selector.press(Handle::Max));
    state
        .range_selector
        .drag_to(300.0 / domain as f32, &mut state.filter_state.salary);
    state.range_selector.release();

    let max = state.filter_state.salary.max();
    let shown = state.visible_indices();
    assert!(!shown.is_empty());
    assert!(shown.len() < state.records.len());
    assert!(shown.iter().all(|&i| state.records[i].price <= max));
}

// =============================================================================
// Catalog files
// =============================================================================

/// A user TOML catalog with one bad record loads the rest and reports the bad one.
#[test]
fn e2e_user_catalog_with_bad_record() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[listing]]
id = "ok"
title = "Support Engineer Tryout"
organization = "Acme"
price = 99
level = "Beginner"
category = "Tryout"

[[listing]]
id = "bad"
title = "Broken"
organization = "Acme"
price = 10
category = "Bootcamp"
"#
    )
    .unwrap();

    let loaded = load_catalog(Some(file.path()));
    assert_eq!(loaded.source, CatalogSource::File(file.path().to_path_buf()));
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.errors.len(), 1);

    let state = AppState::new(loaded, 200, false);
    assert_eq!(state.warnings.len(), 1);
    assert_eq!(state.filter_state.salary.domain_max(), 200);
    assert_eq!(state.visible_indices(), vec![0]);
}

/// A JSON catalog loads through the same pipeline.
#[test]
fn e2e_user_catalog_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"listing": [
            {{"id": "j1", "title": "Analyst", "company": "Netflix", "price": 199, "type": "Tryout", "skills": ["SQL"]}},
            {{"id": "j2", "title": "PM", "company": "Spotify", "price": 699, "type": "Apprenticeship"}}
        ]}}"#
    )
    .unwrap();

    let loaded = load_catalog(Some(file.path()));
    assert!(loaded.errors.is_empty(), "{:?}", loaded.errors);
    let records = loaded.records;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].organization, "Netflix");
    assert_eq!(records[0].tags, vec!["SQL".to_string()]);

    let mut filter = full_filter(&records);
    filter.text_search = "sql".to_string();
    assert_eq!(apply_filters(&records, &filter), vec![0]);
}
