// SimHire - core/filter.rs
//
// Composable filter engine for listing records.
// All active filters are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Category, EmploymentType, Level, ListingRecord, WorkSchedule, WorkStyle};
use crate::util::constants;
use crate::util::error::FilterError;
use std::collections::HashSet;
use std::str::FromStr;

// =============================================================================
// Category filter
// =============================================================================

/// Tri-valued category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = FilterError;

    /// Accepts "all" or any category name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.trim().parse::<Category>().map(CategoryFilter::Only)
    }
}

// =============================================================================
// Salary range
// =============================================================================

/// Inclusive salary/price range within `[SALARY_DOMAIN_MIN, domain_max]`.
///
/// Invariant: `min <= max` after every update. An update that would cross the
/// opposing bound stops at it; the opposing bound itself never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    min: u32,
    max: u32,
    domain_max: u32,
}

impl SalaryRange {
    /// Full range over `[SALARY_DOMAIN_MIN, domain_max]`.
    pub fn full(domain_max: u32) -> Self {
        let domain_max = domain_max.max(constants::SALARY_DOMAIN_MIN);
        Self {
            min: constants::SALARY_DOMAIN_MIN,
            max: domain_max,
            domain_max,
        }
    }

    /// Range with explicit bounds. Bounds are clamped into the domain and an
    /// inverted pair collapses onto `max`.
    pub fn new(min: u32, max: u32, domain_max: u32) -> Self {
        let mut range = Self::full(domain_max);
        range.set_max(max);
        range.set_min(min);
        range
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn domain_max(&self) -> u32 {
        self.domain_max
    }

    /// Move the lower bound, stopping at the current upper bound.
    /// Returns true if the value changed.
    pub fn set_min(&mut self, value: u32) -> bool {
        let clamped = value.max(constants::SALARY_DOMAIN_MIN).min(self.max);
        let changed = clamped != self.min;
        self.min = clamped;
        changed
    }

    /// Move the upper bound, stopping at the current lower bound and the
    /// domain end. Returns true if the value changed.
    pub fn set_max(&mut self, value: u32) -> bool {
        let clamped = value.min(self.domain_max).max(self.min);
        let changed = clamped != self.max;
        self.max = clamped;
        changed
    }

    /// True when the range spans the whole domain.
    pub fn is_full(&self) -> bool {
        self.min == constants::SALARY_DOMAIN_MIN && self.max == self.domain_max
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// =============================================================================
// Filter state
// =============================================================================

/// Complete filter state. All fields are AND-combined when applied.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Category selection.
    pub category: CategoryFilter,

    /// Levels to include (empty = all).
    pub levels: HashSet<Level>,

    /// Inclusive price/salary range.
    pub salary: SalaryRange,

    /// Work schedules to include (empty = all).
    pub schedules: HashSet<WorkSchedule>,

    /// Employment types to include (empty = all).
    pub employment_types: HashSet<EmploymentType>,

    /// Work styles to include (empty = all).
    pub work_styles: HashSet<WorkStyle>,

    /// Location substring (case-insensitive). Empty = no filter.
    pub location: String,

    /// Substring search over title, organization and tags (case-insensitive).
    /// Empty = no filter.
    pub text_search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(constants::DEFAULT_SALARY_DOMAIN_FLOOR)
    }
}

impl FilterState {
    /// Unrestricted state over a salary domain of `[0, domain_max]`.
    pub fn new(domain_max: u32) -> Self {
        Self {
            category: CategoryFilter::All,
            levels: HashSet::new(),
            salary: SalaryRange::full(domain_max),
            schedules: HashSet::new(),
            employment_types: HashSet::new(),
            work_styles: HashSet::new(),
            location: String::new(),
            text_search: String::new(),
        }
    }

    /// Returns true if no filter excludes anything.
    pub fn is_unrestricted(&self) -> bool {
        self.category == CategoryFilter::All
            && self.levels.is_empty()
            && self.salary.is_full()
            && self.schedules.is_empty()
            && self.employment_types.is_empty()
            && self.work_styles.is_empty()
            && self.location.trim().is_empty()
            && self.text_search.trim().is_empty()
    }

    /// Clear every filter, keeping the salary domain.
    pub fn reset(&mut self) {
        *self = Self::new(self.salary.domain_max());
    }

    /// Replace the level selection from a comma-separated list such as
    /// "beginner,advanced". "all" or an empty string clears the selection.
    pub fn set_levels_from_str(&mut self, list: &str) -> Result<(), FilterError> {
        let mut levels = HashSet::new();
        for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if part.eq_ignore_ascii_case("all") {
                levels.clear();
                break;
            }
            levels.insert(part.parse::<Level>()?);
        }
        self.levels = levels;
        Ok(())
    }
}

/// Insert `value` if absent, remove it if present.
pub fn toggle<T: std::hash::Hash + Eq>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Apply filters to a slice of records, returning indices of matching records.
///
/// Indices are in source order. Nothing is copied or re-sorted.
pub fn apply_filters(records: &[ListingRecord], filter: &FilterState) -> Vec<usize> {
    if filter.is_unrestricted() {
        return (0..records.len()).collect();
    }

    let needles = Needles::new(filter);

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(record, filter, &needles))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records matching the filter, in source order.
pub fn visible<'a>(records: &'a [ListingRecord], filter: &FilterState) -> Vec<&'a ListingRecord> {
    apply_filters(records, filter)
        .into_iter()
        .filter_map(|idx| records.get(idx))
        .collect()
}

/// Decide whether a single record passes every active filter.
pub fn included(record: &ListingRecord, filter: &FilterState) -> bool {
    matches_all(record, filter, &Needles::new(filter))
}

/// Lowercased search strings, computed once per pass.
struct Needles {
    location: String,
    text: String,
}

impl Needles {
    fn new(filter: &FilterState) -> Self {
        Self {
            location: filter.location.trim().to_lowercase(),
            text: filter.text_search.trim().to_lowercase(),
        }
    }
}

fn matches_all(record: &ListingRecord, filter: &FilterState, needles: &Needles) -> bool {
    if !filter.category.matches(record.category) {
        return false;
    }

    if !filter.levels.is_empty() && !filter.levels.contains(&record.level) {
        return false;
    }

    if !filter.salary.contains(record.price) {
        return false;
    }

    // Records that do not state a value fail an active filter on that field.
    if !set_allows(&filter.schedules, record.schedule.as_ref()) {
        return false;
    }
    if !set_allows(&filter.employment_types, record.employment.as_ref()) {
        return false;
    }
    if !set_allows(&filter.work_styles, record.work_style.as_ref()) {
        return false;
    }

    if !needles.location.is_empty() && !record.location.to_lowercase().contains(&needles.location)
    {
        return false;
    }

    if !needles.text.is_empty() && !text_matches(record, &needles.text) {
        return false;
    }

    true
}

fn set_allows<T: std::hash::Hash + Eq>(set: &HashSet<T>, value: Option<&T>) -> bool {
    if set.is_empty() {
        return true;
    }
    value.is_some_and(|v| set.contains(v))
}

fn text_matches(record: &ListingRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.organization.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
