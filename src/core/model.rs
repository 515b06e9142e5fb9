// SimHire - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::error::FilterError;
use chrono::NaiveDate;
use std::str::FromStr;

// =============================================================================
// Listing record
// =============================================================================

/// A single program or job listing.
///
/// Built once from catalog data at load time and never mutated afterwards.
/// Filtering and display only ever borrow records.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Listing title (e.g. "UX Designer Tryout").
    pub title: String,

    /// Organizing entity (company) name.
    pub organization: String,

    /// Price of the program or salary of the job. The range filter applies here.
    pub price: u32,

    /// Free-form duration label ("2 weeks", "3 months").
    pub duration: String,

    /// Experience level.
    pub level: Level,

    /// Location label ("Remote", "Houston, TX").
    pub location: String,

    /// Start date, if given and parseable.
    pub start_date: Option<NaiveDate>,

    /// Free-text description.
    pub description: String,

    /// Skill tags.
    pub tags: Vec<String>,

    /// Tryout or apprenticeship.
    pub category: Category,

    /// Work schedule, when the listing states one.
    pub schedule: Option<WorkSchedule>,

    /// Employment type, when the listing states one.
    pub employment: Option<EmploymentType>,

    /// Work style, when the listing states one.
    pub work_style: Option<WorkStyle>,

    /// Average participant rating (display only).
    pub rating: Option<f32>,

    /// Number of past participants or applicants (display only).
    pub participants: Option<u32>,
}

/// Lowercase and drop separators so "Full-Time", "full_time" and "fulltime"
/// compare equal.
fn normalise_key(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// Category
// =============================================================================

/// Listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tryout,
    Apprenticeship,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Tryout, Category::Apprenticeship]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Tryout => "Tryout",
            Category::Apprenticeship => "Apprenticeship",
        }
    }
}

impl FromStr for Category {
    type Err = FilterError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "tryout" => Ok(Category::Tryout),
            "apprenticeship" => Ok(Category::Apprenticeship),
            _ => Err(FilterError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Level
// =============================================================================

/// Experience level, ordered from entry level upwards.
///
/// Catalog values that match no level become `Unknown`, which never passes
/// an active level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    Unknown,
}

impl Level {
    /// Selectable levels in display order. `Unknown` is not selectable.
    pub fn all() -> &'static [Level] {
        &[Level::Beginner, Level::Intermediate, Level::Advanced]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Unknown => "Unknown",
        }
    }

    /// Parse a catalog level string, mapping anything unrecognised to `Unknown`.
    pub fn from_catalog(s: &str) -> Level {
        s.parse().unwrap_or(Level::Unknown)
    }
}

impl FromStr for Level {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(FilterError::UnknownLevel {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Work schedule / employment type / work style
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkSchedule {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl WorkSchedule {
    pub fn all() -> &'static [WorkSchedule] {
        &[
            WorkSchedule::FullTime,
            WorkSchedule::PartTime,
            WorkSchedule::Contract,
            WorkSchedule::Internship,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkSchedule::FullTime => "Full-time",
            WorkSchedule::PartTime => "Part-time",
            WorkSchedule::Contract => "Contract",
            WorkSchedule::Internship => "Internship",
        }
    }
}

impl FromStr for WorkSchedule {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "fulltime" => Ok(WorkSchedule::FullTime),
            "parttime" => Ok(WorkSchedule::PartTime),
            "contract" => Ok(WorkSchedule::Contract),
            "internship" => Ok(WorkSchedule::Internship),
            _ => Err(FilterError::UnknownOption {
                field: "work schedule",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    Permanent,
    Contract,
    Freelance,
    Temporary,
}

impl EmploymentType {
    pub fn all() -> &'static [EmploymentType] {
        &[
            EmploymentType::Permanent,
            EmploymentType::Contract,
            EmploymentType::Freelance,
            EmploymentType::Temporary,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::Permanent => "Permanent",
            EmploymentType::Contract => "Contract",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Temporary => "Temporary",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "permanent" => Ok(EmploymentType::Permanent),
            "contract" => Ok(EmploymentType::Contract),
            "freelance" => Ok(EmploymentType::Freelance),
            "temporary" => Ok(EmploymentType::Temporary),
            _ => Err(FilterError::UnknownOption {
                field: "employment type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkStyle {
    Remote,
    Hybrid,
    OnSite,
}

impl WorkStyle {
    pub fn all() -> &'static [WorkStyle] {
        &[WorkStyle::Remote, WorkStyle::Hybrid, WorkStyle::OnSite]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkStyle::Remote => "Remote",
            WorkStyle::Hybrid => "Hybrid",
            WorkStyle::OnSite => "On-site",
        }
    }
}

impl FromStr for WorkStyle {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalise_key(s).as_str() {
            "remote" => Ok(WorkStyle::Remote),
            "hybrid" => Ok(WorkStyle::Hybrid),
            "onsite" | "office" => Ok(WorkStyle::OnSite),
            _ => Err(FilterError::UnknownOption {
                field: "work style",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("tryout".parse::<Category>(), Ok(Category::Tryout));
        assert_eq!("TRYOUT".parse::<Category>(), Ok(Category::Tryout));
        assert_eq!(
            "Apprenticeship".parse::<Category>(),
            Ok(Category::Apprenticeship)
        );
        assert!("internship".parse::<Category>().is_err());
    }

    #[test]
    fn test_unrecognised_level_maps_to_unknown() {
        assert_eq!(Level::from_catalog("intermediate"), Level::Intermediate);
        assert_eq!(Level::from_catalog("Expert"), Level::Unknown);
        assert!(!Level::all().contains(&Level::Unknown));
    }

    #[test]
    fn test_separator_insensitive_options() {
        assert_eq!("full-time".parse::<WorkSchedule>(), Ok(WorkSchedule::FullTime));
        assert_eq!("Full Time".parse::<WorkSchedule>(), Ok(WorkSchedule::FullTime));
        assert_eq!("on_site".parse::<WorkStyle>(), Ok(WorkStyle::OnSite));
        assert_eq!("office".parse::<WorkStyle>(), Ok(WorkStyle::OnSite));
        assert_eq!(
            "FREELANCE".parse::<EmploymentType>(),
            Ok(EmploymentType::Freelance)
        );
    }
}
