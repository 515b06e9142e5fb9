// SimHire - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all SimHire operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum SimHireError {
    /// Catalog loading or record validation failed.
    Catalog(CatalogError),

    /// A filter selection could not be interpreted.
    Filter(FilterError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for SimHireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "Catalog error: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for SimHireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors related to catalog loading and listing record validation.
#[derive(Debug)]
pub enum CatalogError {
    /// TOML catalog could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// JSON catalog could not be parsed.
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Catalog file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A required field is missing or empty on a record.
    MissingField {
        record_id: String,
        field: &'static str,
    },

    /// A record's fields have the wrong shape (e.g. a string price).
    MalformedRecord { record_id: String, reason: String },

    /// A field holds a value that cannot be represented.
    InvalidValue {
        record_id: String,
        field: &'static str,
        value: String,
    },

    /// Two records in the same catalog share an identifier.
    DuplicateId { id: String },

    /// Catalog holds more records than the configured maximum.
    TooManyRecords { count: usize, max: usize },

    /// I/O error reading a catalog file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::JsonParse { path, source } => {
                write!(f, "Failed to parse JSON '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Catalog '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::MissingField { record_id, field } => {
                write!(f, "Listing '{record_id}': missing required field '{field}'")
            }
            Self::MalformedRecord { record_id, reason } => {
                write!(f, "Listing '{record_id}' skipped: {reason}")
            }
            Self::InvalidValue {
                record_id,
                field,
                value,
            } => write!(f, "Listing '{record_id}': invalid value '{value}' for '{field}'"),
            Self::DuplicateId { id } => write!(f, "Duplicate listing ID '{id}'"),
            Self::TooManyRecords { count, max } => {
                write!(f, "Catalog has {count} listings, maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading catalog '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::JsonParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogError> for SimHireError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors raised when a filter selection is given as text (e.g. on the CLI).
/// The predicate evaluator itself never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Category text matched neither variant.
    UnknownCategory { value: String },

    /// Level text matched no level.
    UnknownLevel { value: String },

    /// Work schedule, employment type or work style text was not recognised.
    UnknownOption { field: &'static str, value: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { value } => write!(
                f,
                "Unknown category '{value}'. Expected 'all', 'tryout' or 'apprenticeship'"
            ),
            Self::UnknownLevel { value } => write!(
                f,
                "Unknown level '{value}'. Expected 'beginner', 'intermediate' or 'advanced'"
            ),
            Self::UnknownOption { field, value } => {
                write!(f, "Unknown {field} '{value}'")
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl From<FilterError> for SimHireError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading. All are non-fatal: the
/// application starts with defaults and shows these as warnings.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range or not recognised.
    ValueOutOfRange {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => write!(
                f,
                "Config parse error '{}': {source}. Using defaults.",
                path.display()
            ),
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "{field} = {value} is invalid (expected {expected}). Using default."
            ),
            Self::Io { path, source } => {
                write!(f, "Could not read config '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimHireError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
