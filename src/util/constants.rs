// SimHire - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SimHire Finder";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SimHire";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config file name (lives next to the platform config directory).
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum catalog file size in bytes. Larger files are rejected before
/// parsing to keep a mistyped path from loading something huge.
pub const MAX_CATALOG_FILE_SIZE: u64 = 4 * 1024 * 1024; // 4 MB

/// Maximum number of listing records kept from a single catalog.
pub const MAX_CATALOG_RECORDS: usize = 5_000;

/// Label used in place of a filesystem path for the embedded catalog.
pub const BUILTIN_CATALOG_PATH: &str = "<builtin>/catalog.toml";

// =============================================================================
// Salary range
// =============================================================================

/// Lower bound of the salary/price domain. The range track always starts here.
pub const SALARY_DOMAIN_MIN: u32 = 0;

/// Default floor for the upper end of the salary domain. The effective domain
/// is the larger of this and the highest price in the catalog.
pub const DEFAULT_SALARY_DOMAIN_FLOOR: u32 = 200;

/// Hard upper bound on a configured salary domain floor.
pub const ABSOLUTE_MAX_SALARY_DOMAIN: u32 = 10_000_000;

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum configurable font size.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum configurable font size.
pub const MAX_FONT_SIZE: f32 = 32.0;

/// Maximum characters of a description shown on a listing card.
pub const CARD_DESCRIPTION_PREVIEW_CHARS: usize = 120;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
