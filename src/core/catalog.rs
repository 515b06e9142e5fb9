// SimHire - core/catalog.rs
//
// Catalog parsing and listing record validation.
// Core layer: accepts file content as strings, never touches the filesystem.
// I/O is handled by app::catalog_mgr which feeds content here.

use crate::core::model::{Category, Level, ListingRecord};
use crate::util::constants;
use crate::util::error::CatalogError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

// =============================================================================
// Deserialization structures (raw input)
// =============================================================================

/// Parsed catalog file: one entry per `[[listing]]` table (TOML) or per
/// element of the `"listing"` array (JSON), in file order.
///
/// An entry whose fields have the wrong types is kept as an `Err` so the
/// rest of the file still loads.
#[derive(Debug, Default)]
pub struct CatalogDefinition {
    pub listings: Vec<Result<ListingDefinition, CatalogError>>,
}

/// Outer file shape. Entries stay untyped until each is decoded on its own.
#[derive(Debug, Deserialize)]
struct RawCatalog<V> {
    #[serde(default = "Vec::new", rename = "listing")]
    listing: Vec<V>,
}

/// Raw listing as written in a catalog file. Every field is optional here so
/// a missing value is reported against its record instead of the whole file.
#[derive(Debug, Deserialize, Default)]
pub struct ListingDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "company")]
    pub organization: String,
    #[serde(default, alias = "salary")]
    pub price: Option<i64>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "skills")]
    pub tags: Vec<String>,
    #[serde(default, alias = "type")]
    pub category: String,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub employment: Option<String>,
    #[serde(default)]
    pub work_style: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub participants: Option<i64>,
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a TOML catalog. `source_path` is used for error messages only.
pub fn parse_catalog_toml(content: &str, source_path: &Path) -> Result<CatalogDefinition, CatalogError> {
    let raw: RawCatalog<toml::Value> = toml::from_str(content).map_err(|e| CatalogError::TomlParse {
        path: source_path.to_path_buf(),
        source: e,
    })?;
    Ok(decode_entries(
        raw.listing,
        |v| v.get("id").and_then(toml::Value::as_str).map(str::to_string),
        |v| toml::Value::try_into::<ListingDefinition>(v).map_err(|e| e.message().to_string()),
    ))
}

/// Parse a JSON catalog. `source_path` is used for error messages only.
pub fn parse_catalog_json(content: &str, source_path: &Path) -> Result<CatalogDefinition, CatalogError> {
    let raw: RawCatalog<serde_json::Value> =
        serde_json::from_str(content).map_err(|e| CatalogError::JsonParse {
            path: source_path.to_path_buf(),
            source: e,
        })?;
    Ok(decode_entries(
        raw.listing,
        |v| v.get("id").and_then(serde_json::Value::as_str).map(str::to_string),
        |v| serde_json::from_value::<ListingDefinition>(v).map_err(|e| e.to_string()),
    ))
}

/// Decode each untyped entry into a `ListingDefinition`. Entries without a
/// readable string id are named by their 1-based position.
fn decode_entries<V>(
    entries: Vec<V>,
    id_of: impl Fn(&V) -> Option<String>,
    decode: impl Fn(V) -> Result<ListingDefinition, String>,
) -> CatalogDefinition {
    let listings = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let record_id = id_of(&entry).unwrap_or_else(|| format!("#{}", index + 1));
            decode(entry).map_err(|reason| CatalogError::MalformedRecord { record_id, reason })
        })
        .collect();
    CatalogDefinition { listings }
}

/// Parse catalog content, choosing the format from the path extension.
/// Anything other than `.json` is treated as TOML.
pub fn parse_catalog(content: &str, source_path: &Path) -> Result<CatalogDefinition, CatalogError> {
    let is_json = source_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        parse_catalog_json(content, source_path)
    } else {
        parse_catalog_toml(content, source_path)
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Validate every raw listing, keeping file order.
///
/// Invalid records are skipped and reported; the rest load normally.
pub fn build_catalog(def: CatalogDefinition, source_path: &Path) -> (Vec<ListingRecord>, Vec<CatalogError>) {
    let mut records = Vec::with_capacity(def.listings.len());
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for raw in def.listings {
        match raw.and_then(validate_listing) {
            Ok(record) => {
                if !seen_ids.insert(record.id.clone()) {
                    tracing::warn!(
                        listing_id = %record.id,
                        source = %source_path.display(),
                        "Duplicate listing ID skipped"
                    );
                    errors.push(CatalogError::DuplicateId { id: record.id });
                    continue;
                }
                records.push(record);
            }
            Err(e) => {
                tracing::warn!(source = %source_path.display(), error = %e, "Listing skipped");
                errors.push(e);
            }
        }
    }

    if records.len() > constants::MAX_CATALOG_RECORDS {
        errors.push(CatalogError::TooManyRecords {
            count: records.len(),
            max: constants::MAX_CATALOG_RECORDS,
        });
        records.truncate(constants::MAX_CATALOG_RECORDS);
    }

    tracing::debug!(
        source = %source_path.display(),
        records = records.len(),
        skipped = errors.len(),
        "Catalog built"
    );

    (records, errors)
}

/// Validate one raw listing into a `ListingRecord`.
pub fn validate_listing(raw: ListingDefinition) -> Result<ListingRecord, CatalogError> {
    let id = raw.id.trim().to_string();
    if id.is_empty() {
        return Err(CatalogError::MissingField {
            record_id: "(empty)".to_string(),
            field: "id",
        });
    }
    for (field, value) in [
        ("title", &raw.title),
        ("organization", &raw.organization),
        ("category", &raw.category),
    ] {
        if value.trim().is_empty() {
            return Err(CatalogError::MissingField {
                record_id: id,
                field,
            });
        }
    }

    let price = match raw.price {
        None => {
            return Err(CatalogError::MissingField {
                record_id: id,
                field: "price",
            })
        }
        Some(p) => u32::try_from(p).map_err(|_| CatalogError::InvalidValue {
            record_id: id.clone(),
            field: "price",
            value: p.to_string(),
        })?,
    };

    let category: Category = raw
        .category
        .parse()
        .map_err(|_| CatalogError::InvalidValue {
            record_id: id.clone(),
            field: "category",
            value: raw.category.clone(),
        })?;

    let participants = match raw.participants {
        None => None,
        Some(n) => Some(u32::try_from(n).map_err(|_| CatalogError::InvalidValue {
            record_id: id.clone(),
            field: "participants",
            value: n.to_string(),
        })?),
    };

    // Optional descriptive fields degrade to "not stated" instead of
    // rejecting the record; such records simply fail filters on them.
    let start_date = raw.start_date.as_deref().and_then(|s| {
        let parsed = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
        if parsed.is_none() {
            tracing::debug!(listing_id = %id, value = s, "Unparseable start_date ignored");
        }
        parsed
    });
    let schedule = parse_optional(&id, "schedule", raw.schedule.as_deref());
    let employment = parse_optional(&id, "employment", raw.employment.as_deref());
    let work_style = parse_optional(&id, "work_style", raw.work_style.as_deref());
    let rating = raw.rating.filter(|r| r.is_finite());

    Ok(ListingRecord {
        title: raw.title.trim().to_string(),
        organization: raw.organization.trim().to_string(),
        price,
        duration: raw.duration,
        level: Level::from_catalog(&raw.level),
        location: raw.location,
        start_date,
        description: raw.description,
        tags: raw.tags,
        category,
        schedule,
        employment,
        work_style,
        rating,
        participants,
        id,
    })
}

fn parse_optional<T: std::str::FromStr>(id: &str, field: &'static str, value: Option<&str>) -> Option<T> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    let parsed = value.parse().ok();
    if parsed.is_none() {
        tracing::debug!(listing_id = id, field, value, "Unrecognised value ignored");
    }
    parsed
}

// =============================================================================
// Built-in catalog
// =============================================================================

/// Catalog bundled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Load the embedded catalog.
///
/// A failure here is a packaging bug, but the app still starts with an
/// empty catalog rather than aborting.
pub fn load_builtin_catalog() -> Vec<ListingRecord> {
    let path = Path::new(constants::BUILTIN_CATALOG_PATH);
    match parse_catalog_toml(BUILTIN_CATALOG, path) {
        Ok(def) => {
            let (records, errors) = build_catalog(def, path);
            if !errors.is_empty() {
                tracing::error!(count = errors.len(), "Built-in catalog has invalid listings");
            }
            records
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse built-in catalog");
            Vec::new()
        }
    }
}

/// Upper end of the salary domain for `records`: the larger of `floor` and
/// the highest price, so the full range always covers every record.
pub fn salary_domain(records: &[ListingRecord], floor: u32) -> u32 {
    records
        .iter()
        .map(|r| r.price)
        .max()
        .map_or(floor, |top| top.max(floor))
}
