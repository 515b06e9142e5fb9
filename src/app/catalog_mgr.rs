// SimHire - app/catalog_mgr.rs
//
// Loads the listing catalog: the built-in catalog embedded in the binary, or
// a user catalog file on disk. A user file that cannot be read or parsed
// falls back to the built-in catalog so the finder always has data to show.

use crate::core::catalog;
use crate::core::model::ListingRecord;
use crate::util::constants;
use crate::util::error::CatalogError;
use std::path::{Path, PathBuf};

/// Where the loaded records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Builtin => "built-in catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

/// Result of a catalog load. `errors` are non-fatal: skipped records or the
/// reason a user file was not used.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub records: Vec<ListingRecord>,
    pub source: CatalogSource,
    pub errors: Vec<CatalogError>,
}

/// Load the catalog from `user_path` if given, else the built-in catalog.
pub fn load_catalog(user_path: Option<&Path>) -> LoadedCatalog {
    let Some(path) = user_path else {
        let records = catalog::load_builtin_catalog();
        tracing::info!(records = records.len(), "Loaded built-in catalog");
        return LoadedCatalog {
            records,
            source: CatalogSource::Builtin,
            errors: Vec::new(),
        };
    };

    match load_catalog_file(path) {
        Ok((records, errors)) => {
            tracing::info!(
                path = %path.display(),
                records = records.len(),
                skipped = errors.len(),
                "Loaded user catalog"
            );
            LoadedCatalog {
                records,
                source: CatalogSource::File(path.to_path_buf()),
                errors,
            }
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "User catalog unusable, falling back to built-in catalog"
            );
            LoadedCatalog {
                records: catalog::load_builtin_catalog(),
                source: CatalogSource::Builtin,
                errors: vec![e],
            }
        }
    }
}

/// Read, size-check, parse and validate one catalog file.
///
/// `Err` means the file as a whole is unusable; per-record problems come back
/// in the `Ok` error list.
pub fn load_catalog_file(path: &Path) -> Result<(Vec<ListingRecord>, Vec<CatalogError>), CatalogError> {
    let metadata = std::fs::metadata(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CATALOG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let def = catalog::parse_catalog(&content, path)?;
    Ok(catalog::build_catalog(def, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_uses_builtin() {
        let loaded = load_catalog(None);
        assert_eq!(loaded.source, CatalogSource::Builtin);
        assert!(!loaded.records.is_empty());
        assert!(loaded.errors.is_empty());
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_catalog(Some(&dir.path().join("missing.toml")));
        assert_eq!(loaded.source, CatalogSource::Builtin);
        assert!(!loaded.records.is_empty());
        assert!(matches!(loaded.errors[0], CatalogError::Io { .. }));
    }

    #[test]
    fn test_user_file_replaces_builtin() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[listing]]\nid = \"a\"\ntitle = \"Ops Tryout\"\norganization = \"Acme\"\nprice = 10\ncategory = \"Tryout\""
        )
        .unwrap();
        let loaded = load_catalog(Some(file.path()));
        assert_eq!(loaded.source, CatalogSource::File(file.path().to_path_buf()));
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].title, "Ops Tryout");
    }

    #[test]
    fn test_oversized_file_falls_back() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.as_file()
            .set_len(constants::MAX_CATALOG_FILE_SIZE + 1)
            .unwrap();
        let loaded = load_catalog(Some(file.path()));
        assert_eq!(loaded.source, CatalogSource::Builtin);
        assert!(!loaded.records.is_empty());
        assert!(matches!(
            &loaded.errors[..],
            [CatalogError::FileTooLarge { size, max_size, .. }]
                if *size == constants::MAX_CATALOG_FILE_SIZE + 1
                    && *max_size == constants::MAX_CATALOG_FILE_SIZE
        ));
    }

    #[test]
    fn test_mistyped_record_keeps_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[[listing]]\nid = \"a\"\ntitle = \"Ops Tryout\"\norganization = \"Acme\"\nprice = 10\ncategory = \"Tryout\"\n\n[[listing]]\nid = \"b\"\ntitle = \"Broken\"\norganization = \"Acme\"\nprice = \"cheap\"\ncategory = \"Tryout\""
        )
        .unwrap();
        let loaded = load_catalog(Some(file.path()));
        assert_eq!(loaded.source, CatalogSource::File(file.path().to_path_buf()));
        assert_eq!(loaded.records.len(), 1);
        assert!(matches!(loaded.errors[..], [CatalogError::MalformedRecord { .. }]));
    }

    #[test]
    fn test_unparseable_file_falls_back() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "this is = = not toml").unwrap();
        let loaded = load_catalog(Some(file.path()));
        assert_eq!(loaded.source, CatalogSource::Builtin);
        assert!(matches!(loaded.errors[0], CatalogError::TomlParse { .. }));
    }
}
