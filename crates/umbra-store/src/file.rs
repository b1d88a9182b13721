//! JSON-file-backed theme store.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use umbra_engine::ThemeMode;

use crate::{SiteKey, StoreError, ThemeStore};

/// A theme store backed by a single JSON document.
///
/// The document maps storage keys to modes:
///
/// ```json
/// {
///   "theme_example.com": "dark",
///   "theme_news.example.com": "light"
/// }
/// ```
///
/// Every operation reads the file fresh and every save rewrites it, which
/// keeps the store coherent across sessions without any in-process cache.
/// A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is created lazily on the first save.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<BTreeMap<String, ThemeMode>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: err,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }
}

impl ThemeStore for JsonFileStore {
    fn load(&self, site: &SiteKey) -> Result<Option<ThemeMode>, StoreError> {
        Ok(self.read_records()?.get(&site.storage_key()).copied())
    }

    fn save(&self, site: &SiteKey, mode: ThemeMode) -> Result<(), StoreError> {
        let mut records = self.read_records()?;
        records.insert(site.storage_key(), mode);

        let json =
            serde_json::to_string_pretty(&records).map_err(|err| StoreError::Encode {
                message: err.to_string(),
            })?;
        std::fs::write(&self.path, json).map_err(|err| StoreError::Io {
            path: self.path.clone(),
            source: err,
        })?;

        debug!(site = %site, mode = %mode, "saved theme record");
        Ok(())
    }
}
