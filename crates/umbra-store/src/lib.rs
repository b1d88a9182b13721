//! Per-site theme persistence.
//!
//! The engine treats storage as a simple key-value service: the last
//! applied [`ThemeMode`] for a site, keyed by hostname, overwritten on each
//! change and read once at session start. [`ThemeStore`] is the seam;
//! [`MemoryStore`] backs tests and hosts with their own sync layer, while
//! [`JsonFileStore`] keeps a single JSON document on disk.
//!
//! Persistence is best-effort by design: a failed save leaves the page's
//! visual state untouched, it only means the preference will not survive a
//! reload. Callers log store errors and move on.
//!
//! # Example
//!
//! ```rust
//! use umbra_engine::ThemeMode;
//! use umbra_store::{MemoryStore, SiteKey, ThemeStore};
//!
//! let store = MemoryStore::new();
//! let site = SiteKey::from_hostname("Example.com");
//! assert_eq!(site.storage_key(), "theme_example.com");
//!
//! store.save(&site, ThemeMode::Dark).unwrap();
//! assert_eq!(store.load(&site).unwrap(), Some(ThemeMode::Dark));
//! ```

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use umbra_engine::ThemeMode;

/// Persistence identifier derived from a page's hostname.
///
/// Hostnames are case-insensitive; the key is normalized to lowercase with
/// any trailing dot removed so `Example.com.` and `example.com` share a
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteKey(String);

impl SiteKey {
    /// Derives a site key from a hostname.
    pub fn from_hostname(hostname: &str) -> Self {
        let normalized = hostname.trim().trim_end_matches('.').to_ascii_lowercase();
        SiteKey(normalized)
    }

    /// The normalized hostname.
    pub fn hostname(&self) -> &str {
        &self.0
    }

    /// The key under which the theme record is stored.
    pub fn storage_key(&self) -> String {
        format!("theme_{}", self.0)
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur while loading or saving theme records.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O error for {}: {source}", .path.display())]
    Io {
        /// The backing file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not a valid theme record document.
    #[error("store file {} is corrupt: {message}", .path.display())]
    Corrupt {
        /// The backing file.
        path: PathBuf,
        /// Error message from the JSON parser.
        message: String,
    },

    /// Encoding records for writing failed.
    #[error("failed to encode theme records: {message}")]
    Encode {
        /// Error message from the JSON encoder.
        message: String,
    },
}

/// A key-value store of per-site theme choices.
///
/// Implementations take `&self`; shared use across sessions goes through
/// `Arc<dyn ThemeStore>`.
pub trait ThemeStore {
    /// Reads the saved mode for a site, if any.
    fn load(&self, site: &SiteKey) -> Result<Option<ThemeMode>, StoreError>;

    /// Saves the mode for a site, overwriting any previous record.
    fn save(&self, site: &SiteKey, mode: ThemeMode) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_key_normalizes_hostname() {
        assert_eq!(SiteKey::from_hostname("Example.COM").hostname(), "example.com");
        assert_eq!(SiteKey::from_hostname(" example.com. ").hostname(), "example.com");
    }

    #[test]
    fn storage_key_is_prefixed() {
        assert_eq!(
            SiteKey::from_hostname("news.example.com").storage_key(),
            "theme_news.example.com"
        );
    }

    #[test]
    fn equal_hostnames_share_a_key() {
        assert_eq!(
            SiteKey::from_hostname("Example.com."),
            SiteKey::from_hostname("example.com")
        );
    }
}
