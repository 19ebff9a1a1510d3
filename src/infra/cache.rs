//! On-disk copy of the last catalog fetched from a remote source.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{Catalog, ExceptionSets, ExceptionsDocument, Item};

const CACHE_FILENAME: &str = "catalog_cache.json";

/// A cached catalog is reused without a network round trip for this long.
pub const CATALOG_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCache {
    /// Base URL the catalog was fetched from.
    pub source_url: String,
    /// Unix timestamp (seconds) of the fetch.
    pub cached_at: u64,
    pub items: Vec<Item>,
    #[serde(default)]
    pub exceptions: ExceptionsDocument,
}

impl CatalogCache {
    pub fn new(source_url: impl Into<String>, catalog: &Catalog, exceptions: &ExceptionSets) -> Self {
        let cached_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            source_url: source_url.into(),
            cached_at,
            items: catalog.items().to_vec(),
            exceptions: exceptions.to_document(),
        }
    }

    pub fn is_for(&self, source_url: &str) -> bool {
        self.source_url == source_url
    }

    pub fn is_expired(&self) -> bool {
        self.age() > CATALOG_CACHE_TTL
    }

    pub fn age(&self) -> Duration {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Duration::from_secs(now.saturating_sub(self.cached_at))
    }

    pub fn fetched_at(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(self.cached_at)
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        humanize_secs(self.age().as_secs())
    }

    pub fn into_parts(self) -> (Catalog, ExceptionSets) {
        (Catalog::new(self.items), self.exceptions.into())
    }
}

pub fn humanize_secs(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Default cache file under the local data directory.
pub fn cache_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trade-value-calculator");
        cache_file_in(&base)
    })
    .clone()
}

/// Creates `dir` if needed. A failure is logged and the later write reports it.
fn cache_file_in(dir: &Path) -> PathBuf {
    if let Err(err) = fs::create_dir_all(dir) {
        warn!(%err, path = %dir.display(), "failed to create cache directory");
    }
    dir.join(CACHE_FILENAME)
}

pub fn load_catalog_cache_from(path: &Path) -> Option<CatalogCache> {
    if !path.exists() {
        debug!(path = %path.display(), "no catalog cache");
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<CatalogCache>(&content) {
            Ok(cache) => {
                debug!(
                    items = cache.items.len(),
                    age = %cache.age_string(),
                    "loaded catalog cache"
                );
                Some(cache)
            }
            Err(err) => {
                warn!(%err, "failed to parse catalog cache");
                None
            }
        },
        Err(err) => {
            warn!(%err, "failed to read catalog cache");
            None
        }
    }
}

pub fn save_catalog_cache_to(path: &Path, cache: &CatalogCache) -> Result<(), std::io::Error> {
    let content = serde_json::to_string(cache)?;
    fs::write(path, content)?;
    info!(
        items = cache.items.len(),
        source = %cache.source_url,
        path = %path.display(),
        "saved catalog cache"
    );
    Ok(())
}
