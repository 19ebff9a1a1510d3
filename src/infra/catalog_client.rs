//! Resolves the item catalog and exception lists.
//!
//! - A configured base URL is served from the disk cache while it is fresh,
//!   otherwise fetched over HTTP and cached.
//! - A failed fetch falls back to an expired cache for the same URL, then to
//!   the bundled documents.
//! - Missing exception lists never fail a load; default rules apply.

use std::path::Path;

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{parse_catalog, parse_exceptions, Catalog, CatalogError, ExceptionSets};
use crate::infra::cache::{
    cache_path, load_catalog_cache_from, save_catalog_cache_to, CatalogCache,
};
use crate::util::{assets, version::user_agent};

pub const CATALOG_FILE: &str = "ftf_items.json";
pub const EXCEPTIONS_FILE: &str = "shg_exceptions.json";

#[derive(Debug, Error)]
pub enum CatalogClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Where the catalog in use came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Fetched from the remote source just now.
    Fresh,
    /// Served from a cache younger than the TTL.
    Cached,
    /// Remote fetch failed; an expired cache was used.
    Stale,
    /// Shipped with the binary.
    Bundled,
    /// Nothing usable; the catalog is empty.
    Unavailable,
}

impl CatalogStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogStatus::Fresh => "fetched",
            CatalogStatus::Cached => "cached",
            CatalogStatus::Stale => "stale cache",
            CatalogStatus::Bundled => "bundled",
            CatalogStatus::Unavailable => "unavailable",
        }
    }
}

#[derive(Clone, Debug)]
pub struct CatalogPayload {
    pub catalog: Catalog,
    pub exceptions: ExceptionSets,
    pub status: CatalogStatus,
    /// Cache timestamp when the data came from (or was written to) the cache.
    pub fetched_at: Option<std::time::SystemTime>,
}

#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn with_base_url(base: &str) -> Result<Self, CatalogClientError> {
        let base_url = normalize_base(base)?;
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, base_url })
    }

    pub async fn fetch_catalog(&self) -> Result<Catalog, CatalogClientError> {
        let body = self.fetch_text(CATALOG_FILE).await?;
        Ok(parse_catalog(&body)?)
    }

    pub async fn fetch_exceptions(&self) -> Result<ExceptionSets, CatalogClientError> {
        let body = self.fetch_text(EXCEPTIONS_FILE).await?;
        Ok(parse_exceptions(&body)?)
    }

    async fn fetch_text(&self, file: &str) -> Result<String, CatalogClientError> {
        let url = self.base_url.join(file)?;
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
fn normalize_base(base: &str) -> Result<Url, url::ParseError> {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("{trimmed}/"))
    }
}

/// Loads the catalog for `catalog_url`, or the bundled one when unset.
/// `force_refresh` skips the fresh-cache shortcut.
pub async fn load_catalog(catalog_url: Option<&str>, force_refresh: bool) -> CatalogPayload {
    let Some(url) = catalog_url else {
        return bundled_catalog();
    };
    load_catalog_with(&cache_path(), url, force_refresh).await
}

/// Resolution against an explicit cache file.
pub async fn load_catalog_with(cache_file: &Path, url: &str, force_refresh: bool) -> CatalogPayload {
    let cached = load_catalog_cache_from(cache_file).filter(|cache| cache.is_for(url));
    if !force_refresh {
        if let Some(cache) = cached.as_ref().filter(|cache| !cache.is_expired()) {
            info!(source = url, age = %cache.age_string(), "using cached catalog");
            return from_cache(cache.clone(), CatalogStatus::Cached);
        }
    }

    match fetch_remote(cache_file, url).await {
        Ok(payload) => payload,
        Err(err) => {
            warn!(source = url, %err, "catalog fetch failed");
            match cached {
                Some(cache) => from_cache(cache, CatalogStatus::Stale),
                None => bundled_catalog(),
            }
        }
    }
}

async fn fetch_remote(cache_file: &Path, url: &str) -> Result<CatalogPayload, CatalogClientError> {
    let client = CatalogClient::with_base_url(url)?;
    let catalog = client.fetch_catalog().await?;
    let exceptions = match client.fetch_exceptions().await {
        Ok(exceptions) => exceptions,
        Err(err) => {
            warn!(source = url, %err, "exception lists unavailable; using default rules");
            ExceptionSets::default()
        }
    };
    info!(source = url, items = catalog.len(), "fetched catalog");

    let cache = CatalogCache::new(url, &catalog, &exceptions);
    let fetched_at = Some(cache.fetched_at());
    if let Err(err) = save_catalog_cache_to(cache_file, &cache) {
        warn!(%err, "failed to write catalog cache");
    }

    Ok(CatalogPayload {
        catalog,
        exceptions,
        status: CatalogStatus::Fresh,
        fetched_at,
    })
}

fn from_cache(cache: CatalogCache, status: CatalogStatus) -> CatalogPayload {
    let fetched_at = Some(cache.fetched_at());
    let (catalog, exceptions) = cache.into_parts();
    CatalogPayload {
        catalog,
        exceptions,
        status,
        fetched_at,
    }
}

pub fn bundled_catalog() -> CatalogPayload {
    let catalog = assets::bundled_catalog_json().and_then(|json| {
        parse_catalog(&json)
            .map_err(|err| warn!(%err, "bundled catalog unreadable"))
            .ok()
    });
    let exceptions = assets::bundled_exceptions_json()
        .and_then(|json| {
            parse_exceptions(&json)
                .map_err(|err| warn!(%err, "bundled exceptions unreadable"))
                .ok()
        })
        .unwrap_or_default();

    match catalog {
        Some(catalog) => CatalogPayload {
            catalog,
            exceptions,
            status: CatalogStatus::Bundled,
            fetched_at: None,
        },
        None => CatalogPayload {
            catalog: Catalog::default(),
            exceptions,
            status: CatalogStatus::Unavailable,
            fetched_at: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, Rarity};
    use crate::infra::cache::CATALOG_CACHE_TTL;

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = normalize_base("https://example.org/trade").expect("valid url");
        assert_eq!(
            url.join(CATALOG_FILE).expect("joins").as_str(),
            "https://example.org/trade/ftf_items.json"
        );
        let url = normalize_base(" https://example.org/trade/ ").expect("valid url");
        assert_eq!(url.as_str(), "https://example.org/trade/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            CatalogClient::with_base_url("not a url"),
            Err(CatalogClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn bundled_catalog_is_usable() {
        let payload = bundled_catalog();
        assert_eq!(payload.status, CatalogStatus::Bundled);
        assert!(!payload.catalog.is_empty());
        assert!(payload.exceptions.lookup("silver ring").eighty_twenty);
    }

    #[tokio::test]
    async fn unset_url_loads_bundled_catalog() {
        let payload = load_catalog(None, false).await;
        assert_eq!(payload.status, CatalogStatus::Bundled);
        assert!(payload.fetched_at.is_none());
    }

    // Nothing listens on port 1, so every fetch fails fast.
    const UNREACHABLE: &str = "http://127.0.0.1:1/";

    fn cached_catalog(source: &str, expired: bool) -> CatalogCache {
        let catalog = Catalog::new(vec![Item::new("Cached Lantern", 42.0, Rarity::Rare)]);
        let exceptions = ExceptionSets::new(["Cached Lantern"], Vec::<String>::new());
        let mut cache = CatalogCache::new(source, &catalog, &exceptions);
        if expired {
            cache.cached_at = cache
                .cached_at
                .saturating_sub(CATALOG_CACHE_TTL.as_secs() + 60);
        }
        cache
    }

    fn first_name(payload: &CatalogPayload) -> Option<&str> {
        payload.catalog.items().first().map(|item| item.name.as_str())
    }

    #[tokio::test]
    async fn fresh_cache_is_served_without_fetching() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog_cache.json");
        save_catalog_cache_to(&path, &cached_catalog(UNREACHABLE, false)).expect("cache saves");

        let payload = load_catalog_with(&path, UNREACHABLE, false).await;
        assert_eq!(payload.status, CatalogStatus::Cached);
        assert_eq!(first_name(&payload), Some("Cached Lantern"));
        assert!(payload.exceptions.lookup("cached lantern").full_value);
        assert!(payload.fetched_at.is_some());
    }

    #[tokio::test]
    async fn forced_refresh_skips_fresh_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog_cache.json");
        save_catalog_cache_to(&path, &cached_catalog(UNREACHABLE, false)).expect("cache saves");

        // The fetch is attempted and fails, so the same cache comes back as stale.
        let payload = load_catalog_with(&path, UNREACHABLE, true).await;
        assert_eq!(payload.status, CatalogStatus::Stale);
        assert_eq!(first_name(&payload), Some("Cached Lantern"));
    }

    #[tokio::test]
    async fn failed_fetch_falls_back_to_expired_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog_cache.json");
        save_catalog_cache_to(&path, &cached_catalog(UNREACHABLE, true)).expect("cache saves");

        let payload = load_catalog_with(&path, UNREACHABLE, false).await;
        assert_eq!(payload.status, CatalogStatus::Stale);
        assert_eq!(first_name(&payload), Some("Cached Lantern"));
    }

    #[tokio::test]
    async fn cache_for_another_source_is_not_used() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog_cache.json");
        save_catalog_cache_to(&path, &cached_catalog("https://example.org/other/", false))
            .expect("cache saves");

        let payload = load_catalog_with(&path, UNREACHABLE, false).await;
        assert_eq!(payload.status, CatalogStatus::Bundled);
        assert_ne!(first_name(&payload), Some("Cached Lantern"));
        assert!(payload.fetched_at.is_none());
    }
}
