//! Catalog sourcing: remote fetch, disk cache, bundled fallback.

pub mod cache;
pub mod catalog_client;
