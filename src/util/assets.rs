use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;
use tracing::error;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| load_text("/assets/main.css").unwrap_or_default())
        .as_str()
}

/// Catalog document shipped with the binary, used when no remote source works.
pub fn bundled_catalog_json() -> Option<String> {
    load_text("/assets/ftf_items.json")
}

/// Exception lists shipped alongside the bundled catalog.
pub fn bundled_exceptions_json() -> Option<String> {
    load_text("/assets/shg_exceptions.json")
}

fn load_text(path: &str) -> Option<String> {
    let asset = load_asset(path)?;
    match String::from_utf8(asset.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            error!(path, "embedded asset is not valid UTF-8");
            None
        }
    }
}

fn load_asset(path: &str) -> Option<Cow<'static, [u8]>> {
    let canonical = canonical_asset_path(path);
    let asset = EmbeddedAssets::get(&canonical).map(|file| file.data);
    if asset.is_none() {
        error!(path, "embedded asset missing");
    }
    asset
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
