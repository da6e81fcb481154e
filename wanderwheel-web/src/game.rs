//! Web-specific data access
//!
//! Implements the core `DataLoader` over bundled static assets, fetches the
//! remote country catalog and re-exports the core types.

use once_cell::sync::Lazy;

pub use wanderwheel_core::*;

use crate::dom;

const ITINERARY_JSON: &str = include_str!("../static/assets/data/itinerary.json");
const CONFIG_JSON: &str = include_str!("../static/assets/data/config.json");

static ASSETS: Lazy<Assets> = Lazy::new(|| Assets::load(&WebDataLoader));

/// Bundled config and itineraries, parsed on first use.
#[must_use]
pub fn assets() -> &'static Assets {
    &ASSETS
}

/// Web-specific data loader backed by assets compiled into the bundle
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_itineraries(&self) -> Result<ItineraryBook, Self::Error> {
        ItineraryBook::from_json(ITINERARY_JSON).map_err(WebDataError::Json)
    }

    fn load_config(&self) -> Result<AppConfig, Self::Error> {
        AppConfig::from_json(CONFIG_JSON).map_err(WebDataError::Json)
    }
}

/// Fetch the country list from the remote provider and build the catalog.
///
/// # Errors
///
/// Returns [`CatalogError::Network`] when the request fails and
/// [`CatalogError::Malformed`] when the body is not JSON or not an array of
/// records.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, CatalogError> {
    let response = dom::fetch_ok(url)
        .await
        .map_err(|e| CatalogError::Network(dom::js_error_message(&e)))?;
    let payload = dom::read_json(&response)
        .await
        .map_err(|e| CatalogError::Malformed(dom::js_error_message(&e)))?;
    let records: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(payload)
        .map_err(|e| CatalogError::Malformed(e.to_string()))?;
    Ok(Catalog::from_values(records))
}
