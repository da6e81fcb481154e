#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::CatalogStatus;
#[cfg(any(target_arch = "wasm32", test))]
use crate::dom;
#[cfg(any(target_arch = "wasm32", test))]
use crate::game::{Catalog, CatalogError};
use std::sync::atomic::{AtomicU32, Ordering};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

static CATALOG_REQUESTS: AtomicU32 = AtomicU32::new(0);

/// Catalog requests started since the module was loaded.
#[must_use]
pub fn catalog_requests() -> u32 {
    CATALOG_REQUESTS.load(Ordering::Relaxed)
}

/// Turn a catalog load result into what the app stores.
///
/// Failures are logged and leave an empty catalog; nothing is shown to the user.
#[cfg(any(target_arch = "wasm32", test))]
fn settle_catalog(result: Result<Catalog, CatalogError>) -> (Catalog, CatalogStatus) {
    match result {
        Ok(catalog) => {
            if !catalog.rejected().is_empty() {
                log::warn!(
                    "catalog loaded {} countries, skipped {} malformed records",
                    catalog.len(),
                    catalog.rejected().len()
                );
            }
            (catalog, CatalogStatus::Ready)
        }
        Err(err) => {
            let message = format!("Error fetching countries: {err}");
            log::error!("{message}");
            dom::console_error(&message);
            (Catalog::empty(), CatalogStatus::Unavailable)
        }
    }
}

/// Fetch the country catalog once per app lifetime.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let catalog = app_state.catalog.clone();
    let status = app_state.catalog_status.clone();

    use_effect_with((), move |()| {
        let url = crate::game::assets().config.catalog_url.clone();
        CATALOG_REQUESTS.fetch_add(1, Ordering::Relaxed);
        wasm_bindgen_futures::spawn_local(async move {
            let (loaded, next_status) = settle_catalog(crate::game::fetch_catalog(&url).await);
            catalog.set(std::rc::Rc::new(loaded));
            status.set(next_status);
        });
        || {}
    });
}
