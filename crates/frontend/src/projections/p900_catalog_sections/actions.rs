use contracts::projections::p900_catalog_sections::{build_catalog_view, CatalogView};

use crate::shared::api_client::{ApiError, CatalogApi};
use crate::shared::latest::LatestOnly;

/// Result of a catalog fetch that finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLoad {
    Fresh(CatalogView),
    /// A newer fetch started meanwhile; nothing should be rendered or reported
    Stale,
}

/// Fetch products and build the grouped view.
///
/// `previous_filter` is the filter value captured before the re-render;
/// `image_base` is the backend base URL that image paths are relative to.
/// Errors of a superseded fetch are logged and swallowed as `Stale`.
pub async fn load_catalog<A: CatalogApi>(
    api: &A,
    latest: &LatestOnly,
    previous_filter: &str,
    image_base: &str,
) -> Result<CatalogLoad, ApiError> {
    let ticket = latest.issue();
    let result = api.products().await;

    if !ticket.is_current() {
        match result {
            Ok(_) => log::debug!("Dropping stale product list (ticket {})", ticket.id()),
            Err(e) => log::error!("Failed to load products (superseded): {}", e),
        }
        return Ok(CatalogLoad::Stale);
    }

    let products = result?;
    Ok(CatalogLoad::Fresh(build_catalog_view(
        products,
        previous_filter,
        image_base,
    )))
}
