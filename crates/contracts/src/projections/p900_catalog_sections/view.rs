use super::grouping::{group_by_category, CatalogGroups};
use crate::domain::a002_product::aggregate::Product;

/// Label of the option that disables filtering (its value is `""`)
pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// One product card: name, formatted price and optional absolute image URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSection {
    pub category: String,
    pub cards: Vec<ProductCard>,
}

/// Everything the catalog page renders for one fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub options: Vec<FilterOption>,
    pub selected: String,
    pub sections: Vec<CatalogSection>,
}

/// `All` followed by one option per category, in first-seen order
pub fn filter_options(groups: &CatalogGroups) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        value: String::new(),
        label: ALL_LABEL.to_string(),
    })
    .chain(groups.categories().map(|c| FilterOption {
        value: c.to_string(),
        label: c.to_string(),
    }))
    .collect()
}

/// Keep the previous selection if it is still offered, otherwise fall back to `All`.
pub fn restore_selection(previous: &str, options: &[FilterOption]) -> String {
    if options.iter().any(|o| o.value == previous) {
        previous.to_string()
    } else {
        String::new()
    }
}

/// Resolve a backend image path against the backend base URL.
/// Absolute URLs pass through untouched.
pub fn resolve_image_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn to_card(product: &Product, image_base: &str) -> ProductCard {
    ProductCard {
        name: product.name.clone(),
        price: format!("${}", product.price),
        description: product
            .description
            .as_ref()
            .filter(|d| !d.trim().is_empty())
            .cloned(),
        image_url: product
            .image_path()
            .map(|path| resolve_image_url(image_base, path)),
    }
}

/// Build the catalog view for a freshly fetched product list.
///
/// `previous_filter` is the filter value captured before re-rendering; the
/// sections are filtered by the restored selection.
pub fn build_catalog_view(
    products: Vec<Product>,
    previous_filter: &str,
    image_base: &str,
) -> CatalogView {
    let groups = group_by_category(products);
    let options = filter_options(&groups);
    let selected = restore_selection(previous_filter, &options);

    let sections = groups
        .iter()
        .filter(|(category, _)| selected.is_empty() || *category == selected)
        .map(|(category, products)| CatalogSection {
            category: category.to_string(),
            cards: products.iter().map(|p| to_card(p, image_base)).collect(),
        })
        .collect();

    CatalogView {
        options,
        selected,
        sections,
    }
}
