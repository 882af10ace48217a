pub mod grouping;
pub mod view;

pub use grouping::{group_by_category, CatalogGroups};
pub use view::{
    build_catalog_view, filter_options, resolve_image_url, restore_selection, CatalogSection,
    CatalogView, FilterOption, ProductCard, ALL_LABEL,
};
