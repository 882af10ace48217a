use contracts::domain::a001_category::aggregate::Category;
use contracts::projections::p900_catalog_sections::{CatalogSection, CatalogView, ProductCard};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::actions::{load_catalog, CatalogLoad};
use crate::domain::a001_category::ui::CategoryManager;
use crate::domain::a002_product::ui::AddProductForm;
use crate::shared::api_client::HttpCatalogApi;
use crate::shared::latest::LatestOnly;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

#[component]
fn ProductCardView(card: ProductCard) -> impl IntoView {
    let alt = card.name.clone();
    view! {
        <div class="product">
            <h4>{card.name}</h4>
            <p class="product__price">{card.price}</p>
            {card.description.map(|d| view! { <p class="product__description">{d}</p> })}
            {card.image_url.map(|src| view! { <img src=src alt=alt width="100" /> })}
        </div>
    }
}

#[component]
fn SectionView(section: CatalogSection) -> impl IntoView {
    view! {
        <section class="catalog-section">
            <h3>{section.category}</h3>
            {section
                .cards
                .into_iter()
                .map(|card| view! { <ProductCardView card=card /> })
                .collect_view()}
        </section>
    }
}

/// Catalog home page: category filter, grouped product listing and, for a
/// signed-in session, the admin panels.
#[component]
#[allow(non_snake_case)]
pub fn CatalogPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let latest = StoredValue::new(LatestOnly::new());
    let (catalog, set_catalog) = signal(CatalogView::default());
    let (filter, set_filter) = signal(String::new());
    let categories = RwSignal::new(Vec::<Category>::new());

    // Re-render for `filter_value`; the restored selection comes back in the view.
    let load = Callback::new(move |filter_value: String| {
        let latest = latest.get_value();
        spawn_local(async move {
            let api = HttpCatalogApi::from_config();
            match load_catalog(&api, &latest, &filter_value, api.base()).await {
                Ok(CatalogLoad::Fresh(view)) => {
                    set_filter.set(view.selected.clone());
                    set_catalog.set(view);
                }
                Ok(CatalogLoad::Stale) => {}
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    toasts.error(format!("Failed to load products: {}", e.user_message()));
                }
            }
        });
    });

    let refresh = Callback::new(move |_: ()| load.run(filter.get_untracked()));

    load.run(String::new());

    view! {
        <div class="catalog">
            <header class="catalog__header">
                <h1>"Product Catalog"</h1>
                <nav class="catalog__auth">
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| view! {
                            <A href="/login">"Login"</A>
                            " "
                            <A href="/register">"Register"</A>
                        }
                    >
                        <span class="catalog__role">
                            {move || {
                                session
                                    .get()
                                    .role()
                                    .map(|r| format!("Signed in as {}", r))
                                    .unwrap_or_default()
                            }}
                        </span>
                    </Show>
                </nav>
            </header>

            <div class="catalog__filter">
                <label for="categoryFilter">"Category"</label>
                <select
                    id="categoryFilter"
                    prop:value=move || filter.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_filter.set(value.clone());
                        load.run(value);
                    }
                >
                    {move || {
                        let selected = filter.get();
                        catalog
                            .get()
                            .options
                            .into_iter()
                            .map(|opt| {
                                let is_selected = opt.value == selected;
                                view! {
                                    <option value=opt.value selected=is_selected>
                                        {opt.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div id="products" class="catalog__products">
                {move || {
                    catalog
                        .get()
                        .sections
                        .into_iter()
                        .map(|section| view! { <SectionView section=section /> })
                        .collect_view()
                }}
            </div>

            <Show when=move || session.is_authenticated()>
                <AddProductForm categories=categories on_added=refresh />
                <CategoryManager categories=categories />
            </Show>
        </div>
    }
}
