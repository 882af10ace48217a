use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::form_fields;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use super::super::actions::submit_product;
use crate::shared::api_client::{ApiError, HttpCatalogApi};
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Multipart "add product" form.
///
/// On success the catalog is refreshed through `on_added` and the form is
/// reset; on any failure the entered values are left in place.
#[component]
#[allow(non_snake_case)]
pub fn AddProductForm(
    /// Categories offered in the category select
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    on_added: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let form_ref = NodeRef::<html::Form>::new();
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let current = session.get_untracked();

        set_is_saving.set(true);
        spawn_local(async move {
            let api = HttpCatalogApi::from_config();
            let result = submit_product(&api, &current, || {
                FormData::new_with_form(&form).map_err(|e| ApiError::Browser(format!("{e:?}")))
            })
            .await;

            match result {
                Ok(response) => {
                    toasts.info(response.message);
                    on_added.run(());
                    form.reset();
                }
                Err(e) => {
                    log::error!("Error adding product: {}", e);
                    toasts.error(e.user_message());
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <section id="addProductSection" class="admin-panel">
            <h2>"Add Product"</h2>
            <form id="addProductForm" node_ref=form_ref on:submit=on_submit>
                <div class="form-group">
                    <label for="product-name">"Name"</label>
                    <input id="product-name" type="text" name=form_fields::NAME required />
                </div>
                <div class="form-group">
                    <label for="product-description">"Description"</label>
                    <textarea id="product-description" name=form_fields::DESCRIPTION></textarea>
                </div>
                <div class="form-group">
                    <label for="product-price">"Price"</label>
                    <input id="product-price" type="number" name=form_fields::PRICE min="0" step="0.01" required />
                </div>
                <div class="form-group">
                    <label for="product-category">"Category"</label>
                    <select id="product-category" name=form_fields::CATEGORY required>
                        <option value="">"Select category"</option>
                        <For
                            each=move || categories.get()
                            key=|cat| cat.id
                            children=move |cat| {
                                let value = cat.name.clone();
                                view! { <option value=value>{cat.name}</option> }
                            }
                        />
                    </select>
                </div>
                <div class="form-group">
                    <label for="product-image">"Image"</label>
                    <input id="product-image" type="file" name=form_fields::IMAGE accept="image/*" required />
                </div>
                <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                    {move || if is_saving.get() { "Saving..." } else { "Add Product" }}
                </button>
            </form>
        </section>
    }
}
