use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::actions::{add_category, delete_category, list_categories, CategoryMutation};
use crate::shared::api_client::{ApiError, HttpCatalogApi};
use crate::shared::latest::LatestOnly;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;

/// Admin panel: lists categories with add/delete controls.
///
/// `categories` is owned by the caller so other panels (the product form)
/// can offer the same list.
#[component]
#[allow(non_snake_case)]
pub fn CategoryManager(categories: RwSignal<Vec<Category>>) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let latest = StoredValue::new(LatestOnly::new());
    let (new_name, set_new_name) = signal(String::new());

    let report = move |context: &str, e: ApiError| {
        log::error!("{}: {}", context, e);
        toasts.error(e.user_message());
    };

    let fetch = move || {
        let latest = latest.get_value();
        let current = session.get_untracked();
        spawn_local(async move {
            let api = HttpCatalogApi::from_config();
            match list_categories(&api, &latest, &current).await {
                Ok(Some(list)) => categories.set(list),
                Ok(None) => {}
                Err(e) => report("Error loading categories", e),
            }
        });
    };

    let finish_mutation = move |outcome: CategoryMutation| {
        if outcome.accepted {
            toasts.info(outcome.message);
        } else {
            toasts.error(outcome.message);
        }
        if let Some(list) = outcome.categories {
            categories.set(list);
        }
    };

    let handle_add = move || {
        let name = new_name.get_untracked();
        let latest = latest.get_value();
        let current = session.get_untracked();
        spawn_local(async move {
            let api = HttpCatalogApi::from_config();
            match add_category(&api, &latest, &current, &name).await {
                Ok(outcome) => {
                    if outcome.accepted {
                        set_new_name.set(String::new());
                    }
                    finish_mutation(outcome);
                }
                Err(ApiError::EmptyCategoryName) => {
                    log::debug!("Ignoring empty category name");
                }
                Err(e) => report("Error adding category", e),
            }
        });
    };

    let handle_delete = move |id: CategoryId| {
        let latest = latest.get_value();
        let current = session.get_untracked();
        spawn_local(async move {
            let api = HttpCatalogApi::from_config();
            match delete_category(&api, &latest, &current, id).await {
                Ok(outcome) => finish_mutation(outcome),
                Err(e) => report("Error deleting category", e),
            }
        });
    };

    fetch();

    view! {
        <div id="manageCategories" class="admin-panel">
            <h2>"Manage Categories (Admin)"</h2>
            <div class="admin-panel__add">
                <input
                    type="text"
                    id="newCategory"
                    placeholder="New Category"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            handle_add();
                        }
                    }
                />
                <button class="button button--primary" on:click=move |_| handle_add()>
                    "Add Category"
                </button>
            </div>
            <For
                each=move || categories.get()
                key=|cat| cat.id
                children=move |cat| {
                    let id = cat.id;
                    view! {
                        <div class="admin-panel__row">
                            {cat.name}
                            " "
                            <button class="button button--secondary" on:click=move |_| handle_delete(id)>
                                "Delete"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
