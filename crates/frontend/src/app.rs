use crate::routes::routes::AppRoutes;
use crate::shared::config::config;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session restored from localStorage, shared by every page.
    provide_context(SessionContext::restore());

    provide_context(ToastService::new(config().ui.toast_duration_ms));

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
