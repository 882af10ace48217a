use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::api_client::HttpCatalogApi;
use crate::shared::toast::use_toasts;
use crate::system::auth::api;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Text input bound to a signal
#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    value: RwSignal<String>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                required=required
                disabled=move || disabled.get()
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let toasts = use_toasts();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let age_val = age.get_untracked();
        let age_parsed = if age_val.trim().is_empty() {
            None
        } else {
            match age_val.trim().parse::<u32>() {
                Ok(a) => Some(a),
                Err(_) => {
                    set_error_message.set(Some("Age must be a whole number".to_string()));
                    return;
                }
            }
        };

        let request = RegisterRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: optional(email.get_untracked()),
            phone: optional(phone.get_untracked()),
            full_name: optional(full_name.get_untracked()),
            age: age_parsed,
            gender: optional(gender.get_untracked()),
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            let client = HttpCatalogApi::from_config();
            match api::register(&client, request).await {
                Ok(response) => {
                    toasts.info(response.message);
                    set_is_loading.set(false);
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => {
                    log::error!("Error registering: {}", e);
                    set_error_message.set(Some(e.user_message()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Product Catalog"</h1>
                <h2>"Create an account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Field id="username" label="Username" required=true value=username disabled=is_loading />
                    <Field id="password" label="Password" input_type="password" required=true value=password disabled=is_loading />
                    <Field id="email" label="Email" input_type="email" value=email disabled=is_loading />
                    <Field id="phone" label="Phone" input_type="tel" value=phone disabled=is_loading />
                    <Field id="full_name" label="Full name" value=full_name disabled=is_loading />
                    <Field id="age" label="Age" input_type="number" value=age disabled=is_loading />
                    <Field id="gender" label="Gender" value=gender disabled=is_loading />

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <A href="/login">"Already have an account? Sign in"</A>
                </div>
            </div>
        </div>
    }
}
