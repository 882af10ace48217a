//! Transient notifications shown in the corner of the page.
//!
//! ```rust,ignore
//! let toasts = use_toasts();
//! toasts.error("Failed to load products");
//! ```

pub mod queue;

pub use queue::{Toast, ToastKind, ToastQueue};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    /// Show a toast and schedule its removal
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let queue = self.queue;
        let duration = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            queue.update(|q| q.remove(id));
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.remove(id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the active toasts; click one to dismiss it early
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.queue.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.css_class())
                            role="status"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
