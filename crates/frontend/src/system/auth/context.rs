use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage;

/// Reactive holder of the current session, provided at the app root
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    /// Restore whatever session localStorage holds
    pub fn restore() -> Self {
        let session = storage::load_session();
        log::debug!(
            "Session restored: {}",
            if session.is_authenticated() { "authenticated" } else { "anonymous" }
        );
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    /// Persist a freshly obtained session and publish it
    pub fn sign_in(&self, session: Session) {
        storage::save_session(&session);
        self.session.set(session);
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
