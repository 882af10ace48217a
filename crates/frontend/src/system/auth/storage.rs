use contracts::system::auth::Session;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Read the persisted session from localStorage
pub fn load_session() -> Session {
    Session::from_parts(get_item(TOKEN_KEY), get_item(ROLE_KEY))
}

/// Persist token and role to localStorage. An anonymous session writes nothing.
pub fn save_session(session: &Session) {
    let Session::Authenticated { token, role } = session else {
        return;
    };
    if let Some(storage) = get_local_storage() {
        let saved = storage.set_item(TOKEN_KEY, token).is_ok()
            && storage.set_item(ROLE_KEY, role.as_str()).is_ok();
        if !saved {
            log::warn!("Failed to persist session to localStorage");
        }
    }
}
