use web_sys::window;

/// Key the login page stores the access token under
const ACCESS_TOKEN_KEY: &str = "token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

/// Clear everything persisted in localStorage, not only the token
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}

/// Source of the bearer token for API calls
pub trait SessionStore {
    fn access_token(&self) -> Option<String>;

    /// Forget all persisted session data
    fn clear(&self);
}

/// Session kept in the browser's localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl SessionStore for LocalStorageSession {
    fn access_token(&self) -> Option<String> {
        get_access_token()
    }

    fn clear(&self) {
        clear_session();
    }
}

#[cfg(test)]
pub use memory::MemorySession;
