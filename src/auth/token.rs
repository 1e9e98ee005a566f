//! Bearer token persistence in `localStorage`.
//!
//! The stored token is the only cross-page shared mutable resource and is
//! written exclusively by the session store's login/logout/eviction paths.
//! Absence means logged out. Requires a browser environment.

const STORAGE_KEY: &str = "token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted token, if any.
pub fn load() -> Option<String> {
    storage()?.get_item(STORAGE_KEY).ok().flatten()
}

pub fn save(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(STORAGE_KEY, token);
    }
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}
