//! Browser Storage
//!
//! Thin wrappers over window.localStorage. Keys live here so call sites
//! and tests agree on them.

pub const AUTH_TOKEN: &str = "auth_token";
pub const USER_DATA: &str = "user_data";
pub const LOCALE: &str = "locale";
pub const BRANDING_SETTINGS: &str = "branding_settings";
pub const BOT_TOKEN: &str = "bot_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Clear persisted auth state (token + cached user)
pub fn clear_auth() {
    remove(AUTH_TOKEN);
    remove(USER_DATA);
}
