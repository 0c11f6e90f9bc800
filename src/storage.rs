//! Browser Token Storage
//!
//! `localStorage` under [`TOKEN_KEY`]. A browser without storage behaves as
//! signed out.

use filament_core::{TokenStore, TOKEN_KEY};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("[Storage] could not persist session token");
                }
            }
            None => log::warn!("[Storage] localStorage unavailable, session will not survive reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
