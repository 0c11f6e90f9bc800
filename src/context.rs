//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use filament_core::{ApiClient, Session};

use crate::config::AppConfig;
use crate::http::GlooTransport;
use crate::storage::LocalTokenStore;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session token (None = show login) - read
    pub token: ReadSignal<Option<String>>,
    /// Current session token - write, only through a `Session`
    set_token: WriteSignal<Option<String>>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (token, set_token) = signal(Session::restore(LocalTokenStore).token());
        Self {
            token,
            set_token,
            config: StoredValue::new(config),
        }
    }

    /// Session backed by localStorage that reports every change to `token`
    pub fn session(&self) -> Session {
        let set_token = self.set_token;
        Session::restore(LocalTokenStore).with_listener(move |token| set_token.set(token))
    }

    /// API client bound to the current session
    pub fn client(&self) -> ApiClient {
        let base_url = self.config.with_value(|c| c.api_url.clone());
        ApiClient::new(base_url, GlooTransport, self.session())
    }

    pub fn logout(&self) {
        self.session().sign_out();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
