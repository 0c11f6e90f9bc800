//! Runtime Configuration
//!
//! The API base URL comes from, in order:
//! 1. `<meta name="filament:api-url" content="...">` in index.html
//! 2. `FILAMENT_API_URL` at build time
//! 3. `http://localhost:3001`

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
const API_URL_META: &str = "filament:api-url";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL without trailing slash
    pub api_url: String,
    pub log_level: log::Level,
}

impl AppConfig {
    /// Read configuration from the page and the build environment
    pub fn load() -> Self {
        Self::resolve(read_meta(API_URL_META), option_env!("FILAMENT_API_URL"))
    }

    pub fn resolve(meta: Option<String>, build_time: Option<&str>) -> Self {
        let api_url = meta
            .filter(|url| !url.trim().is_empty())
            .or_else(|| build_time.filter(|url| !url.trim().is_empty()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            log_level: if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info },
        }
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}
