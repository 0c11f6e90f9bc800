//! Filament Manager Core
//!
//! Everything the web client does that is not rendering:
//! - models: API records and request payloads
//! - client: typed HTTP calls over a pluggable transport
//! - session: the bearer token and its invalidation
//! - resource: per-view load/create contract
//! - forms / money: form drafts and row formatting
//! - load: per-view load state and stale-response guard

mod client;
mod error;
mod forms;
mod load;
mod models;
mod money;
mod resource;
mod session;
mod storage;
mod transport;

#[cfg(test)]
mod tests;

pub use client::{endpoints, ApiClient};
pub use error::{ApiError, ApiResult};
pub use forms::{CategoryKind, FilamentTypeDraft, ProductDraft, PurchaseDraft};
pub use load::{LoadEpoch, LoadTicket, Loadable};
pub use models::{
    FilamentType, NewFilamentType, NewProduct, NewPurchase, Product, ProductCategory,
    ProductSpec, Purchase,
};
pub use money::{
    format_cost_per_gram, format_date, format_price, format_weight, Currency, PurchaseRow,
    BASE_CURRENCY,
};
pub use resource::{
    submit_and_refresh, FilamentTypes, PurchaseBook, Purchases, Resource, Stock, Submitted, Warehouse,
};
pub use session::Session;
pub use storage::{MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
