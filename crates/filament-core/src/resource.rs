//! Resource Views
//!
//! Each screen is bound to one or more collections that load together and
//! one create call. A view never merges a created record into its list;
//! it re-fetches everything after every successful create.

use async_trait::async_trait;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{FilamentType, NewFilamentType, NewProduct, NewPurchase, Product, ProductCategory, Purchase};

#[async_trait(?Send)]
pub trait Resource {
    /// Everything the view renders, loaded in one go
    type Data: Clone + PartialEq;
    /// Body of the create call
    type Payload;

    /// Used in log lines
    const NAME: &'static str;

    /// Load all collections; any failure fails the whole load
    async fn fetch(client: &ApiClient) -> ApiResult<Self::Data>;

    async fn create(client: &ApiClient, payload: &Self::Payload) -> ApiResult<()>;
}

/// How a submit ended
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted<T> {
    /// The create failed; nothing was refreshed and any load in flight still owns the view
    Rejected(ApiError),
    /// The record exists; this is the outcome of the one re-fetch that followed
    Refreshed(ApiResult<T>),
}

/// Create a record, then re-fetch the full view data exactly once.
///
/// `on_created` runs between the two calls, only when the create succeeded.
/// Callers take their load ticket and show the loading state there, so a
/// failed create never supersedes a load that is already running.
pub async fn submit_and_refresh<R: Resource>(
    client: &ApiClient,
    payload: &R::Payload,
    on_created: impl FnOnce(),
) -> Submitted<R::Data> {
    if let Err(err) = R::create(client, payload).await {
        return Submitted::Rejected(err);
    }
    log::debug!("[{}] created, refreshing", R::NAME);
    on_created();
    Submitted::Refreshed(R::fetch(client).await)
}

// ========================
// Filament Types
// ========================

pub struct FilamentTypes;

#[async_trait(?Send)]
impl Resource for FilamentTypes {
    type Data = Vec<FilamentType>;
    type Payload = NewFilamentType;
    const NAME: &'static str = "FilamentTypes";

    async fn fetch(client: &ApiClient) -> ApiResult<Self::Data> {
        client.list_filament_types().await
    }

    async fn create(client: &ApiClient, payload: &Self::Payload) -> ApiResult<()> {
        client.create_filament_type(payload).await
    }
}

// ========================
// Purchases
// ========================

/// Purchases plus the filament types the purchase form picks from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseBook {
    pub filament_types: Vec<FilamentType>,
    pub purchases: Vec<Purchase>,
}

pub struct Purchases;

#[async_trait(?Send)]
impl Resource for Purchases {
    type Data = PurchaseBook;
    type Payload = NewPurchase;
    const NAME: &'static str = "Purchases";

    async fn fetch(client: &ApiClient) -> ApiResult<Self::Data> {
        let (filament_types, purchases) =
            futures::try_join!(client.list_filament_types(), client.list_purchases())?;
        Ok(PurchaseBook { filament_types, purchases })
    }

    async fn create(client: &ApiClient, payload: &Self::Payload) -> ApiResult<()> {
        client.create_purchase(payload).await
    }
}

// ========================
// Warehouse
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stock {
    pub categories: Vec<ProductCategory>,
    pub products: Vec<Product>,
}

pub struct Warehouse;

#[async_trait(?Send)]
impl Resource for Warehouse {
    type Data = Stock;
    type Payload = NewProduct;
    const NAME: &'static str = "Warehouse";

    async fn fetch(client: &ApiClient) -> ApiResult<Self::Data> {
        let (categories, products) =
            futures::try_join!(client.list_product_categories(), client.list_products())?;
        Ok(Stock { categories, products })
    }

    async fn create(client: &ApiClient, payload: &Self::Payload) -> ApiResult<()> {
        client.create_product(payload).await
    }
}
