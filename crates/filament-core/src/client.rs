//! API Client
//!
//! Typed calls against the inventory API. Every authenticated call carries
//! the session's bearer token; a 401/403 on any of them signs the session
//! out before the error is returned.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ErrorBody, FilamentType, LoginRequest, LoginResponse, NewFilamentType, NewProduct,
    NewPurchase, Product, ProductCategory, Purchase,
};
use crate::session::Session;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

pub mod endpoints {
    pub const LOGIN: &str = "/api/login";
    pub const FILAMENT_TYPES: &str = "/api/filament-types";
    pub const PURCHASES: &str = "/api/purchases";
    pub const PRODUCT_CATEGORIES: &str = "/api/product-categories";
    pub const PRODUCTS: &str = "/api/products";
}

pub struct ApiClient {
    base_url: String,
    transport: Box<dyn Transport>,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: impl Transport + 'static, session: Session) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport: Box::new(transport),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Exchange the shared password for a token and sign the session in
    pub async fn login(&self, password: &str) -> ApiResult<String> {
        let body = serde_json::to_string(&LoginRequest { password })?;
        let response = self
            .transport
            .send(HttpRequest {
                method: Method::Post,
                url: self.url(endpoints::LOGIN),
                bearer: None,
                body: Some(body),
            })
            .await?;

        if !response.is_success() {
            log::warn!("[ApiClient] login rejected with status {}", response.status);
            return Err(ApiError::InvalidPassword);
        }

        let LoginResponse { token } = serde_json::from_str(&response.body)?;
        self.session.sign_in(&token);
        Ok(token)
    }

    pub fn logout(&self) {
        self.session.sign_out();
    }

    // ========================
    // Filament Types
    // ========================

    pub async fn list_filament_types(&self) -> ApiResult<Vec<FilamentType>> {
        self.get(endpoints::FILAMENT_TYPES).await
    }

    pub async fn create_filament_type(&self, payload: &NewFilamentType) -> ApiResult<()> {
        self.post(endpoints::FILAMENT_TYPES, payload).await
    }

    // ========================
    // Purchases
    // ========================

    pub async fn list_purchases(&self) -> ApiResult<Vec<Purchase>> {
        self.get(endpoints::PURCHASES).await
    }

    pub async fn create_purchase(&self, payload: &NewPurchase) -> ApiResult<()> {
        self.post(endpoints::PURCHASES, payload).await
    }

    // ========================
    // Warehouse
    // ========================

    pub async fn list_product_categories(&self) -> ApiResult<Vec<ProductCategory>> {
        self.get(endpoints::PRODUCT_CATEGORIES).await
    }

    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.get(endpoints::PRODUCTS).await
    }

    pub async fn create_product(&self, payload: &NewProduct) -> ApiResult<()> {
        self.post(endpoints::PRODUCTS, payload).await
    }

    // ========================
    // Plumbing
    // ========================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send_authorized(Method::Get, path, None).await?;
        if !response.is_success() {
            log::warn!("[ApiClient] GET {} failed with status {}", path, response.status);
            return Err(ApiError::Status(response.status));
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn post<B: Serialize>(&self, path: &str, payload: &B) -> ApiResult<()> {
        let body = serde_json::to_string(payload)?;
        let response = self.send_authorized(Method::Post, path, Some(body)).await?;
        if !response.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|b| b.error);
            log::warn!("[ApiClient] POST {} rejected with status {}: {:?}", path, response.status, message);
            return Err(ApiError::Rejected { status: response.status, message });
        }
        Ok(())
    }

    async fn send_authorized(&self, method: Method, path: &str, body: Option<String>) -> ApiResult<HttpResponse> {
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: self.url(path),
                bearer: self.session.token(),
                body,
            })
            .await?;

        if response.is_auth_failure() {
            log::warn!("[ApiClient] {} {} answered {}, signing out", method.as_str(), path, response.status);
            self.session.sign_out();
            return Err(ApiError::SessionExpired(response.status));
        }
        Ok(response)
    }
}
