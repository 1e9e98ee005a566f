//! REST façade for the remote storefront backend.
//!
//! One fixed backend origin; every request picks up the persisted bearer
//! token automatically (requests go out unauthenticated when no token is
//! stored — the backend decides). Network failures, non-2xx statuses, and
//! malformed bodies all collapse into a single [`ApiError`] so pages have
//! exactly one failure path to render.
//!
//! No retries happen here; see [`crate::net::retry`] for the bounded
//! retry some listing pages layer on top.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    CartAdd, CartItem, Category, LoginRequest, LoginResponse, NewProduct, Order, OrderStatus,
    PaymentRequest, Product, Profile, ProfileUpdate, RegisterRequest,
};

/// Backend origin all paths are resolved against.
pub const API_BASE: &str = "http://localhost:8080";

/// Unified request failure: carries the HTTP status when one was received
/// and a message suitable for direct display.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub(crate) fn network(err: &gloo_net::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// True for the transient service-unavailable signal (HTTP 503).
    pub fn is_service_unavailable(&self) -> bool {
        self.status == Some(503)
    }
}

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// `Authorization` header value for a bearer token.
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Attach the persisted token, if any.
fn authorize(req: RequestBuilder) -> RequestBuilder {
    match crate::auth::token::load() {
        Some(token) => req.header("Authorization", &bearer(&token)),
        None => req,
    }
}

/// Pick a display message out of an error body: the backend sends either
/// `{"message": ...}` or `{"error": ...}` depending on the service.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(serde_json::Value::as_str) {
                return msg.to_owned();
            }
        }
    }
    format!("request failed with status {status}")
}

async fn into_error(resp: Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError {
        status: Some(status),
        message: error_message(status, &body),
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(into_error(resp).await);
    }
    resp.json::<T>().await.map_err(|err| ApiError {
        status: Some(resp.status()),
        message: format!("malformed response body: {err}"),
    })
}

async fn read_unit(resp: Response) -> Result<(), ApiError> {
    if !resp.ok() {
        return Err(into_error(resp).await);
    }
    Ok(())
}

// -------------------------------------------------------------
// Verb helpers
// -------------------------------------------------------------

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorize(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;
    read_json(resp).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let resp = authorize(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::network(&e))?
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;
    read_json(resp).await
}

/// POST where the response body is irrelevant to the caller.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = authorize(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::network(&e))?
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;
    read_unit(resp).await
}

/// Body-less POST (e.g. order placement).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorize(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;
    read_json(resp).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let resp = authorize(Request::put(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::network(&e))?
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;
    read_json(resp).await
}

pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let resp = authorize(Request::put(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::network(&e))?
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;
    read_unit(resp).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = authorize(Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::network(&e))?;
    read_unit(resp).await
}

// -------------------------------------------------------------
// Auth + profile
// -------------------------------------------------------------

/// `POST /auth/login` — returns the bearer token on success.
pub async fn login(email: String, password: String) -> Result<String, ApiError> {
    let body: LoginResponse = post("/auth/login", &LoginRequest { email, password }).await?;
    Ok(body.token)
}

pub async fn register(req: &RegisterRequest) -> Result<(), ApiError> {
    post_unit("/register", req).await
}

pub async fn fetch_profile() -> Result<Profile, ApiError> {
    get("/profile").await
}

pub async fn update_profile(req: &ProfileUpdate) -> Result<Profile, ApiError> {
    put("/profile", req).await
}

pub async fn delete_profile() -> Result<(), ApiError> {
    delete("/profile").await
}

// -------------------------------------------------------------
// Products
// -------------------------------------------------------------

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get("/product").await
}

pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    get(&format!("/product/{id}")).await
}

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get("/product/category").await
}

pub async fn create_product(product: &NewProduct) -> Result<Product, ApiError> {
    post("/product", product).await
}

pub async fn update_product(id: i64, product: &NewProduct) -> Result<Product, ApiError> {
    put(&format!("/product/{id}"), product).await
}

pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    delete(&format!("/product/{id}")).await
}

// -------------------------------------------------------------
// Cart
// -------------------------------------------------------------

pub async fn fetch_cart(user_id: i64) -> Result<Vec<CartItem>, ApiError> {
    get(&format!("/cart/user/{user_id}")).await
}

pub async fn add_to_cart(item: &CartAdd) -> Result<CartItem, ApiError> {
    post("/cart", item).await
}

pub async fn update_cart_item(cart_id: i64, quantity: u32) -> Result<CartItem, ApiError> {
    put(&format!("/cart/{cart_id}"), &serde_json::json!({ "quantity": quantity })).await
}

pub async fn remove_cart_item(cart_id: i64) -> Result<(), ApiError> {
    delete(&format!("/cart/{cart_id}")).await
}

pub async fn clear_cart(user_id: i64) -> Result<(), ApiError> {
    delete(&format!("/cart/user/{user_id}")).await
}

// -------------------------------------------------------------
// Orders + payment
// -------------------------------------------------------------

pub async fn place_order(user_id: i64) -> Result<Order, ApiError> {
    post_empty(&format!("/order/user/{user_id}")).await
}

pub async fn fetch_order(id: i64) -> Result<Order, ApiError> {
    get(&format!("/order/{id}")).await
}

pub async fn fetch_user_orders(user_id: i64) -> Result<Vec<Order>, ApiError> {
    get(&format!("/order/user/{user_id}")).await
}

pub async fn fetch_all_orders() -> Result<Vec<Order>, ApiError> {
    get("/order/all").await
}

/// The status-update endpoint takes the bare status string as its JSON body.
pub async fn update_order_status(order_id: i64, status: OrderStatus) -> Result<(), ApiError> {
    put_unit(&format!("/order/{order_id}/status"), &status.as_str()).await
}

pub async fn pay(user_id: i64, order_id: i64, req: &PaymentRequest) -> Result<(), ApiError> {
    post_unit(&format!("/payment/user/{user_id}/order/{order_id}"), req).await
}
