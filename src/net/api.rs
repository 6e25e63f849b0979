//! Generic authenticated gateway to the catalog backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every catalog page goes through these helpers. Requests merge default
//! JSON headers with the injected bearer header; a 401 from ANY endpoint is
//! terminal for the session — no refresh rotation exists, so the gateway
//! forces a logout, navigates hard to `/login`, and rejects with the
//! session-expired message. The original call site still sees the rejection
//! so its local teardown (spinners, flags) runs.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    CatalogRequest, CatalogResponse, HealthResponse, PriceUpdateResponse, ProductsResponse,
};

#[cfg(any(test, feature = "hydrate"))]
fn product_price_endpoint(product_id: &str) -> String {
    format!("/api/products/{product_id}/price")
}

#[cfg(any(test, feature = "hydrate"))]
fn download_endpoint(filename: &str) -> String {
    format!("/api/download/{filename}")
}

/// Hard client-side navigation to the login screen.
#[cfg(feature = "hydrate")]
fn navigate_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Shared 401 policy: scrub the session, leave the page, reject the caller.
#[cfg(feature = "hydrate")]
async fn expire_session() -> ApiError {
    super::auth::logout().await;
    navigate_to_login();
    ApiError::session_expired()
}

#[cfg(feature = "hydrate")]
async fn dispatch_json(
    method: gloo_net::http::Method,
    endpoint: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    let mut builder = gloo_net::http::RequestBuilder::new(&super::api_url(endpoint))
        .method(method)
        .header("Content-Type", "application/json");
    for (name, value) in super::auth::auth_headers() {
        builder = builder.header(name, &value);
    }
    let request = match body {
        Some(body) => builder.json(body).map_err(|err| ApiError::new(err.to_string()))?,
        None => builder.build().map_err(|err| ApiError::new(err.to_string()))?,
    };
    let resp = request
        .send()
        .await
        .map_err(|err| ApiError::new(err.to_string()))?;
    if resp.status() == 401 {
        return Err(expire_session().await);
    }
    if !resp.ok() {
        let fallback = super::error::http_status_message(resp.status());
        return Err(ApiError::new(super::error_detail(resp, &fallback).await));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn request_json<T: serde::de::DeserializeOwned>(
    method: gloo_net::http::Method,
    endpoint: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let resp = dispatch_json(method, endpoint, body).await?;
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::new(err.to_string()))
}

/// Liveness/status probe, `GET /api/health`.
///
/// # Errors
///
/// Rejects with the server's detail message or a generic HTTP-status
/// message; 401 follows the session-expiry policy.
pub async fn health_check() -> Result<HealthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(gloo_net::http::Method::GET, "/api/health", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::new("not available on server"))
    }
}

/// Active product list, `GET /api/products`.
///
/// # Errors
///
/// Same policy as [`health_check`].
pub async fn get_products() -> Result<ProductsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(gloo_net::http::Method::GET, "/api/products", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::new("not available on server"))
    }
}

/// Update one product's price, `PUT /api/products/{id}/price`.
///
/// # Errors
///
/// Same policy as [`health_check`].
pub async fn update_product_price(
    product_id: &str,
    new_price: f64,
) -> Result<PriceUpdateResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "price": new_price });
        request_json(
            gloo_net::http::Method::PUT,
            &product_price_endpoint(product_id),
            Some(&body),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_id, new_price);
        Err(ApiError::new("not available on server"))
    }
}

/// Submit the product selection for PDF generation,
/// `POST /api/generate-catalog`.
///
/// # Errors
///
/// Same policy as [`health_check`].
pub async fn generate_catalog(request: &CatalogRequest) -> Result<CatalogResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body =
            serde_json::to_value(request).map_err(|err| ApiError::new(err.to_string()))?;
        request_json(gloo_net::http::Method::POST, "/api/generate-catalog", Some(&body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::new("not available on server"))
    }
}

/// Fetch a generated file's bytes, `GET /api/download/{filename}`. No JSON
/// content header; auth injection and 401 interception as everywhere else.
///
/// # Errors
///
/// Rejects with `Download failed: <status text>` on non-2xx.
pub async fn download_catalog(filename: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder =
            gloo_net::http::RequestBuilder::new(&super::api_url(&download_endpoint(filename)));
        for (name, value) in super::auth::auth_headers() {
            builder = builder.header(name, &value);
        }
        let resp = builder
            .build()
            .map_err(|err| ApiError::new(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::new(err.to_string()))?;
        if resp.status() == 401 {
            return Err(expire_session().await);
        }
        if !resp.ok() {
            return Err(ApiError::new(super::error::download_failed_message(
                &resp.status_text(),
            )));
        }
        resp.binary()
            .await
            .map_err(|err| ApiError::new(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filename;
        Err(ApiError::new("not available on server"))
    }
}
