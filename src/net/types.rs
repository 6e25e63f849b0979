//! Shared wire DTOs for the catalog backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless. Product fields keep their Portuguese wire
//! names (`nome`, `preco`, ...) — they are the contract, not a style choice.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role as issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// The authenticated user as returned by `/api/auth/me`. Immutable value
/// object; never constructed client-side except as a response echo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
}

/// Token pair issued by login/registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Login form payload. Ephemeral; discarded after the call resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterData {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Admin-only user provisioning payload for `/api/auth/create-user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateUserData {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend record identifier.
    pub id: String,
    /// Display name.
    pub nome: String,
    /// Unit price in BRL; absent when not yet priced.
    pub preco: Option<f64>,
    pub sku: String,
    pub barcode: String,
    pub imagem_url: Option<String>,
}

/// Response of `GET /api/products`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
    pub count: usize,
}

/// Request body of `POST /api/generate-catalog`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogRequest {
    pub selected_products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Response of `POST /api/generate-catalog`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Response of `PUT /api/products/{id}/price`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceUpdateResponse {
    pub success: bool,
    pub product_id: String,
    pub new_price: f64,
}

/// Response of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub notion_status: String,
    pub active_products: u64,
    pub timestamp: String,
}
