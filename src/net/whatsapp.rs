//! Read-mostly client for the WhatsApp integration service.
//!
//! SYSTEM CONTEXT
//! ==============
//! A second HTTP surface with its own base URL; requests carry a tenant
//! header (`x-tenant-id`) instead of bearer auth, so none of the gateway's
//! 401 session policy applies here. Consumed by the settings page's polling
//! loop.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

use serde::Deserialize;

use super::error::ApiError;

#[cfg(any(test, feature = "hydrate"))]
fn whatsapp_base_url() -> String {
    let origin = option_env!("WHATSAPP_API_URL").unwrap_or("https://api-dev.lexgoia.com.br");
    format!("{origin}/whatsapp")
}

/// Identifier scoping the integration to one business account.
pub(crate) fn tenant_id() -> &'static str {
    option_env!("WHATSAPP_TENANT_ID").unwrap_or("lexgo-main-tenant")
}

/// Connection lifecycle of the WhatsApp instance, as reported on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Open,
    Close,
    Connecting,
}

/// Instance status payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceStatus {
    pub instance_name: String,
    pub status: ConnectionState,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
}

impl InstanceStatus {
    /// Synthetic status used when the service reports no instance for this
    /// tenant (HTTP 404): treated as disconnected, not as an error.
    pub fn absent() -> Self {
        Self {
            instance_name: String::new(),
            status: ConnectionState::Close,
            phone_number: None,
            tenant_id: Some(tenant_id().to_owned()),
        }
    }
}

/// QR-code payload for pairing a device.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub qr_code: String,
    #[serde(default)]
    pub instance_name: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Integration service health payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub status: String,
    pub evolution_api: bool,
    pub timestamp: String,
}

/// Map a QR-code failure status to display copy, preferring the server's
/// message where one status has several causes.
#[cfg(any(test, feature = "hydrate"))]
fn qr_error_message(status: u16, server_message: Option<&str>) -> String {
    match status {
        400 => {
            if server_message.is_some_and(|m| m.contains("already connected")) {
                "WhatsApp já está conectado neste escritório".to_owned()
            } else {
                format!(
                    "Erro de configuração: {}",
                    server_message.unwrap_or("Verifique suas configurações")
                )
            }
        }
        401 => "Erro de autenticação: Token inválido ou expirado".to_owned(),
        403 => "Sem permissão para acessar WhatsApp".to_owned(),
        404 => "Serviço WhatsApp não encontrado".to_owned(),
        500 => "Erro interno do servidor WhatsApp".to_owned(),
        503 => "Serviço WhatsApp temporariamente indisponível".to_owned(),
        _ => format!(
            "Erro ao gerar QR Code: {}",
            server_message.unwrap_or("falha desconhecida")
        ),
    }
}

#[cfg(feature = "hydrate")]
fn tenant_request(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::RequestBuilder::new(&format!("{}{path}", whatsapp_base_url()))
        .header("Content-Type", "application/json")
        .header("x-tenant-id", tenant_id())
}

/// Current instance status; a 404 (no instance yet) maps to
/// [`InstanceStatus::absent`].
///
/// # Errors
///
/// Rejects on transport failure or any other non-2xx status.
pub async fn get_status() -> Result<InstanceStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = tenant_request("/instance/status")
            .build()
            .map_err(|err| ApiError::new(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::new(err.to_string()))?;
        if resp.status() == 404 {
            return Ok(InstanceStatus::absent());
        }
        if !resp.ok() {
            return Err(ApiError::new(format!(
                "Failed to get WhatsApp status: {}",
                resp.status_text()
            )));
        }
        resp.json::<InstanceStatus>()
            .await
            .map_err(|err| ApiError::new(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::new("not available on server"))
    }
}

/// Pairing QR code; supports lazy instance creation on the service side.
///
/// # Errors
///
/// Rejects with status-specific display copy (see `qr_error_message`).
pub async fn get_qr_code() -> Result<QrCode, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = tenant_request("/instance/qrcode")
            .build()
            .map_err(|err| ApiError::new(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::new(err.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<serde_json::Value>().await.ok();
            let server_message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(|m| m.as_str());
            return Err(ApiError::new(qr_error_message(status, server_message)));
        }
        resp.json::<QrCode>()
            .await
            .map_err(|err| ApiError::new(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::new("not available on server"))
    }
}

/// Integration service health probe. Unauthenticated; no tenant header
/// required.
///
/// # Errors
///
/// Rejects on transport failure or non-2xx status.
pub async fn get_health() -> Result<ServiceHealth, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/health", whatsapp_base_url()))
            .send()
            .await
            .map_err(|err| ApiError::new(err.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::new(format!(
                "Failed to get health status: {}",
                resp.status_text()
            )));
        }
        resp.json::<ServiceHealth>()
            .await
            .map_err(|err| ApiError::new(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::new("not available on server"))
    }
}
