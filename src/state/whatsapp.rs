//! WhatsApp connection panel state and polling policy.
//!
//! DESIGN
//! ======
//! Polling speed follows the latest observed status: fast while a pairing
//! attempt is converging, slow while disconnected, moderate once open. The
//! policy is a pure function so the cadence is testable; the settings page
//! owns the actual timer and tears it down on navigation away.

#[cfg(test)]
#[path = "whatsapp_test.rs"]
mod whatsapp_test;

use std::time::Duration;

use crate::net::whatsapp::{ConnectionState, InstanceStatus, QrCode, ServiceHealth};

/// Settings page state for the WhatsApp panel.
#[derive(Clone, Debug, Default)]
pub struct WhatsAppState {
    pub status: Option<InstanceStatus>,
    pub health: Option<ServiceHealth>,
    pub qr: Option<QrCode>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Poll cadence for a just-observed status; `None` (nothing observed yet)
/// polls at the default rate.
pub fn next_poll_interval(status: Option<ConnectionState>) -> Duration {
    match status {
        Some(ConnectionState::Connecting) => Duration::from_secs(3),
        Some(ConnectionState::Close) => Duration::from_secs(10),
        Some(ConnectionState::Open) | None => Duration::from_secs(7),
    }
}

/// Badge copy for a connection state.
pub fn status_label(status: Option<ConnectionState>) -> &'static str {
    match status {
        Some(ConnectionState::Open) => "Conectado",
        Some(ConnectionState::Connecting) => "Conectando...",
        Some(ConnectionState::Close) | None => "Desconectado",
    }
}
