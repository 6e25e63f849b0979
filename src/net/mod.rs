//! Networking modules for the two HTTP surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session endpoints and token persistence, `api` is the
//! generic authenticated gateway to the catalog backend, `whatsapp` is the
//! tenant-scoped polling client for the WhatsApp integration service, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod types;
pub mod whatsapp;

/// Catalog backend origin. Overridable at build time; the default matches
/// the local development server.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn api_base_url() -> &'static str {
    option_env!("CATALOG_API_URL").unwrap_or("http://localhost:8000")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn api_url(endpoint: &str) -> String {
    format!("{}{endpoint}", api_base_url())
}

/// Abort-signal-style cancellation: a timer that aborts the paired
/// controller when it fires. Dropping the guard cancels the timer, so a
/// request that completes in time never observes the abort.
#[cfg(feature = "hydrate")]
pub(crate) struct AbortTimeout {
    controller: web_sys::AbortController,
    _timeout: gloo_timers::callback::Timeout,
}

#[cfg(feature = "hydrate")]
impl AbortTimeout {
    /// Arm a timeout of `ms` milliseconds. Returns `None` when the host
    /// does not support `AbortController`; callers then run unbounded.
    pub(crate) fn new(ms: u32) -> Option<Self> {
        let controller = web_sys::AbortController::new().ok()?;
        let abort = controller.clone();
        let timeout = gloo_timers::callback::Timeout::new(ms, move || abort.abort());
        Some(Self { controller, _timeout: timeout })
    }

    pub(crate) fn signal(&self) -> web_sys::AbortSignal {
        self.controller.signal()
    }
}

/// Extract the server-supplied `detail` message from an error body,
/// tolerating malformed or missing bodies.
#[cfg(feature = "hydrate")]
pub(crate) async fn error_detail(resp: gloo_net::http::Response, fallback: &str) -> String {
    resp.json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("detail")
                .and_then(|detail| detail.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}
