//! File delivery: hand fetched bytes to the browser per platform strategy.
//!
//! TRADE-OFFS
//! ==========
//! Desktop browsers honor a programmatic anchor click and the object URL can
//! be revoked immediately. Mobile contexts get the URL opened in a new
//! browsing context instead; the URL must outlive the hand-off, so it is
//! revoked on a fixed delay. No retry logic: a failure at any stage
//! propagates to the caller, which owns user-facing error reporting.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::util::platform::PlatformProfile;
#[cfg(feature = "hydrate")]
use crate::util::platform::{DownloadMethod, select_download_method};

/// Object URLs handed to a new browsing context are revoked after this
/// delay, long enough for the viewer to take ownership of the blob.
#[cfg(feature = "hydrate")]
const REVOKE_DELAY_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
const IOS_SAVE_HINT: &str =
    "O arquivo foi aberto em uma nova aba. Use o botão Compartilhar para salvá-lo.";

/// Whether the iOS save-instructions alert applies: iOS, outside an
/// installed-app (standalone) context, and not a non-Safari mobile browser.
#[cfg(any(test, feature = "hydrate"))]
fn ios_alert_applies(profile: &PlatformProfile, standalone: bool) -> bool {
    profile.is_ios && !standalone && !(profile.is_mobile && !profile.is_safari)
}

/// Deliver `bytes` to the user as a file named `filename`, using the
/// strategy selected for `profile`.
///
/// # Errors
///
/// Returns a display-ready message when the browser environment is missing
/// or object-URL/anchor creation fails.
pub fn deliver(bytes: &[u8], filename: &str, profile: &PlatformProfile) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = make_object_url(bytes)?;
        match select_download_method(profile) {
            DownloadMethod::Programmatic => {
                let result = anchor_download(&url, filename);
                let _ = web_sys::Url::revoke_object_url(&url);
                result
            }
            DownloadMethod::WindowOpen | DownloadMethod::Fallback => {
                open_in_new_context(&url, profile)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename, profile);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
fn make_object_url(bytes: &[u8]) -> Result<String, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Falha ao preparar o arquivo para download".to_owned())?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Falha ao preparar o arquivo para download".to_owned())
}

/// Hidden anchor with a `download` attribute: click, remove.
#[cfg(feature = "hydrate")]
fn anchor_download(url: &str, filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast as _;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "Ambiente de navegador indisponível".to_owned())?;
    let body = document
        .body()
        .ok_or_else(|| "Ambiente de navegador indisponível".to_owned())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Falha ao iniciar o download".to_owned())?
        .dyn_into()
        .map_err(|_| "Falha ao iniciar o download".to_owned())?;
    anchor.set_href(url);
    anchor.set_download(filename);
    let _ = body.append_child(&anchor);
    anchor.click();
    let _ = body.remove_child(&anchor);
    Ok(())
}

/// Open the URL in a new browsing context, falling back to same-tab
/// navigation when the context could not be opened. The object URL is
/// revoked after a fixed delay.
#[cfg(feature = "hydrate")]
fn open_in_new_context(url: &str, profile: &PlatformProfile) -> Result<(), String> {
    let window =
        web_sys::window().ok_or_else(|| "Ambiente de navegador indisponível".to_owned())?;
    match window.open_with_url(url) {
        Ok(Some(_)) => {}
        _ => {
            let _ = window.location().set_href(url);
        }
    }
    let revoke_url = url.to_owned();
    gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&revoke_url);
    })
    .forget();
    if ios_alert_applies(profile, is_standalone(&window)) {
        let _ = window.alert_with_message(IOS_SAVE_HINT);
    }
    Ok(())
}

/// Installed-app ("standalone") detection; `navigator.standalone` is an
/// iOS-only, untyped property.
#[cfg(feature = "hydrate")]
fn is_standalone(window: &web_sys::Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &"standalone".into())
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
