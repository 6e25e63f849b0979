//! Browser platform classification for download delivery.
//!
//! DESIGN
//! ======
//! The user-agent string is an injected parameter rather than an ambient
//! read, so classification is a pure function that can be unit-tested across
//! simulated platforms. `current()` is the only place that touches the
//! runtime environment.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

const MOBILE_TOKENS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Derived, stateless view of the client platform. Recomputed per call; no
/// lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlatformProfile {
    pub is_mobile: bool,
    pub is_ios: bool,
    pub is_android: bool,
    pub is_safari: bool,
    pub is_chrome: bool,
    /// Mobile Safari and some mobile browsers cannot honor a programmatic
    /// anchor download.
    pub needs_alternative_download: bool,
}

impl PlatformProfile {
    /// Classify a user-agent string. Matching is case-insensitive substring
    /// search; Chrome advertises "Safari" in its UA, so Safari detection
    /// requires the absence of "Chrome".
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let is_mobile = MOBILE_TOKENS.iter().any(|token| ua.contains(token));
        let is_ios = ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod");
        let is_android = ua.contains("android");
        let is_chrome = ua.contains("chrome");
        let is_safari = ua.contains("safari") && !is_chrome;
        Self {
            is_mobile,
            is_ios,
            is_android,
            is_safari,
            is_chrome,
            needs_alternative_download: is_mobile && (is_ios || is_safari),
        }
    }

    /// Classify the current browser. Returns the default (desktop-like)
    /// profile when no window/navigator is available.
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().user_agent().ok())
                .map(|ua| Self::from_user_agent(&ua))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

/// How a fetched file should be handed to the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadMethod {
    /// Hidden anchor with a `download` attribute pointing at an object URL.
    Programmatic,
    /// Open the object URL in a new browsing context (mobile/iOS/Safari).
    WindowOpen,
    /// Reserved; no current call site selects it.
    Fallback,
}

/// Pick the delivery strategy for a platform.
pub fn select_download_method(profile: &PlatformProfile) -> DownloadMethod {
    if profile.is_mobile {
        DownloadMethod::WindowOpen
    } else {
        DownloadMethod::Programmatic
    }
}
