#![cfg(not(feature = "hydrate"))]

use super::*;

fn ios_safari() -> PlatformProfile {
    PlatformProfile::from_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 \
         (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    )
}

fn ios_chrome() -> PlatformProfile {
    PlatformProfile::from_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 \
         (KHTML, like Gecko) CriOS/120.0.0.0 Chrome/120.0 Mobile/15E148 Safari/604.1",
    )
}

#[test]
fn ios_alert_shown_for_safari_outside_standalone() {
    assert!(ios_alert_applies(&ios_safari(), false));
}

#[test]
fn ios_alert_suppressed_in_standalone_context() {
    assert!(!ios_alert_applies(&ios_safari(), true));
}

#[test]
fn ios_alert_suppressed_for_non_safari_mobile_browser() {
    assert!(!ios_alert_applies(&ios_chrome(), false));
}

#[test]
fn ios_alert_never_applies_on_desktop() {
    let desktop = PlatformProfile::from_user_agent(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    );
    assert!(!ios_alert_applies(&desktop, false));
}

#[test]
fn ios_hint_explains_the_share_flow() {
    assert!(IOS_SAVE_HINT.contains("Compartilhar"));
}

#[test]
fn deliver_is_unavailable_off_browser() {
    let result = deliver(b"%PDF-1.4", "catalogo.pdf", &PlatformProfile::default());
    assert!(result.is_err());
}
