use super::*;

const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const IOS_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
const MACOS_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";

#[test]
fn desktop_chrome_profile() {
    let p = PlatformProfile::from_user_agent(DESKTOP_CHROME);
    assert!(!p.is_mobile);
    assert!(!p.is_ios);
    assert!(p.is_chrome);
    assert!(!p.is_safari);
    assert!(!p.needs_alternative_download);
}

#[test]
fn ios_safari_profile() {
    let p = PlatformProfile::from_user_agent(IOS_SAFARI);
    assert!(p.is_mobile);
    assert!(p.is_ios);
    assert!(p.is_safari);
    assert!(!p.is_chrome);
    assert!(p.needs_alternative_download);
}

#[test]
fn android_chrome_profile() {
    let p = PlatformProfile::from_user_agent(ANDROID_CHROME);
    assert!(p.is_mobile);
    assert!(p.is_android);
    assert!(p.is_chrome);
    assert!(!p.is_safari);
    assert!(!p.needs_alternative_download);
}

#[test]
fn desktop_safari_is_not_mobile() {
    let p = PlatformProfile::from_user_agent(MACOS_SAFARI);
    assert!(!p.is_mobile);
    assert!(p.is_safari);
    assert!(!p.needs_alternative_download);
}

#[test]
fn empty_user_agent_is_desktop_like() {
    let p = PlatformProfile::from_user_agent("");
    assert_eq!(p, PlatformProfile::default());
}

#[test]
fn desktop_selects_programmatic() {
    let p = PlatformProfile::from_user_agent(DESKTOP_CHROME);
    assert_eq!(select_download_method(&p), DownloadMethod::Programmatic);
}

#[test]
fn ios_safari_selects_window_open() {
    let p = PlatformProfile::from_user_agent(IOS_SAFARI);
    assert_eq!(select_download_method(&p), DownloadMethod::WindowOpen);
}

#[test]
fn android_chrome_selects_window_open() {
    let p = PlatformProfile::from_user_agent(ANDROID_CHROME);
    assert_eq!(select_download_method(&p), DownloadMethod::WindowOpen);
}
