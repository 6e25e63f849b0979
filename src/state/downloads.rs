//! Client-side history of generated catalogs.
//!
//! DESIGN
//! ======
//! The backend exposes downloads only by exact filename, never a listing, so
//! the history this page shows is recorded locally at generation time and
//! persisted in `localStorage`. It is per-device by construction.

#[cfg(test)]
#[path = "downloads_test.rs"]
mod downloads_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

pub(crate) const HISTORY_KEY: &str = "ja_download_history";

/// Keep the history bounded; oldest entries fall off.
const HISTORY_LIMIT: usize = 50;

/// One generated catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadEntry {
    pub file_name: String,
    pub product_count: usize,
    /// ISO 8601 timestamp captured at generation time.
    pub generated_at: String,
}

/// Downloads page state.
#[derive(Clone, Debug, Default)]
pub struct DownloadsState {
    pub entries: Vec<DownloadEntry>,
    pub busy: bool,
}

/// Prepend an entry, deduplicating by file name and trimming to the limit.
pub fn push_entry(entries: &mut Vec<DownloadEntry>, entry: DownloadEntry) {
    entries.retain(|existing| existing.file_name != entry.file_name);
    entries.insert(0, entry);
    entries.truncate(HISTORY_LIMIT);
}

/// Total number of products across all recorded catalogs.
pub fn total_products(entries: &[DownloadEntry]) -> usize {
    entries.iter().map(|entry| entry.product_count).sum()
}

/// pt-BR display for an ISO 8601 timestamp: `30/06/2025 17:07`. Falls back
/// to the raw string when it does not parse.
pub fn format_timestamp(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return iso.to_owned();
    };
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let hour_minute: Vec<&str> = time.splitn(3, ':').take(2).collect();
    let [hour, minute] = hour_minute.as_slice() else {
        return iso.to_owned();
    };
    format!("{day}/{month}/{year} {hour}:{minute}")
}

/// Load the persisted history; absent or malformed storage reads as empty.
pub fn load_history() -> Vec<DownloadEntry> {
    storage::load_json(HISTORY_KEY).unwrap_or_default()
}

/// Persist the history.
pub fn save_history(entries: &[DownloadEntry]) {
    storage::save_json(HISTORY_KEY, &entries);
}

/// Record a freshly generated catalog: prepend in memory and persist.
pub fn record(entries: &mut Vec<DownloadEntry>, entry: DownloadEntry) {
    push_entry(entries, entry);
    save_history(entries);
}

/// Current instant as an ISO 8601 string; empty off-browser.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_iso_string()
            .as_string()
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
