use super::*;

fn entry(file_name: &str, count: usize, generated_at: &str) -> DownloadEntry {
    DownloadEntry {
        file_name: file_name.to_owned(),
        product_count: count,
        generated_at: generated_at.to_owned(),
    }
}

#[test]
fn push_entry_prepends_newest_first() {
    let mut entries = vec![entry("antigo.pdf", 10, "2025-06-29T10:00:00Z")];
    push_entry(&mut entries, entry("novo.pdf", 5, "2025-06-30T17:07:21Z"));
    assert_eq!(entries[0].file_name, "novo.pdf");
    assert_eq!(entries.len(), 2);
}

#[test]
fn push_entry_deduplicates_by_file_name() {
    let mut entries = vec![entry("repetido.pdf", 10, "2025-06-29T10:00:00Z")];
    push_entry(&mut entries, entry("repetido.pdf", 12, "2025-06-30T17:07:21Z"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].product_count, 12);
}

#[test]
fn push_entry_trims_to_the_limit() {
    let mut entries = Vec::new();
    for i in 0..60 {
        push_entry(&mut entries, entry(&format!("c{i}.pdf"), 1, "2025-06-30T00:00:00Z"));
    }
    assert_eq!(entries.len(), 50);
    assert_eq!(entries[0].file_name, "c59.pdf");
}

#[test]
fn total_products_sums_counts() {
    let entries = vec![
        entry("a.pdf", 29, "2025-06-30T17:07:21Z"),
        entry("b.pdf", 28, "2025-06-30T16:09:40Z"),
    ];
    assert_eq!(total_products(&entries), 57);
}

#[test]
fn format_timestamp_renders_pt_br_order() {
    assert_eq!(format_timestamp("2025-06-30T17:07:21Z"), "30/06/2025 17:07");
    assert_eq!(format_timestamp("2025-06-30T17:07:21.123Z"), "30/06/2025 17:07");
}

#[test]
fn format_timestamp_falls_back_to_raw_input() {
    assert_eq!(format_timestamp("hoje"), "hoje");
    assert_eq!(format_timestamp(""), "");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn history_is_empty_off_browser() {
    assert!(load_history().is_empty());
}
