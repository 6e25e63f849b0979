use super::*;

#[test]
fn product_price_endpoint_formats_expected_path() {
    assert_eq!(product_price_endpoint("42"), "/api/products/42/price");
}

#[test]
fn download_endpoint_formats_expected_path() {
    assert_eq!(
        download_endpoint("catalogo_ja_distribuidora_20250630_170721.pdf"),
        "/api/download/catalogo_ja_distribuidora_20250630_170721.pdf"
    );
}

#[test]
fn api_url_joins_base_and_endpoint() {
    let url = crate::net::api_url("/api/products");
    assert!(url.ends_with("/api/products"));
    assert!(url.starts_with("http"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn gateway_ops_are_unavailable_off_browser() {
    let result = futures::executor::block_on(get_products());
    assert!(result.is_err());
}
