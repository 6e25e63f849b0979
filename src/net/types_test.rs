use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
}

#[test]
fn user_profile_round_trips() {
    let raw = r#"{
        "email": "admin@example.com",
        "full_name": "Admin",
        "role": "admin",
        "is_active": true,
        "created_at": "2024-01-01"
    }"#;
    let user: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(user.full_name, "Admin");
    assert_eq!(user.role, Role::Admin);
    assert!(user.is_active);
}

#[test]
fn product_accepts_null_price_and_image() {
    let raw = r#"{
        "id": "42",
        "nome": "Afiador de Facas 4 em 1",
        "preco": null,
        "sku": "BOM-1548",
        "barcode": "7891234567890",
        "imagem_url": null
    }"#;
    let product: Product = serde_json::from_str(raw).unwrap();
    assert_eq!(product.id, "42");
    assert!(product.preco.is_none());
    assert!(product.imagem_url.is_none());
}

#[test]
fn catalog_request_omits_absent_title() {
    let request = CatalogRequest { selected_products: Vec::new(), title: None };
    let raw = serde_json::to_string(&request).unwrap();
    assert!(!raw.contains("title"));
}

#[test]
fn catalog_response_tolerates_missing_file_fields() {
    let raw = r#"{"success": false, "message": "Nenhum produto selecionado"}"#;
    let resp: CatalogResponse = serde_json::from_str(raw).unwrap();
    assert!(!resp.success);
    assert!(resp.file_name.is_none());
}

#[test]
fn price_update_response_parses() {
    let raw = r#"{"success": true, "product_id": "42", "new_price": 19.9}"#;
    let resp: PriceUpdateResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.product_id, "42");
    assert!((resp.new_price - 19.9).abs() < f64::EPSILON);
}
