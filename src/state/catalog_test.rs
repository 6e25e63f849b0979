use super::*;

fn product(id: &str, nome: &str, sku: &str, preco: Option<f64>) -> Product {
    Product {
        id: id.to_owned(),
        nome: nome.to_owned(),
        preco,
        sku: sku.to_owned(),
        barcode: String::new(),
        imagem_url: None,
    }
}

fn sample() -> Vec<Product> {
    vec![
        product("41", "Afiador de Facas 4 em 1", "BOM-1548", Some(45.90)),
        product("42", "Aparador de Pelos LUATEK", "LMF-1105", Some(89.90)),
        product("43", "Garrafa Térmica 1L", "GAR-0001", None),
    ]
}

// =============================================================
// filter_products
// =============================================================

#[test]
fn blank_search_keeps_everything() {
    let products = sample();
    assert_eq!(filter_products(&products, "   ").len(), 3);
}

#[test]
fn search_matches_name_case_insensitively() {
    let products = sample();
    let hits = filter_products(&products, "afiador");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "41");
}

#[test]
fn search_matches_sku() {
    let products = sample();
    let hits = filter_products(&products, "lmf");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "42");
}

#[test]
fn search_without_hits_is_empty() {
    let products = sample();
    assert!(filter_products(&products, "inexistente").is_empty());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut selected = BTreeSet::new();
    toggle_selected(&mut selected, "42");
    assert!(selected.contains("42"));
    toggle_selected(&mut selected, "42");
    assert!(!selected.contains("42"));
}

#[test]
fn selected_products_follow_list_order() {
    let products = sample();
    let mut selected = BTreeSet::new();
    toggle_selected(&mut selected, "43");
    toggle_selected(&mut selected, "41");
    let picked = selected_products(&products, &selected);
    assert_eq!(picked.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["41", "43"]);
}

// =============================================================
// apply_price_update
// =============================================================

#[test]
fn price_update_mutates_exactly_the_matching_entry() {
    let mut products = sample();
    assert!(apply_price_update(&mut products, "42", 19.9));
    assert_eq!(products[1].preco, Some(19.9));
    // No other entries mutated.
    assert_eq!(products[0].preco, Some(45.90));
    assert_eq!(products[2].preco, None);
}

#[test]
fn price_update_for_unknown_id_changes_nothing() {
    let mut products = sample();
    assert!(!apply_price_update(&mut products, "99", 1.0));
    assert_eq!(products, sample());
}

// =============================================================
// format_price
// =============================================================

#[test]
fn format_price_uses_comma_decimal() {
    assert_eq!(format_price(Some(45.9)), "R$ 45,90");
    assert_eq!(format_price(Some(19.9)), "R$ 19,90");
}

#[test]
fn format_price_placeholder_when_unpriced() {
    assert_eq!(format_price(None), "Preço não informado");
}
