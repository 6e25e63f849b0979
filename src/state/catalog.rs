//! Product list and selection state for the catalog page.
//!
//! DESIGN
//! ======
//! The list is page-local: the catalog page fetches it, filters it, and
//! mutates single entries in place after a price update. Pure helpers do the
//! actual work so behavior is testable without a browser.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::BTreeSet;

use crate::net::types::Product;

/// Catalog page state.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    /// Selected product ids; ordered for stable rendering.
    pub selected: BTreeSet<String>,
    pub search: String,
    pub loading: bool,
    pub generating: bool,
    pub error: Option<String>,
}

/// Case-insensitive name/SKU filter; a blank term keeps everything.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| {
            p.nome.to_lowercase().contains(&needle) || p.sku.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Toggle one product's membership in the selection.
pub fn toggle_selected(selected: &mut BTreeSet<String>, product_id: &str) {
    if !selected.remove(product_id) {
        selected.insert(product_id.to_owned());
    }
}

/// Materialize the selected products in list order.
pub fn selected_products(products: &[Product], selected: &BTreeSet<String>) -> Vec<Product> {
    products
        .iter()
        .filter(|p| selected.contains(&p.id))
        .cloned()
        .collect()
}

/// Overwrite the price of exactly the matching entry. Returns whether a
/// product with `product_id` was found.
pub fn apply_price_update(products: &mut [Product], product_id: &str, new_price: f64) -> bool {
    match products.iter_mut().find(|p| p.id == product_id) {
        Some(product) => {
            product.preco = Some(new_price);
            true
        }
        None => false,
    }
}

/// pt-BR price display: `R$ 45,90`, or a placeholder when unpriced.
pub fn format_price(preco: Option<f64>) -> String {
    match preco {
        Some(value) => format!("R$ {value:.2}").replace('.', ","),
        None => "Preço não informado".to_owned(),
    }
}
