//! Product card for the catalog grid.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::catalog::format_price;

/// A selectable product card with a price-edit affordance.
#[component]
pub fn ProductCard(
    product: Product,
    selected: bool,
    on_toggle: Callback<String>,
    on_edit_price: Callback<String>,
) -> impl IntoView {
    let id = product.id.clone();
    let toggle_id = id.clone();
    let edit_id = id.clone();
    let price = format_price(product.preco);
    let has_image = product.imagem_url.is_some();
    let image_url = product.imagem_url.clone().unwrap_or_default();
    let nome = product.nome.clone();
    let image_alt = product.nome.clone();

    view! {
        <div class="product-card" class:product-card--selected=selected>
            <label class="product-card__select">
                <input
                    type="checkbox"
                    prop:checked=selected
                    on:change=move |_| on_toggle.run(toggle_id.clone())
                />
                " Incluir no catálogo"
            </label>
            <div class="product-card__image">
                <Show
                    when=move || has_image
                    fallback=|| view! { <span class="product-card__placeholder">"Sem imagem"</span> }
                >
                    <img src=image_url.clone() alt=image_alt.clone() />
                </Show>
            </div>
            <h3 class="product-card__name">{nome}</h3>
            <span class="product-card__price">{price}</span>
            <div class="product-card__meta">
                <span>"SKU: " {product.sku.clone()}</span>
                <span>"Código: " {product.barcode.clone()}</span>
            </div>
            <button
                class="btn product-card__edit"
                on:click=move |_| on_edit_price.run(edit_id.clone())
            >
                "Editar preço"
            </button>
        </div>
    }
}
