//! Catalog page: browse, filter, select, and generate the PDF catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The product list is fetched once on mount and mutated in place after a
//! price edit. Generation submits the current selection, records the result
//! in the local download history, then hands the produced file to the
//! platform download strategy. Failures leave the selection untouched so
//! the user can simply retry.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::components::price_dialog::PriceDialog;
use crate::components::product_card::ProductCard;
use crate::net::types::Product;
use crate::state::catalog::{CatalogState, filter_products, toggle_selected};
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let catalog = RwSignal::new(CatalogState { loading: true, ..CatalogState::default() });

    // Dialog state: the product being edited, its input buffer, and the
    // in-flight flag.
    let editing = RwSignal::new(None::<Product>);
    let price_value = RwSignal::new(String::new());
    let updating = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::get_products().await {
                Ok(resp) => catalog.update(|s| {
                    s.products = resp.products;
                    s.error = None;
                }),
                Err(err) => catalog.update(|s| s.error = Some(err.to_string())),
            }
            catalog.update(|s| s.loading = false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        catalog.update(|s| s.loading = false);
    }

    let on_toggle = Callback::new(move |product_id: String| {
        catalog.update(|s| toggle_selected(&mut s.selected, &product_id));
    });

    let on_edit_price = Callback::new(move |product_id: String| {
        let product = catalog
            .get_untracked()
            .products
            .iter()
            .find(|p| p.id == product_id)
            .cloned();
        if let Some(product) = product {
            price_value.set(product.preco.map_or_else(|| "0".to_owned(), |v| v.to_string()));
            editing.set(Some(product));
        }
    });

    let on_dialog_cancel = Callback::new(move |()| {
        if !updating.get_untracked() {
            editing.set(None);
        }
    });

    let on_dialog_submit = Callback::new(move |new_price: f64| {
        let Some(product) = editing.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let product_id = product.id;
            leptos::task::spawn_local(async move {
                use crate::state::catalog::apply_price_update;
                updating.set(true);
                match crate::net::api::update_product_price(&product_id, new_price).await {
                    Ok(resp) if resp.success => {
                        catalog.update(|s| {
                            apply_price_update(&mut s.products, &resp.product_id, resp.new_price);
                        });
                        crate::state::toasts::push_success(toasts, "Preço atualizado com sucesso!");
                        editing.set(None);
                    }
                    Ok(_) => crate::state::toasts::push_error(toasts, "Erro ao atualizar preço"),
                    Err(err) => crate::state::toasts::push_error(
                        toasts,
                        format!("Erro ao atualizar preço: {err}"),
                    ),
                }
                updating.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product, new_price, toasts);
        }
    });

    let on_generate = move |_| {
        let state = catalog.get_untracked();
        if state.generating {
            return;
        }
        if state.selected.is_empty() {
            crate::state::toasts::push_error(toasts, "Nenhum produto selecionado");
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                catalog.update(|s| s.generating = true);
                generate_and_deliver(catalog, toasts).await;
                catalog.update(|s| s.generating = false);
            });
        }
    };

    let total = move || catalog.get().products.len();
    let selected_count = move || catalog.get().selected.len();
    let with_images =
        move || catalog.get().products.iter().filter(|p| p.imagem_url.is_some()).count();

    view! {
        <Layout title="Catálogo de Produtos">
            <div class="catalog-toolbar">
                <input
                    class="catalog-search"
                    type="text"
                    placeholder="Buscar produtos..."
                    prop:value=move || catalog.get().search
                    on:input=move |ev| {
                        catalog.update(|s| s.search = event_target_value(&ev));
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || catalog.get().generating
                    on:click=on_generate
                >
                    {move || {
                        if catalog.get().generating { "Gerando..." } else { "Gerar Catálogo" }
                    }}
                </button>
            </div>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Total de Produtos"</span>
                    <span class="stat-card__value">{total}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Selecionados"</span>
                    <span class="stat-card__value">{selected_count}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Com Imagens"</span>
                    <span class="stat-card__value">{with_images}</span>
                </div>
            </div>

            <Show when=move || catalog.get().error.is_some()>
                <p class="catalog-error">
                    {move || catalog.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !catalog.get().loading
                fallback=|| view! { <p>"Carregando produtos..."</p> }
            >
                <div class="catalog-grid">
                    {move || {
                        let state = catalog.get();
                        let filtered: Vec<Product> = filter_products(&state.products, &state.search)
                            .into_iter()
                            .cloned()
                            .collect();
                        if filtered.is_empty() {
                            return view! {
                                <p class="catalog-empty">"Nenhum produto encontrado"</p>
                            }
                            .into_any();
                        }
                        filtered
                            .into_iter()
                            .map(|product| {
                                let selected = state.selected.contains(&product.id);
                                view! {
                                    <ProductCard
                                        product=product
                                        selected=selected
                                        on_toggle=on_toggle
                                        on_edit_price=on_edit_price
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>

            <Show when=move || editing.get().is_some()>
                {move || {
                    editing
                        .get()
                        .map(|product| {
                            view! {
                                <PriceDialog
                                    product_name=product.nome.clone()
                                    current_price=product.preco
                                    value=price_value
                                    busy=updating
                                    on_cancel=on_dialog_cancel
                                    on_submit=on_dialog_submit
                                />
                            }
                        })
                }}
            </Show>
        </Layout>
    }
}

/// Generate the catalog for the current selection, record it in the local
/// history, then fetch and deliver the file. Selection is never cleared, so
/// a failure at any stage can be retried as-is.
#[cfg(feature = "hydrate")]
async fn generate_and_deliver(catalog: RwSignal<CatalogState>, toasts: RwSignal<ToastState>) {
    use crate::net::types::CatalogRequest;
    use crate::state::catalog::selected_products;
    use crate::state::downloads::{DownloadEntry, load_history, now_iso, record};
    use crate::state::toasts::{push_error, push_success};
    use crate::util::download::deliver;
    use crate::util::platform::PlatformProfile;

    let state = catalog.get_untracked();
    let picked = selected_products(&state.products, &state.selected);
    let request = CatalogRequest { selected_products: picked.clone(), title: None };

    let resp = match crate::net::api::generate_catalog(&request).await {
        Ok(resp) => resp,
        Err(err) => {
            push_error(toasts, err.to_string());
            return;
        }
    };
    if !resp.success {
        push_error(toasts, resp.message);
        return;
    }
    let Some(file_name) = resp.file_name else {
        push_error(toasts, resp.message);
        return;
    };
    push_success(toasts, resp.message);

    let mut entries = load_history();
    record(
        &mut entries,
        DownloadEntry {
            file_name: file_name.clone(),
            product_count: picked.len(),
            generated_at: now_iso(),
        },
    );

    match crate::net::api::download_catalog(&file_name).await {
        Ok(bytes) => {
            if let Err(err) = deliver(&bytes, &file_name, &PlatformProfile::current()) {
                push_error(toasts, err);
            }
        }
        Err(err) => push_error(toasts, err.to_string()),
    }
}
