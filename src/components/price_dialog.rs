//! Modal dialog for editing one product's price.
//!
//! DESIGN
//! ======
//! Input parsing accepts the pt-BR comma decimal. Validation happens here,
//! before the submit callback fires, so an invalid value never reaches the
//! network layer.

#[cfg(test)]
#[path = "price_dialog_test.rs"]
mod price_dialog_test;

use leptos::prelude::*;

use crate::state::catalog::format_price;

pub(crate) const INVALID_PRICE_MESSAGE: &str = "Por favor, insira um preço válido";

/// Parse a price input field: comma or dot decimal, non-negative.
pub(crate) fn parse_price_input(raw: &str) -> Result<f64, &'static str> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.is_finite() => Ok(value),
        _ => Err(INVALID_PRICE_MESSAGE),
    }
}

/// Modal for updating the price of the product named `product_name`.
#[component]
pub fn PriceDialog(
    product_name: String,
    current_price: Option<f64>,
    value: RwSignal<String>,
    busy: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<f64>,
) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        match parse_price_input(&value.get_untracked()) {
            Ok(price) => {
                error.set(None);
                on_submit.run(price);
            }
            Err(message) => error.set(Some(message)),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Editar Preço"</h2>
                <p class="dialog__description">
                    "Atualize o preço do produto \"" {product_name} "\"."
                </p>
                <label class="dialog__label">
                    "Preço"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        placeholder="0,00"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <p class="dialog__current">"Atual: " {format_price(current_price)}</p>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Salvando..." } else { "Salvar Preço" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
