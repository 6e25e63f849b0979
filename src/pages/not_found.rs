//! Fallback route for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada"</p>
            <a class="btn" href="/">"Voltar ao início"</a>
        </div>
    }
}
