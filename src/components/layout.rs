//! Authenticated page chrome: header bar with navigation, identity, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page wraps its content in this shell so navigation and
//! the logout affordance behave identically across routes.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::toasts::ToastState;

/// Page shell for authenticated routes.
#[component]
pub fn Layout(title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Identity renders only for a full session: in-memory user AND stored
    // token. A cached-but-unconfirmed user still counts.
    let user_name = move || {
        let state = session.get();
        if crate::state::session::is_authenticated(&state) {
            state.user.map_or_else(String::new, |user| user.full_name)
        } else {
            String::new()
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session, toasts).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, toasts);
        }
    };

    view! {
        <div class="page">
            <header class="page__header toolbar">
                <span class="toolbar__brand">"JA Distribuidora"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <nav class="toolbar__nav">
                    <a class="toolbar__link" href="/">"Início"</a>
                    <a class="toolbar__link" href="/catalog">"Catálogo"</a>
                    <a class="toolbar__link" href="/downloads">"Downloads"</a>
                    <a class="toolbar__link" href="/settings">"Configurações"</a>
                </nav>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__title">{title}</span>
                <span class="toolbar__self">{user_name}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Sair">
                    "Sair"
                </button>
            </header>
            <main class="page__content">{children()}</main>
        </div>
    }
}
