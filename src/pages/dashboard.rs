//! Dashboard page: authenticated landing with backend liveness stats.
//!
//! SYSTEM CONTEXT
//! ==============
//! First screen after login. Probes `/api/health` once on mount and renders
//! backend/data-source status plus the active product count.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::net::types::HealthResponse;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let health = RwSignal::new(None::<HealthResponse>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::health_check().await {
                Ok(resp) => health.set(Some(resp)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        loading.set(false);
    }

    // Re-probe the backend and re-verify the profile. A refresh failure
    // cascades into logout (see `session::refresh_user`), which the
    // unauth-redirect effect then turns into navigation.
    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                loading.set(true);
                crate::state::session::refresh_user(session, toasts).await;
                match crate::net::api::health_check().await {
                    Ok(resp) => {
                        health.set(Some(resp));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
        }
    };

    let backend_status = move || {
        health
            .get()
            .map_or_else(|| "—".to_owned(), |h| h.status)
    };
    let notion_status = move || {
        health
            .get()
            .map_or_else(|| "—".to_owned(), |h| h.notion_status)
    };
    let active_products = move || {
        health
            .get()
            .map_or_else(|| "—".to_owned(), |h| h.active_products.to_string())
    };

    view! {
        <Layout title="Início">
            <Show when=move || error.get().is_some()>
                <p class="stat-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Carregando..."</p> }
            >
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-card__label">"Servidor"</span>
                        <span class="stat-card__value">{backend_status}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Base de produtos"</span>
                        <span class="stat-card__value">{notion_status}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Produtos ativos"</span>
                        <span class="stat-card__value">{active_products}</span>
                    </div>
                </div>
                <div class="dashboard-actions">
                    <a class="btn btn--primary" href="/catalog">"Abrir catálogo"</a>
                    <a class="btn" href="/downloads">"Ver downloads"</a>
                    <button class="btn" on:click=on_refresh>"Atualizar"</button>
                </div>
            </Show>
        </Layout>
    }
}
