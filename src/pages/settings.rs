//! Settings page: WhatsApp connection panel with adaptive polling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls the WhatsApp integration surface on a cadence derived from the
//! latest observed status (see `state::whatsapp::next_poll_interval`). The
//! loop is torn down deterministically on navigation away so no orphaned
//! polling survives the page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::state::whatsapp::{WhatsAppState, status_label};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let whatsapp = RwSignal::new(WhatsAppState { loading: true, ..WhatsAppState::default() });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                fetch_once(whatsapp).await;
                let interval = crate::state::whatsapp::next_poll_interval(
                    whatsapp.get_untracked().status.map(|s| s.status),
                );
                gloo_timers::future::sleep(interval).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                whatsapp.update(|s| s.loading = true);
                fetch_once(whatsapp).await;
            });
        }
    };

    let on_connect = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::whatsapp::get_qr_code().await {
                    Ok(qr) => whatsapp.update(|s| {
                        s.qr = Some(qr);
                        s.error = None;
                    }),
                    Err(err) => {
                        crate::state::toasts::push_error(toasts, err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
        }
    };

    let connection_label =
        move || status_label(whatsapp.get().status.map(|s| s.status));
    let phone_number = move || {
        whatsapp
            .get()
            .status
            .and_then(|s| s.phone_number)
            .unwrap_or_else(|| "—".to_owned())
    };
    let service_health = move || {
        whatsapp
            .get()
            .health
            .map_or_else(|| "—".to_owned(), |h| h.status)
    };

    view! {
        <Layout title="Configurações">
            <section class="whatsapp-panel">
                <h2>"Conexão WhatsApp"</h2>
                <Show when=move || whatsapp.get().error.is_some()>
                    <p class="whatsapp-panel__error">
                        {move || whatsapp.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !whatsapp.get().loading
                    fallback=|| view! { <p>"Verificando conexão..."</p> }
                >
                    <div class="stat-grid">
                        <div class="stat-card">
                            <span class="stat-card__label">"Status"</span>
                            <span class="stat-card__value">{connection_label}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Telefone"</span>
                            <span class="stat-card__value">{phone_number}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Serviço"</span>
                            <span class="stat-card__value">{service_health}</span>
                        </div>
                    </div>
                </Show>
                <div class="whatsapp-panel__actions">
                    <button class="btn" on:click=on_refresh>"Atualizar"</button>
                    <button class="btn btn--primary" on:click=on_connect>
                        "Conectar WhatsApp"
                    </button>
                </div>
                <Show when=move || whatsapp.get().qr.is_some()>
                    <div class="whatsapp-panel__qr">
                        <p>"Escaneie o QR Code no aplicativo WhatsApp:"</p>
                        <img
                            src=move || {
                                whatsapp
                                    .get()
                                    .qr
                                    .map(|qr| qr.qr_code)
                                    .unwrap_or_default()
                            }
                            alt="QR Code de conexão"
                        />
                    </div>
                </Show>
            </section>
        </Layout>
    }
}

/// One status+health round; errors land in panel state, never in a toast,
/// since the poll repeats on its own.
#[cfg(feature = "hydrate")]
async fn fetch_once(whatsapp: RwSignal<WhatsAppState>) {
    let status = crate::net::whatsapp::get_status().await;
    let health = crate::net::whatsapp::get_health().await;
    whatsapp.update(|s| {
        match status {
            Ok(value) => {
                s.status = Some(value);
                s.error = None;
            }
            Err(err) => s.error = Some(err.to_string()),
        }
        if let Ok(value) = health {
            s.health = Some(value);
        }
        s.loading = false;
    });
}
