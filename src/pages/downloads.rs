//! Downloads page: history of generated catalogs with re-download actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::Layout;
use crate::state::downloads::{
    DownloadsState, format_timestamp, load_history, total_products,
};
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DownloadsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let downloads =
        RwSignal::new(DownloadsState { entries: load_history(), ..DownloadsState::default() });

    let on_download = Callback::new(move |file_name: String| {
        if downloads.get_untracked().busy {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                downloads.update(|s| s.busy = true);
                fetch_and_deliver(&file_name, toasts).await;
                downloads.update(|s| s.busy = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (file_name, toasts);
        }
    });

    let count = move || downloads.get().entries.len();
    let products = move || total_products(&downloads.get().entries);
    let last_generated = move || {
        downloads
            .get()
            .entries
            .first()
            .map_or_else(|| "—".to_owned(), |e| format_timestamp(&e.generated_at))
    };

    view! {
        <Layout title="Downloads">
            <div class="downloads-header">
                <div>
                    <h2>"Catálogos Gerados"</h2>
                    <p class="downloads-subtitle">"Histórico de catálogos PDF gerados"</p>
                </div>
                <a class="btn btn--primary" href="/catalog">"Gerar Novo Catálogo"</a>
            </div>

            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Total de Catálogos"</span>
                    <span class="stat-card__value">{count}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Produtos Incluídos"</span>
                    <span class="stat-card__value">{products}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Último Gerado"</span>
                    <span class="stat-card__value">{last_generated}</span>
                </div>
            </div>

            <Show
                when=move || !downloads.get().entries.is_empty()
                fallback=|| {
                    view! {
                        <div class="downloads-empty">
                            <h3>"Nenhum catálogo gerado"</h3>
                            <p>"Gere seu primeiro catálogo para começar"</p>
                            <a class="btn btn--primary" href="/catalog">
                                "Gerar Primeiro Catálogo"
                            </a>
                        </div>
                    }
                }
            >
                <div class="downloads-list">
                    {move || {
                        downloads
                            .get()
                            .entries
                            .into_iter()
                            .map(|entry| {
                                let file_name = entry.file_name.clone();
                                view! {
                                    <div class="downloads-row">
                                        <div class="downloads-row__info">
                                            <h3>{entry.file_name.clone()}</h3>
                                            <span class="downloads-row__meta">
                                                {entry.product_count} " produtos • "
                                                {format_timestamp(&entry.generated_at)}
                                            </span>
                                        </div>
                                        <button
                                            class="btn"
                                            disabled=move || downloads.get().busy
                                            on:click=move |_| on_download.run(file_name.clone())
                                        >
                                            "Download"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </Layout>
    }
}

/// Fetch a previously generated file and hand it to the platform strategy.
#[cfg(feature = "hydrate")]
async fn fetch_and_deliver(file_name: &str, toasts: RwSignal<ToastState>) {
    use crate::state::toasts::push_error;
    use crate::util::download::deliver;
    use crate::util::platform::PlatformProfile;

    match crate::net::api::download_catalog(file_name).await {
        Ok(bytes) => {
            if let Err(err) = deliver(&bytes, file_name, &PlatformProfile::current()) {
                push_error(toasts, err);
            }
        }
        Err(err) => push_error(toasts, err.to_string()),
    }
}
