//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    catalog::CatalogPage, dashboard::DashboardPage, downloads::DownloadsPage, login::LoginPage,
    not_found::NotFoundPage, register::RegisterPage, settings::SettingsPage,
};
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and toast contexts (the composition root of the
/// session lifecycle) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Optimistic restore + background verification, before any route gates
    // evaluate `loading == false`.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::initialize(session).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ja-catalogo.css"/>
        <Title text="JA Distribuidora"/>

        <ToastStack/>
        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("catalog") view=CatalogPage/>
                <Route path=StaticSegment("downloads") view=DownloadsPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
