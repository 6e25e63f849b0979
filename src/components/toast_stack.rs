//! Notification stack rendered above all routes.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

/// Renders the active toasts; dismissal is scheduled at push time and a
/// click dismisses early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast--success",
                            ToastKind::Error => "toast--error",
                        };
                        view! {
                            <div
                                class=format!("toast {kind_class}")
                                on:click=move |_| {
                                    toasts.update(|t| t.dismiss(id));
                                }
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
