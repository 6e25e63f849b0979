//! Login page with field-level validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs before any network call: a form that fails the email
//! pattern or the minimum password length never reaches the auth service.
//! A rejected login keeps the user on the form with an inline message; the
//! session operation has already surfaced the toast.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;

/// Per-field validation errors; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Loose email shape check mirroring the backend's expectations: one `@`,
/// a dotted domain, no whitespace.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate the login form; errors carry the pt-BR display copy.
pub(crate) fn validate_login(email: &str, password: &str) -> Result<Credentials, LoginFieldErrors> {
    let mut errors = LoginFieldErrors::default();
    if email.is_empty() {
        errors.email = Some("Email é obrigatório");
    } else if !is_valid_email(email) {
        errors.email = Some("Email inválido");
    }
    if password.is_empty() {
        errors.password = Some("Senha é obrigatória");
    } else if password.len() < 6 {
        errors.password = Some("Senha deve ter pelo menos 6 caracteres");
    }
    if errors == LoginFieldErrors::default() {
        Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFieldErrors::default());
    let general_error = RwSignal::new(String::new());

    let busy = move || session.get().loading;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        general_error.set(String::new());
        let credentials = match validate_login(email.get().trim(), &password.get()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(LoginFieldErrors::default());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, toasts, credentials).await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(err) => general_error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &toasts, credentials);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"JA Distribuidora"</h1>
                <p class="login-card__subtitle">
                    "Entre com suas credenciais para acessar o sistema"
                </p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !general_error.get().is_empty()>
                        <p class="login-message login-message--error">
                            {move || general_error.get()}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                field_errors.update(|e| e.email = None);
                                general_error.set(String::new());
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().email.is_some()>
                        <p class="login-field-error">
                            {move || field_errors.get().email.unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Senha"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Sua senha"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                field_errors.update(|e| e.password = None);
                                general_error.set(String::new());
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="login-field-error">
                            {move || field_errors.get().password.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <p class="login-card__subtitle">
                    <a href="/register">"Não tem uma conta? Registre-se"</a>
                </p>
            </div>
        </div>
    }
}
