//! Registration page: create an account and log it in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterData;
use crate::pages::login::is_valid_email;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterFieldErrors {
    pub email: Option<&'static str>,
    pub full_name: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

/// Uppercase + lowercase + digit, the backend's password policy.
pub(crate) fn password_is_strong(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validate the registration form; errors carry the pt-BR display copy.
pub(crate) fn validate_register(
    email: &str,
    full_name: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterData, RegisterFieldErrors> {
    let mut errors = RegisterFieldErrors::default();
    if email.is_empty() {
        errors.email = Some("Email é obrigatório");
    } else if !is_valid_email(email) {
        errors.email = Some("Email inválido");
    }
    if full_name.is_empty() {
        errors.full_name = Some("Nome completo é obrigatório");
    } else if full_name.trim().len() < 2 {
        errors.full_name = Some("Nome deve ter pelo menos 2 caracteres");
    }
    if password.is_empty() {
        errors.password = Some("Senha é obrigatória");
    } else if password.len() < 8 {
        errors.password = Some("Senha deve ter pelo menos 8 caracteres");
    } else if !password_is_strong(password) {
        errors.password =
            Some("Senha deve conter pelo menos uma letra maiúscula, uma minúscula e um número");
    }
    if confirm.is_empty() {
        errors.confirm = Some("Confirmação de senha é obrigatória");
    } else if password != confirm {
        errors.confirm = Some("Senhas não coincidem");
    }
    if errors == RegisterFieldErrors::default() {
        Ok(RegisterData {
            email: email.to_owned(),
            full_name: full_name.trim().to_owned(),
            password: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let field_errors = RwSignal::new(RegisterFieldErrors::default());
    let general_error = RwSignal::new(String::new());

    let busy = move || session.get().loading;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        general_error.set(String::new());
        let data = match validate_register(
            email.get().trim(),
            &full_name.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(data) => data,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(RegisterFieldErrors::default());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::register(session, toasts, data).await {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(err) => general_error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &toasts, data);
        }
    };

    let field_error = move |pick: fn(&RegisterFieldErrors) -> Option<&'static str>| {
        move || pick(&field_errors.get())
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Criar Conta"</h1>
                <p class="login-card__subtitle">"Registre-se para acessar o sistema"</p>
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
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().email.is_some()>
                        <p class="login-field-error">
                            {field_error(|e| e.email)}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Nome completo"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Seu nome"
                            prop:value=move || full_name.get()
                            on:input=move |ev| {
                                full_name.set(event_target_value(&ev));
                                field_errors.update(|e| e.full_name = None);
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().full_name.is_some()>
                        <p class="login-field-error">
                            {field_error(|e| e.full_name)}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Senha"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Mínimo 8 caracteres"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                field_errors.update(|e| e.password = None);
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="login-field-error">
                            {field_error(|e| e.password)}
                        </p>
                    </Show>
                    <label class="login-label">
                        "Confirmar senha"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Repita a senha"
                            prop:value=move || confirm.get()
                            on:input=move |ev| {
                                confirm.set(event_target_value(&ev));
                                field_errors.update(|e| e.confirm = None);
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().confirm.is_some()>
                        <p class="login-field-error">
                            {field_error(|e| e.confirm)}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Registrando..." } else { "Registrar" }}
                    </button>
                </form>
                <p class="login-card__subtitle">
                    <a href="/login">"Já tem uma conta? Entre"</a>
                </p>
            </div>
        </div>
    }
}
