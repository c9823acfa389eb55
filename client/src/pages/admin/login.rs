//! Admin login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard sends anonymous visitors here with `?from=<path>`. Once
//! the session is authenticated, whether by submitting the form or because
//! the visitor already had a valid token, the page moves on to the carried
//! destination. Destinations outside `/admin` are ignored.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use portal::forms::validate_login;
use portal::guard::{FROM_PARAM, post_login_destination};

use crate::state::auth::WebAuth;
use crate::util::browser;

/// Submit is held back until the persisted session has been checked.
fn submit_label(busy: bool, resolved: bool) -> &'static str {
    match (busy, resolved) {
        (true, _) => "Entrando...",
        (false, false) => "Verificando sessão...",
        (false, true) => "Entrar",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let destination = Memo::new(move |_| post_login_destination(query.with(|q| q.get(FROM_PARAM)).as_deref()));

    Effect::new(move || {
        if auth.is_authenticated() {
            navigate(&destination.get_untracked(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || !auth.is_resolved() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(err) = validate_login(&email_value, &password_value) {
            error.set(Some(err.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        browser::spawn(async move {
            if let Err(err) = auth.login(email_value, password_value).await {
                error.set(Some(err.message()));
                password.set(String::new());
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Blockchain Insper"</h1>
                <p class="login-card__subtitle">"Painel Administrativo"</p>
                <form class="login-form" on:submit=on_submit>
                    <h2>"Entrar no Sistema"</h2>
                    <Show when=move || error.get().is_some()>
                        <p class="alert alert--error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="username"
                            placeholder="admin@blockchaininsper.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Senha"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="btn login-button"
                        type="submit"
                        disabled=move || busy.get() || !auth.is_resolved()
                    >
                        {move || submit_label(busy.get(), auth.is_resolved())}
                    </button>
                </form>
                <a class="back-link" href="/">
                    "← Voltar ao site"
                </a>
            </div>
        </div>
    }
}
