//! Guard wrapping every protected admin view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between the `/admin` parent route and the admin layout. The decision
//! itself is `portal::guard::decide`; this component only feeds it the
//! reactive session phase plus the current location and acts on the answer.
//!
//! Protected content is never mounted before the session resolves, so there
//! is no flash of admin UI for anonymous visitors.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use portal::guard::{self, GuardDecision};

use crate::state::auth::WebAuth;

/// Path plus query string, the way the login page should bring it back.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

fn status_text(decision: &GuardDecision) -> &'static str {
    match decision {
        GuardDecision::Redirect(_) => "Redirecionando para o login...",
        GuardDecision::Loading | GuardDecision::Render => "Verificando autenticação...",
    }
}

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = WebAuth::expect();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let requested = requested_location(&pathname.get(), &search.get());
        guard::decide(auth.phase(), &requested)
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(href) = decision.get() {
            navigate(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="guard-status">
                        <div class="spinner" aria-hidden="true"></div>
                        <p>{move || status_text(&decision.get())}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
