//! Admin chrome: sidebar navigation, current user, and logout.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use portal::Role;
use portal::guard::{DEFAULT_DESTINATION, LOGIN_PATH};

use crate::state::auth::WebAuth;
use crate::util::flash::{Flash, FlashBanner, FlashKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

const ADMINS_PATH: &str = "/admin/admins";

const NAV: [NavItem; 8] = [
    NavItem { path: "/admin/dashboard", label: "Dashboard" },
    NavItem { path: "/admin/eventos", label: "Eventos" },
    NavItem { path: "/admin/noticias", label: "Notícias" },
    NavItem { path: "/admin/contatos", label: "Contatos" },
    NavItem { path: "/admin/mensagens", label: "Mensagens" },
    NavItem { path: ADMINS_PATH, label: "Administradores" },
    NavItem { path: "/admin/backups", label: "Backups" },
    NavItem { path: "/admin/perfil", label: "Configurações" },
];

/// Sidebar entries for `role`; only super admins see the administrators screen.
pub fn admin_nav(role: Role) -> Vec<NavItem> {
    NAV.into_iter().filter(|item| item.path != ADMINS_PATH || role == Role::SuperAdmin).collect()
}

/// Whether `item_path` should be highlighted while at `current`.
pub fn nav_active(current: &str, item_path: &str) -> bool {
    let current = match current.trim_end_matches('/') {
        "/admin" => DEFAULT_DESTINATION,
        other => other,
    };
    current == item_path || current.strip_prefix(item_path).is_some_and(|rest| rest.starts_with('/'))
}

/// Status slot shared by every admin screen, so a message raised right
/// before navigating (e.g. after saving a form) shows on the next screen.
#[derive(Clone, Copy)]
struct AdminFlash(RwSignal<Option<Flash>>);

pub fn admin_flash() -> RwSignal<Option<Flash>> {
    use_context::<AdminFlash>().map_or_else(|| RwSignal::new(None), |slot| slot.0)
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let auth = WebAuth::expect();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let sidebar_open = RwSignal::new(false);
    let flash = RwSignal::new(None::<Flash>);
    provide_context(AdminFlash(flash));

    // Errors belong to the screen that raised them.
    Effect::new(move |previous: Option<String>| {
        let path = pathname.get();
        if previous.is_some_and(|p| p != path) {
            flash.update(|slot| {
                if slot.as_ref().is_some_and(|f| f.kind != FlashKind::Success) {
                    *slot = None;
                }
            });
        }
        path
    });

    let on_logout = move |_| {
        auth.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let nav_links = move || {
        let role = auth.user().map(|u| u.role).unwrap_or_default();
        admin_nav(role)
            .into_iter()
            .map(|item| {
                let class = move || {
                    if nav_active(&pathname.get(), item.path) {
                        "admin-nav__link admin-nav__link--active"
                    } else {
                        "admin-nav__link"
                    }
                };
                view! {
                    <a class=class href=item.path on:click=move |_| sidebar_open.set(false)>
                        {item.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="admin-shell">
            <aside class=move || if sidebar_open.get() { "admin-sidebar admin-sidebar--open" } else { "admin-sidebar" }>
                <div class="admin-sidebar__brand">
                    <a href="/">"Blockchain Insper"</a>
                    <span class="admin-sidebar__subtitle">"Painel administrativo"</span>
                </div>
                <nav class="admin-nav">{nav_links}</nav>
            </aside>
            <div class="admin-main">
                <header class="admin-header">
                    <button
                        class="btn admin-header__menu"
                        aria-label="Abrir menu"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <span class="admin-header__spacer"></span>
                    {move || {
                        auth.user()
                            .map(|user| {
                                view! {
                                    <span class="admin-header__user">
                                        {user.name.clone()}
                                        <span class="badge">{user.role.label()}</span>
                                    </span>
                                }
                            })
                    }}
                    <button class="btn admin-header__logout" on:click=on_logout>
                        "Sair"
                    </button>
                </header>
                <section class="admin-content">
                    <FlashBanner slot=flash/>
                    {children()}
                </section>
            </div>
        </div>
    }
}
