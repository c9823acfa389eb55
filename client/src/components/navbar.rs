//! Public site navigation bar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::admin_layout::nav_active;

const LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/eventos", "Eventos"),
    ("/noticias", "Notícias"),
    ("/parceiros", "Parceiros"),
    ("/contato", "Contato"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let open = RwSignal::new(false);

    let links = move || {
        LINKS
            .into_iter()
            .map(|(href, label)| {
                let class = move || {
                    let current = pathname.get();
                    let active = if href == "/" { current == "/" } else { nav_active(&current, href) };
                    if active { "navbar__link navbar__link--active" } else { "navbar__link" }
                };
                view! {
                    <a class=class href=href on:click=move |_| open.set(false)>
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "Blockchain Insper"
            </a>
            <button
                class="navbar__toggle"
                aria-label="Toggle Navigation"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || if open.get() { "✕" } else { "☰" }}
            </button>
            <nav class=move || if open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }>
                {links}
            </nav>
        </header>
    }
}
