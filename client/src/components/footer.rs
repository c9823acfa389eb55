//! Site footer with organization contact details.
//!
//! Contact details come from `/contatos`; when that fails the built-in
//! defaults are shown with the fallback notice, so the footer never renders
//! empty and never passes the defaults off as current.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;
use portal::endpoints::contacts::{self, ContactDetails};

use crate::state::auth::WebAuth;
use crate::util::browser;

/// `tel:` link for a display phone number; `None` when it has no digits.
pub fn tel_href(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
    digits.chars().any(|c| c.is_ascii_digit()).then(|| format!("tel:{digits}"))
}

/// Warning to show above the contact block, if the details are defaults.
pub fn contact_notice(details: &ContactDetails) -> Option<&str> {
    details.notice.as_deref()
}

#[component]
pub fn Footer() -> impl IntoView {
    let auth = WebAuth::expect();
    let details = RwSignal::new(None::<ContactDetails>);

    browser::spawn(async move {
        let mut backend = auth;
        details.set(Some(contacts::info_or_fallback(&mut backend).await));
    });

    let contact_block = move || {
        details.get().map(|details| {
            let notice = contact_notice(&details)
                .map(|text| view! { <p class="footer__notice" role="status">{text.to_owned()}</p> });
            let info = details.info;
            let phone = tel_href(&info.telefone).map(|href| {
                view! {
                    <li>
                        <a href=href>{info.telefone.clone()}</a>
                    </li>
                }
            });
            view! {
                {notice}
                <ul class="footer__contact">
                    <li>
                        <a href=format!("mailto:{}", info.email)>{info.email.clone()}</a>
                    </li>
                    {phone}
                    <li>{info.endereco.clone()}</li>
                    <li class="footer__hours">{info.horario_funcionamento.clone()}</li>
                </ul>
                <div class="footer__social">
                    {social_link("LinkedIn", info.redes_sociais.linkedin)}
                    {social_link("Instagram", info.redes_sociais.instagram)}
                    {social_link("Twitter", info.redes_sociais.twitter)}
                </div>
            }
        })
    };

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div>
                    <p class="footer__title">"Blockchain Insper"</p>
                    <p class="footer__about">
                        "Organização estudantil dedicada à formação de lideranças para o mercado financeiro através da tecnologia blockchain."
                    </p>
                </div>
                <div>
                    <p class="footer__heading">"Links rápidos"</p>
                    <a href="/">"Home"</a>
                    <a href="/eventos">"Eventos"</a>
                    <a href="/noticias">"Notícias"</a>
                    <a href="/contato">"Contato"</a>
                </div>
                <div>
                    <p class="footer__heading">"Áreas"</p>
                    <p>"Business"</p>
                    <p>"Finanças"</p>
                    <p>"Tecnologia"</p>
                </div>
                <div>
                    <p class="footer__heading">"Contato"</p>
                    {contact_block}
                </div>
            </div>
            <p class="footer__copyright">"© 2024 Blockchain Insper. Todos os direitos reservados."</p>
        </footer>
    }
}

fn social_link(label: &'static str, href: String) -> Option<impl IntoView> {
    (!href.trim().is_empty()).then(|| {
        view! {
            <a class="footer__social-link" href=href target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
    })
}
