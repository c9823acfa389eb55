//! Single news page (`/noticias/:id`).

#[cfg(test)]
#[path = "news_detail_test.rs"]
mod news_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use portal::endpoints::news;
use portal::format::format_date;
use portal::types::News;

use crate::components::status::{LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::remote::Remote;

/// Non-empty lines of a plain-text body, one paragraph each.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).map(ToOwned::to_owned).collect()
}

/// External article link, unless it is the `#` placeholder.
pub fn external_link(link: &str) -> Option<&str> {
    let link = link.trim();
    (!link.is_empty() && link != "#").then_some(link)
}

#[component]
pub fn NewsDetailPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let params = use_params_map();
    let item = RwSignal::new(Remote::<News>::Loading);

    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        item.set(Remote::Loading);
        browser::spawn(async move {
            let mut backend = auth;
            item.set(Remote::from_result(news::get(&mut backend, &id).await));
        });
    });

    let body = move || match item.get() {
        Remote::Loading => view! { <Loading label="Carregando notícia..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Notícia não encontrada" message=message/> }.into_any()
        }
        Remote::Ready(news) => {
            let image = auth.config().asset_url(&news.imagem);
            let link = external_link(&news.link).map(|href| {
                view! {
                    <a class="btn" href=href.to_owned() target="_blank" rel="noopener noreferrer">
                        "Leia a matéria completa"
                    </a>
                }
            });
            view! {
                <article class="detail">
                    {(!image.is_empty()).then(|| view! { <img class="detail__image" src=image alt=news.titulo.clone()/> })}
                    <span class="badge">{news.categoria.clone()}</span>
                    <h1>{news.titulo.clone()}</h1>
                    <p class="detail__meta">{news.autor.clone()} " · " {format_date(&news.data)}</p>
                    <p class="detail__lead">{news.resumo.clone()}</p>
                    <div class="detail__body">
                        {paragraphs(&news.conteudo).into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
                    </div>
                    {link}
                </article>
            }
                .into_any()
        }
    };

    view! {
        <section class="page page--narrow">
            <a class="back-link" href="/noticias">
                "← Voltar para notícias"
            </a>
            {body}
        </section>
    }
}
