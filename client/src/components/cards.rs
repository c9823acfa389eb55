//! Content cards used by the public listings and the home page.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use leptos::prelude::*;
use portal::format::format_date;
use portal::types::{Event, News};

use crate::state::auth::WebAuth;

/// At most `max_chars` characters of `text`, cut at a word with `...`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let cut = cut.rsplit_once(char::is_whitespace).map_or(cut.as_str(), |(head, _)| head);
    format!("{}...", cut.trim_end())
}

fn card_image(reference: &str, alt: String) -> Option<impl IntoView + use<>> {
    let src = WebAuth::expect().config().asset_url(reference);
    (!src.is_empty()).then(|| view! { <img class="card__image" src=src alt=alt loading="lazy"/> })
}

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = format!("/eventos/{}", event.id);
    view! {
        <article class="card">
            {card_image(&event.imagem, event.titulo.clone())}
            <div class="card__body">
                <span class="badge">{event.categoria}</span>
                <h3 class="card__title">
                    <a href=href.clone()>{event.titulo}</a>
                </h3>
                <p class="card__meta">{format_date(&event.data)} " · " {event.local}</p>
                <p class="card__text">{excerpt(&event.descricao, 160)}</p>
                <a class="card__more" href=href>
                    "Ver detalhes"
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn NewsCard(news: News) -> impl IntoView {
    let href = format!("/noticias/{}", news.id);
    view! {
        <article class="card">
            {card_image(&news.imagem, news.titulo.clone())}
            <div class="card__body">
                <span class="badge">{news.categoria}</span>
                <h3 class="card__title">
                    <a href=href.clone()>{news.titulo}</a>
                </h3>
                <p class="card__meta">{news.autor} " · " {format_date(&news.data)}</p>
                <p class="card__text">{excerpt(&news.resumo, 160)}</p>
                <a class="card__more" href=href>
                    "Ler mais"
                </a>
            </div>
        </article>
    }
}
