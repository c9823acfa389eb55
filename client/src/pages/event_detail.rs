//! Single event page (`/eventos/:id`).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use portal::endpoints::events;
use portal::format::format_date;
use portal::types::Event;

use super::news_detail::paragraphs;
use crate::components::status::{LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::remote::Remote;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let params = use_params_map();
    let event = RwSignal::new(Remote::<Event>::Loading);

    Effect::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        event.set(Remote::Loading);
        browser::spawn(async move {
            let mut backend = auth;
            event.set(Remote::from_result(events::get(&mut backend, &id).await));
        });
    });

    let body = move || match event.get() {
        Remote::Loading => view! { <Loading label="Carregando evento..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Evento não encontrado" message=message/> }.into_any()
        }
        Remote::Ready(event) => {
            let image = auth.config().asset_url(&event.imagem);
            view! {
                <article class="detail">
                    {(!image.is_empty()).then(|| view! { <img class="detail__image" src=image alt=event.titulo.clone()/> })}
                    <span class="badge">{event.categoria.clone()}</span>
                    <h1>{event.titulo.clone()}</h1>
                    <ul class="detail__facts">
                        <li>
                            <strong>"Data: "</strong>
                            {format_date(&event.data)}
                        </li>
                        <li>
                            <strong>"Local: "</strong>
                            {event.local.clone()}
                        </li>
                        {event
                            .participantes
                            .clone()
                            .filter(|p| !p.trim().is_empty())
                            .map(|p| {
                                view! {
                                    <li>
                                        <strong>"Participantes: "</strong>
                                        {p}
                                    </li>
                                }
                            })}
                    </ul>
                    <div class="detail__body">
                        {paragraphs(&event.descricao).into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
                    </div>
                </article>
            }
                .into_any()
        }
    };

    view! {
        <section class="page page--narrow">
            <a class="back-link" href="/eventos">
                "← Voltar para eventos"
            </a>
            {body}
        </section>
    }
}
