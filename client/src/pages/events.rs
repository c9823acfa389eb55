//! Public events listing, featured first.

use leptos::prelude::*;
use portal::endpoints::events;
use portal::format::sort_by_date_desc;
use portal::types::Event;

use crate::components::cards::EventCard;
use crate::components::status::{Empty, LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::remote::Remote;

fn grid(items: Vec<Event>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {items.into_iter().map(|event| view! { <EventCard event=event/> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let listing = RwSignal::new(Remote::<Vec<Event>>::Loading);

    browser::spawn(async move {
        let mut backend = auth;
        let result = events::list(&mut backend).await.map(|mut items| {
            sort_by_date_desc(&mut items, |e| &e.data);
            items
        });
        listing.set(Remote::from_result(result));
    });

    let body = move || match listing.get() {
        Remote::Loading => view! { <Loading label="Carregando eventos..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar eventos" message=message/> }.into_any()
        }
        Remote::Ready(items) if items.is_empty() => {
            view! {
                <Empty
                    title="Nenhum evento encontrado"
                    detail="Ainda não há eventos cadastrados. Volte em breve para conferir nossos próximos eventos!"
                />
            }
                .into_any()
        }
        Remote::Ready(items) => {
            let (featured, rest) = events::split_featured(items);
            let rest_title = if featured.is_empty() { "Nossos Eventos" } else { "Outros Eventos" };
            let featured_block = (!featured.is_empty()).then(|| {
                view! {
                    <h2 class="section-title">"Eventos em Destaque"</h2>
                    <p class="section-subtitle">"Nossos principais eventos e colaborações"</p>
                    {grid(featured)}
                }
            });
            view! {
                {featured_block}
                <h2 class="section-title">{rest_title}</h2>
                <p class="section-subtitle">"Confira todos os nossos eventos e atividades realizadas"</p>
                {grid(rest)}
            }
                .into_any()
        }
    };

    view! {
        <section class="hero hero--compact">
            <h1>"Eventos"</h1>
            <p>
                "Registro de nossas colaborações passadas, palestras, workshops e parcerias que fortalecem o ecossistema blockchain no Brasil"
            </p>
        </section>
        <section class="page">{body}</section>
    }
}
