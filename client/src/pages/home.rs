//! Landing page: static institutional content plus live highlights.
//!
//! The featured-news and upcoming-events panels load independently after
//! hydration; either may fail without affecting the rest of the page.

use leptos::prelude::*;
use portal::endpoints::{events, news};
use portal::format::upcoming;
use portal::types::{Event, News};

use crate::components::cards::{EventCard, NewsCard};
use crate::components::status::{Empty, LoadError, Loading};
use crate::pages::partners::PartnerGrid;
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::remote::Remote;

const HIGHLIGHTS: usize = 3;

const AREAS: [(&str, &str); 2] = [
    (
        "Finance",
        "Condução de researches de criptoativos modelados nos challenges tradicionais, permitindo aprendizado de avaliação de ativos, análise de mercado e gestão de portfólio",
    ),
    (
        "Tech",
        "Desenvolvimento de soluções inovadoras e disruptivas utilizando as principais ferramentas da Web3, unindo tecnologia de ponta, descentralização e aplicabilidade prática para transformar o mercado financeiro",
    ),
];

const STATS: [(&str, &str); 4] = [("+35", "Membros"), ("+50", "Projetos"), ("+20", "Parceiros"), ("+100", "Eventos")];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = WebAuth::expect();
    let featured = RwSignal::new(Remote::<Vec<News>>::Loading);
    let next_events = RwSignal::new(Remote::<Vec<Event>>::Loading);

    browser::spawn(async move {
        let mut backend = auth;
        featured.set(Remote::from_result(
            news::featured(&mut backend).await.map(|mut items| {
                items.truncate(HIGHLIGHTS);
                items
            }),
        ));
        let today = browser::today_iso();
        next_events.set(Remote::from_result(
            events::list(&mut backend).await.map(|items| upcoming(&items, &today, HIGHLIGHTS)),
        ));
    });

    view! {
        <section class="hero">
            <h1>"Primeira Organização Estudantil de Blockchain da América Latina"</h1>
            <p>
                "Uma organização estudantil criada com o intuito de formar lideranças para o mercado financeiro, por meio da elaboração de análises que orientam a alocação estratégica em tecnologias blockchain."
            </p>
            <div class="hero__actions">
                <a class="btn" href="/eventos">
                    "Nossos eventos"
                </a>
                <a class="btn btn--ghost" href="/contato">
                    "Fale conosco"
                </a>
            </div>
        </section>

        <section class="page">
            <h2 class="section-title">"O que nos move"</h2>
            <p class="section-subtitle">
                "Conheça nossos pilares fundamentais para transformar o mercado financeiro com blockchain."
            </p>
            <div class="area-grid">
                {AREAS
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="area-card">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page stats-band">
            <h2 class="section-title">"Impacto e Resultados"</h2>
            <div class="stats-grid">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stat">
                                <span class="stat__value">{value}</span>
                                <span class="stat__label">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="page">
            <h2 class="section-title">"Notícias em destaque"</h2>
            {move || match featured.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => {
                    view! { <LoadError title="Não foi possível carregar as notícias" message=message/> }.into_any()
                }
                Remote::Ready(items) if items.is_empty() => {
                    view! { <Empty title="Nenhuma notícia em destaque" detail="Volte em breve para novidades."/> }
                        .into_any()
                }
                Remote::Ready(items) => {
                    view! {
                        <div class="card-grid">
                            {items.into_iter().map(|news| view! { <NewsCard news=news/> }).collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <a class="section-link" href="/noticias">
                "Ver todas as notícias"
            </a>
        </section>

        <section class="page">
            <h2 class="section-title">"Próximos eventos"</h2>
            {move || match next_events.get() {
                Remote::Loading => view! { <Loading/> }.into_any(),
                Remote::Failed(message) => {
                    view! { <LoadError title="Não foi possível carregar os eventos" message=message/> }.into_any()
                }
                Remote::Ready(items) if items.is_empty() => {
                    view! {
                        <Empty
                            title="Nenhum evento agendado"
                            detail="Confira os eventos que já realizamos na página de eventos."
                        />
                    }
                        .into_any()
                }
                Remote::Ready(items) => {
                    view! {
                        <div class="card-grid">
                            {items.into_iter().map(|event| view! { <EventCard event=event/> }).collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <a class="section-link" href="/eventos">
                "Ver todos os eventos"
            </a>
        </section>

        <section class="page">
            <h2 class="section-title">"Parceiros"</h2>
            <PartnerGrid limit=6/>
            <a class="section-link" href="/parceiros">
                "Conheça todos os parceiros"
            </a>
        </section>
    }
}
