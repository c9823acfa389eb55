//! Admin dashboard: counters plus the five most recent events and news.
//!
//! Each panel renders its own failure; see `portal::endpoints::dashboard`.

use leptos::prelude::*;
use portal::endpoints::dashboard::{self, Overview};
use portal::format::format_date;

use crate::components::status::{LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;

fn stat_card(label: &'static str, value: u64, hint: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__hint">{hint}</span>
        </div>
    }
}

fn recent_list(entries: Vec<(String, String, String)>, empty: &'static str) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="muted">{empty}</p> }.into_any();
    }
    view! {
        <ul class="recent-list">
            {entries
                .into_iter()
                .map(|(href, title, date)| {
                    view! {
                        <li>
                            <a href=href>{title}</a>
                            <span class="muted">{date}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let overview = RwSignal::new(None::<Overview>);

    browser::spawn(async move {
        let mut backend = auth;
        overview.set(Some(dashboard::overview(&mut backend).await));
    });

    let greeting = move || auth.user().map(|u| format!("Olá, {}!", u.first_name())).unwrap_or_default();

    let body = move || {
        let Some(Overview { stats, recent_events, recent_news }) = overview.get() else {
            return view! { <Loading label="Carregando dashboard..."/> }.into_any();
        };

        let stats_panel = match stats {
            Ok(stats) => view! {
                <div class="stat-grid">
                    {stat_card("Eventos", stats.eventos.total, format!("{} em destaque", stats.eventos.destaques))}
                    {stat_card("Notícias", stats.noticias.total, format!("{} recentes", stats.noticias.recentes))}
                    {stat_card("Mensagens", stats.mensagens.nao_lidas, "não lidas".to_owned())}
                    {stat_card("Novidades", stats.recent_total(), "eventos e notícias recentes".to_owned())}
                </div>
            }
            .into_any(),
            Err(err) => view! { <LoadError title="Erro ao carregar estatísticas" message=err.to_string()/> }.into_any(),
        };

        let events_panel = match recent_events {
            Ok(items) => recent_list(
                items
                    .into_iter()
                    .map(|e| (format!("/admin/eventos/editar/{}", e.id), e.titulo, format_date(&e.data)))
                    .collect(),
                "Nenhum evento cadastrado",
            )
            .into_any(),
            Err(err) => view! { <LoadError title="Erro ao carregar eventos" message=err.to_string()/> }.into_any(),
        };

        let news_panel = match recent_news {
            Ok(items) => recent_list(
                items
                    .into_iter()
                    .map(|n| (format!("/admin/noticias/editar/{}", n.id), n.titulo, format_date(&n.data)))
                    .collect(),
                "Nenhuma notícia cadastrada",
            )
            .into_any(),
            Err(err) => view! { <LoadError title="Erro ao carregar notícias" message=err.to_string()/> }.into_any(),
        };

        view! {
            {stats_panel}
            <div class="panel-grid">
                <div class="panel">
                    <div class="panel__header">
                        <h2>"Eventos recentes"</h2>
                        <a href="/admin/eventos/novo">"+ Novo evento"</a>
                    </div>
                    {events_panel}
                </div>
                <div class="panel">
                    <div class="panel__header">
                        <h2>"Notícias recentes"</h2>
                        <a href="/admin/noticias/novo">"+ Nova notícia"</a>
                    </div>
                    {news_panel}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="admin-page">
            <h1>"Dashboard"</h1>
            <p class="admin-page__subtitle">{greeting}</p>
            {body}
        </div>
    }
}
