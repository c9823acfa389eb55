//! Public news listing, featured first.

use leptos::prelude::*;
use portal::endpoints::news;
use portal::format::sort_by_date_desc;
use portal::types::News;

use crate::components::cards::NewsCard;
use crate::components::status::{Empty, LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::remote::Remote;

fn grid(items: Vec<News>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {items.into_iter().map(|news| view! { <NewsCard news=news/> }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let listing = RwSignal::new(Remote::<Vec<News>>::Loading);

    browser::spawn(async move {
        let mut backend = auth;
        let result = news::list(&mut backend).await.map(|mut items| {
            sort_by_date_desc(&mut items, |n| &n.data);
            items
        });
        listing.set(Remote::from_result(result));
    });

    let body = move || match listing.get() {
        Remote::Loading => view! { <Loading label="Carregando notícias..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar notícias" message=message/> }.into_any()
        }
        Remote::Ready(items) if items.is_empty() => {
            view! {
                <Empty
                    title="Nenhuma notícia encontrada"
                    detail="Ainda não há notícias publicadas. Volte em breve!"
                />
            }
                .into_any()
        }
        Remote::Ready(items) => {
            let (featured, rest): (Vec<News>, Vec<News>) = items.into_iter().partition(|n| n.destaque);
            let rest_title = if featured.is_empty() { "Todas as Notícias" } else { "Outras Notícias" };
            let featured_block = (!featured.is_empty()).then(|| {
                view! {
                    <h2 class="section-title">"Notícias em Destaque"</h2>
                    {grid(featured)}
                }
            });
            view! {
                {featured_block}
                <h2 class="section-title">{rest_title}</h2>
                {grid(rest)}
            }
                .into_any()
        }
    };

    view! {
        <section class="hero hero--compact">
            <h1>"Notícias"</h1>
            <p>"Acompanhe as novidades, conquistas e análises da Blockchain Insper"</p>
        </section>
        <section class="page">{body}</section>
    }
}
