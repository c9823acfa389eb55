//! News management table.

use leptos::prelude::*;
use portal::endpoints::news;
use portal::format::{format_date, sort_by_date_desc};
use portal::types::News;

use crate::components::admin_layout::admin_flash;
use crate::components::status::{Empty, LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};
use crate::util::remote::Remote;

#[component]
pub fn ManageNewsPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let listing = RwSignal::new(Remote::<Vec<News>>::Loading);
    let status = admin_flash();

    browser::spawn(async move {
        let mut backend = auth;
        let result = news::list_all(&mut backend).await.map(|mut items| {
            sort_by_date_desc(&mut items, |n| &n.data);
            items
        });
        listing.set(Remote::from_result(result));
    });

    let on_delete = move |item: News| {
        if !browser::confirm(&format!("Excluir a notícia \"{}\"? Esta ação não pode ser desfeita.", item.titulo)) {
            return;
        }
        browser::spawn(async move {
            let mut backend = auth;
            match news::delete(&mut backend, &item.id).await {
                Ok(_) => {
                    listing.update(|l| l.update_ready(|items| items.retain(|n| n.id != item.id)));
                    flash::show(status, Flash::success("Notícia excluída com sucesso"));
                }
                Err(err) => flash::show(status, Flash::error("Erro ao excluir notícia", &err)),
            }
        });
    };

    let on_toggle = move |item: News| {
        browser::spawn(async move {
            let mut backend = auth;
            match news::toggle_featured(&mut backend, &item).await {
                Ok(_) => {
                    listing.update(|l| {
                        l.update_ready(|items| {
                            if let Some(n) = items.iter_mut().find(|n| n.id == item.id) {
                                n.destaque = !item.destaque;
                            }
                        });
                    });
                    flash::show(status, Flash::success("Notícia atualizada com sucesso"));
                }
                Err(err) => flash::show(status, Flash::error("Erro ao atualizar notícia", &err)),
            }
        });
    };

    let config = auth.config();
    let table = move || match listing.get() {
        Remote::Loading => view! { <Loading label="Carregando notícias..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar notícias" message=message/> }.into_any()
        }
        Remote::Ready(items) if items.is_empty() => {
            view! { <Empty title="Nenhuma notícia cadastrada" detail="Crie a primeira notícia pelo botão acima."/> }
                .into_any()
        }
        Remote::Ready(items) => {
            let rows = items
                .into_iter()
                .map(|item| {
                    let thumb = config.asset_url(&item.imagem);
                    let edit_href = format!("/admin/noticias/editar/{}", item.id);
                    let for_toggle = item.clone();
                    let for_delete = item.clone();
                    view! {
                        <tr>
                            <td>
                                {(!thumb.is_empty()).then(|| view! { <img class="thumb" src=thumb alt=""/> })}
                            </td>
                            <td>{item.titulo.clone()}</td>
                            <td>{format_date(&item.data)}</td>
                            <td>
                                <span class="badge badge--info">{item.categoria.clone()}</span>
                            </td>
                            <td>
                                <span class=if item.ativo { "badge badge--ok" } else { "badge" }>
                                    {if item.ativo { "Ativo" } else { "Inativo" }}
                                </span>
                                {item.destaque.then(|| view! { <span class="badge badge--star">"Destaque"</span> })}
                            </td>
                            <td class="actions">
                                <button
                                    class="btn btn--small"
                                    title="Alternar destaque"
                                    on:click=move |_| on_toggle(for_toggle.clone())
                                >
                                    {if item.destaque { "★" } else { "☆" }}
                                </button>
                                <a class="btn btn--small" href=edit_href>
                                    "Editar"
                                </a>
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| on_delete(for_delete.clone())
                                >
                                    "Excluir"
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Imagem"</th>
                            <th>"Título"</th>
                            <th>"Data"</th>
                            <th>"Categoria"</th>
                            <th>"Status"</th>
                            <th>"Ações"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
                .into_any()
        }
    };

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <h1>"Notícias"</h1>
                <a class="btn" href="/admin/noticias/novo">
                    "+ Nova notícia"
                </a>
            </div>
            {table}
        </div>
    }
}
