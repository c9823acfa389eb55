//! Event management table.

use leptos::prelude::*;
use portal::endpoints::events;
use portal::format::{format_date, sort_by_date_desc};
use portal::types::Event;

use crate::components::admin_layout::admin_flash;
use crate::components::status::{Empty, LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};
use crate::util::remote::Remote;

#[component]
pub fn ManageEventsPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let listing = RwSignal::new(Remote::<Vec<Event>>::Loading);
    let status = admin_flash();

    browser::spawn(async move {
        let mut backend = auth;
        let result = events::list_all(&mut backend).await.map(|mut items| {
            sort_by_date_desc(&mut items, |e| &e.data);
            items
        });
        listing.set(Remote::from_result(result));
    });

    let on_delete = move |event: Event| {
        if !browser::confirm(&format!("Excluir o evento \"{}\"? Esta ação não pode ser desfeita.", event.titulo)) {
            return;
        }
        browser::spawn(async move {
            let mut backend = auth;
            match events::delete(&mut backend, &event.id).await {
                Ok(_) => {
                    listing.update(|l| l.update_ready(|items| items.retain(|e| e.id != event.id)));
                    flash::show(status, Flash::success("Evento excluído com sucesso"));
                }
                Err(err) => flash::show(status, Flash::error("Erro ao excluir evento", &err)),
            }
        });
    };

    let on_toggle = move |event: Event| {
        browser::spawn(async move {
            let mut backend = auth;
            match events::toggle_featured(&mut backend, &event).await {
                Ok(_) => {
                    listing.update(|l| {
                        l.update_ready(|items| {
                            if let Some(e) = items.iter_mut().find(|e| e.id == event.id) {
                                e.destaque = !event.destaque;
                            }
                        });
                    });
                    flash::show(status, Flash::success("Evento atualizado com sucesso"));
                }
                Err(err) => flash::show(status, Flash::error("Erro ao atualizar evento", &err)),
            }
        });
    };

    let config = auth.config();
    let table = move || match listing.get() {
        Remote::Loading => view! { <Loading label="Carregando eventos..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar eventos" message=message/> }.into_any()
        }
        Remote::Ready(items) if items.is_empty() => {
            view! { <Empty title="Nenhum evento cadastrado" detail="Crie o primeiro evento pelo botão acima."/> }
                .into_any()
        }
        Remote::Ready(items) => {
            let rows = items
                .into_iter()
                .map(|event| {
                    let thumb = config.asset_url(&event.imagem);
                    let edit_href = format!("/admin/eventos/editar/{}", event.id);
                    let for_toggle = event.clone();
                    let for_delete = event.clone();
                    view! {
                        <tr>
                            <td>
                                {(!thumb.is_empty()).then(|| view! { <img class="thumb" src=thumb alt=""/> })}
                            </td>
                            <td>{event.titulo.clone()}</td>
                            <td>{format_date(&event.data)}</td>
                            <td>
                                <span class="badge badge--info">{event.categoria.clone()}</span>
                            </td>
                            <td>
                                <span class=if event.ativo { "badge badge--ok" } else { "badge" }>
                                    {if event.ativo { "Ativo" } else { "Inativo" }}
                                </span>
                                {event.destaque.then(|| view! { <span class="badge badge--star">"Destaque"</span> })}
                            </td>
                            <td class="actions">
                                <button
                                    class="btn btn--small"
                                    title="Alternar destaque"
                                    on:click=move |_| on_toggle(for_toggle.clone())
                                >
                                    {if event.destaque { "★" } else { "☆" }}
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
                <h1>"Eventos"</h1>
                <a class="btn" href="/admin/eventos/novo">
                    "+ Novo evento"
                </a>
            </div>
            {table}
        </div>
    }
}
