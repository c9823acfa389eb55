//! Inbox for messages sent through the public contact form.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;
use portal::endpoints::messages;
use portal::format::{format_date_time, pluralize, unanswered_count, unread_count};
use portal::types::ContactMessage;

use crate::components::admin_layout::admin_flash;
use crate::components::cards::excerpt;
use crate::components::status::{Empty, LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};
use crate::util::remote::Remote;

/// `mailto:` link answering `message`.
pub fn reply_href(message: &ContactMessage) -> String {
    let subject = if message.assunto.trim().is_empty() {
        "Contato Blockchain Insper".to_owned()
    } else {
        format!("Re: {}", message.assunto.trim())
    };
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("subject", &subject)
        .finish()
        .replace('+', "%20");
    format!("mailto:{}?{query}", message.email)
}

fn replace_message(listing: RwSignal<Remote<Vec<ContactMessage>>>, id: &str, f: impl FnOnce(&mut ContactMessage)) {
    listing.update(|l| {
        l.update_ready(|items| {
            if let Some(m) = items.iter_mut().find(|m| m.id == id) {
                f(m);
            }
        });
    });
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let listing = RwSignal::new(Remote::<Vec<ContactMessage>>::Loading);
    let selected = RwSignal::new(None::<String>);
    let status = admin_flash();

    browser::spawn(async move {
        let mut backend = auth;
        listing.set(Remote::from_result(messages::list(&mut backend).await));
    });

    let on_open = move |message: ContactMessage| {
        selected.set(Some(message.id.clone()));
        browser::spawn(async move {
            let mut backend = auth;
            match messages::mark_opened(&mut backend, &message).await {
                Ok(true) => replace_message(listing, &message.id, |m| m.lida = true),
                Ok(false) => {}
                Err(err) => flash::show(status, Flash::error("Erro ao atualizar mensagem", &err)),
            }
        });
    };

    let on_toggle_read = move |message: ContactMessage| {
        browser::spawn(async move {
            let mut backend = auth;
            match messages::toggle_read(&mut backend, &message).await {
                Ok(_) => replace_message(listing, &message.id, |m| m.lida = !message.lida),
                Err(err) => flash::show(status, Flash::error("Erro ao atualizar mensagem", &err)),
            }
        });
    };

    let on_toggle_answered = move |message: ContactMessage| {
        browser::spawn(async move {
            let mut backend = auth;
            match messages::toggle_answered(&mut backend, &message).await {
                Ok(_) => replace_message(listing, &message.id, |m| m.respondida = !message.respondida),
                Err(err) => flash::show(status, Flash::error("Erro ao atualizar mensagem", &err)),
            }
        });
    };

    let on_delete = move |message: ContactMessage| {
        if !browser::confirm(&format!("Excluir a mensagem de {}?", message.nome)) {
            return;
        }
        browser::spawn(async move {
            let mut backend = auth;
            match messages::delete(&mut backend, &message.id).await {
                Ok(_) => {
                    listing.update(|l| l.update_ready(|items| items.retain(|m| m.id != message.id)));
                    if selected.get_untracked().as_deref() == Some(message.id.as_str()) {
                        selected.set(None);
                    }
                    flash::show(status, Flash::success("Mensagem excluída com sucesso"));
                }
                Err(err) => flash::show(status, Flash::error("Erro ao excluir mensagem", &err)),
            }
        });
    };

    let summary = move || {
        let items = listing.with(Remote::items);
        format!(
            "{} · {} · {}",
            pluralize(items.len(), "mensagem", "mensagens"),
            pluralize(unread_count(&items), "não lida", "não lidas"),
            pluralize(unanswered_count(&items), "sem resposta", "sem resposta"),
        )
    };

    let detail = move || {
        let id = selected.get()?;
        let message = listing.with(|l| l.ready().and_then(|items| items.iter().find(|m| m.id == id).cloned()))?;
        let for_answered = message.clone();
        Some(view! {
            <div class="message-detail">
                <div class="message-detail__header">
                    <h2>{message.assunto.clone()}</h2>
                    <button class="btn btn--ghost" on:click=move |_| selected.set(None)>
                        "Fechar"
                    </button>
                </div>
                <p>
                    <strong>{message.nome.clone()}</strong>
                    " <"
                    {message.email.clone()}
                    "> · "
                    {format_date_time(message.data_envio.as_deref())}
                </p>
                <p class="message-detail__body">{message.mensagem.clone()}</p>
                <div class="actions">
                    <a class="btn" href=reply_href(&message)>
                        "Responder por email"
                    </a>
                    <button class="btn btn--ghost" on:click=move |_| on_toggle_answered(for_answered.clone())>
                        {if message.respondida { "Marcar como não respondida" } else { "Marcar como respondida" }}
                    </button>
                </div>
            </div>
        })
    };

    let table = move || match listing.get() {
        Remote::Loading => view! { <Loading label="Carregando mensagens..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar mensagens" message=message/> }.into_any()
        }
        Remote::Ready(items) if items.is_empty() => {
            view! { <Empty title="Nenhuma mensagem recebida" detail="As mensagens do formulário de contato aparecem aqui."/> }
                .into_any()
        }
        Remote::Ready(items) => {
            let rows = items
                .into_iter()
                .map(|message| {
                    let (for_open, for_read, for_delete) = (message.clone(), message.clone(), message.clone());
                    let row_class = if message.lida { "" } else { "row--unread" };
                    view! {
                        <tr class=row_class>
                            <td>
                                <span class=if message.lida { "badge badge--ok" } else { "badge badge--warn" }>
                                    {if message.lida { "Lida" } else { "Nova" }}
                                </span>
                                {message
                                    .respondida
                                    .then(|| view! { <span class="badge badge--info">"Respondida"</span> })}
                            </td>
                            <td>{message.nome.clone()}</td>
                            <td>{message.email.clone()}</td>
                            <td>{format_date_time(message.data_envio.as_deref())}</td>
                            <td>{excerpt(&message.mensagem, 60)}</td>
                            <td class="actions">
                                <button class="btn btn--small" on:click=move |_| on_open(for_open.clone())>
                                    "Ver"
                                </button>
                                <button class="btn btn--small" on:click=move |_| on_toggle_read(for_read.clone())>
                                    {if message.lida { "Marcar não lida" } else { "Marcar lida" }}
                                </button>
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
                            <th>"Status"</th>
                            <th>"Nome"</th>
                            <th>"Email"</th>
                            <th>"Data"</th>
                            <th>"Mensagem"</th>
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
            <h1>"Mensagens"</h1>
            <p class="admin-page__subtitle">{summary}</p>
            {detail}
            {table}
        </div>
    }
}
