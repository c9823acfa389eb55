//! Backup snapshots: create, list, restore.
//!
//! Restoring replaces all site content. The backend takes a `before-restore`
//! snapshot first; those are labeled as automatic in the list.

#[cfg(test)]
#[path = "backups_test.rs"]
mod backups_test;

use leptos::prelude::*;
use portal::endpoints::backups;
use portal::format::{format_date_time, format_size};
use portal::types::BackupInfo;

use crate::components::admin_layout::admin_flash;
use crate::components::status::{Empty, LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};
use crate::util::remote::Remote;

/// Badge label for a backup file.
pub fn backup_kind(filename: &str) -> &'static str {
    if filename.contains("before-restore") { "Auto Backup" } else { "Manual" }
}

#[component]
pub fn BackupsPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let listing = RwSignal::new(Remote::<Vec<BackupInfo>>::Loading);
    let busy = RwSignal::new(false);
    let status = admin_flash();

    let reload = move || {
        browser::spawn(async move {
            let mut backend = auth;
            listing.set(Remote::from_result(backups::list(&mut backend).await));
        });
    };
    reload();

    let on_create = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        browser::spawn(async move {
            let mut backend = auth;
            match backups::create(&mut backend).await {
                Ok(filename) => {
                    let flash = Flash::success("Backup criado com sucesso");
                    let flash = match filename {
                        Some(name) => flash.with_detail(name),
                        None => flash,
                    };
                    flash::show(status, flash);
                    reload();
                }
                Err(err) => flash::show(status, Flash::error("Erro ao criar backup", &err)),
            }
            busy.set(false);
        });
    };

    let on_restore = move |filename: String| {
        let prompt = format!(
            "Restaurar o backup {filename}? Todo o conteúdo atual será substituído. Um backup automático será criado antes."
        );
        if busy.get_untracked() || !browser::confirm(&prompt) {
            return;
        }
        busy.set(true);
        browser::spawn(async move {
            let mut backend = auth;
            match backups::restore(&mut backend, &filename).await {
                Ok(_) => {
                    flash::show(status, Flash::success("Backup restaurado com sucesso"));
                    reload();
                }
                Err(err) => flash::show(status, Flash::error("Erro ao restaurar backup", &err)),
            }
            busy.set(false);
        });
    };

    let table = move || match listing.get() {
        Remote::Loading => view! { <Loading label="Carregando backups..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar backups" message=message/> }.into_any()
        }
        Remote::Ready(items) if items.is_empty() => {
            view! { <Empty title="Nenhum backup encontrado" detail="Crie o primeiro backup pelo botão acima."/> }
                .into_any()
        }
        Remote::Ready(items) => {
            let rows = items
                .into_iter()
                .map(|backup| {
                    let filename = backup.filename.clone();
                    view! {
                        <tr>
                            <td>
                                {backup.filename.clone()}
                                <span class="badge">{backup_kind(&backup.filename)}</span>
                            </td>
                            <td>{format_date_time(Some(backup.date.as_str()))}</td>
                            <td>{format_size(backup.size)}</td>
                            <td class="actions">
                                <button
                                    class="btn btn--small btn--danger"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_restore(filename.clone())
                                >
                                    "Restaurar"
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
                            <th>"Arquivo"</th>
                            <th>"Data de Criação"</th>
                            <th>"Tamanho"</th>
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
                <h1>"Backups"</h1>
                <button class="btn" on:click=on_create disabled=move || busy.get()>
                    {move || if busy.get() { "Processando..." } else { "Criar backup" }}
                </button>
            </div>
            <p class="alert alert--warning">
                "A restauração substitui eventos, notícias, contatos e mensagens pelo conteúdo do backup."
            </p>
            {table}
        </div>
    }
}
