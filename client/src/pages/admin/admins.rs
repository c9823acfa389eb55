//! Administrator accounts; super admins only.
//!
//! Regular admins never see this entry in the sidebar, but the route exists,
//! so the page checks the role again and renders a notice instead of the
//! table. The backend enforces the same rule.

#[cfg(test)]
#[path = "admins_test.rs"]
mod admins_test;

use leptos::prelude::*;
use portal::endpoints::admins;
use portal::format::format_date_time;
use portal::forms::{MIN_PASSWORD_LEN, ValidationError, validate_admin_update, validate_new_admin};
use portal::guard::can_manage_admins;
use portal::types::{Admin, AdminUpdate, NewAdmin};
use portal::Role;

use crate::components::admin_layout::admin_flash;
use crate::components::form_field::{Checkbox, SelectField, TextField};
use crate::components::status::{LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};
use crate::util::remote::Remote;

const ROLES: [(&str, &str); 2] = [("admin", "Admin"), ("super_admin", "Super Admin")];

pub fn parse_role(value: &str) -> Role {
    if value == Role::SuperAdmin.as_str() { Role::SuperAdmin } else { Role::Admin }
}

/// Password reset input check; empty means "keep the current password".
///
/// # Errors
///
/// Returns [`ValidationError::PasswordTooShort`] for a short non-empty value.
pub fn check_reset_password(password: &str) -> Result<Option<&str>, ValidationError> {
    match password.trim() {
        "" => Ok(None),
        p if p.chars().count() < MIN_PASSWORD_LEN => Err(ValidationError::PasswordTooShort),
        _ => Ok(Some(password)),
    }
}

#[derive(Clone, Copy)]
struct AdminFields {
    editing: RwSignal<Option<String>>,
    nome: RwSignal<String>,
    email: RwSignal<String>,
    senha: RwSignal<String>,
    role: RwSignal<String>,
    ativo: RwSignal<bool>,
}

impl AdminFields {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            nome: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            senha: RwSignal::new(String::new()),
            role: RwSignal::new(Role::Admin.as_str().to_owned()),
            ativo: RwSignal::new(true),
        }
    }

    fn reset(&self) {
        self.editing.set(None);
        self.nome.set(String::new());
        self.email.set(String::new());
        self.senha.set(String::new());
        self.role.set(Role::Admin.as_str().to_owned());
        self.ativo.set(true);
    }

    fn edit(&self, admin: &Admin) {
        self.editing.set(Some(admin.id.clone()));
        self.nome.set(admin.nome.clone());
        self.email.set(admin.email.clone());
        self.senha.set(String::new());
        self.role.set(admin.role.as_str().to_owned());
        self.ativo.set(admin.ativo);
    }
}

#[component]
pub fn AdminsPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let allowed = move || auth.user().is_some_and(|u| can_manage_admins(&u));

    view! {
        <Show
            when=allowed
            fallback=|| {
                view! {
                    <div class="admin-page">
                        <h1>"Administradores"</h1>
                        <p class="alert alert--warning">
                            "Acesso restrito: apenas super administradores podem gerenciar contas."
                        </p>
                    </div>
                }
            }
        >
            <AdminsManager/>
        </Show>
    }
}

#[component]
fn AdminsManager() -> impl IntoView {
    let auth = WebAuth::expect();
    let listing = RwSignal::new(Remote::<Vec<Admin>>::Loading);
    let fields = AdminFields::new();
    let form_open = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let status = admin_flash();

    let reload = move || {
        browser::spawn(async move {
            let mut backend = auth;
            listing.set(Remote::from_result(admins::list(&mut backend).await));
        });
    };
    reload();

    let on_new = move |_| {
        fields.reset();
        form_open.set(true);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let nome = fields.nome.get_untracked().trim().to_owned();
        let email = fields.email.get_untracked().trim().to_owned();
        let senha = fields.senha.get_untracked();
        let role = parse_role(&fields.role.get_untracked());
        let ativo = fields.ativo.get_untracked();
        let editing = fields.editing.get_untracked();

        let checked = match &editing {
            Some(_) => validate_admin_update(&AdminUpdate { nome: nome.clone(), email: email.clone(), role, ativo })
                .and_then(|()| check_reset_password(&senha).map(|_| ())),
            None => validate_new_admin(&NewAdmin { nome: nome.clone(), email: email.clone(), senha: senha.clone(), role, ativo }),
        };
        if let Err(err) = checked {
            flash::show(status, Flash::error("Campo obrigatório", &err));
            return;
        }

        saving.set(true);
        browser::spawn(async move {
            let mut backend = auth;
            let result = match &editing {
                Some(id) => {
                    let update = AdminUpdate { nome, email, role, ativo };
                    match admins::update(&mut backend, id, &update).await {
                        Ok(_) => match check_reset_password(&senha) {
                            Ok(Some(password)) => admins::set_password(&mut backend, id, password).await.map(|_| ()),
                            _ => Ok(()),
                        },
                        Err(err) => Err(err),
                    }
                }
                None => admins::create(&mut backend, &NewAdmin { nome, email, senha, role, ativo }).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    let title = if editing.is_some() { "Administrador atualizado" } else { "Administrador criado" };
                    flash::show(status, Flash::success(title));
                    form_open.set(false);
                    fields.reset();
                    reload();
                }
                Err(err) => flash::show(status, Flash::error("Erro ao salvar administrador", &err)),
            }
        });
    };

    let on_delete = move |admin: Admin| {
        if auth.user().is_some_and(|u| u.id == admin.id) {
            flash::show(status, Flash::warning("Operação não permitida", "Você não pode excluir a própria conta."));
            return;
        }
        if !browser::confirm(&format!("Excluir o administrador {}?", admin.nome)) {
            return;
        }
        browser::spawn(async move {
            let mut backend = auth;
            match admins::delete(&mut backend, &admin.id).await {
                Ok(_) => {
                    listing.update(|l| l.update_ready(|items| items.retain(|a| a.id != admin.id)));
                    flash::show(status, Flash::success("Administrador excluído"));
                }
                Err(err) => flash::show(status, Flash::error("Erro ao excluir administrador", &err)),
            }
        });
    };

    let table = move || match listing.get() {
        Remote::Loading => view! { <Loading label="Carregando administradores..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar administradores" message=message/> }.into_any()
        }
        Remote::Ready(items) => {
            let rows = items
                .into_iter()
                .map(|admin| {
                    let (for_edit, for_delete) = (admin.clone(), admin.clone());
                    view! {
                        <tr>
                            <td>{admin.nome.clone()}</td>
                            <td>{admin.email.clone()}</td>
                            <td>
                                <span class="badge">{admin.role.label()}</span>
                            </td>
                            <td>
                                <span class=if admin.ativo { "badge badge--ok" } else { "badge" }>
                                    {if admin.ativo { "Ativo" } else { "Inativo" }}
                                </span>
                            </td>
                            <td>{format_date_time(admin.ultimo_login.as_deref())}</td>
                            <td class="actions">
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| {
                                        fields.edit(&for_edit);
                                        form_open.set(true);
                                    }
                                >
                                    "Editar"
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
                            <th>"Nome"</th>
                            <th>"Email"</th>
                            <th>"Papel"</th>
                            <th>"Status"</th>
                            <th>"Último login"</th>
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
                <h1>"Administradores"</h1>
                <button class="btn" on:click=on_new>
                    "+ Novo administrador"
                </button>
            </div>
            <Show when=move || form_open.get()>
                <form class="admin-form panel" on:submit=on_submit>
                    <h2>
                        {move || if fields.editing.get().is_some() { "Editar administrador" } else { "Novo administrador" }}
                    </h2>
                    <div class="admin-form__row">
                        <TextField label="Nome" value=fields.nome required=true/>
                        <TextField label="Email" value=fields.email input_type="email" required=true/>
                    </div>
                    <div class="admin-form__row">
                        <TextField label="Senha" value=fields.senha input_type="password"/>
                        <SelectField label="Papel" value=fields.role options=ROLES.to_vec() required=true/>
                    </div>
                    <p class="field__hint">
                        {move || {
                            if fields.editing.get().is_some() {
                                "Deixe a senha em branco para manter a atual."
                            } else {
                                "A senha deve ter pelo menos 8 caracteres."
                            }
                        }}
                    </p>
                    <Checkbox label="Conta ativa" checked=fields.ativo/>
                    <div class="admin-form__actions">
                        <button type="button" class="btn btn--ghost" on:click=move |_| form_open.set(false)>
                            "Cancelar"
                        </button>
                        <button class="btn" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </form>
            </Show>
            {table}
        </div>
    }
}
