//! The logged-in administrator's own profile and password.

use leptos::prelude::*;
use portal::endpoints::admins;
use portal::format::format_date_time;
use portal::forms::{validate_admin_update, validate_new_password};
use portal::types::AdminUpdate;

use crate::components::admin_layout::admin_flash;
use crate::components::form_field::TextField;
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = WebAuth::expect();
    let status = admin_flash();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let saving_profile = RwSignal::new(false);

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let saving_password = RwSignal::new(false);

    Effect::new(move || {
        if let Some(user) = auth.user() {
            nome.set(user.name);
            email.set(user.email);
        }
    });

    let on_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = auth.user() else {
            return;
        };
        if saving_profile.get_untracked() {
            return;
        }
        let update = AdminUpdate {
            nome: nome.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            role: user.role,
            ativo: true,
        };
        if let Err(err) = validate_admin_update(&update) {
            flash::show(status, Flash::error("Campo obrigatório", &err));
            return;
        }
        saving_profile.set(true);
        browser::spawn(async move {
            let mut backend = auth;
            let result = admins::update(&mut backend, &user.id, &update).await;
            match result {
                Ok(_) => {
                    if let Err(err) = auth.refresh_profile().await {
                        flash::show(status, Flash::error("Erro ao carregar dados do usuário", &err));
                    } else {
                        flash::show(status, Flash::success("Perfil atualizado"));
                    }
                }
                Err(err) => flash::show(status, Flash::error("Erro ao atualizar perfil", &err)),
            }
            saving_profile.set(false);
        });
    };

    let on_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving_password.get_untracked() {
            return;
        }
        let current_value = current.get_untracked();
        let new_value = new_password.get_untracked();
        if let Err(err) = validate_new_password(Some(&current_value), &new_value, &confirm.get_untracked()) {
            flash::show(status, Flash::error("Erro ao alterar senha", &err));
            return;
        }
        saving_password.set(true);
        browser::spawn(async move {
            match auth.change_password(current_value, new_value).await {
                Ok(_) => {
                    for field in [current, new_password, confirm] {
                        field.set(String::new());
                    }
                    flash::show(status, Flash::success("Senha alterada"));
                }
                Err(err) => flash::show(status, Flash::error("Erro ao alterar senha", &err)),
            }
            saving_password.set(false);
        });
    };

    let account = move || {
        auth.user().map(|user| {
            view! {
                <dl class="profile-summary">
                    <dt>"Papel"</dt>
                    <dd>
                        <span class="badge">{user.role.label()}</span>
                    </dd>
                    <dt>"Último login"</dt>
                    <dd>{format_date_time(user.last_login_at.as_deref())}</dd>
                </dl>
            }
        })
    };

    view! {
        <div class="admin-page">
            <h1>"Configurações"</h1>
            <p class="admin-page__subtitle">"Dados da sua conta de administrador"</p>
            {account}
            <div class="panel-grid">
                <form class="admin-form panel" on:submit=on_profile>
                    <h2>"Perfil"</h2>
                    <TextField label="Nome" value=nome required=true/>
                    <TextField label="Email" value=email input_type="email" required=true/>
                    <div class="admin-form__actions">
                        <button class="btn" type="submit" disabled=move || saving_profile.get()>
                            {move || if saving_profile.get() { "Salvando..." } else { "Salvar perfil" }}
                        </button>
                    </div>
                </form>
                <form class="admin-form panel" on:submit=on_password>
                    <h2>"Alterar senha"</h2>
                    <TextField label="Senha atual" value=current input_type="password" required=true/>
                    <TextField label="Nova senha" value=new_password input_type="password" required=true/>
                    <TextField label="Confirmar nova senha" value=confirm input_type="password" required=true/>
                    <div class="admin-form__actions">
                        <button class="btn" type="submit" disabled=move || saving_password.get()>
                            {move || if saving_password.get() { "Alterando..." } else { "Alterar senha" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
