//! Organization contact settings shown in the public footer and contact page.

use leptos::prelude::*;
use portal::endpoints::contacts;
use portal::forms::validate_contact_info;
use portal::types::{ContactInfo, SocialLinks};

use crate::components::admin_layout::admin_flash;
use crate::components::form_field::{TextArea, TextField};
use crate::components::status::{LoadError, Loading};
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};
use crate::util::remote::Remote;

#[derive(Clone, Copy)]
struct ContactFields {
    email: RwSignal<String>,
    telefone: RwSignal<String>,
    endereco: RwSignal<String>,
    horario: RwSignal<String>,
    linkedin: RwSignal<String>,
    instagram: RwSignal<String>,
    twitter: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            telefone: RwSignal::new(String::new()),
            endereco: RwSignal::new(String::new()),
            horario: RwSignal::new(String::new()),
            linkedin: RwSignal::new(String::new()),
            instagram: RwSignal::new(String::new()),
            twitter: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, info: ContactInfo) {
        self.email.set(info.email);
        self.telefone.set(info.telefone);
        self.endereco.set(info.endereco);
        self.horario.set(info.horario_funcionamento);
        self.linkedin.set(info.redes_sociais.linkedin);
        self.instagram.set(info.redes_sociais.instagram);
        self.twitter.set(info.redes_sociais.twitter);
    }

    fn info(&self) -> ContactInfo {
        let text = |signal: RwSignal<String>| signal.get_untracked().trim().to_owned();
        ContactInfo {
            email: text(self.email),
            telefone: text(self.telefone),
            endereco: text(self.endereco),
            horario_funcionamento: text(self.horario),
            redes_sociais: SocialLinks {
                linkedin: text(self.linkedin),
                instagram: text(self.instagram),
                twitter: text(self.twitter),
            },
        }
    }
}

#[component]
pub fn ContactsSettingsPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let fields = ContactFields::new();
    let loaded = RwSignal::new(Remote::<()>::Loading);
    let saving = RwSignal::new(false);
    let status = admin_flash();

    browser::spawn(async move {
        let mut backend = auth;
        let result = contacts::info(&mut backend).await.map(|info| fields.fill(info));
        loaded.set(Remote::from_result(result));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let info = fields.info();
        if let Err(err) = validate_contact_info(&info) {
            flash::show(status, Flash::error("Campos obrigatórios", &err));
            return;
        }
        saving.set(true);
        browser::spawn(async move {
            let mut backend = auth;
            match contacts::update_info(&mut backend, &info).await {
                Ok(_) => flash::show(status, Flash::success("Contatos atualizados")),
                Err(err) => flash::show(status, Flash::error("Erro ao atualizar contatos", &err)),
            }
            saving.set(false);
        });
    };

    let body = move || match loaded.get() {
        Remote::Loading => view! { <Loading label="Carregando contatos..."/> }.into_any(),
        Remote::Failed(message) => {
            view! { <LoadError title="Erro ao carregar contatos" message=message/> }.into_any()
        }
        Remote::Ready(()) => view! {
            <form class="admin-form" on:submit=on_submit>
                <h2>"Informações de contato"</h2>
                <div class="admin-form__row">
                    <TextField label="Email" value=fields.email input_type="email" required=true/>
                    <TextField label="Telefone" value=fields.telefone input_type="tel" required=true/>
                </div>
                <TextArea label="Endereço" value=fields.endereco rows=2 required=true/>
                <TextField label="Horário de funcionamento" value=fields.horario/>
                <h2>"Redes sociais"</h2>
                <TextField label="LinkedIn" value=fields.linkedin input_type="url"/>
                <TextField label="Instagram" value=fields.instagram input_type="url"/>
                <TextField label="Twitter" value=fields.twitter input_type="url"/>
                <div class="admin-form__actions">
                    <button class="btn" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Salvando..." } else { "Salvar alterações" }}
                    </button>
                </div>
            </form>
        }
        .into_any(),
    };

    view! {
        <div class="admin-page">
            <h1>"Contatos"</h1>
            <p class="admin-page__subtitle">"Informações exibidas no rodapé e na página de contato"</p>
            {body}
        </div>
    }
}
