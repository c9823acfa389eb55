//! Contact page: organization details and the public message form.

use leptos::prelude::*;
use portal::endpoints::contacts::{self, ContactDetails};
use portal::forms::validate_contact_message;
use portal::types::NewContactMessage;

use crate::components::form_field::{TextArea, TextField};
use crate::components::status::Loading;
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash, FlashBanner};

#[component]
pub fn ContactPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let details = RwSignal::new(None::<ContactDetails>);
    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let assunto = RwSignal::new(String::new());
    let mensagem = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let status = RwSignal::new(None::<Flash>);

    browser::spawn(async move {
        let mut backend = auth;
        details.set(Some(contacts::info_or_fallback(&mut backend).await));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let message = NewContactMessage {
            nome: nome.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            assunto: assunto.get_untracked().trim().to_owned(),
            mensagem: mensagem.get_untracked().trim().to_owned(),
        };
        if let Err(err) = validate_contact_message(&message) {
            flash::show(status, Flash::error("Erro de validação", &err));
            return;
        }
        sending.set(true);
        browser::spawn(async move {
            let mut backend = auth;
            match contacts::send_message(&mut backend, &message).await {
                Ok(_) => {
                    for field in [nome, email, assunto, mensagem] {
                        field.set(String::new());
                    }
                    flash::show(
                        status,
                        Flash::success("Mensagem enviada!").with_detail("Entraremos em contato em breve."),
                    );
                }
                Err(err) => flash::show(status, Flash::error("Erro ao enviar mensagem", &err)),
            }
            sending.set(false);
        });
    };

    let info_block = move || match details.get() {
        None => view! { <Loading/> }.into_any(),
        Some(ContactDetails { info, notice }) => view! {
            {notice.map(|n| view! { <p class="alert alert--warning">{n}</p> })}
            <dl class="contact-info">
                <dt>"Email"</dt>
                <dd>
                    <a href=format!("mailto:{}", info.email)>{info.email.clone()}</a>
                </dd>
                {(!info.telefone.is_empty()).then(|| view! {
                    <dt>"Telefone"</dt>
                    <dd>{info.telefone.clone()}</dd>
                })}
                <dt>"Endereço"</dt>
                <dd>{info.endereco.clone()}</dd>
                <dt>"Horário de funcionamento"</dt>
                <dd>{info.horario_funcionamento.clone()}</dd>
            </dl>
        }
        .into_any(),
    };

    view! {
        <section class="hero hero--compact">
            <h1>"Contato"</h1>
            <p>"Quer saber mais, propor uma parceria ou participar de um evento? Fale com a gente."</p>
        </section>
        <section class="page contact-page">
            <div class="contact-page__info">{info_block}</div>
            <form class="contact-page__form" on:submit=on_submit>
                <FlashBanner slot=status/>
                <TextField label="Nome" value=nome required=true/>
                <TextField label="Email" value=email input_type="email" required=true/>
                <TextField label="Assunto" value=assunto/>
                <TextArea label="Mensagem" value=mensagem rows=6 required=true/>
                <button class="btn" type="submit" disabled=move || sending.get()>
                    {move || if sending.get() { "Enviando..." } else { "Enviar mensagem" }}
                </button>
            </form>
        </section>
    }
}
