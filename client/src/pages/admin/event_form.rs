//! Create/edit form for events (`/admin/eventos/novo`, `/admin/eventos/editar/:id`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use portal::endpoints::events;
use portal::format::date_input_value;
use portal::forms::validate_event;
use portal::types::{Event, EventDraft};

use crate::components::admin_layout::admin_flash;
use crate::components::form_field::{Checkbox, SelectField, TextArea, TextField};
use crate::components::image_upload::ImageUpload;
use crate::components::status::Loading;
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};

const LIST_PATH: &str = "/admin/eventos";

const CATEGORIES: [(&str, &str); 8] = [
    ("Palestra", "Palestra"),
    ("Workshop", "Workshop"),
    ("Mesa Redonda", "Mesa Redonda"),
    ("Hackathon", "Hackathon"),
    ("Apresentação", "Apresentação"),
    ("Parceria", "Parceria"),
    ("Conferência", "Conferência"),
    ("Seminário", "Seminário"),
];

#[derive(Clone, Copy)]
struct EventFields {
    titulo: RwSignal<String>,
    descricao: RwSignal<String>,
    data: RwSignal<String>,
    local: RwSignal<String>,
    participantes: RwSignal<String>,
    categoria: RwSignal<String>,
    imagem: RwSignal<String>,
    destaque: RwSignal<bool>,
}

impl EventFields {
    fn new() -> Self {
        Self {
            titulo: RwSignal::new(String::new()),
            descricao: RwSignal::new(String::new()),
            data: RwSignal::new(String::new()),
            local: RwSignal::new(String::new()),
            participantes: RwSignal::new(String::new()),
            categoria: RwSignal::new(String::new()),
            imagem: RwSignal::new(String::new()),
            destaque: RwSignal::new(false),
        }
    }

    fn fill(&self, event: &Event) {
        let draft = EventDraft::from(event);
        self.titulo.set(draft.titulo);
        self.descricao.set(draft.descricao);
        self.data.set(date_input_value(&draft.data));
        self.local.set(draft.local);
        self.participantes.set(draft.participantes);
        self.categoria.set(draft.categoria);
        self.imagem.set(draft.imagem);
        self.destaque.set(draft.destaque);
    }

    fn draft(&self) -> EventDraft {
        EventDraft {
            titulo: self.titulo.get_untracked().trim().to_owned(),
            descricao: self.descricao.get_untracked().trim().to_owned(),
            data: self.data.get_untracked(),
            local: self.local.get_untracked().trim().to_owned(),
            participantes: self.participantes.get_untracked().trim().to_owned(),
            categoria: self.categoria.get_untracked(),
            imagem: self.imagem.get_untracked().trim().to_owned(),
            destaque: self.destaque.get_untracked(),
        }
    }
}

#[component]
pub fn EventFormPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let params = use_params_map();
    let navigate = use_navigate();
    let fields = EventFields::new();
    let status = admin_flash();
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let editing = Memo::new(move |_| params.with(|p| p.get("id")));

    Effect::new(move || {
        let Some(id) = editing.get() else {
            return;
        };
        loading.set(true);
        browser::spawn(async move {
            let mut backend = auth;
            match events::get(&mut backend, &id).await {
                Ok(event) => fields.fill(&event),
                Err(err) => flash::show(status, Flash::error("Erro ao carregar evento", &err)),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = fields.draft();
        if let Err(err) = validate_event(&draft) {
            flash::show(status, Flash::error("Campos obrigatórios", &err));
            return;
        }
        saving.set(true);
        let id = editing.get_untracked();
        let navigate = navigate.clone();
        browser::spawn(async move {
            let mut backend = auth;
            let result = match &id {
                Some(id) => events::update(&mut backend, id, &draft).await,
                None => events::create(&mut backend, &draft).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    let title = if id.is_some() { "Evento atualizado com sucesso" } else { "Evento criado com sucesso" };
                    flash::show(status, Flash::success(title));
                    navigate(LIST_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    let title = if id.is_some() { "Erro ao atualizar evento" } else { "Erro ao criar evento" };
                    flash::show(status, Flash::error(title, &err));
                }
            }
        });
    };

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <h1>{move || if editing.get().is_some() { "Editar evento" } else { "Novo evento" }}</h1>
                <a class="btn btn--ghost" href=LIST_PATH>
                    "Voltar"
                </a>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Carregando evento..."/> }>
                <form class="admin-form" on:submit=on_submit.clone()>
                    <TextField label="Título" value=fields.titulo required=true/>
                    <TextArea label="Descrição" value=fields.descricao rows=6 required=true/>
                    <div class="admin-form__row">
                        <TextField label="Data" value=fields.data input_type="date" required=true/>
                        <TextField label="Local" value=fields.local required=true/>
                    </div>
                    <div class="admin-form__row">
                        <TextField label="Participantes" value=fields.participantes placeholder="Ex.: 120 pessoas"/>
                        <SelectField
                            label="Categoria"
                            value=fields.categoria
                            options=CATEGORIES.to_vec()
                            required=true
                        />
                    </div>
                    <ImageUpload value=fields.imagem flash=status/>
                    <Checkbox label="Evento em destaque" checked=fields.destaque/>
                    <div class="admin-form__actions">
                        <a class="btn btn--ghost" href=LIST_PATH>
                            "Cancelar"
                        </a>
                        <button class="btn" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
