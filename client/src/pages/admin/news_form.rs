//! Create/edit form for news (`/admin/noticias/novo`, `/admin/noticias/editar/:id`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use portal::endpoints::news;
use portal::format::date_input_value;
use portal::forms::validate_news;
use portal::types::{News, NewsDraft};

use crate::components::admin_layout::admin_flash;
use crate::components::form_field::{Checkbox, SelectField, TextArea, TextField};
use crate::components::image_upload::ImageUpload;
use crate::components::status::Loading;
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};

const LIST_PATH: &str = "/admin/noticias";

const AUTHORS: [(&str, &str); 5] = [
    ("Equipe Blockchain Insper", "Equipe Blockchain Insper"),
    ("Diretoria de Business", "Diretoria de Business"),
    ("Diretoria de Finance", "Diretoria de Finance"),
    ("Diretoria de Tech", "Diretoria de Tech"),
    ("Presidência", "Presidência"),
];

const CATEGORIES: [(&str, &str); 8] = [
    ("Pesquisa", "Pesquisa"),
    ("Parceria", "Parceria"),
    ("Conquista", "Conquista"),
    ("Análise", "Análise"),
    ("Educação", "Educação"),
    ("Evento", "Evento"),
    ("Tecnologia", "Tecnologia"),
    ("Mercado", "Mercado"),
];

#[derive(Clone, Copy)]
struct NewsFields {
    titulo: RwSignal<String>,
    resumo: RwSignal<String>,
    conteudo: RwSignal<String>,
    data: RwSignal<String>,
    autor: RwSignal<String>,
    categoria: RwSignal<String>,
    imagem: RwSignal<String>,
    link: RwSignal<String>,
    destaque: RwSignal<bool>,
}

impl NewsFields {
    fn new() -> Self {
        let blank = NewsDraft::default();
        Self {
            titulo: RwSignal::new(blank.titulo),
            resumo: RwSignal::new(blank.resumo),
            conteudo: RwSignal::new(blank.conteudo),
            data: RwSignal::new(browser::today_iso()),
            autor: RwSignal::new(blank.autor),
            categoria: RwSignal::new(blank.categoria),
            imagem: RwSignal::new(blank.imagem),
            link: RwSignal::new(blank.link),
            destaque: RwSignal::new(blank.destaque),
        }
    }

    fn fill(&self, item: &News) {
        let draft = NewsDraft::from(item);
        self.titulo.set(draft.titulo);
        self.resumo.set(draft.resumo);
        self.conteudo.set(draft.conteudo);
        self.data.set(date_input_value(&draft.data));
        self.autor.set(draft.autor);
        self.categoria.set(draft.categoria);
        self.imagem.set(draft.imagem);
        self.link.set(draft.link);
        self.destaque.set(draft.destaque);
    }

    fn draft(&self) -> NewsDraft {
        let link = self.link.get_untracked().trim().to_owned();
        NewsDraft {
            titulo: self.titulo.get_untracked().trim().to_owned(),
            resumo: self.resumo.get_untracked().trim().to_owned(),
            conteudo: self.conteudo.get_untracked().trim().to_owned(),
            data: self.data.get_untracked(),
            autor: self.autor.get_untracked(),
            categoria: self.categoria.get_untracked(),
            imagem: self.imagem.get_untracked().trim().to_owned(),
            link: if link.is_empty() { NewsDraft::default().link } else { link },
            destaque: self.destaque.get_untracked(),
        }
    }
}

#[component]
pub fn NewsFormPage() -> impl IntoView {
    let auth = WebAuth::expect();
    let params = use_params_map();
    let navigate = use_navigate();
    let fields = NewsFields::new();
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
            match news::get(&mut backend, &id).await {
                Ok(item) => fields.fill(&item),
                Err(err) => flash::show(status, Flash::error("Erro ao carregar notícia", &err)),
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
        if let Err(err) = validate_news(&draft) {
            flash::show(status, Flash::error("Campos obrigatórios", &err));
            return;
        }
        saving.set(true);
        let id = editing.get_untracked();
        let navigate = navigate.clone();
        browser::spawn(async move {
            let mut backend = auth;
            let result = match &id {
                Some(id) => news::update(&mut backend, id, &draft).await,
                None => news::create(&mut backend, &draft).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    let title = if id.is_some() { "Notícia atualizada com sucesso" } else { "Notícia criada com sucesso" };
                    flash::show(status, Flash::success(title));
                    navigate(LIST_PATH, NavigateOptions::default());
                }
                Err(err) => {
                    let title = if id.is_some() { "Erro ao atualizar notícia" } else { "Erro ao criar notícia" };
                    flash::show(status, Flash::error(title, &err));
                }
            }
        });
    };

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <h1>{move || if editing.get().is_some() { "Editar notícia" } else { "Nova notícia" }}</h1>
                <a class="btn btn--ghost" href=LIST_PATH>
                    "Voltar"
                </a>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Carregando notícia..."/> }>
                <form class="admin-form" on:submit=on_submit.clone()>
                    <TextField label="Título" value=fields.titulo required=true/>
                    <TextArea label="Resumo" value=fields.resumo rows=3 required=true/>
                    <TextArea label="Conteúdo" value=fields.conteudo rows=10 required=true/>
                    <div class="admin-form__row">
                        <TextField label="Data" value=fields.data input_type="date"/>
                        <SelectField label="Autor" value=fields.autor options=AUTHORS.to_vec() required=true/>
                        <SelectField
                            label="Categoria"
                            value=fields.categoria
                            options=CATEGORIES.to_vec()
                            required=true
                        />
                    </div>
                    <TextField label="Link externo" value=fields.link input_type="url" placeholder="https://..."/>
                    <ImageUpload value=fields.imagem flash=status/>
                    <Checkbox label="Notícia em destaque" checked=fields.destaque/>
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
