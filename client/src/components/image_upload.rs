//! Image picker for the event and news forms.
//!
//! The field holds an image reference: either a path returned by the upload
//! endpoint (`/uploads/...`) or a pasted absolute URL. Picking a file uploads
//! it immediately and replaces the reference.

#[cfg(test)]
#[path = "image_upload_test.rs"]
mod image_upload_test;

use leptos::prelude::*;
use portal::endpoints::media;

use crate::net::files::IMAGE_TYPES;
use crate::state::auth::WebAuth;
use crate::util::browser;
use crate::util::flash::{self, Flash};

/// Server-side file name when `reference` points at an uploaded file.
pub fn uploaded_file_name(reference: &str) -> Option<&str> {
    let (_, name) = reference.rsplit_once("/uploads/")?;
    (!name.is_empty() && !name.contains('/')).then_some(name)
}

#[component]
pub fn ImageUpload(value: RwSignal<String>, flash: RwSignal<Option<Flash>>) -> impl IntoView {
    let auth = WebAuth::expect();
    let config = auth.config();
    let uploading = RwSignal::new(false);

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            uploading.set(true);
            browser::spawn(async move {
                match upload(auth, file).await {
                    Ok(url) => {
                        value.set(url);
                        flash::show(flash, Flash::success("Imagem enviada com sucesso"));
                    }
                    Err(message) => flash::show(flash, Flash::error("Erro ao enviar imagem", &message)),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_remove = move |_| {
        let reference = value.get_untracked();
        value.set(String::new());
        let Some(name) = uploaded_file_name(&reference).map(ToOwned::to_owned) else {
            return;
        };
        browser::spawn(async move {
            let mut backend = auth;
            if let Err(err) = media::delete_image(&mut backend, &name).await {
                flash::show(flash, Flash::error("Erro ao remover imagem", &err));
            }
        });
    };

    view! {
        <div class="field image-upload">
            <span class="field__label">"Imagem"</span>
            <input
                type="file"
                accept=IMAGE_TYPES
                disabled=move || uploading.get()
                on:change=on_pick
            />
            <Show when=move || uploading.get()>
                <p class="image-upload__status">"Enviando imagem..."</p>
            </Show>
            <p class="field__hint">"Ou cole uma URL de imagem abaixo"</p>
            <input
                class="field__input"
                type="url"
                placeholder="https://exemplo.com/imagem.jpg"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().trim().is_empty()>
                <div class="image-upload__preview">
                    <img src={
                        let config = config.clone();
                        move || config.asset_url(&value.get())
                    } alt="Pré-visualização"/>
                    <button type="button" class="btn btn--ghost" on:click=on_remove>
                        "Remover imagem"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
async fn upload(mut auth: WebAuth, file: web_sys::File) -> Result<String, String> {
    let part = crate::net::files::read_image(file).await?;
    let uploaded = media::upload_image(&mut auth, part).await.map_err(|err| err.to_string())?;
    Ok(uploaded.url)
}
