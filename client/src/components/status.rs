//! Loading and failure placeholders for fetched content.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(default = "Carregando...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="status status--loading">
            <div class="spinner" aria-hidden="true"></div>
            <p>{label}</p>
        </div>
    }
}

#[component]
pub fn LoadError(title: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="alert alert--error" role="alert">
            <strong>{title}</strong>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn Empty(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="alert alert--info">
            <strong>{title}</strong>
            <p>{detail}</p>
        </div>
    }
}
