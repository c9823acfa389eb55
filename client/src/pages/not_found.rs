use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--narrow not-found">
            <h1>"Página não encontrada"</h1>
            <p>"O endereço acessado não existe ou foi removido."</p>
            <a class="btn" href="/">
                "Voltar para o início"
            </a>
        </div>
    }
}
