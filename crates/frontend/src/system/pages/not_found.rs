use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="empty-state">
                <p>"Página não encontrada"</p>
                <A href="/" attr:class="button button--secondary">"Voltar ao início"</A>
            </div>
        </div>
    }
}
