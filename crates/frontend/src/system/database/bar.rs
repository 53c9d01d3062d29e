use leptos::prelude::*;

use super::context::use_active_database;

/// Strip with the selected database name; hidden while none is selected
#[component]
pub fn ActiveDatabaseBar() -> impl IntoView {
    let db = use_active_database();

    view! {
        {move || db.name().map(|name| view! {
            <div class="active-db-bar">
                "Banco de Dados Ativo: "
                <strong>{name.to_uppercase()}</strong>
            </div>
        })}
    }
}
