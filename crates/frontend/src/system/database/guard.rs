use contracts::system::database::GateView;
use leptos::prelude::*;

use super::context::use_active_database;

/// Renders children only once a database is selected
#[component]
pub fn RequireActiveDatabase(children: ChildrenFn) -> impl IntoView {
    let db = use_active_database();
    let children = StoredValue::new(children);
    // a different database name keeps the gate open without remounting
    let gate = Memo::new(move |_| db.state().gate());

    move || match gate.get() {
        GateView::Loading => view! {
            <div class="gate-message">"Carregando..."</div>
        }
        .into_any(),
        GateView::Blocked => view! {
            <div class="gate-message gate-message--blocked">
                "Selecione um banco de dados primeiro"
            </div>
        }
        .into_any(),
        GateView::Open => children.with_value(|children| children()).into_any(),
    }
}
