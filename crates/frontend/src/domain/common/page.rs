use contracts::domain::common::HierarchyLevel;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Tab, TabList};

use super::{HierarchyTab, HierarchyTabConfig};
use crate::domain::{a001_nivel4, a002_departamento, a003_grupo, a004_subgrupo};
use crate::shared::icons::icon;

const TABS: [HierarchyTabConfig; 4] = [
    a001_nivel4::TAB,
    a002_departamento::TAB,
    a003_grupo::TAB,
    a004_subgrupo::TAB,
];

fn tab_label(level: HierarchyLevel) -> &'static str {
    match level {
        HierarchyLevel::Nivel4 => "Nível 4",
        HierarchyLevel::Departamento => "Departamento",
        HierarchyLevel::Grupo => "Grupo",
        HierarchyLevel::Subgrupo => "Subgrupo",
    }
}

/// The four hierarchy levels, one tab each. Every tab stays mounted so
/// switching back does not reload it.
#[component]
pub fn DepartmentalizationTablesPage() -> impl IntoView {
    let selected = RwSignal::new(HierarchyLevel::Nivel4.key().to_string());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <A href="/" attr:class="button button--secondary button--small">
                        {icon("arrow-left")}
                        "Voltar"
                    </A>
                    <h1 class="header__title">"Tabelas de Departamentalização"</h1>
                </div>
            </div>

            <section class="card">
                <h2 class="card__title">"Gerenciar Hierarquia"</h2>
                <TabList selected_value=selected>
                    {TABS.iter().map(|config| view! {
                        <Tab value=config.level.key()>{tab_label(config.level)}</Tab>
                    }).collect_view()}
                </TabList>
                {TABS.into_iter().map(|config| {
                    let key = config.level.key();
                    view! {
                        <div
                            class="tab-content"
                            style:display=move || if selected.get() == key { "block" } else { "none" }
                        >
                            <HierarchyTab config=config />
                        </div>
                    }
                }).collect_view()}
            </section>
        </div>
    }
}
