use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_fix_departmentalization::FixDepartmentalization;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Spinner;

use super::view_model::DivergenceViewModel;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::database::RequireActiveDatabase;

#[component]
pub fn FixDepartmentalizationPage() -> impl IntoView {
    view! {
        <RequireActiveDatabase>
            <DivergenceScan />
        </RequireActiveDatabase>
    }
}

#[component]
fn DivergenceScan() -> impl IntoView {
    let vm = DivergenceViewModel::new(use_notifications());
    let phase = vm.phase;
    let has_rows = move || vm.report.with(|r| !r.divergences.is_empty());
    let total = move || vm.report.with(|r| r.total);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <A href="/" attr:class="button button--secondary button--small">
                        {icon("arrow-left")}
                        "Voltar"
                    </A>
                    <h1 class="header__title">{FixDepartmentalization::display_name()}</h1>
                </div>
            </div>

            <section class="card">
                <div class="card__header">
                    <h2 class="card__title">"Verificação de Divergências"</h2>
                    <div class="card__actions">
                        <Button
                            variant="secondary"
                            disabled=Signal::derive(move || phase.get().is_scanning() || phase.get().is_correcting())
                            on_click=Callback::new(move |_| vm.scan_command())
                        >
                            <Show when=move || phase.get().is_scanning() fallback=|| icon("search")>
                                <Spinner />
                            </Show>
                            {move || if phase.get().is_scanning() { "Verificando..." } else { "Verificar Divergências" }}
                        </Button>
                        <Show when=has_rows>
                            <Button
                                disabled=Signal::derive(move || phase.get().is_scanning() || phase.get().is_correcting())
                                on_click=Callback::new(move |_| vm.correct_command())
                            >
                                <Show when=move || phase.get().is_correcting() fallback=|| icon("refresh")>
                                    <Spinner />
                                </Show>
                                {move || if phase.get().is_correcting() { "Corrigindo..." } else { "Corrigir Divergências" }}
                            </Button>
                        </Show>
                    </div>
                </div>

                <Show when=move || { total() > 0 }>
                    <div class="divergence__summary">
                        <Badge variant="error">
                            {icon("alert-triangle")}
                            {move || format!("{} divergências encontradas", total())}
                        </Badge>
                    </div>
                </Show>

                {move || {
                    if has_rows() {
                        view! { <DivergenceTable vm=vm /> }.into_any()
                    } else if phase.get().is_scanning() {
                        view! { <></> }.into_any()
                    } else if vm.scanned.get() && total() == 0 {
                        view! {
                            <div class="empty-state">
                                {icon("alert-triangle")}
                                <p>"Nenhuma divergência encontrada"</p>
                            </div>
                        }.into_any()
                    } else if !vm.scanned.get() {
                        view! {
                            <div class="empty-state">
                                <p>"Clique em \"Verificar Divergências\" para começar"</p>
                            </div>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                <Show when=move || vm.report.with(|r| r.has_unlisted_conflicts())>
                    <div class="warning-box">
                        <span class="warning-box__icon">{icon("alert-triangle")}</span>
                        <span class="warning-box__text">
                            "Produtos com possíveis divergências de códigos de barras e conflito nos SUBGRUPOS verifique no banco"
                        </span>
                    </div>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn DivergenceTable(vm: DivergenceViewModel) -> impl IntoView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Código Barras"</th>
                        <th class="table__header-cell">"Descrição DBF"</th>
                        <th class="table__header-cell">"Descrição SQL"</th>
                        <th class="table__header-cell">"Cód. Pro DBF"</th>
                        <th class="table__header-cell">"Cód. Pro SQL"</th>
                        <th class="table__header-cell">"GSS DBF"</th>
                        <th class="table__header-cell">"GSS SQL"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || vm.report.with(|r| r.divergences.clone()).into_iter().map(|d| view! {
                        <tr class="table__row">
                            <td class="table__cell table__cell--mono">{d.barcode}</td>
                            <td class="table__cell table__cell--truncate" title=d.file_description.clone()>
                                {d.file_description.trim().to_string()}
                            </td>
                            <td class="table__cell table__cell--truncate" title=d.db_description.clone()>
                                {d.db_description.clone()}
                            </td>
                            <td class="table__cell"><Badge>{d.file_code}</Badge></td>
                            <td class="table__cell"><Badge>{d.db_code}</Badge></td>
                            <td class="table__cell"><Badge variant="warning">{d.file_subgrupo_code}</Badge></td>
                            <td class="table__cell"><Badge variant="primary">{d.db_subgrupo_code}</Badge></td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
