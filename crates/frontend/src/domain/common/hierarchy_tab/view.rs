use contracts::domain::common::NEW_RECORD_CODE;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Dialog, DialogActions, DialogBody, DialogContent, DialogSurface,
    DialogTitle,
};

use super::view_model::HierarchyTabViewModel;
use super::HierarchyTabConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::notifications::use_notifications;

#[component]
pub fn HierarchyTab(config: HierarchyTabConfig) -> impl IntoView {
    let vm = HierarchyTabViewModel::new(config, use_notifications());
    vm.load_once();

    let has_parent = config.parent.is_some();
    let parent_header = config.parent.map(|p| p.header).unwrap_or_default();
    let parent_placeholder = config.parent.map(|p| p.placeholder).unwrap_or_default();

    view! {
        <div class="hierarchy-tab">
            <div class="hierarchy-tab__toolbar">
                <h3 class="hierarchy-tab__title">{config.title}</h3>
                <SearchInput
                    value=vm.query
                    on_change=Callback::new(move |q: String| vm.query.set(q))
                    immediate=true
                />
                <button class="button button--primary" on:click=move |_| vm.open_new()>
                    {icon("plus")}
                    {config.new_title()}
                </button>
            </div>

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <div class="loading">"Carregando..."</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Código"</th>
                                <th class="table__header-cell">{config.text_header}</th>
                                {has_parent.then(|| view! {
                                    <th class="table__header-cell">{parent_header}</th>
                                })}
                                <th class="table__header-cell table__header-cell--actions">"Ações"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let query = vm.query.get();
                                vm.filtered().into_iter().map(|record| {
                                    let parent_cell = record
                                        .parent_code
                                        .filter(|_| has_parent)
                                        .map(|code| view! { <td class="table__cell">{vm.parent_text(code)}</td> });
                                    let text = highlight_matches(&record.text, &query);
                                    let code = record.code;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{code}</td>
                                            <td class="table__cell">{text}</td>
                                            {parent_cell}
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Editar"
                                                    on:click=move |_| vm.open_edit(&record)
                                                >
                                                    {icon("edit")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
                <Show when=move || vm.records.with(|r| !r.is_empty()) && vm.filtered().is_empty()>
                    <p class="empty-state">"Nenhum registro encontrado para a busca"</p>
                </Show>
            </Show>

            <Dialog open=vm.dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || if vm.editing.get() { config.edit_title() } else { config.new_title() }}
                        </DialogTitle>
                        <DialogContent>
                            <div class="form">
                                <div class="form__group">
                                    <label class="form__label">
                                        {move || if vm.editing.get() { "Código" } else { "Código (0 para criar novo)" }}
                                    </label>
                                    <input
                                        class="form__input"
                                        type="number"
                                        readonly=move || vm.editing.get()
                                        prop:value=move || vm.code_input.get()
                                        on:input=move |ev| vm.code_input.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form__group">
                                    <label class="form__label">{config.text_label}</label>
                                    <input
                                        class="form__input"
                                        type="text"
                                        prop:value=move || vm.text_input.get()
                                        on:input=move |ev| vm.text_input.set(event_target_value(&ev))
                                    />
                                </div>
                                {has_parent.then(|| view! {
                                    <div class="form__group">
                                        <label class="form__label">{parent_header}</label>
                                        <select
                                            class="form__select"
                                            prop:value=move || vm.parent_input.get().unwrap_or(NEW_RECORD_CODE).to_string()
                                            on:change=move |ev| {
                                                let code = event_target_value(&ev).parse().unwrap_or(NEW_RECORD_CODE);
                                                vm.parent_input.set(Some(code));
                                            }
                                        >
                                            <option value=NEW_RECORD_CODE.to_string() disabled=true>{parent_placeholder}</option>
                                            {move || vm.parents.get().into_iter().map(|p| {
                                                let selected = vm.parent_input.get() == Some(p.code);
                                                view! {
                                                    <option value=p.code.to_string() selected=selected>
                                                        {format!("{} - {}", p.code, p.text)}
                                                    </option>
                                                }
                                            }).collect_view()}
                                        </select>
                                    </div>
                                })}
                                {move || vm.dialog_error.get().map(|e| view! {
                                    <div class="warning-box warning-box--error">
                                        <span class="warning-box__icon">{icon("alert-triangle")}</span>
                                        <span class="warning-box__text">{e}</span>
                                    </div>
                                })}
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.dialog_open.set(false)
                            >
                                "Cancelar"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=vm.saving
                                on_click=move |_| vm.save_command()
                            >
                                {move || if vm.saving.get() { "Salvando..." } else { "Salvar" }}
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
