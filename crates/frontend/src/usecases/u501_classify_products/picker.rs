use leptos::prelude::*;

use super::view_model::ReviewViewModel;
use crate::shared::modal::Modal;

/// "Escolher Subgrupo" modal: search over all subgroups, pages of 20
#[component]
pub fn SubgrupoPicker(vm: ReviewViewModel) -> impl IntoView {
    // paging alone must not re-run the search
    let query = Memo::new(move |_| vm.picker.with(|p| p.query.clone()));
    let filtered = Memo::new(move |_| {
        query.track();
        vm.picker
            .with_untracked(|p| vm.subgrupos.with(|options| p.filtered(options)))
    });
    let filtered_len = move || filtered.with(|f| f.len());

    view! {
        <Modal
            open=Signal::derive(move || vm.picker_target.get().is_some())
            on_close=Callback::new(move |_| vm.close_picker())
            title="Escolher Subgrupo"
            class="modal-content--wide"
        >
            <input
                type="text"
                class="form__input"
                placeholder="Pesquisar subgrupo..."
                autofocus=true
                prop:value=move || vm.picker.with(|p| p.query.clone())
                on:input=move |ev| vm.set_picker_query(event_target_value(&ev))
            />
            <div class="picker__list">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Código"</th>
                            <th class="table__header-cell">"Descrição"</th>
                            <th class="table__header-cell">"Ação"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            vm.picker
                                .with(|p| filtered.with(|items| p.page_of(items).to_vec()))
                            .into_iter()
                            .map(|subgrupo| {
                                let code = subgrupo.code;
                                let description = subgrupo.description.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{code}</td>
                                        <td class="table__cell">{description}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--secondary button--small"
                                                on:click=move |_| vm.select_subgrupo(&subgrupo)
                                            >
                                                "Selecionar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
            <div class="picker__pagination">
                <button
                    class="button button--secondary button--small"
                    disabled=move || !vm.picker.with(|p| p.has_previous())
                    on:click=move |_| vm.picker.update(|p| p.previous())
                >
                    "Anterior"
                </button>
                <span>{move || vm.picker.with(|p| p.label(filtered_len()))}</span>
                <button
                    class="button button--secondary button--small"
                    disabled=move || !vm.picker.with(|p| p.has_next(filtered_len()))
                    on:click=move |_| {
                        let len = filtered_len();
                        vm.picker.update(|p| p.next(len));
                    }
                >
                    "Próxima"
                </button>
            </div>
        </Modal>
    }
}
