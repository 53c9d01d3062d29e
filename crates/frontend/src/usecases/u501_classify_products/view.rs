use contracts::usecases::u501_classify_products::{
    normalize_description, ExitDecision, PendingProduct, ReviewPhase, GRID_PAGE_SIZE_OPTIONS,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::picker::SubgrupoPicker;
use super::view_model::ReviewViewModel;
use super::ReviewWorkflowConfig;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::notifications::use_notifications;

/// Review grid for IA-classified products, shared by the registration and
/// correction screens
#[component]
pub fn ClassificationReviewPage(config: ReviewWorkflowConfig) -> impl IntoView {
    let vm = ReviewViewModel::new(config, use_notifications());
    vm.load_once();

    let navigate = use_navigate();
    let go_home = StoredValue::new_local(move || navigate("/", Default::default()));

    let on_back = move |_| {
        if vm.request_exit() == ExitDecision::Navigate {
            go_home.with_value(|go| go());
        }
    };

    let phase = vm.phase;
    let remaining = move || vm.session.with(|s| s.remaining());

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <button class="button button--secondary button--small" on:click=on_back>
                        {icon("arrow-left")}
                        "Voltar"
                    </button>
                    <h1 class="header__title">{config.title}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--danger button--small"
                        disabled=move || !vm.can_submit()
                        on:click=move |_| vm.request_submit_all()
                    >
                        "Processar Todos"
                    </button>
                </div>
            </div>

            <section class="card">
                <div class="card__header">
                    <span class="review__counters">
                        {move || format!(
                            "Produtos ({}) | Processados: {}",
                            remaining(),
                            vm.session.with(|s| s.processed()),
                        )}
                    </span>
                    <button
                        class="button button--primary button--small"
                        disabled=move || !vm.can_submit()
                        on:click=move |_| vm.submit_visible()
                    >
                        {icon("check")}
                        {move || if phase.get().is_submitting() { "Processando tela..." } else { "Processar Tela" }}
                    </button>
                </div>

                {move || {
                    if phase.get().is_loading() {
                        view! { <div class="loading">"Carregando produtos..."</div> }.into_any()
                    } else if !vm.has_rows() {
                        view! {
                            <div class="empty-state">
                                {icon("alert-triangle")}
                                <p>"Nenhum produto encontrado"</p>
                            </div>
                        }.into_any()
                    } else {
                        view! { <ReviewGrid vm=vm /> }.into_any()
                    }
                }}
            </section>

            <SubgrupoPicker vm=vm />

            <ConfirmDialog
                open=Signal::derive(move || phase.get() == ReviewPhase::ConfirmingSubmitAll)
                title="Confirmar Processamento"
                message=Signal::derive(move || format!(
                    "Deseja realmente processar todos os {} produtos restantes?",
                    remaining(),
                ))
                confirm_label="Confirmar"
                cancel_label="Cancelar"
                on_confirm=Callback::new(move |_| vm.confirm_submit_all())
                on_cancel=Callback::new(move |_| vm.cancel_submit_all())
            />

            <ConfirmDialog
                open=Signal::derive(move || phase.get() == ReviewPhase::ConfirmingExit)
                title="Carregamento em andamento"
                message=Signal::derive(|| {
                    "Ainda estamos carregando os produtos com auxílio de IA, este processo consome tokens pagos. Tem certeza que deseja cancelar agora e sair?".to_string()
                })
                confirm_label="Sair mesmo assim"
                cancel_label="Continuar carregando"
                on_confirm=Callback::new(move |_| go_home.with_value(|go| go()))
                on_cancel=Callback::new(move |_| vm.cancel_exit())
            />
        </div>
    }
}

#[component]
fn ReviewGrid(vm: ReviewViewModel) -> impl IntoView {
    let page = Signal::derive(move || vm.session.with(|s| s.page()));
    let total_pages = Signal::derive(move || vm.session.with(|s| s.total_pages()));
    let total_count = Signal::derive(move || vm.session.with(|s| s.products().len()));
    let page_size = Signal::derive(move || vm.session.with(|s| s.page_size()));
    let locked = Signal::derive(move || !vm.can_edit());

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell table__header-cell--narrow"></th>
                        <th class="table__header-cell">"Código"</th>
                        <th class="table__header-cell">"Descrição"</th>
                        <th class="table__header-cell">"Cód. GSS"</th>
                        <th class="table__header-cell">"Descrição GSS (Sugestão IA)"</th>
                        <th class="table__header-cell table__header-cell--actions">"Ações"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || vm.session.with(|s| s.visible().to_vec())
                        .into_iter()
                        .map(|product| view! { <ReviewRow vm=vm product=product locked=locked /> })
                        .collect_view()}
                </tbody>
            </table>
        </div>
        <PaginationControls
            current_page=page
            total_pages=total_pages
            total_count=total_count
            page_size=page_size
            on_page_change=Callback::new(move |p| vm.set_page(p))
            on_page_size_change=Callback::new(move |size| vm.set_page_size(size))
            page_size_options=GRID_PAGE_SIZE_OPTIONS.to_vec()
        />
    }
}

#[component]
fn ReviewRow(vm: ReviewViewModel, product: PendingProduct, locked: Signal<bool>) -> impl IntoView {
    let code = product.code;
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(product.description.clone());
    let description = product.description.clone();

    let commit = move || {
        if editing.get_untracked() {
            editing.set(false);
            vm.commit_description(code, &draft.get_untracked());
        }
    };

    view! {
        <tr class="table__row">
            <td class="table__cell">
                <button
                    class="button button--ghost button--small button--remove"
                    title="Remover da lista"
                    disabled=move || locked.get()
                    on:click=move |_| vm.remove(code)
                >
                    {icon("x")}
                </button>
            </td>
            <td class="table__cell">{code}</td>
            <td class="table__cell">
                {move || if editing.get() {
                    view! {
                        <input
                            class="form__input form__input--inline"
                            autofocus=true
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(normalize_description(&event_target_value(&ev)))
                            on:blur=move |_| commit()
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    commit();
                                } else {
                                    ev.stop_propagation();
                                }
                            }
                        />
                    }.into_any()
                } else {
                    let description = description.clone();
                    view! {
                        <div class="review__description">
                            <span>{description}</span>
                            {vm.config.description_editing.then(|| view! {
                                <button
                                    class="button button--ghost button--small"
                                    title="Editar descrição"
                                    disabled=move || locked.get()
                                    on:click=move |_| editing.set(true)
                                >
                                    {icon("edit")}
                                </button>
                            })}
                        </div>
                    }.into_any()
                }}
            </td>
            <td class="table__cell">{product.suggested_subgrupo_code}</td>
            <td class="table__cell">{product.suggested_subgrupo_description}</td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--secondary button--small"
                    title="Escolher subgrupo"
                    disabled=move || locked.get()
                    on:click=move |_| vm.open_picker(code)
                >
                    {icon("search")}
                </button>
            </td>
        </tr>
    }
}
