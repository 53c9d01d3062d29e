use contracts::system::legacy_files::is_dbf_file_name;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::shared::browser::{confirm, selected_file};
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::database::use_active_database;
use crate::system::legacy_files::api as files_api;
use crate::system::database::api as db_api;

/// Database selection and DBF file management
#[component]
pub fn SettingsPage() -> impl IntoView {
    let notifications = use_notifications();
    let active_db = use_active_database();

    let databases = RwSignal::new(Vec::<String>::new());
    let files = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);
    let selected = RwSignal::new_local(None::<File>);
    let new_file_name = RwSignal::new(String::new());
    let file_input = NodeRef::<html::Input>::new();

    let load = move || {
        spawn_local(async move {
            match db_api::fetch_databases().await {
                Ok(list) => databases.set(list),
                Err(e) => notifications.api_error("Falha ao carregar bancos", &e),
            }
            match files_api::fetch_files().await {
                Ok(list) => files.set(list),
                Err(e) => notifications.api_error("Falha ao carregar arquivos DBF", &e),
            }
        });
    };

    let use_database = move |name: String| {
        busy.set(true);
        spawn_local(async move {
            match active_db.select_database(name.clone()).await {
                Ok(()) => notifications.success(format!("Banco {} selecionado", name), ""),
                Err(e) => notifications.api_error("Erro", &e),
            }
            busy.set(false);
        });
    };

    let remove_file = move |name: String| {
        if !confirm(&format!("Remover o arquivo {}?", name)) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match files_api::remove_file(&name).await {
                Ok(()) => {
                    notifications.success("Arquivo removido", name);
                    load();
                }
                Err(e) => notifications.api_error("Erro", &e),
            }
            busy.set(false);
        });
    };

    let upload = move || {
        let Some(file) = selected.get_untracked() else {
            return;
        };
        if !is_dbf_file_name(&file.name()) {
            notifications.warning("Arquivo inválido", "Selecione um arquivo .dbf");
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match files_api::upload_file(&file).await {
                Ok(()) => {
                    notifications.success("Arquivo enviado com sucesso", file.name());
                    selected.set(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    load();
                }
                Err(e) => notifications.api_error("Erro", &e),
            }
            busy.set(false);
        });
    };

    let add_by_name = move || {
        let name = new_file_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            match files_api::add_file(&name).await {
                Ok(()) => {
                    notifications.success("Arquivo adicionado", name);
                    new_file_name.set(String::new());
                    load();
                }
                Err(e) => notifications.api_error("Erro", &e),
            }
            busy.set(false);
        });
    };

    load();

    view! {
        <div class="page page--narrow">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Configurações"</h1>
                </div>
                <div class="header__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| load())>
                        {icon("refresh")}
                        "Atualizar"
                    </Button>
                </div>
            </div>

            <section class="card">
                <h2 class="card__title">{icon("database")} "Bancos de Dados"</h2>
                <ul class="settings-list">
                    <For
                        each=move || databases.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let is_active = {
                                let name = name.clone();
                                move || active_db.state().is_selected(&name)
                            };
                            let row_active = is_active.clone();
                            let name_for_click = name.clone();
                            view! {
                                <li class="settings-list__item" class:settings-list__item--active=row_active>
                                    <span class="settings-list__label">{icon("database")} {name.clone()}</span>
                                    {move || if is_active() {
                                        view! { <Badge variant="success">{icon("check")} "Em uso"</Badge> }.into_any()
                                    } else {
                                        let name = name_for_click.clone();
                                        view! {
                                            <Button
                                                variant="secondary"
                                                size="sm"
                                                disabled=Signal::derive(move || busy.get())
                                                on_click=Callback::new(move |_| use_database(name.clone()))
                                            >
                                                "Usar"
                                            </Button>
                                        }.into_any()
                                    }}
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            <section class="card">
                <h2 class="card__title">{icon("file")} "Arquivos DBF"</h2>
                <ul class="settings-list">
                    <For
                        each=move || files.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let name_for_click = name.clone();
                            view! {
                                <li class="settings-list__item">
                                    <span class="settings-list__label">{icon("file")} {name}</span>
                                    <Button
                                        variant="danger"
                                        size="sm"
                                        title="Remover"
                                        disabled=Signal::derive(move || busy.get())
                                        on_click=Callback::new(move |_| remove_file(name_for_click.clone()))
                                    >
                                        {icon("delete")}
                                    </Button>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=move || files.with(|f| f.is_empty())>
                    <p class="empty-state">"Nenhum arquivo DBF cadastrado"</p>
                </Show>

                <div class="form-row">
                    <input
                        type="file"
                        accept=".dbf"
                        node_ref=file_input
                        on:change=move |ev| selected.set(selected_file(&ev))
                    />
                    <Button
                        disabled=Signal::derive(move || busy.get() || selected.with(|f| f.is_none()))
                        on_click=Callback::new(move |_| upload())
                    >
                        {icon("upload")}
                        "Enviar"
                    </Button>
                </div>

                <div class="form-row">
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Nome do arquivo já presente no servidor"
                        prop:value=move || new_file_name.get()
                        on:input=move |ev| new_file_name.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                add_by_name();
                            }
                        }
                    />
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(move || busy.get() || new_file_name.with(|n| n.trim().is_empty()))
                        on_click=Callback::new(move |_| add_by_name())
                    >
                        {icon("plus")}
                        "Adicionar"
                    </Button>
                </div>
            </section>
        </div>
    }
}
