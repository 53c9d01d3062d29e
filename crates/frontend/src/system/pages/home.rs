use contracts::system::connectivity::{
    ApiStatus, ProbeResult, PROBE_ENDPOINTS, STATUS_PROBE_PATH,
};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_classify_products::{FixScaleBarcodeProducts, RegisterProducts};
use contracts::usecases::u502_fix_departmentalization::FixDepartmentalization;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::routes::paths;
use crate::shared::api_utils::{api_base, probe};
use crate::shared::components::ui::{Badge, Button};
use crate::shared::icons::icon;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="home__intro">
                <h1 class="header__title">"Sistema de Departamentalização"</h1>
                <p class="home__subtitle">"Gerencie produtos e departamentos de forma eficiente"</p>
            </div>

            <div class="home__status">
                <section class="card">
                    <h2 class="card__title">"URL da API"</h2>
                    <code class="home__api-url">{api_base()}</code>
                    <p class="home__hint">"Definida em tempo de compilação pela variável API_URL."</p>
                </section>
                <section class="card">
                    <h2 class="card__title">"Status do Serviço"</h2>
                    <ApiStatusBadge />
                    <ConnectionTest />
                </section>
            </div>

            <div class="home__cards">
                <NavCard
                    href=RegisterProducts::route()
                    icon_name="package"
                    title=RegisterProducts::display_name()
                    description=RegisterProducts::description()
                />
                <NavCard
                    href=FixScaleBarcodeProducts::route()
                    icon_name="barcode"
                    title="Correção de Produtos"
                    description=FixScaleBarcodeProducts::description()
                />
                <NavCard
                    href=FixDepartmentalization::route()
                    icon_name="settings"
                    title=FixDepartmentalization::display_name()
                    description=FixDepartmentalization::description()
                />
                <NavCard
                    href=paths::HIERARCHY_TABLES
                    icon_name="layers"
                    title="Tabelas de Departamentalização"
                    description="Nível 4, Departamento, Grupo e Subgrupo"
                />
                <NavCard
                    href=paths::SETTINGS
                    icon_name="database"
                    title="Configurações"
                    description="Banco de dados ativo e arquivos DBF"
                />
            </div>
        </div>
    }
}

#[component]
fn NavCard(
    href: &'static str,
    icon_name: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class="nav-card">
            <div class="nav-card__title">
                {icon(icon_name)}
                <span>{title}</span>
            </div>
            <p class="nav-card__description">{description}</p>
        </A>
    }
}

/// Probes the service on mount and on demand
#[component]
fn ApiStatusBadge() -> impl IntoView {
    let status = RwSignal::new(ApiStatus::Checking);
    let checking = RwSignal::new(false);

    let check = move || {
        checking.set(true);
        status.set(ApiStatus::Checking);
        spawn_local(async move {
            let result = probe(STATUS_PROBE_PATH).await;
            status.set(ApiStatus::from_probe(&result));
            checking.set(false);
        });
    };

    check();

    view! {
        <div class="api-status">
            {move || {
                let current = status.get();
                view! { <Badge variant=current.variant()>{current.label()}</Badge> }
            }}
            <Button
                variant="ghost"
                size="sm"
                title="Verificar novamente"
                disabled=checking
                on_click=Callback::new(move |_| check())
            >
                {icon("refresh")}
            </Button>
        </div>
        <Show when=move || status.get() == ApiStatus::Offline>
            <p class="api-status__hint">"Verifique se o servidor está rodando e a URL está correta"</p>
        </Show>
    }
}

/// Probes each list endpoint in turn
#[component]
fn ConnectionTest() -> impl IntoView {
    let testing = RwSignal::new(false);
    let results = RwSignal::new([ProbeResult::NotTested; PROBE_ENDPOINTS.len()]);

    let run = move || {
        testing.set(true);
        spawn_local(async move {
            let mut fresh = [ProbeResult::NotTested; PROBE_ENDPOINTS.len()];
            for (slot, endpoint) in fresh.iter_mut().zip(PROBE_ENDPOINTS.iter()) {
                *slot = ProbeResult::from_probe(&probe(endpoint.path).await);
            }
            results.set(fresh);
            testing.set(false);
        });
    };

    view! {
        <div class="connection-test">
            <div class="connection-test__header">
                <span>"Teste de Endpoints"</span>
                <Button size="sm" disabled=testing on_click=Callback::new(move |_| run())>
                    {move || if testing.get() { "Testando..." } else { "Testar Endpoints" }}
                </Button>
            </div>
            <ul class="connection-test__list">
                {PROBE_ENDPOINTS.iter().enumerate().map(|(i, endpoint)| view! {
                    <li class="connection-test__item">
                        <span>{endpoint.name}</span>
                        {move || if testing.get() {
                            view! { <span class="connection-test__pending">"..."</span> }.into_any()
                        } else {
                            let result = results.get()[i];
                            view! { <Badge variant=result.variant()>{result.label()}</Badge> }.into_any()
                        }}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
