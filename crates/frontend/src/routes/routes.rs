use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::common::DepartmentalizationTablesPage;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::settings::SettingsPage;
use crate::usecases::u501_classify_products::{FixScaleBarcodePage, RegisterProductsPage};
use crate::usecases::u502_fix_departmentalization::FixDepartmentalizationPage;

// Paths mirror `routes::paths` and `UseCaseMetadata::route()`; `path!` needs literals.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/tabelas-departamentalizacao") view=DepartmentalizationTablesPage />
                    <Route path=path!("/cadastro-produtos") view=RegisterProductsPage />
                    <Route path=path!("/corrigir-codigo-barras") view=FixScaleBarcodePage />
                    <Route path=path!("/corrigir-departamentalizacao") view=FixDepartmentalizationPage />
                    <Route path=path!("/configuracoes") view=SettingsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
