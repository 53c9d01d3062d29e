use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_classify_products::{FixScaleBarcodeProducts, RegisterProducts};
use contracts::usecases::u502_fix_departmentalization::FixDepartmentalization;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;
use crate::shared::icons;
use crate::system::database::ActiveDatabaseBar;

#[derive(Debug, Clone, Copy)]
struct NavItem {
    href: &'static str,
    title: &'static str,
    icon_name: &'static str,
}

fn nav_items() -> [NavItem; 6] {
    [
        NavItem { href: paths::HOME, title: "Início", icon_name: "home" },
        NavItem { href: RegisterProducts::route(), title: "Cadastro", icon_name: "package" },
        NavItem { href: FixScaleBarcodeProducts::route(), title: "Correção", icon_name: "barcode" },
        NavItem {
            href: FixDepartmentalization::route(),
            title: "Departamentalização",
            icon_name: "alert-triangle",
        },
        NavItem { href: paths::HIERARCHY_TABLES, title: "Tabelas", icon_name: "layers" },
        NavItem { href: paths::SETTINGS, title: "Configurações", icon_name: "settings" },
    ]
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Departamentalização"</span>
                <nav class="header__nav">
                    {nav_items().into_iter().map(|item| view! {
                        <A href=item.href attr:class="header__link">
                            {icons::icon(item.icon_name)}
                            <span>{item.title}</span>
                        </A>
                    }).collect_view()}
                </nav>
            </div>
            <ActiveDatabaseBar />
        </header>
    }
}
