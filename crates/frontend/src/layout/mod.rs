pub mod header;

use leptos::prelude::*;

use crate::shared::notifications::Toaster;
use header::Header;

/// Page frame shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, navigation)              |
/// |  Active database bar                     |
/// +------------------------------------------+
/// |  Routed page                             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Toaster />
        </div>
    }
}
