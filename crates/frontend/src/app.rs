use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use crate::system::database::DatabaseProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The database lookup reports failures through notifications.
    provide_context(NotificationService::new());

    view! {
        <DatabaseProvider>
            <AppRoutes />
        </DatabaseProvider>
    }
}
