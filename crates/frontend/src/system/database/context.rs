use contracts::shared::ApiError;
use contracts::system::database::ActiveDatabase;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::notifications::use_notifications;

/// Process-wide active database, provided once at the app root
#[derive(Clone, Copy)]
pub struct ActiveDatabaseContext {
    state: RwSignal<ActiveDatabase>,
}

impl ActiveDatabaseContext {
    pub fn state(&self) -> ActiveDatabase {
        self.state.get()
    }

    pub fn name(&self) -> Option<String> {
        self.state.with(|s| s.name().map(str::to_string))
    }

    /// Select `name` on the service, then publish it. This is the only path
    /// that changes the active database after startup.
    pub async fn select_database(&self, name: String) -> Result<(), ApiError> {
        api::select_database(&name).await?;
        log::info!("Active database set to {}", name);
        self.state.set(ActiveDatabase::Selected(name));
        Ok(())
    }
}

/// Looks up the active database once on mount
#[component]
pub fn DatabaseProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(ActiveDatabase::Checking);
    let notifications = use_notifications();

    spawn_local(async move {
        let result = api::fetch_active_database().await;
        if let Err(e) = &result {
            log::error!("Active database lookup failed: {}", e);
            notifications.api_error("Erro ao verificar banco ativo", e);
        }
        state.set(ActiveDatabase::from_lookup(result));
    });

    provide_context(ActiveDatabaseContext { state });

    children()
}

/// Hook to access the active database
pub fn use_active_database() -> ActiveDatabaseContext {
    use_context::<ActiveDatabaseContext>().expect("DatabaseProvider not found in component tree")
}
