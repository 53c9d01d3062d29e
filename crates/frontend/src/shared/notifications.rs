//! Transient notifications (toasts) shown in the top-right corner.

use contracts::shared::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

/// How long a notification stays on screen.
const DISMISS_AFTER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Service for pushing notifications from any component
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) {
        let id = Uuid::new_v4();
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title: title.into(),
                message: message.into(),
            })
        });

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Success, title, message);
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Warning, title, message);
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Error, title, message);
    }

    /// Error notification with the service's message as body.
    pub fn api_error(&self, title: impl Into<String>, err: &ApiError) {
        self.push(NotificationKind::Error, title, err.user_message());
    }

    pub fn dismiss(&self, id: Uuid) {
        // the item may already be gone if it was closed by hand
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the notification stack. Mounted once in the app shell.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toaster">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <div class="toast__body">
                                <strong class="toast__title">{n.title}</strong>
                                <span class="toast__message">{n.message}</span>
                            </div>
                            <button
                                class="toast__close"
                                title="Fechar"
                                on:click=move |_| service.dismiss(id)
                            >
                                {crate::shared::icons::icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
