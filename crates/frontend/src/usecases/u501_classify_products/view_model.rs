use contracts::domain::a004_subgrupo::aggregate::Subgrupo;
use contracts::usecases::u501_classify_products::{
    ExitDecision, ReviewPhase, ReviewSession, SubgrupoPickerState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ReviewWorkflowConfig;
use crate::domain::a004_subgrupo::api::fetch_subgrupos;
use crate::shared::notifications::NotificationService;

/// ViewModel of a classification review page.
///
/// Async continuations only write through `update`/`set`, so a load that
/// finishes after the page was left does not touch disposed signals.
#[derive(Clone, Copy)]
pub struct ReviewViewModel {
    pub config: ReviewWorkflowConfig,
    pub session: RwSignal<ReviewSession>,
    pub phase: RwSignal<ReviewPhase>,
    pub subgrupos: RwSignal<Vec<Subgrupo>>,
    pub picker: RwSignal<SubgrupoPickerState>,
    /// Product whose subgroup is being picked; the picker is open while set
    pub picker_target: RwSignal<Option<i64>>,
    loaded: StoredValue<bool>,
    notifications: NotificationService,
}

impl ReviewViewModel {
    pub fn new(config: ReviewWorkflowConfig, notifications: NotificationService) -> Self {
        Self {
            config,
            session: RwSignal::new(ReviewSession::new()),
            phase: RwSignal::new(ReviewPhase::Idle),
            subgrupos: RwSignal::new(Vec::new()),
            picker: RwSignal::new(SubgrupoPickerState::default()),
            picker_target: RwSignal::new(None),
            loaded: StoredValue::new(false),
            notifications,
        }
    }

    pub fn has_rows(&self) -> bool {
        self.session.with(|s| !s.is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.phase.get().can_submit(self.has_rows())
    }

    pub fn can_edit(&self) -> bool {
        self.phase.get().can_edit()
    }

    /// First load of products and subgroups; runs once per page instance.
    pub fn load_once(&self) {
        if self.loaded.get_value() {
            return;
        }
        self.loaded.set_value(true);
        self.load();
        self.load_subgrupos();
    }

    pub fn load(&self) {
        let this = *self;
        let load = self.config.load;
        self.phase.set(ReviewPhase::Loading);
        spawn_local(async move {
            match load().await {
                Ok(products) => {
                    log::info!("Loaded {} pending products", products.len());
                    this.session.update(|s| s.replace(products));
                }
                Err(e) => this.notifications.api_error("Erro de conexão", &e),
            }
            this.phase.update(|p| *p = p.load_finished());
        });
    }

    fn load_subgrupos(&self) {
        let this = *self;
        spawn_local(async move {
            match fetch_subgrupos().await {
                Ok(list) => this.subgrupos.set(list),
                Err(e) => this.notifications.api_error("Erro ao carregar opções GSS", &e),
            }
        });
    }

    pub fn set_page(&self, page: usize) {
        self.session.update(|s| s.set_page(page));
    }

    pub fn set_page_size(&self, page_size: usize) {
        self.session.update(|s| s.set_page_size(page_size));
    }

    pub fn remove(&self, code: i64) {
        if !self.phase.get_untracked().can_edit() {
            return;
        }
        self.session.update(|s| {
            s.remove(code);
        });
    }

    pub fn commit_description(&self, code: i64, raw: &str) {
        if !self.phase.get_untracked().can_edit() {
            return;
        }
        self.session.update(|s| {
            s.set_description(code, raw);
        });
    }

    // ---- subgroup picker ----

    pub fn open_picker(&self, code: i64) {
        if !self.phase.get_untracked().can_edit() {
            return;
        }
        self.picker.update(|p| p.reset());
        self.picker_target.set(Some(code));
    }

    pub fn close_picker(&self) {
        self.picker_target.set(None);
        self.picker.update(|p| p.reset());
    }

    pub fn set_picker_query(&self, query: String) {
        self.picker.update(|p| p.set_query(query));
    }

    pub fn select_subgrupo(&self, subgrupo: &Subgrupo) {
        if let Some(code) = self.picker_target.get_untracked() {
            self.session.update(|s| {
                s.assign_subgrupo(code, subgrupo);
            });
        }
        self.close_picker();
    }

    // ---- submissions ----

    /// Send the rows of the current grid page
    pub fn submit_visible(&self) {
        let has_rows = self.session.with_untracked(|s| !s.is_empty());
        if !self.phase.get_untracked().can_submit(has_rows) {
            return;
        }
        let entries = self.session.with_untracked(|s| s.visible_submission());
        let codes: Vec<i64> = entries.iter().map(|e| e.code).collect();
        let submit = self.config.submit;
        let this = *self;
        self.phase.set(ReviewPhase::Submitting);
        spawn_local(async move {
            match submit(entries).await {
                Ok(response) => {
                    this.session
                        .update(|s| s.apply_page_submitted(&codes, response.total_cadastrados));
                    this.notifications.success(
                        "Sucesso",
                        format!("Foram processados {} produtos.", response.total_cadastrados),
                    );
                }
                Err(e) => this.notifications.error(
                    "Erro",
                    format!("Erro ao processar produtos: {}", e.user_message()),
                ),
            }
            this.phase.set(ReviewPhase::Idle);
        });
    }

    pub fn request_submit_all(&self) {
        let has_rows = self.session.with_untracked(|s| !s.is_empty());
        self.phase.update(|p| *p = p.request_submit_all(has_rows));
    }

    pub fn cancel_submit_all(&self) {
        self.phase.update(|p| *p = p.cancel_submit_all());
    }

    /// Send every remaining row, then reload the queue
    pub fn confirm_submit_all(&self) {
        if self.phase.get_untracked() != ReviewPhase::ConfirmingSubmitAll {
            return;
        }
        let entries = self.session.with_untracked(|s| s.full_submission());
        let submit = self.config.submit;
        let this = *self;
        self.phase.set(ReviewPhase::Submitting);
        spawn_local(async move {
            match submit(entries).await {
                Ok(response) => {
                    this.notifications.success(
                        "Sucesso",
                        format!("Foram processados {} produtos.", response.total_cadastrados),
                    );
                    this.session.update(|s| s.reset_processed());
                    // no reload once the page is gone: loading bills the classifier
                    if this.phase.try_get_untracked().is_some() {
                        this.load();
                    }
                }
                Err(e) => {
                    this.notifications.error(
                        "Erro",
                        format!("Erro ao processar produtos: {}", e.user_message()),
                    );
                    this.phase.set(ReviewPhase::Idle);
                }
            }
        });
    }

    // ---- leaving the page ----

    /// "Voltar": either leave now or ask first while a load is running
    pub fn request_exit(&self) -> ExitDecision {
        let decision = self.phase.get_untracked().exit_decision();
        self.phase.update(|p| *p = p.request_exit());
        decision
    }

    pub fn cancel_exit(&self) {
        self.phase.update(|p| *p = p.cancel_exit());
    }
}
