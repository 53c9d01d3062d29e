use contracts::domain::common::{describe_parent, HierarchyForm, HierarchyRecord};
use contracts::shared::filter_by_query;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, HierarchyTabConfig};
use crate::shared::notifications::NotificationService;

/// ViewModel of one hierarchy tab
#[derive(Clone, Copy)]
pub struct HierarchyTabViewModel {
    pub config: HierarchyTabConfig,
    pub records: RwSignal<Vec<HierarchyRecord>>,
    pub parents: RwSignal<Vec<HierarchyRecord>>,
    pub loading: RwSignal<bool>,
    pub query: RwSignal<String>,

    // add/edit dialog
    pub dialog_open: RwSignal<bool>,
    pub editing: RwSignal<bool>,
    pub code_input: RwSignal<String>,
    pub text_input: RwSignal<String>,
    pub parent_input: RwSignal<Option<i64>>,
    pub dialog_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,

    loaded: StoredValue<bool>,
    notifications: NotificationService,
}

impl HierarchyTabViewModel {
    pub fn new(config: HierarchyTabConfig, notifications: NotificationService) -> Self {
        Self {
            config,
            records: RwSignal::new(Vec::new()),
            parents: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            query: RwSignal::new(String::new()),
            dialog_open: RwSignal::new(false),
            editing: RwSignal::new(false),
            code_input: RwSignal::new(String::new()),
            text_input: RwSignal::new(String::new()),
            parent_input: RwSignal::new(None),
            dialog_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loaded: StoredValue::new(false),
            notifications,
        }
    }

    /// Initial load of the level and its parent level; later calls are no-ops.
    pub fn load_once(&self) {
        if self.loaded.get_value() {
            return;
        }
        self.loaded.set_value(true);
        self.reload();
        self.load_parents();
    }

    pub fn reload(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_records(this.config.level).await {
                Ok(list) => this.records.set(list),
                Err(e) => {
                    log::error!("Failed to load {}: {}", this.config.plural_lower, e);
                    this.notifications.error(
                        "Erro",
                        format!("Erro ao carregar {}: {}", this.config.plural_lower, e.user_message()),
                    );
                }
            }
            this.loading.set(false);
        });
    }

    fn load_parents(&self) {
        let (Some(parent_level), Some(parent)) = (self.config.level.parent(), self.config.parent) else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::fetch_records(parent_level).await {
                Ok(list) => this.parents.set(list),
                Err(e) => this.notifications.error(
                    "Erro",
                    format!("Erro ao carregar {}: {}", parent.plural_lower, e.user_message()),
                ),
            }
        });
    }

    /// Records matching the search box
    pub fn filtered(&self) -> Vec<HierarchyRecord> {
        let query = self.query.get();
        self.records.with(|records| filter_by_query(records, &query))
    }

    pub fn parent_text(&self, code: i64) -> String {
        self.parents.with(|parents| describe_parent(parents, code))
    }

    pub fn open_new(&self) {
        let blank = HierarchyForm::blank(self.config.level);
        self.editing.set(false);
        self.fill(&blank);
        self.dialog_open.set(true);
    }

    pub fn open_edit(&self, record: &HierarchyRecord) {
        self.editing.set(true);
        self.fill(&HierarchyForm::from_record(record));
        self.dialog_open.set(true);
    }

    fn fill(&self, form: &HierarchyForm) {
        self.code_input.set(form.code.to_string());
        self.text_input.set(form.text.clone());
        self.parent_input.set(form.parent_code);
        self.dialog_error.set(None);
    }

    fn clear(&self) {
        self.editing.set(false);
        self.fill(&HierarchyForm::blank(self.config.level));
    }

    pub fn form(&self) -> HierarchyForm {
        HierarchyForm {
            code: HierarchyForm::parse_code(&self.code_input.get_untracked()),
            text: self.text_input.get_untracked(),
            parent_code: self.parent_input.get_untracked(),
        }
    }

    /// Create-or-update with the dialog contents
    pub fn save_command(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let this = *self;
        let form = self.form();
        let editing = self.editing.get_untracked();
        self.saving.set(true);
        spawn_local(async move {
            match api::save_record(this.config.level, &form).await {
                Ok(()) => {
                    this.notifications
                        .success("Sucesso", this.config.saved_message(editing));
                    this.dialog_open.set(false);
                    this.clear();
                    this.reload();
                }
                Err(e) => {
                    let message = e.user_message();
                    this.notifications.error(
                        "Erro",
                        format!("Erro ao salvar {}: {}", this.config.entity_name.to_lowercase(), message),
                    );
                    this.dialog_error.set(Some(message));
                }
            }
            this.saving.set(false);
        });
    }
}
