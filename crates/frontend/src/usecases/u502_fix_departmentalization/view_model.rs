use contracts::usecases::u502_fix_departmentalization::{
    DivergencePhase, DivergenceReport, ScanOutcome,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::notifications::NotificationService;

#[derive(Clone, Copy)]
pub struct DivergenceViewModel {
    pub report: RwSignal<DivergenceReport>,
    pub phase: RwSignal<DivergencePhase>,
    /// At least one scan finished
    pub scanned: RwSignal<bool>,
    notifications: NotificationService,
}

impl DivergenceViewModel {
    pub fn new(notifications: NotificationService) -> Self {
        Self {
            report: RwSignal::new(DivergenceReport::default()),
            phase: RwSignal::new(DivergencePhase::Idle),
            scanned: RwSignal::new(false),
            notifications,
        }
    }

    pub fn scan_command(&self) {
        if self.phase.get_untracked() != DivergencePhase::Idle {
            return;
        }
        self.phase.set(DivergencePhase::Scanning);
        let this = *self;
        spawn_local(async move {
            this.run_scan().await;
            this.phase.set(DivergencePhase::Idle);
        });
    }

    async fn run_scan(&self) {
        match api::scan().await {
            Ok(report) => {
                let outcome = ScanOutcome::from_report(&report);
                match outcome {
                    ScanOutcome::Clean => self.notifications.success(outcome.title(), outcome.message()),
                    ScanOutcome::Divergent(_) => {
                        self.notifications.warning(outcome.title(), outcome.message())
                    }
                }
                self.report.set(report);
                self.scanned.set(true);
            }
            Err(e) => self.notifications.error(
                "Erro",
                format!("Erro ao verificar divergências: {}", e.user_message()),
            ),
        }
    }

    /// Send the whole list back, then scan again
    pub fn correct_command(&self) {
        if self.phase.get_untracked() != DivergencePhase::Idle {
            return;
        }
        let Some(payload) = self.report.with_untracked(|r| r.correction_payload().map(<[_]>::to_vec))
        else {
            return;
        };
        self.phase.set(DivergencePhase::Correcting);
        let this = *self;
        spawn_local(async move {
            match api::apply_corrections(&payload).await {
                Ok(()) => {
                    this.notifications.success(
                        "Sucesso",
                        format!("{} produtos foram atualizados", payload.len()),
                    );
                    this.phase.set(DivergencePhase::Scanning);
                    this.run_scan().await;
                }
                Err(e) => this.notifications.error(
                    "Erro",
                    format!("Erro ao corrigir divergências: {}", e.user_message()),
                ),
            }
            this.phase.set(DivergencePhase::Idle);
        });
    }
}
