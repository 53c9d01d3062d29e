/// Workflow phase of a classification review page.
///
/// One value replaces the separate loading / processing / dialog flags so
/// that, for example, a submit cannot start while a load is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewPhase {
    #[default]
    Idle,
    Loading,
    Submitting,
    /// "Submit all remaining" is waiting for the operator's confirmation.
    ConfirmingSubmitAll,
    /// The operator asked to leave while a billed load is still running.
    ConfirmingExit,
}

/// What the "Voltar" button should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Navigate,
    AskConfirmation,
}

impl ReviewPhase {
    /// A load is outstanding (also while the exit dialog is shown over it).
    pub fn is_loading(self) -> bool {
        matches!(self, ReviewPhase::Loading | ReviewPhase::ConfirmingExit)
    }

    pub fn is_submitting(self) -> bool {
        self == ReviewPhase::Submitting
    }

    /// Submit buttons are enabled only when nothing else is happening.
    pub fn can_submit(self, has_rows: bool) -> bool {
        self == ReviewPhase::Idle && has_rows
    }

    /// Row edits (picker, description, remove) are blocked during a submit.
    pub fn can_edit(self) -> bool {
        !self.is_submitting()
    }

    pub fn exit_decision(self) -> ExitDecision {
        if self.is_loading() {
            ExitDecision::AskConfirmation
        } else {
            ExitDecision::Navigate
        }
    }

    /// Phase after the operator presses "Voltar".
    pub fn request_exit(self) -> ReviewPhase {
        match self.exit_decision() {
            ExitDecision::AskConfirmation => ReviewPhase::ConfirmingExit,
            ExitDecision::Navigate => self,
        }
    }

    /// "Continuar carregando" returns to the running load.
    pub fn cancel_exit(self) -> ReviewPhase {
        match self {
            ReviewPhase::ConfirmingExit => ReviewPhase::Loading,
            other => other,
        }
    }

    /// Phase after a load finished, successfully or not. A pending exit
    /// confirmation is dropped since leaving is no longer billed.
    pub fn load_finished(self) -> ReviewPhase {
        match self {
            ReviewPhase::Loading | ReviewPhase::ConfirmingExit => ReviewPhase::Idle,
            other => other,
        }
    }

    pub fn request_submit_all(self, has_rows: bool) -> ReviewPhase {
        if self.can_submit(has_rows) {
            ReviewPhase::ConfirmingSubmitAll
        } else {
            self
        }
    }

    pub fn cancel_submit_all(self) -> ReviewPhase {
        match self {
            ReviewPhase::ConfirmingSubmitAll => ReviewPhase::Idle,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_only_confirms_while_loading() {
        assert_eq!(ReviewPhase::Idle.exit_decision(), ExitDecision::Navigate);
        assert_eq!(ReviewPhase::Submitting.exit_decision(), ExitDecision::Navigate);
        assert_eq!(ReviewPhase::Loading.exit_decision(), ExitDecision::AskConfirmation);
        assert_eq!(ReviewPhase::Loading.request_exit(), ReviewPhase::ConfirmingExit);
    }

    #[test]
    fn test_cancel_exit_resumes_loading() {
        let phase = ReviewPhase::Loading.request_exit().cancel_exit();
        assert_eq!(phase, ReviewPhase::Loading);
        assert!(phase.is_loading());
    }

    #[test]
    fn test_load_finishing_closes_exit_dialog() {
        assert_eq!(ReviewPhase::ConfirmingExit.load_finished(), ReviewPhase::Idle);
        assert_eq!(ReviewPhase::Loading.load_finished(), ReviewPhase::Idle);
        assert_eq!(ReviewPhase::Submitting.load_finished(), ReviewPhase::Submitting);
    }

    #[test]
    fn test_submit_gating() {
        assert!(ReviewPhase::Idle.can_submit(true));
        assert!(!ReviewPhase::Idle.can_submit(false));
        assert!(!ReviewPhase::Loading.can_submit(true));
        assert!(!ReviewPhase::Submitting.can_submit(true));
        assert!(!ReviewPhase::Submitting.can_edit());
    }

    #[test]
    fn test_submit_all_confirmation() {
        assert_eq!(
            ReviewPhase::Idle.request_submit_all(true),
            ReviewPhase::ConfirmingSubmitAll
        );
        assert_eq!(ReviewPhase::Idle.request_submit_all(false), ReviewPhase::Idle);
        assert_eq!(
            ReviewPhase::ConfirmingSubmitAll.cancel_submit_all(),
            ReviewPhase::Idle
        );
    }
}
