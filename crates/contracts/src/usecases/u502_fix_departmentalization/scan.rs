use super::dto::DivergenceReport;

/// Notification raised after a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Clean,
    Divergent(i64),
}

impl ScanOutcome {
    pub fn from_report(report: &DivergenceReport) -> Self {
        if report.total == 0 {
            ScanOutcome::Clean
        } else {
            ScanOutcome::Divergent(report.total)
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScanOutcome::Clean => "Sucesso",
            ScanOutcome::Divergent(_) => "Divergências encontradas",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ScanOutcome::Clean => "Nenhuma divergência encontrada!".to_string(),
            ScanOutcome::Divergent(total) => format!("{} produtos com divergências", total),
        }
    }
}

/// Phase of the divergence page; scan and correction never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivergencePhase {
    #[default]
    Idle,
    Scanning,
    Correcting,
}

impl DivergencePhase {
    pub fn is_scanning(self) -> bool {
        self == DivergencePhase::Scanning
    }

    pub fn is_correcting(self) -> bool {
        self == DivergencePhase::Correcting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u502_fix_departmentalization::dto::Divergence;
    use serde_json::json;

    fn divergence() -> Divergence {
        Divergence {
            file_code: 10,
            db_code: 10,
            file_subgrupo_code: 100,
            db_subgrupo_code: 200,
            file_description: "ARROZ 5KG   ".into(),
            db_description: "ARROZ 5KG".into(),
            barcode: "7890000000001".into(),
        }
    }

    #[test]
    fn test_outcome_from_total() {
        let clean = DivergenceReport::default();
        assert_eq!(ScanOutcome::from_report(&clean), ScanOutcome::Clean);
        assert_eq!(ScanOutcome::Clean.message(), "Nenhuma divergência encontrada!");

        let report = DivergenceReport { total: 3, divergences: vec![divergence()] };
        let outcome = ScanOutcome::from_report(&report);
        assert_eq!(outcome, ScanOutcome::Divergent(3));
        assert_eq!(outcome.message(), "3 produtos com divergências");
    }

    #[test]
    fn test_empty_list_has_no_correction_payload() {
        assert!(DivergenceReport::default().correction_payload().is_none());

        let report = DivergenceReport { total: 1, divergences: vec![divergence()] };
        assert_eq!(report.correction_payload().map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_unlisted_conflicts() {
        let report = DivergenceReport { total: 2, divergences: vec![] };
        assert!(report.has_unlisted_conflicts());
        assert!(!DivergenceReport::default().has_unlisted_conflicts());
    }

    #[test]
    fn test_report_wire_format() {
        let report: DivergenceReport = serde_json::from_value(json!({
            "total": 1,
            "divergencias": [{
                "codpro01": 10, "codpro01_sql": 10,
                "codgss01": 100, "codgss01_sql": 200,
                "descpro01": "ARROZ 5KG   ", "descpro01_sql": "ARROZ 5KG",
                "codbarra": "7890000000001"
            }]
        }))
        .unwrap();
        assert_eq!(report.divergences, vec![divergence()]);

        let sent = serde_json::to_value(report.correction_payload().unwrap()).unwrap();
        assert_eq!(sent[0]["codgss01_sql"], json!(200));
        assert_eq!(sent[0]["codbarra"], json!("7890000000001"));
    }
}
