use serde::{Deserialize, Serialize};

/// A product whose legacy-file and database records disagree.
///
/// The list is sent back unchanged to apply the database values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divergence {
    #[serde(rename = "codpro01")]
    pub file_code: i64,
    #[serde(rename = "codpro01_sql")]
    pub db_code: i64,
    #[serde(rename = "codgss01")]
    pub file_subgrupo_code: i64,
    #[serde(rename = "codgss01_sql")]
    pub db_subgrupo_code: i64,
    #[serde(rename = "descpro01", default)]
    pub file_description: String,
    #[serde(rename = "descpro01_sql", default)]
    pub db_description: String,
    #[serde(rename = "codbarra", default)]
    pub barcode: String,
}

/// Response of the divergence scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergenceReport {
    #[serde(default)]
    pub total: i64,
    #[serde(rename = "divergencias", default)]
    pub divergences: Vec<Divergence>,
}

impl DivergenceReport {
    /// Body for the correction request; `None` when there is nothing to send.
    pub fn correction_payload(&self) -> Option<&[Divergence]> {
        if self.divergences.is_empty() {
            None
        } else {
            Some(&self.divergences)
        }
    }

    /// The service counted divergences it could not list (barcode and
    /// subgroup conflicts that must be checked directly in the database).
    pub fn has_unlisted_conflicts(&self) -> bool {
        self.total > 0 && self.divergences.is_empty()
    }
}
