use serde::{Deserialize, Serialize};

use crate::domain::common::{HierarchyEntity, HierarchyForm, HierarchyRecord, NEW_RECORD_CODE};

/// Departamento, child of a Nível 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departamento {
    #[serde(rename = "coddepto")]
    pub code: i64,
    #[serde(rename = "nomedepto")]
    pub name: String,
    #[serde(rename = "CODDEPNV4")]
    pub nivel4_code: i64,
}

/// Create-or-update body for `/api/tabdep`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartamentoPayload {
    #[serde(rename = "coddepto")]
    pub code: i64,
    #[serde(rename = "nomedepto")]
    pub name: String,
    #[serde(rename = "coddepto_nv4")]
    pub nivel4_code: i64,
}

impl From<&HierarchyForm> for DepartamentoPayload {
    fn from(form: &HierarchyForm) -> Self {
        Self {
            code: form.code,
            name: form.text.clone(),
            nivel4_code: form.parent_code.unwrap_or(NEW_RECORD_CODE),
        }
    }
}

impl HierarchyEntity for Departamento {
    type Payload = DepartamentoPayload;

    fn into_record(self) -> HierarchyRecord {
        HierarchyRecord {
            code: self.code,
            text: self.name,
            parent_code: Some(self.nivel4_code),
        }
    }
}
