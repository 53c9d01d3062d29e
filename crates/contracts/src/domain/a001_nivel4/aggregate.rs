use serde::{Deserialize, Serialize};

use crate::domain::common::{HierarchyEntity, HierarchyForm, HierarchyRecord};

/// Nível 4, the root of the departmentalization tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nivel4 {
    #[serde(rename = "CODIGO")]
    pub code: i64,
    #[serde(rename = "DESCRICAO")]
    pub description: String,
}

/// Create-or-update body for `/api/depnv4`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nivel4Payload {
    #[serde(rename = "codigo")]
    pub code: i64,
    #[serde(rename = "descricao")]
    pub description: String,
}

impl From<&HierarchyForm> for Nivel4Payload {
    fn from(form: &HierarchyForm) -> Self {
        Self {
            code: form.code,
            description: form.text.clone(),
        }
    }
}

impl HierarchyEntity for Nivel4 {
    type Payload = Nivel4Payload;

    fn into_record(self) -> HierarchyRecord {
        HierarchyRecord {
            code: self.code,
            text: self.description,
            parent_code: None,
        }
    }
}
