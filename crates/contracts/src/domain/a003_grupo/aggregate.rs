use serde::{Deserialize, Serialize};

use crate::domain::common::{HierarchyEntity, HierarchyForm, HierarchyRecord, NEW_RECORD_CODE};

/// Grupo, child of a Departamento. The same shape is used as the save body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grupo {
    #[serde(rename = "codgrupo")]
    pub code: i64,
    #[serde(rename = "descgrupo")]
    pub description: String,
    #[serde(rename = "coddepto")]
    pub departamento_code: i64,
}

impl From<&HierarchyForm> for Grupo {
    fn from(form: &HierarchyForm) -> Self {
        Self {
            code: form.code,
            description: form.text.clone(),
            departamento_code: form.parent_code.unwrap_or(NEW_RECORD_CODE),
        }
    }
}

impl HierarchyEntity for Grupo {
    type Payload = Grupo;

    fn into_record(self) -> HierarchyRecord {
        HierarchyRecord {
            code: self.code,
            text: self.description,
            parent_code: Some(self.departamento_code),
        }
    }
}
