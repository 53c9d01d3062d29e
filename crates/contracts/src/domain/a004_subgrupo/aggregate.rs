use serde::{Deserialize, Serialize};

use crate::domain::common::{HierarchyEntity, HierarchyForm, HierarchyRecord, NEW_RECORD_CODE};
use crate::shared::search::Searchable;

/// Subgrupo (GSS), the leaf level products are classified into.
/// The same shape is used as the save body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgrupo {
    #[serde(rename = "codgss00")]
    pub code: i64,
    #[serde(rename = "descgss00")]
    pub description: String,
    #[serde(rename = "codgrupo00")]
    pub grupo_code: i64,
}

impl From<&HierarchyForm> for Subgrupo {
    fn from(form: &HierarchyForm) -> Self {
        Self {
            code: form.code,
            description: form.text.clone(),
            grupo_code: form.parent_code.unwrap_or(NEW_RECORD_CODE),
        }
    }
}

impl HierarchyEntity for Subgrupo {
    type Payload = Subgrupo;

    fn into_record(self) -> HierarchyRecord {
        HierarchyRecord {
            code: self.code,
            text: self.description,
            parent_code: Some(self.grupo_code),
        }
    }
}

impl Searchable for Subgrupo {
    fn search_code(&self) -> i64 {
        self.code
    }

    fn search_text(&self) -> &str {
        &self.description
    }
}
