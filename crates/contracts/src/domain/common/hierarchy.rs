use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::a001_nivel4::aggregate::Nivel4;
use crate::domain::a002_departamento::aggregate::Departamento;
use crate::domain::a003_grupo::aggregate::Grupo;
use crate::domain::a004_subgrupo::aggregate::Subgrupo;
use crate::shared::search::Searchable;

/// Levels of the product departmentalization tree, root first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HierarchyLevel {
    Nivel4,
    Departamento,
    Grupo,
    Subgrupo,
}

impl HierarchyLevel {
    pub const ALL: [HierarchyLevel; 4] = [
        HierarchyLevel::Nivel4,
        HierarchyLevel::Departamento,
        HierarchyLevel::Grupo,
        HierarchyLevel::Subgrupo,
    ];

    /// REST resource serving both the list (GET) and create-or-update (POST).
    pub fn resource_path(self) -> &'static str {
        match self {
            HierarchyLevel::Nivel4 => "/api/depnv4",
            HierarchyLevel::Departamento => "/api/tabdep",
            HierarchyLevel::Grupo => "/api/tabgru",
            HierarchyLevel::Subgrupo => "/api/cadgss",
        }
    }

    pub fn parent(self) -> Option<HierarchyLevel> {
        match self {
            HierarchyLevel::Nivel4 => None,
            HierarchyLevel::Departamento => Some(HierarchyLevel::Nivel4),
            HierarchyLevel::Grupo => Some(HierarchyLevel::Departamento),
            HierarchyLevel::Subgrupo => Some(HierarchyLevel::Grupo),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            HierarchyLevel::Nivel4 => "nivel4",
            HierarchyLevel::Departamento => "departamento",
            HierarchyLevel::Grupo => "grupo",
            HierarchyLevel::Subgrupo => "subgrupo",
        }
    }

    /// Decode the level's list response into common records.
    pub fn records_from_value(
        self,
        value: serde_json::Value,
    ) -> Result<Vec<HierarchyRecord>, serde_json::Error> {
        match self {
            HierarchyLevel::Nivel4 => decode_records::<Nivel4>(value),
            HierarchyLevel::Departamento => decode_records::<Departamento>(value),
            HierarchyLevel::Grupo => decode_records::<Grupo>(value),
            HierarchyLevel::Subgrupo => decode_records::<Subgrupo>(value),
        }
    }

    /// Encode the form with the level's wire field names.
    pub fn payload(self, form: &HierarchyForm) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            HierarchyLevel::Nivel4 => encode_payload::<Nivel4>(form),
            HierarchyLevel::Departamento => encode_payload::<Departamento>(form),
            HierarchyLevel::Grupo => encode_payload::<Grupo>(form),
            HierarchyLevel::Subgrupo => encode_payload::<Subgrupo>(form),
        }
    }
}

/// A level-specific record as the service returns it.
pub trait HierarchyEntity: DeserializeOwned {
    /// Body accepted by the level's create-or-update endpoint.
    type Payload: Serialize + for<'a> From<&'a HierarchyForm>;

    fn into_record(self) -> HierarchyRecord;
}

fn decode_records<E: HierarchyEntity>(
    value: serde_json::Value,
) -> Result<Vec<HierarchyRecord>, serde_json::Error> {
    let entities: Vec<E> = serde_json::from_value(value)?;
    Ok(entities.into_iter().map(HierarchyEntity::into_record).collect())
}

fn encode_payload<E: HierarchyEntity>(
    form: &HierarchyForm,
) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(E::Payload::from(form))
}

/// Level-independent view of a hierarchy row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyRecord {
    pub code: i64,
    pub text: String,
    pub parent_code: Option<i64>,
}

impl Searchable for HierarchyRecord {
    fn search_code(&self) -> i64 {
        self.code
    }

    fn search_text(&self) -> &str {
        &self.text
    }
}

/// Code sent to the service to request a newly assigned code.
pub const NEW_RECORD_CODE: i64 = 0;

/// Add/edit dialog form shared by every level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyForm {
    pub code: i64,
    pub text: String,
    pub parent_code: Option<i64>,
}

impl HierarchyForm {
    /// Empty form for a new record of `level`.
    pub fn blank(level: HierarchyLevel) -> Self {
        Self {
            code: NEW_RECORD_CODE,
            text: String::new(),
            parent_code: level.parent().map(|_| NEW_RECORD_CODE),
        }
    }

    pub fn from_record(record: &HierarchyRecord) -> Self {
        Self {
            code: record.code,
            text: record.text.clone(),
            parent_code: record.parent_code,
        }
    }

    /// Parse the code input; anything that is not an integer means "new".
    pub fn parse_code(raw: &str) -> i64 {
        raw.trim().parse().unwrap_or(NEW_RECORD_CODE)
    }
}

/// Parent column text: `"<code> - <description>"`, `N/A` when unresolved.
pub fn describe_parent(parents: &[HierarchyRecord], code: i64) -> String {
    let text = parents
        .iter()
        .find(|p| p.code == code)
        .map(|p| p.text.as_str())
        .unwrap_or("N/A");
    format!("{} - {}", code, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_each_level() {
        let nivel4 = HierarchyLevel::Nivel4
            .records_from_value(json!([{ "CODIGO": 1, "DESCRICAO": "Mercearia" }]))
            .unwrap();
        assert_eq!(
            nivel4,
            vec![HierarchyRecord { code: 1, text: "Mercearia".into(), parent_code: None }]
        );

        let deps = HierarchyLevel::Departamento
            .records_from_value(json!([{ "coddepto": 12, "nomedepto": "Bebidas", "CODDEPNV4": 1 }]))
            .unwrap();
        assert_eq!(deps[0].parent_code, Some(1));
        assert_eq!(deps[0].text, "Bebidas");

        let grupos = HierarchyLevel::Grupo
            .records_from_value(json!([{ "codgrupo": 120, "descgrupo": "Refrigerantes", "coddepto": 12 }]))
            .unwrap();
        assert_eq!(grupos[0].parent_code, Some(12));

        let subgrupos = HierarchyLevel::Subgrupo
            .records_from_value(json!([{ "codgss00": 1201, "descgss00": "Cola", "codgrupo00": 120 }]))
            .unwrap();
        assert_eq!(subgrupos[0].code, 1201);
        assert_eq!(subgrupos[0].parent_code, Some(120));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(HierarchyLevel::Grupo
            .records_from_value(json!({ "detail": "x" }))
            .is_err());
    }

    #[test]
    fn test_payload_uses_level_field_names() {
        let form = HierarchyForm { code: 0, text: "Novo".into(), parent_code: Some(3) };

        assert_eq!(
            HierarchyLevel::Nivel4.payload(&form).unwrap(),
            json!({ "codigo": 0, "descricao": "Novo" })
        );
        assert_eq!(
            HierarchyLevel::Departamento.payload(&form).unwrap(),
            json!({ "coddepto": 0, "nomedepto": "Novo", "coddepto_nv4": 3 })
        );
        assert_eq!(
            HierarchyLevel::Grupo.payload(&form).unwrap(),
            json!({ "codgrupo": 0, "descgrupo": "Novo", "coddepto": 3 })
        );
        assert_eq!(
            HierarchyLevel::Subgrupo.payload(&form).unwrap(),
            json!({ "codgss00": 0, "descgss00": "Novo", "codgrupo00": 3 })
        );
    }

    #[test]
    fn test_blank_form_uses_new_code_sentinel() {
        assert_eq!(
            HierarchyForm::blank(HierarchyLevel::Nivel4),
            HierarchyForm { code: 0, text: String::new(), parent_code: None }
        );
        assert_eq!(HierarchyForm::blank(HierarchyLevel::Grupo).parent_code, Some(0));
    }

    #[test]
    fn test_parse_code() {
        assert_eq!(HierarchyForm::parse_code("42"), 42);
        assert_eq!(HierarchyForm::parse_code(""), NEW_RECORD_CODE);
        assert_eq!(HierarchyForm::parse_code("abc"), NEW_RECORD_CODE);
    }

    #[test]
    fn test_describe_parent() {
        let parents = vec![HierarchyRecord { code: 7, text: "Limpeza".into(), parent_code: None }];
        assert_eq!(describe_parent(&parents, 7), "7 - Limpeza");
        assert_eq!(describe_parent(&parents, 9), "9 - N/A");
    }

    #[test]
    fn test_parent_chain() {
        assert_eq!(HierarchyLevel::Nivel4.parent(), None);
        assert_eq!(HierarchyLevel::Subgrupo.parent(), Some(HierarchyLevel::Grupo));
    }
}
