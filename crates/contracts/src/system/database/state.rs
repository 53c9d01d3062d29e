use super::dto::ActiveDatabaseResponse;

/// Process-wide active database selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDatabase {
    /// The startup lookup has not answered yet.
    #[default]
    Checking,
    /// No database selected, or the lookup failed.
    Missing,
    Selected(String),
}

/// What a gated page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    Loading,
    Blocked,
    Open,
}

impl ActiveDatabase {
    /// Resolve the startup lookup. Failures block instead of waiting forever;
    /// a null or blank name counts as no selection.
    pub fn from_lookup<E>(result: Result<ActiveDatabaseResponse, E>) -> Self {
        match result {
            Ok(ActiveDatabaseResponse { banco_ativo: Some(name) }) if !name.trim().is_empty() => {
                ActiveDatabase::Selected(name)
            }
            _ => ActiveDatabase::Missing,
        }
    }

    pub fn gate(&self) -> GateView {
        match self {
            ActiveDatabase::Checking => GateView::Loading,
            ActiveDatabase::Missing => GateView::Blocked,
            ActiveDatabase::Selected(_) => GateView::Open,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ActiveDatabase::Selected(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_selected(&self, candidate: &str) -> bool {
        self.name() == Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: Option<&str>) -> ActiveDatabase {
        ActiveDatabase::from_lookup::<()>(Ok(ActiveDatabaseResponse {
            banco_ativo: name.map(str::to_string),
        }))
    }

    #[test]
    fn test_starts_loading() {
        assert_eq!(ActiveDatabase::default().gate(), GateView::Loading);
    }

    #[test]
    fn test_selected_name_opens_gate() {
        let state = lookup(Some("loja01"));
        assert_eq!(state.gate(), GateView::Open);
        assert_eq!(state.name(), Some("loja01"));
        assert!(state.is_selected("loja01"));
        assert!(!state.is_selected("loja02"));
    }

    #[test]
    fn test_null_or_blank_blocks() {
        assert_eq!(lookup(None).gate(), GateView::Blocked);
        assert_eq!(lookup(Some("")).gate(), GateView::Blocked);
        assert_eq!(lookup(Some("  ")).gate(), GateView::Blocked);
    }

    #[test]
    fn test_failed_lookup_blocks() {
        let state = ActiveDatabase::from_lookup::<&str>(Err("offline"));
        assert_eq!(state.gate(), GateView::Blocked);
    }

    #[test]
    fn test_missing_field_deserializes_as_none() {
        let resp: ActiveDatabaseResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ActiveDatabase::from_lookup::<()>(Ok(resp)), ActiveDatabase::Missing);
        let resp: ActiveDatabaseResponse = serde_json::from_str(r#"{"banco_ativo":null}"#).unwrap();
        assert_eq!(resp.banco_ativo, None);
    }
}
