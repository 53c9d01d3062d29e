use serde::{Deserialize, Serialize};

/// Response of `GET /api/database/active`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveDatabaseResponse {
    #[serde(default)]
    pub banco_ativo: Option<String>,
}

/// Body of `POST /api/database/select`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectDatabaseRequest {
    pub nome_banco: String,
}
