//! Legacy DBF file management endpoints.

use serde::{Deserialize, Serialize};

pub const FILES_PATH: &str = "/api/dbf/files";
pub const UPLOAD_PATH: &str = "/api/dbf/upload";
pub const ADD_PATH: &str = "/api/dbf/add";
pub const REMOVE_PATH: &str = "/api/dbf/remove";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Query of `POST /api/dbf/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLegacyFileQuery {
    pub nome: String,
}

/// Only `.dbf` files are accepted for upload (case-insensitive).
pub fn is_dbf_file_name(name: &str) -> bool {
    name.len() > 4 && name.to_ascii_lowercase().ends_with(".dbf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbf_extension() {
        assert!(is_dbf_file_name("PRODUTOS.DBF"));
        assert!(is_dbf_file_name("cadpro.dbf"));
        assert!(!is_dbf_file_name(".dbf"));
        assert!(!is_dbf_file_name("produtos.csv"));
    }
}
