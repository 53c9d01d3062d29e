use contracts::shared::ApiError;
use contracts::system::legacy_files::{
    AddLegacyFileQuery, ADD_PATH, FILES_PATH, REMOVE_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use web_sys::{File, FormData};

use crate::shared::api_utils::{delete, get_json, post_empty, post_form};

/// DBF files currently registered on the service
pub async fn fetch_files() -> Result<Vec<String>, ApiError> {
    get_json(FILES_PATH).await
}

pub async fn upload_file(file: &File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    post_form(UPLOAD_PATH, form).await
}

/// Register a file already present in the service's DBF directory
pub async fn add_file(name: &str) -> Result<(), ApiError> {
    let query = serde_qs::to_string(&AddLegacyFileQuery {
        nome: name.to_string(),
    })
    .map_err(|e| ApiError::Request(e.to_string()))?;
    post_empty(&format!("{}?{}", ADD_PATH, query)).await
}

pub async fn remove_file(name: &str) -> Result<(), ApiError> {
    delete(&format!("{}/{}", REMOVE_PATH, urlencoding::encode(name))).await
}
