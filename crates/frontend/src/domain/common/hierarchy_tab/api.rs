use contracts::domain::common::{HierarchyForm, HierarchyLevel, HierarchyRecord};
use contracts::shared::ApiError;

use crate::shared::api_utils::{get_json, post_json_unit};

/// List every record of `level`
pub async fn fetch_records(level: HierarchyLevel) -> Result<Vec<HierarchyRecord>, ApiError> {
    let value: serde_json::Value = get_json(level.resource_path()).await?;
    level
        .records_from_value(value)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create (code 0) or update a record of `level`
pub async fn save_record(level: HierarchyLevel, form: &HierarchyForm) -> Result<(), ApiError> {
    let payload = level
        .payload(form)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    post_json_unit(level.resource_path(), &payload).await
}
