use contracts::shared::ApiError;
use contracts::usecases::u502_fix_departmentalization::{
    Divergence, DivergenceReport, CORRECT_PATH, SCAN_PATH,
};

use crate::shared::api_utils::{get_json, post_json_unit};

/// Compare the legacy file against the database
pub async fn scan() -> Result<DivergenceReport, ApiError> {
    get_json(SCAN_PATH).await
}

/// Apply the database values of every listed divergence in one request
pub async fn apply_corrections(divergences: &[Divergence]) -> Result<(), ApiError> {
    post_json_unit(CORRECT_PATH, &divergences).await
}
