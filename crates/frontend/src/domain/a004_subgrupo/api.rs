use contracts::domain::a004_subgrupo::aggregate::Subgrupo;
use contracts::domain::common::HierarchyLevel;
use contracts::shared::ApiError;

use crate::shared::api_utils::get_json;

/// Full subgroup list, as offered by the classification picker
pub async fn fetch_subgrupos() -> Result<Vec<Subgrupo>, ApiError> {
    get_json(HierarchyLevel::Subgrupo.resource_path()).await
}
