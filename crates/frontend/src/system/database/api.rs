use contracts::shared::ApiError;
use contracts::system::database::{
    ActiveDatabaseResponse, SelectDatabaseRequest, ACTIVE_DATABASE_PATH, DATABASES_PATH,
    SELECT_DATABASE_PATH,
};

use crate::shared::api_utils::{get_json, post_json_unit};

/// Names of the databases the service can switch to
pub async fn fetch_databases() -> Result<Vec<String>, ApiError> {
    get_json(DATABASES_PATH).await
}

pub async fn fetch_active_database() -> Result<ActiveDatabaseResponse, ApiError> {
    get_json(ACTIVE_DATABASE_PATH).await
}

pub async fn select_database(name: &str) -> Result<(), ApiError> {
    let request = SelectDatabaseRequest {
        nome_banco: name.to_string(),
    };
    post_json_unit(SELECT_DATABASE_PATH, &request).await
}
