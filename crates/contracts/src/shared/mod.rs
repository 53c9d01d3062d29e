pub mod api_error;
pub mod config;
pub mod pagination;
pub mod search;

pub use api_error::{ApiError, ErrorBody, ErrorDetail};
pub use config::{ClientConfig, DEFAULT_SERVICE_BASE_URL};
pub use search::{filter_by_query, Searchable};
