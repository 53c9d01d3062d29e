pub mod dto;
pub mod state;

pub use dto::{ActiveDatabaseResponse, SelectDatabaseRequest};
pub use state::{ActiveDatabase, GateView};

pub const DATABASES_PATH: &str = "/api/databases";
pub const ACTIVE_DATABASE_PATH: &str = "/api/database/active";
pub const SELECT_DATABASE_PATH: &str = "/api/database/select";
