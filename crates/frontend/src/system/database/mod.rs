pub mod api;
pub mod bar;
pub mod context;
pub mod guard;

pub use bar::ActiveDatabaseBar;
pub use context::{use_active_database, ActiveDatabaseContext, DatabaseProvider};
pub use guard::RequireActiveDatabase;
