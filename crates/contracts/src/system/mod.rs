pub mod connectivity;
pub mod database;
pub mod legacy_files;
