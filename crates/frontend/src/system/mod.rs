pub mod database;
pub mod legacy_files;
pub mod pages;
pub mod settings;
