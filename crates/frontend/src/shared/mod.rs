pub mod api_utils;
pub mod browser;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod notifications;
