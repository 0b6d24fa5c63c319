pub mod api_utils;
pub mod charts;
pub mod components;
pub mod date_utils;
pub mod files;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod toast;
