pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod form_validation;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal;
