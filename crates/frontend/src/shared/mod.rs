pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod modal;
pub mod notifications;
