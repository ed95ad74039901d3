pub mod app_config;
pub mod static_files;
