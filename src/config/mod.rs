pub mod app_config;
pub mod build_info;
pub mod config_error;
pub mod config_resolver;
pub mod properties_file;
