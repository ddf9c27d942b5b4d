pub mod config_error;
pub mod config_validator;
pub mod mail_config;
