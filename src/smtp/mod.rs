pub mod delivery_engine;
pub mod delivery_error;
pub mod delivery_report;
pub mod message_renderer;
pub mod smtp_credentials;
pub mod smtp_message;
pub mod smtp_session;
