use thiserror::Error;

/// Why a batch stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("could not connect to {host}:{port}: {reason}")]
    Connection { host: String, port: u16, reason: String },
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("failed to send email to {name} ({email}): {reason}")]
    Transport { name: String, email: String, reason: String },
}
