use std::time::Duration;

use serde::Deserialize;

const DEFAULT_THROTTLE_SECONDS: f64 = 1.0;

/// Validated configuration for one batch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub smtp: SmtpConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Seconds to wait between two sends.
    ///
    /// Read from the `throttle` key, default: `1.0`
    #[serde(rename = "throttle", default = "default_throttle")]
    pub throttle_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MailConfig {
    pub from: String,
    pub test_email: String,
}

impl SmtpConfig {
    /// The throttle as a `Duration`, zero if the value is negative or not finite.
    pub fn throttle(&self) -> Duration {
        Duration::try_from_secs_f64(self.throttle_seconds).unwrap_or(Duration::ZERO)
    }
}

fn default_throttle() -> f64 {
    DEFAULT_THROTTLE_SECONDS
}
