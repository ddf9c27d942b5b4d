use std::path::Path;

use lettre::message::Mailbox;
use serde_yaml::Value;

use crate::{
    common::utils,
    config::{
        config_error::{ConfigError, ConfigViolation},
        mail_config::Config,
    },
    utils::error::DoveError,
};

/// Environment variable that replaces `smtp.password` when set.
pub const PASSWORD_ENV: &str = "DOVE_SMTP_PASSWORD";

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a decoded configuration document against the mailer schema.
    ///
    /// `smtp.host`, `smtp.port`, `smtp.username`, `smtp.password`, `mail.from` and
    /// `mail.test_email` are required, `smtp.throttle` is optional. Any violation
    /// rejects the whole document.
    pub fn validate(raw: &Value) -> Result<Config, ConfigError> {
        let config: Config = match serde_yaml::from_value(raw.clone()) {
            Ok(config) => config,
            Err(err) => {
                let err = ConfigError::Schema(err.to_string());
                tracing::error!("{}", err);
                return Err(err);
            }
        };

        let violations = Self::check(&config);
        if !violations.is_empty() {
            let err = ConfigError::Invalid(violations);
            tracing::error!("{}", err);
            return Err(err);
        }

        Ok(config)
    }

    /// Reads a YAML file, applies the password override from the environment and validates it.
    pub async fn load<T: AsRef<Path>>(path: T) -> Result<Config, DoveError> {
        let path = path.as_ref();
        utils::ensure_exists(path)?;
        let text = tokio::fs::read_to_string(path).await.map_err(|err| DoveError::io(path, err))?;
        let raw = Self::parse(&text)?;
        let raw = Self::with_password_override(raw, std::env::var(PASSWORD_ENV).ok());
        Ok(Self::validate(&raw)?)
    }

    pub fn parse(text: &str) -> Result<Value, ConfigError> {
        serde_yaml::from_str(text).map_err(|err| {
            let err = ConfigError::Parse(err.to_string());
            tracing::error!("{}", err);
            err
        })
    }

    /// Sets `smtp.password` to `password` if one is given and `smtp` is a mapping.
    pub fn with_password_override(mut raw: Value, password: Option<String>) -> Value {
        let Some(password) = password else {
            return raw;
        };

        if let Some(smtp) = raw.get_mut("smtp").and_then(Value::as_mapping_mut) {
            tracing::debug!("smtp.password taken from {}", PASSWORD_ENV);
            smtp.insert(Value::from("password"), Value::from(password));
        }
        raw
    }

    fn check(config: &Config) -> Vec<ConfigViolation> {
        let mut violations = Vec::new();
        let mut violation = |field: &'static str, message: String| {
            violations.push(ConfigViolation { field, message });
        };

        if config.smtp.host.trim().is_empty() {
            violation("smtp.host", "must not be empty".to_string());
        }
        if config.smtp.port == 0 {
            violation("smtp.port", "must be between 1 and 65535".to_string());
        }
        if !config.smtp.throttle_seconds.is_finite() || config.smtp.throttle_seconds < 0.0 {
            violation("smtp.throttle", format!("must be a non-negative number of seconds, got {}", config.smtp.throttle_seconds));
        }
        if let Err(err) = config.mail.from.parse::<Mailbox>() {
            violation("mail.from", format!("'{}' is not a valid address: {}", config.mail.from, err));
        }
        if let Err(err) = config.mail.test_email.parse::<Mailbox>() {
            violation("mail.test_email", format!("'{}' is not a valid address: {}", config.mail.test_email, err));
        }

        violations
    }
}
