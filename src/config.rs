//! Configuration management for the SAE login simulator
//!
//! Loads the credential source location and the simulated timings from
//! `config.toml`, with `SAE_LOGIN_*` environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "SAE_LOGIN";

/// Complete portal configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PortalConfig {
    // ═══ CREDENTIAL SOURCE ═══
    /// Location of the `usuario.json` document (HTTP URL or local path)
    pub users_url: String,

    /// Timeout applied to the HTTP fetch of the credential document
    pub fetch_timeout_secs: u64,

    // ═══ SIMULATED TIMINGS ═══
    /// Artificial latency of the simulated login request
    pub request_latency_ms: u64,

    /// Delay between the welcome notice and the dashboard redirect notice
    pub redirect_delay_ms: u64,

    /// Trailing delay before the submit control is re-enabled
    pub control_restore_delay_ms: u64,

    /// Lifetime of a notification before it auto-dismisses
    pub notification_timeout_ms: u64,

    pub seat_redirect_delay_ms: u64,
    pub recovery_redirect_delay_ms: u64,
    pub hint_delay_ms: u64,

    /// Delay before empty login forms are pre-filled with demo values
    pub prefill_delay_ms: u64,

    // ═══ FORM RULES ═══
    /// Page opened by the password recovery action
    pub recovery_target: String,

    /// Minimum length of a guardian registration code
    pub min_registration_code_length: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            users_url: "../data/usuario.json".to_string(),
            fetch_timeout_secs: 10,
            request_latency_ms: 800,
            redirect_delay_ms: 1500,
            control_restore_delay_ms: 1000,
            notification_timeout_ms: 15000,
            seat_redirect_delay_ms: 1000,
            recovery_redirect_delay_ms: 1500,
            hint_delay_ms: 1000,
            prefill_delay_ms: 500,
            recovery_target: "recuperar.html".to_string(),
            min_registration_code_length: 6,
        }
    }
}

impl PortalConfig {
    /// Load configuration from `config.toml` with environment overrides.
    ///
    /// A missing file is not an error: defaults fill every key the file and
    /// environment leave unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem (extension is inferred).
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: PortalConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.users_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "users_url cannot be empty".into(),
            ));
        }

        if self.fetch_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "fetch_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.min_registration_code_length == 0 {
            return Err(config::ConfigError::Message(
                "min_registration_code_length must be greater than 0".into(),
            ));
        }

        if self.recovery_target.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "recovery_target cannot be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn request_latency(&self) -> Duration {
        Duration::from_millis(self.request_latency_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn control_restore_delay(&self) -> Duration {
        Duration::from_millis(self.control_restore_delay_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn seat_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.seat_redirect_delay_ms)
    }

    pub fn recovery_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.recovery_redirect_delay_ms)
    }

    pub fn hint_delay(&self) -> Duration {
        Duration::from_millis(self.hint_delay_ms)
    }

    pub fn prefill_delay(&self) -> Duration {
        Duration::from_millis(self.prefill_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = PortalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_latency(), Duration::from_millis(800));
        assert_eq!(config.redirect_delay(), Duration::from_millis(1500));
        assert_eq!(config.control_restore_delay(), Duration::from_millis(1000));
        assert_eq!(config.notification_timeout(), Duration::from_millis(15000));
    }

    #[test]
    fn test_validate_rejects_empty_users_url() {
        let config = PortalConfig {
            users_url: "  ".to_string(),
            ..PortalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_code_length() {
        let config = PortalConfig {
            min_registration_code_length: 0,
            ..PortalConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "users_url = \"http://localhost:9000/usuario.json\"").unwrap();
        writeln!(file, "request_latency_ms = 50").unwrap();
        drop(file);

        let stem = dir.path().join("portal");
        let config = PortalConfig::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.users_url, "http://localhost:9000/usuario.json");
        assert_eq!(config.request_latency_ms, 50);
        assert_eq!(config.redirect_delay_ms, 1500);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("absent");
        let config = PortalConfig::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(config.min_registration_code_length, 6);
    }
}
