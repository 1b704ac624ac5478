use crate::actors::BootstrapAdmin;
use std::env;

/// Application configuration, read from the environment with built-in
/// defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Mailbox depth for every actor.
    pub channel_buffer: usize,
    /// Credentials for the admin seeded when the user set is empty.
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            admin_username: "galuh".to_string(),
            admin_password: "123".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `WARUNG_CHANNEL_BUFFER`, `WARUNG_ADMIN_USERNAME`, and
    /// `WARUNG_ADMIN_PASSWORD`, falling back to defaults for anything
    /// unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            channel_buffer: env::var("WARUNG_CHANNEL_BUFFER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.channel_buffer),
            admin_username: env::var("WARUNG_ADMIN_USERNAME")
                .unwrap_or(defaults.admin_username),
            admin_password: env::var("WARUNG_ADMIN_PASSWORD")
                .unwrap_or(defaults.admin_password),
        }
    }

    pub fn bootstrap_admin(&self) -> BootstrapAdmin {
        BootstrapAdmin {
            username: self.admin_username.clone(),
            password: self.admin_password.clone(),
        }
    }
}
