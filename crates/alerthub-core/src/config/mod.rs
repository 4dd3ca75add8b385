//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod analysis;
pub mod app;
pub mod auth;
pub mod feeds;
pub mod logging;
pub mod notifier;
pub mod scheduler;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::analysis::AnalysisConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, ChallengeConfig};
pub use self::feeds::FeedsConfig;
pub use self::logging::LoggingConfig;
pub use self::notifier::NotifierConfig;
pub use self::scheduler::SchedulerConfig;
pub use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication and account settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Human-verification challenge settings.
    #[serde(default)]
    pub challenge: ChallengeConfig,
    /// Hazard feed provider settings.
    #[serde(default)]
    pub feeds: FeedsConfig,
    /// Risk analysis provider settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Outbound notification settings.
    #[serde(default)]
    pub notifier: NotifierConfig,
    /// Scheduled task settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `ALERTHUB_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ALERTHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            auth: AuthConfig::default(),
            challenge: ChallengeConfig::default(),
            feeds: FeedsConfig::default(),
            analysis: AnalysisConfig::default(),
            notifier: NotifierConfig::default(),
            scheduler: SchedulerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
