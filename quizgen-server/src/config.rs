use anyhow::Result;
use config::{builder::DefaultState, Config as ConfigLoader, ConfigBuilder, Environment, File};
use quizgen_api::observability::LogFormat;
use quizgen_api::security::cors::DEFAULT_ORIGINS;
use quizgen_api::ChatSettings;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "QUIZGEN";
/// Read on its own, outside the `QUIZGEN_` namespace.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    pub cors_origins: Vec<String>,
    #[serde(default)]
    pub chat: ChatSettings,
}

impl Config {
    /// Defaults, then `config/default` and `config/local`, then `QUIZGEN_*`
    /// variables (`QUIZGEN_CHAT__BASE_URL` sets `chat.base_url`).
    pub fn load() -> Result<Self> {
        Self::load_from(
            Self::environment(),
            std::env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty()),
        )
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("cors_origins")
            .try_parsing(true)
    }

    fn load_from(environment: Environment, api_key: Option<String>) -> Result<Self> {
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment)
            .set_override_option("chat.api_key", api_key)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        let chat = ChatSettings::default();

        Ok(ConfigLoader::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("log_level", defaults.log_level)?
            .set_default("cors_origins", defaults.cors_origins)?
            .set_default("chat.base_url", chat.base_url)?
            .set_default("chat.default_model", chat.default_model)?
            .set_default("chat.timeout_secs", chat.timeout_secs)?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            cors_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            chat: ChatSettings::default(),
        }
    }
}
