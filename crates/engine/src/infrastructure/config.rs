//! Engine configuration from environment variables.

use std::path::PathBuf;

use guildforms_domain::LocaleTag;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CHANNEL_BUFFER: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {message}")]
    Invalid {
        name: &'static str,
        value: String,
        message: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, value: &str, message: impl ToString) -> Self {
        Self::Invalid {
            name,
            value: value.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Locale for viewers whose bridge does not report one.
    pub default_locale: LocaleTag,
    /// Directory of `<locale>.json` catalogs merged over the built-in English one.
    pub locale_dir: Option<PathBuf>,
    /// JSON seed for the in-memory façades.
    pub seed_data_path: Option<PathBuf>,
    /// Outbound message buffer per bridge connection.
    pub session_channel_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            default_locale: LocaleTag::english(),
            locale_dir: None,
            seed_data_path: None,
            session_channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Unset and blank variables take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let server_host = var("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = match var("SERVER_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("SERVER_PORT", &value, e))?,
            None => defaults.server_port,
        };

        let default_locale = match var("DEFAULT_LOCALE") {
            Some(value) => LocaleTag::new(value.as_str())
                .map_err(|e| ConfigError::invalid("DEFAULT_LOCALE", &value, e))?,
            None => defaults.default_locale,
        };

        let session_channel_buffer = match var("SESSION_CHANNEL_BUFFER") {
            Some(value) => match value.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        "SESSION_CHANNEL_BUFFER",
                        &value,
                        "must be greater than zero",
                    ))
                }
                Ok(buffer) => buffer,
                Err(e) => return Err(ConfigError::invalid("SESSION_CHANNEL_BUFFER", &value, e)),
            },
            None => defaults.session_channel_buffer,
        };

        Ok(Self {
            server_host,
            server_port,
            default_locale,
            locale_dir: var("LOCALE_DIR").map(PathBuf::from),
            seed_data_path: var("SEED_DATA_PATH").map(PathBuf::from),
            session_channel_buffer,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
