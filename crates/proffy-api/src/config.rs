use serde::Deserialize;

const ENV_PREFIX: &str = "PROFFY_";

/// Deployment environment, drives the log format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Client configuration, read from `PROFFY_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the classes API (`PROFFY_API_URL`)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Local storage database (`PROFFY_DATABASE_URL`)
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// `development` or `production` (`PROFFY_ENV`)
    #[serde(default)]
    pub env: Environment,
}

fn default_api_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_database_url() -> String {
    "sqlite://proffy.db".to_string()
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Same as [`ClientConfig::from_env`] over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            database_url: default_database_url(),
            env: Environment::default(),
        }
    }
}
