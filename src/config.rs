// configuration de l'API

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_SERVER_API_URL: &str = "http://localhost:8080/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SERVER_API_URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid HTTP_TIMEOUT_SECS '{0}': expected a number of seconds")]
    InvalidTimeout(String),

    #[error("cannot resolve endpoint '{path}': {source}")]
    InvalidEndpoint {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration du client : où se trouve l'API et combien de temps attendre.
#[derive(Debug, Clone)]
pub struct ApplicationConfig {
    endpoint_prefix: Url,
    timeout: Duration,
}

impl ApplicationConfig {
    /// Construit la configuration à partir d'une URL de base.
    /// Un '/' final est ajouté si besoin pour que les chemins relatifs se joignent correctement.
    pub fn new(server_api_url: &str) -> Result<Self, ConfigError> {
        let mut value = server_api_url.trim().to_string();
        if !value.ends_with('/') {
            value.push('/');
        }

        let endpoint_prefix = Url::parse(&value).map_err(|source| ConfigError::InvalidUrl {
            value: server_api_url.to_string(),
            source,
        })?;

        Ok(Self {
            endpoint_prefix,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Lit SERVER_API_URL et HTTP_TIMEOUT_SECS (après chargement du .env)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let server_api_url = env::var("SERVER_API_URL").ok();
        let timeout_secs = env::var("HTTP_TIMEOUT_SECS").ok();
        Self::from_vars(server_api_url.as_deref(), timeout_secs.as_deref())
    }

    /// Valeurs brutes des variables, défauts appliqués si absentes
    pub fn from_vars(server_api_url: Option<&str>, timeout_secs: Option<&str>) -> Result<Self, ConfigError> {
        let config = Self::new(server_api_url.unwrap_or(DEFAULT_SERVER_API_URL))?;

        match timeout_secs {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            None => Ok(config),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Résout un chemin de ressource relatif ("api/villes") en URL absolue
    pub fn endpoint_for(&self, api: &str) -> Result<Url, ConfigError> {
        self.endpoint_prefix
            .join(api.trim_start_matches('/'))
            .map_err(|source| ConfigError::InvalidEndpoint {
                path: api.to_string(),
                source,
            })
    }
}
