/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_ACCEPT_INVALID_CERTS, DEFAULT_API_BASE_URL, ENV_BASE_URL, ENV_CA_CERT, ENV_CERT_PATH, ENV_INSECURE_SKIP_VERIFY, ENV_KEY_PATH, ENV_TIMEOUT, ENV_TOKEN,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none, get_env_required};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Authentication material for the Superclouds API
pub struct Credentials {
    /// Path to the client certificate (PEM)
    pub cert_path: String,
    /// Path to the client private key (PEM)
    pub key_path: String,
    /// Bearer token sent in the `Authorization` header
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Superclouds REST API
    pub base_url: String,
    /// Per-request deadline in seconds. `None` (or `0`) sets no deadline and
    /// leaves cancellation to the caller.
    pub timeout: Option<u64>,
}

impl RestApiConfig {
    /// Deadline to apply to each request, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// TLS posture of the HTTP client
pub struct TlsConfig {
    /// Skip server certificate verification and trust no built-in roots.
    ///
    /// Mutual TLS without server authentication: anyone able to intercept the
    /// connection can impersonate the API. Kept as the default for
    /// compatibility with existing deployments.
    pub accept_invalid_certs: bool,
    /// Extra root certificate (PEM) to trust when verification is on
    pub ca_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Superclouds API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// TLS configuration
    pub tls: TlsConfig,
}

impl Config {
    /// Creates a configuration from the process environment
    ///
    /// `SUPER_CERT`, `SUPER_KEY` and `SUPER_TOKEN` are required. `SUPER_URL`,
    /// `SUPER_TIMEOUT`, `SUPER_INSECURE_SKIP_VERIFY` and `SUPER_CA_CERT` are optional.
    /// Nothing is read from disk here; call [`crate::utils::load_dotenv`] first
    /// to pick up a `.env` file.
    ///
    /// # Returns
    /// * `Ok(Config)` - If every required variable is present
    /// * `Err(AppError::Configuration)` - Naming the first missing variable
    ///
    /// # Example
    /// ```ignore
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, AppError> {
        let cert_path = get_env_required(ENV_CERT_PATH)?;
        let key_path = get_env_required(ENV_KEY_PATH)?;
        let token = get_env_required(ENV_TOKEN)?;

        let config = Config {
            credentials: Credentials {
                cert_path,
                key_path,
                token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(ENV_BASE_URL, DEFAULT_API_BASE_URL.to_string()),
                timeout: get_env_or_none(ENV_TIMEOUT),
            },
            tls: TlsConfig {
                accept_invalid_certs: get_env_or_default(
                    ENV_INSECURE_SKIP_VERIFY,
                    DEFAULT_ACCEPT_INVALID_CERTS,
                ),
                ca_path: get_env_or_none(ENV_CA_CERT),
            },
        };
        debug!("Configuration loaded from environment: {:?}", config);
        Ok(config)
    }

    /// Creates a configuration from explicit values
    ///
    /// No validation happens here; an empty token simply means no
    /// `Authorization` header is sent.
    ///
    /// # Arguments
    /// * `cert_path` - Path to the client certificate (PEM)
    /// * `key_path` - Path to the client private key (PEM)
    /// * `token` - Bearer token
    pub fn with_params(
        cert_path: impl Into<String>,
        key_path: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                cert_path: cert_path.into(),
                key_path: key_path.into(),
                token: token.into(),
            },
            rest_api: RestApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                timeout: None,
            },
            tls: TlsConfig {
                accept_invalid_certs: DEFAULT_ACCEPT_INVALID_CERTS,
                ca_path: None,
            },
        }
    }

    /// Points the client at a different API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets a per-request deadline in seconds; `0` means no deadline
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.rest_api.timeout = Some(timeout_secs);
        self
    }

    /// Turns server certificate verification off (`true`) or on (`false`)
    #[must_use]
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.tls.accept_invalid_certs = accept;
        self
    }

    /// Adds a root certificate to trust when verification is on
    #[must_use]
    pub fn with_ca_cert(mut self, ca_path: impl Into<String>) -> Self {
        self.tls.ca_path = Some(ca_path.into());
        self
    }
}
