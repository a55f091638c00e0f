//! External configuration keyed by service name.
//!
//! Properties are looked up under an upper-cased prefix derived from the
//! service name (`configuration-governance` → `CONFIGURATION_GOVERNANCE_`).
//! Sources are consulted in order and the first one that defines any
//! property for the service wins:
//!
//! 1. the credentials file named by `IBM_CREDENTIALS_FILE`, else
//!    `./ibm-credentials.env`, else `$HOME/ibm-credentials.env`
//! 2. process environment variables

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::auth::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuthAuthenticator,
};
use crate::error::ApiError;
use crate::retry::RetryPolicy;

pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";
pub const DEFAULT_CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

/// Properties found for one service, with the prefix stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalConfig {
    properties: HashMap<String, String>,
}

fn prefix_for(service_name: &str) -> String {
    format!("{}_", service_name.to_uppercase().replace('-', "_"))
}

fn truthy(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

impl ExternalConfig {
    /// Read the credentials file, falling back to the process environment.
    pub fn from_environment(service_name: &str) -> Self {
        if let Some(path) = credentials_file_path() {
            match dotenvy::from_path_iter(&path) {
                Ok(lines) => {
                    let config = Self::from_vars(service_name, pairs(lines));
                    if !config.is_empty() {
                        debug!(service = service_name, path = %path.display(), "loaded credentials file");
                        return config;
                    }
                }
                Err(err) => debug!(path = %path.display(), %err, "credentials file unreadable"),
            }
        }
        Self::from_vars(service_name, std::env::vars())
    }

    /// Parse credentials-file contents without touching the process
    /// environment. Quotes and `export` prefixes are handled the way
    /// `.env` files expect; malformed lines are skipped.
    pub fn from_env_file_contents(service_name: &str, contents: &str) -> Self {
        Self::from_vars(service_name, pairs(dotenvy::from_read_iter(contents.as_bytes())))
    }

    /// Keep the pairs whose key carries the service prefix.
    pub fn from_vars<I>(service_name: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = prefix_for(service_name);
        let properties = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(&prefix)
                    .filter(|name| !name.is_empty())
                    .map(|name| (name.to_string(), value))
            })
            .collect();
        Self { properties }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Property value by un-prefixed name, e.g. `APIKEY`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn service_url(&self) -> Option<&str> {
        self.get("URL")
    }

    pub fn disable_ssl(&self) -> bool {
        self.get("DISABLE_SSL").is_some_and(truthy)
    }

    /// Retry policy when `ENABLE_RETRIES` is true.
    pub fn retry_policy(&self) -> Result<Option<RetryPolicy>, ApiError> {
        if !self.get("ENABLE_RETRIES").is_some_and(truthy) {
            return Ok(None);
        }
        let mut policy = RetryPolicy::default();
        if let Some(max) = self.get("MAX_RETRIES") {
            policy.max_retries = max
                .trim()
                .parse()
                .map_err(|_| ApiError::Configuration(format!("invalid MAX_RETRIES: {max}")))?;
        }
        if let Some(interval) = self.get("RETRY_INTERVAL") {
            let secs: u64 = interval.trim().parse().map_err(|_| {
                ApiError::Configuration(format!("invalid RETRY_INTERVAL: {interval}"))
            })?;
            policy.max_retry_interval = Duration::from_secs(secs);
        }
        Ok(Some(policy))
    }

    /// Build the authenticator described by `AUTH_TYPE` and its credentials.
    ///
    /// Without `AUTH_TYPE`, an `APIKEY` selects IAM.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>, ApiError> {
        let auth_type = match self.get("AUTH_TYPE") {
            Some(t) => t.trim().to_ascii_lowercase(),
            None if self.get("APIKEY").is_some() => "iam".to_string(),
            None => {
                return Err(ApiError::Configuration(
                    "no authentication properties found".into(),
                ))
            }
        };
        let require = |name: &str| {
            self.get(name).ok_or_else(|| {
                ApiError::Configuration(format!("{name} is required for {auth_type} authentication"))
            })
        };

        let authenticator: Arc<dyn Authenticator> = match auth_type.as_str() {
            "noauth" => Arc::new(NoAuthAuthenticator),
            "bearertoken" => Arc::new(BearerTokenAuthenticator::new(require("BEARER_TOKEN")?)?),
            "basic" => Arc::new(BasicAuthenticator::new(
                require("USERNAME")?,
                require("PASSWORD")?,
            )?),
            "iam" => {
                let mut iam = IamAuthenticator::new(require("APIKEY")?)?;
                if let Some(url) = self.get("AUTH_URL") {
                    iam = iam.with_url(url);
                }
                Arc::new(iam)
            }
            other => {
                return Err(ApiError::Configuration(format!(
                    "unsupported authentication type: {other}"
                )))
            }
        };
        Ok(authenticator)
    }
}

fn pairs<R: std::io::Read>(lines: dotenvy::Iter<R>) -> impl Iterator<Item = (String, String)> {
    lines.filter_map(|line| match line {
        Ok(pair) => Some(pair),
        Err(err) => {
            debug!(%err, "skipping credentials line");
            None
        }
    })
}

fn credentials_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIALS_FILE_ENV) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_CREDENTIALS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(DEFAULT_CREDENTIALS_FILE_NAME))
        .filter(|path| path.is_file())
}
