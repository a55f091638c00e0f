//! Authenticators that attach credentials to outgoing requests.
//!
//! # Design
//! Credentials are an explicit provider passed to each client at
//! construction time. `IamAuthenticator` needs network access to exchange
//! its API key for a token, so `authenticate` receives the client's
//! transport rather than opening connections of its own.
//!
//! The [`Debug`] impls redact secrets so credentials never reach log output.

use std::fmt;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::headers::{ACCEPT, APPLICATION_JSON, CONTENT_TYPE};
use crate::http::{HttpMethod, HttpRequest};
use crate::transport::Transport;

pub const AUTHTYPE_NOAUTH: &str = "noAuth";
pub const AUTHTYPE_BEARERTOKEN: &str = "bearerToken";
pub const AUTHTYPE_BASIC: &str = "basic";
pub const AUTHTYPE_IAM: &str = "iam";

pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";
const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Attaches credentials to a request.
pub trait Authenticator: Send + Sync + fmt::Debug {
    fn authentication_type(&self) -> &'static str;

    fn authenticate(
        &self,
        request: &mut HttpRequest,
        transport: &dyn Transport,
    ) -> Result<(), ApiError>;
}

/// Reject empty credentials and values still wrapped in braces or quotes,
/// which usually means a template placeholder was never filled in.
fn check_credential(name: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Configuration(format!("{name} must not be empty")));
    }
    let wrapped = |open: char, close: char| value.starts_with(open) && value.ends_with(close);
    if wrapped('{', '}') || wrapped('"', '"') {
        return Err(ApiError::Configuration(format!(
            "{name} must not be enclosed in braces or quotes"
        )));
    }
    Ok(())
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_NOAUTH
    }

    fn authenticate(&self, _: &mut HttpRequest, _: &dyn Transport) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Sends a caller-managed bearer token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        check_credential("bearer token", &token)?;
        Ok(Self { token })
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BEARERTOKEN
    }

    fn authenticate(&self, request: &mut HttpRequest, _: &dyn Transport) -> Result<(), ApiError> {
        request.set_header("Authorization", format!("Bearer {}", self.token));
        Ok(())
    }
}

/// HTTP basic authentication.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ApiError> {
        let username = username.into();
        let password = password.into();
        check_credential("username", &username)?;
        check_credential("password", &password)?;
        Ok(Self { username, password })
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BASIC
    }

    fn authenticate(&self, request: &mut HttpRequest, _: &dyn Transport) -> Result<(), ApiError> {
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.username, self.password));
        request.set_header("Authorization", format!("Basic {encoded}"));
        Ok(())
    }
}

/// Token response from the IAM token endpoint.
#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    expiration: Option<u64>,
}

/// Cached IAM access token.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    /// Unix time after which the token is refreshed before use.
    refresh_at: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// When 80% of a token's lifetime has passed. Saturates for absurd lifetimes.
fn refresh_at(now: u64, expires_in: u64) -> u64 {
    now.saturating_add(expires_in.saturating_mul(8) / 10)
}

/// Exchanges an IBM Cloud API key for an IAM access token.
///
/// The token is cached and refreshed once 80% of its lifetime has passed.
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    cached_token: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    pub fn new(apikey: impl Into<String>) -> Result<Self, ApiError> {
        let apikey = apikey.into();
        check_credential("apikey", &apikey)?;
        Ok(Self {
            apikey,
            url: DEFAULT_IAM_URL.to_string(),
            cached_token: Mutex::new(None),
        })
    }

    /// Use a different IAM endpoint; `/identity/token` is appended.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the token exchange request.
    pub fn build_token_request(&self) -> HttpRequest {
        let form = [
            ("grant_type", IAM_GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", "cloud_iam"),
        ]
        .iter()
        .map(|(k, v)| format!("{k}={}", utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&");

        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/identity/token", self.url),
            headers: vec![
                (
                    CONTENT_TYPE.to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                ),
                (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
            ],
            body: Some(form),
        }
    }

    fn request_token(&self, transport: &dyn Transport) -> Result<CachedToken, ApiError> {
        let response = transport.execute(&self.build_token_request())?;
        if !response.is_success() {
            return Err(ApiError::Authentication(format!(
                "IAM token request returned {} {}",
                response.status, response.status_text
            )));
        }
        let token: IamTokenResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        let now = unix_now();
        let expires_in = match (token.expires_in, token.expiration) {
            (Some(expires_in), _) => expires_in,
            (None, Some(expiration)) => expiration.saturating_sub(now),
            (None, None) => 0,
        };
        debug!(expires_in, "obtained IAM access token");
        Ok(CachedToken {
            access_token: token.access_token,
            refresh_at: refresh_at(now, expires_in),
        })
    }

    /// Current access token, fetching a new one when missing or due for refresh.
    pub fn token(&self, transport: &dyn Transport) -> Result<String, ApiError> {
        let mut cache = self
            .cached_token
            .lock()
            .map_err(|_| ApiError::Authentication("token cache poisoned".into()))?;
        if let Some(cached) = cache.as_ref() {
            if unix_now() < cached.refresh_at {
                return Ok(cached.access_token.clone());
            }
        }
        let fresh = self.request_token(transport)?;
        let token = fresh.access_token.clone();
        *cache = Some(fresh);
        Ok(token)
    }
}

impl fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("apikey", &"[REDACTED]")
            .field("url", &self.url)
            .finish()
    }
}

impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_IAM
    }

    fn authenticate(
        &self,
        request: &mut HttpRequest,
        transport: &dyn Transport,
    ) -> Result<(), ApiError> {
        let token = self.token(transport)?;
        request.set_header("Authorization", format!("Bearer {token}"));
        Ok(())
    }
}
