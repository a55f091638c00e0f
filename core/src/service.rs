//! Shared client plumbing used by every service.
//!
//! # Design
//! `BaseService` holds the per-client configuration (service URL,
//! authenticator, default headers, transport, retry policy), which is
//! immutable once requests start flowing. Each operation goes through the
//! same three steps, each usable on its own:
//!
//! - `build_request` validates the parameter object and produces an
//!   unauthenticated `HttpRequest`,
//! - `send` authenticates it and runs it through the transport, retrying
//!   when a policy is enabled,
//! - `parse_response` turns the `HttpResponse` into a `DetailedResponse`.

use std::sync::Arc;
use std::thread;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::Authenticator;
use crate::config::ExternalConfig;
use crate::error::ApiError;
use crate::headers::{sdk_headers, HeaderComposer, ACCEPT, APPLICATION_JSON, CONTENT_TYPE};
use crate::http::{DetailedResponse, Headers, HttpRequest, HttpResponse};
use crate::operation::{scalar, Operation, RequestOptions, ServiceInfo};
use crate::retry::RetryPolicy;
use crate::transport::{Transport, UreqTransport};
use crate::validate::validate_params;

/// Caller-facing construction options shared by all service clients.
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    /// Key for external configuration lookup; defaults to the service's name.
    pub service_name: Option<String>,
    /// Overrides the configured or default service URL.
    pub service_url: Option<String>,
    /// Resolved from external configuration when omitted.
    pub authenticator: Option<Arc<dyn Authenticator>>,
    /// Sent with every request, below per-operation headers in precedence.
    pub headers: Headers,
    /// Defaults to a `UreqTransport`.
    pub transport: Option<Arc<dyn Transport>>,
}

/// Snapshot of the configuration a client was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOptions {
    pub service_url: String,
    pub service_name: String,
    pub authentication_type: &'static str,
}

/// Configuration and request pipeline behind every service client.
#[derive(Debug, Clone)]
pub struct BaseService {
    info: ServiceInfo,
    service_name: String,
    service_url: String,
    authenticator: Arc<dyn Authenticator>,
    default_headers: Headers,
    transport: Arc<dyn Transport>,
    retry: Option<RetryPolicy>,
}

fn check_service_url(url: &str) -> Result<String, ApiError> {
    if url.contains('{') || url.contains('}') {
        return Err(ApiError::Configuration(
            "service URL must not contain '{' or '}'".into(),
        ));
    }
    Ok(url.trim_end_matches('/').to_string())
}

impl BaseService {
    /// Build a client for `info`, filling gaps in `options` from external
    /// configuration keyed by the service name.
    pub fn new(info: ServiceInfo, options: ServiceOptions) -> Result<Self, ApiError> {
        let service_name = options
            .service_name
            .unwrap_or_else(|| info.name.to_string());

        let needs_external = options.authenticator.is_none() || options.service_url.is_none();
        let external = if needs_external {
            ExternalConfig::from_environment(&service_name)
        } else {
            ExternalConfig::default()
        };

        let authenticator = match options.authenticator {
            Some(authenticator) => authenticator,
            None => external.authenticator()?,
        };
        let service_url = match options.service_url.as_deref() {
            Some(url) => url,
            None => external.service_url().unwrap_or(info.default_url),
        };
        let transport = match options.transport {
            Some(transport) => transport,
            None => Arc::new(UreqTransport::new(None, external.disable_ssl())),
        };

        Ok(Self {
            info,
            service_url: check_service_url(service_url)?,
            service_name,
            authenticator,
            default_headers: options.headers,
            transport,
            retry: external.retry_policy()?,
        })
    }

    pub fn service_info(&self) -> ServiceInfo {
        self.info
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn set_service_url(&mut self, url: &str) -> Result<(), ApiError> {
        self.service_url = check_service_url(url)?;
        Ok(())
    }

    pub fn set_default_headers(&mut self, headers: Headers) {
        self.default_headers = headers;
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn base_options(&self) -> BaseOptions {
        BaseOptions {
            service_url: self.service_url.clone(),
            service_name: self.service_name.clone(),
            authentication_type: self.authenticator.authentication_type(),
        }
    }

    pub fn enable_retries(&mut self, policy: RetryPolicy) {
        self.retry = Some(policy);
    }

    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    pub fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.retry.as_ref()
    }

    /// Validate `params` and extract its path, query and body values.
    pub fn request_options<P: Operation>(&self, params: &P) -> Result<RequestOptions, ApiError> {
        let value = serde_json::to_value(params).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.options_from_value::<P>(&value)
    }

    fn options_from_value<P: Operation>(&self, value: &Value) -> Result<RequestOptions, ApiError> {
        let descriptor = &P::DESCRIPTOR;
        validate_params(Some(value), descriptor.required, &descriptor.allowed_fields())?;
        RequestOptions::from_params(descriptor, value)
    }

    /// Build the unauthenticated request for `params`.
    pub fn build_request<P: Operation>(&self, params: &P) -> Result<HttpRequest, ApiError> {
        let descriptor = &P::DESCRIPTOR;
        let value = serde_json::to_value(params).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let options = self.options_from_value::<P>(&value)?;

        let mut negotiation: Vec<(&str, String)> = Vec::new();
        if descriptor.accept {
            negotiation.push((ACCEPT, APPLICATION_JSON.to_string()));
        }
        if let Some(body) = &options.body {
            negotiation.push((CONTENT_TYPE, body.content_type().to_string()));
        }

        let correlation = descriptor.headers.iter().filter_map(|&(field, header)| {
            value
                .get(field)
                .filter(|v| !v.is_null())
                .map(|v| (header, scalar(v)))
        });

        let headers = HeaderComposer::new()
            .layer(sdk_headers(
                self.info.name,
                self.info.version,
                descriptor.operation_id,
            ))
            .layer(self.default_headers.iter().map(|(k, v)| (k, v)))
            .layer(negotiation)
            .layer(correlation)
            .layer(params.caller_headers().iter().map(|(k, v)| (k, v)))
            .finish();

        let body = options.body.as_ref().map(|b| b.render()).transpose()?;

        Ok(HttpRequest {
            method: options.method,
            url: options.resolve_url(&self.service_url),
            headers,
            body,
        })
    }

    /// Interpret a response: 2xx bodies are deserialized, everything else
    /// becomes an error carrying the service's message.
    pub fn parse_response<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<DetailedResponse<T>, ApiError> {
        if !response.is_success() {
            return Err(error_from_response(&response));
        }
        let result = if response.body.trim().is_empty() {
            serde_json::from_value(Value::Null)
        } else {
            serde_json::from_str(&response.body)
        }
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        Ok(DetailedResponse {
            result,
            status: response.status,
            status_text: response.status_text,
            headers: response.headers,
        })
    }

    /// Build, authenticate, execute and parse one operation.
    pub fn send<P: Operation>(&self, params: &P) -> Result<DetailedResponse<P::Output>, ApiError> {
        let mut request = self.build_request(params)?;
        self.authenticator
            .authenticate(&mut request, self.transport.as_ref())?;

        debug!(
            service = self.info.name,
            operation = P::DESCRIPTOR.operation_id,
            method = %request.method,
            url = %request.url,
            "calling operation"
        );
        let response = self.execute(&request, P::DESCRIPTOR.operation_id)?;
        self.parse_response(response)
    }

    fn execute(&self, request: &HttpRequest, operation: &str) -> Result<HttpResponse, ApiError> {
        let mut attempt: u32 = 0;
        loop {
            let outcome = self.transport.execute(request);
            let Some(policy) = &self.retry else {
                return outcome;
            };

            let (retry, response) = match &outcome {
                Ok(response) => (policy.should_retry_status(attempt, response.status), Some(response)),
                Err(ApiError::Transport(_)) => (policy.should_retry_transport(attempt), None),
                Err(_) => (false, None),
            };
            if !retry {
                return outcome;
            }

            let delay = policy.delay_for(attempt, response);
            warn!(
                operation,
                attempt = attempt + 1,
                max_retries = policy.max_retries,
                delay_ms = delay.as_millis() as u64,
                "retrying request"
            );
            thread::sleep(delay);
            attempt += 1;
        }
    }
}

/// Generates construction and configuration passthroughs for a service
/// client wrapping a `BaseService`.
macro_rules! impl_service_client {
    ($client:ident, $info:expr) => {
        impl $client {
            pub const DEFAULT_SERVICE_URL: &'static str = $info.default_url;
            pub const DEFAULT_SERVICE_NAME: &'static str = $info.name;

            /// Construct a client; omitted options are resolved from external
            /// configuration keyed by the service name.
            pub fn new(
                options: $crate::service::ServiceOptions,
            ) -> Result<Self, $crate::error::ApiError> {
                Ok(Self {
                    service: $crate::service::BaseService::new($info, options)?,
                })
            }

            pub fn base(&self) -> &$crate::service::BaseService {
                &self.service
            }

            pub fn base_mut(&mut self) -> &mut $crate::service::BaseService {
                &mut self.service
            }

            pub fn enable_retries(&mut self, policy: $crate::retry::RetryPolicy) {
                self.service.enable_retries(policy);
            }

            pub fn disable_retries(&mut self) {
                self.service.disable_retries();
            }
        }
    };
}
pub(crate) use impl_service_client;

/// Pull a human-readable message out of the common error body shapes.
fn error_message(response: &HttpResponse) -> String {
    let fallback = || {
        if response.status_text.is_empty() {
            format!("HTTP {}", response.status)
        } else {
            response.status_text.clone()
        }
    };
    let Ok(body) = serde_json::from_str::<Value>(&response.body) else {
        return fallback();
    };

    let text = |v: &Value| v.as_str().map(str::to_string);
    body.get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(text)
        .or_else(|| body.get("error").and_then(text))
        .or_else(|| body.get("message").and_then(text))
        .or_else(|| body.get("errorMessage").and_then(text))
        .unwrap_or_else(fallback)
}

fn error_from_response(response: &HttpResponse) -> ApiError {
    let message = error_message(response);
    if response.status == 404 {
        return ApiError::NotFound(message);
    }
    ApiError::Http {
        status: response.status,
        status_text: response.status_text.clone(),
        message,
    }
}
