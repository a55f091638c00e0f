//! Synchronous clients for the IBM Cloud Security and Compliance Center
//! services: Compliance, Configuration Governance, Notifications and
//! Findings.
//!
//! # Overview
//! Each service client turns a typed parameter struct into an `HttpRequest`,
//! authenticates it, hands it to a [`Transport`] and parses the
//! `HttpResponse` into a [`DetailedResponse`]. Request building and response
//! parsing never touch the network, so both are usable and testable on
//! their own; the default transport is a blocking `ureq` agent.
//!
//! # Design
//! - Operations are data. A parameter struct plus a static `Descriptor`
//!   (method, URL template, required fields, path/query/body/header tables)
//!   drives one shared builder in `BaseService`.
//! - Validation runs before any I/O: missing required fields and unknown
//!   fields are reported without contacting the service.
//! - Header precedence, lowest to highest: SDK analytics headers, client
//!   default headers, `Accept`/`Content-Type`, correlation headers from
//!   parameters, caller headers. Names compare case-insensitively.
//! - Clients are immutable after construction and safe to share across
//!   threads.
//!
//! ```no_run
//! use scc_sdk::compliance::{ComplianceV3, CreateProfileOptions, ProfileType};
//! use scc_sdk::{BearerTokenAuthenticator, ServiceOptions};
//! use std::sync::Arc;
//!
//! let client = ComplianceV3::new(ServiceOptions {
//!     authenticator: Some(Arc::new(BearerTokenAuthenticator::new("token")?)),
//!     ..Default::default()
//! })?;
//! let created = client.create_profile(&CreateProfileOptions {
//!     instance_id: Some("inst-1".into()),
//!     profile_name: Some("baseline".into()),
//!     profile_type: Some(ProfileType::Custom),
//!     ..Default::default()
//! })?;
//! println!("{:?}", created.result.id);
//! # Ok::<(), scc_sdk::ApiError>(())
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod operation;
pub mod retry;
pub mod service;
pub mod transport;
pub mod validate;

pub mod compliance;
pub mod configuration_governance;
pub mod findings;
pub mod notifications;

pub use auth::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuthAuthenticator,
};
pub use config::ExternalConfig;
pub use error::ApiError;
pub use http::{DetailedResponse, Headers, HttpMethod, HttpRequest, HttpResponse};
pub use operation::{Operation, RequestOptions};
pub use retry::RetryPolicy;
pub use service::{BaseOptions, BaseService, ServiceOptions};
pub use transport::{Transport, UreqTransport};

pub use compliance::ComplianceV3;
pub use configuration_governance::ConfigurationGovernanceV1;
pub use findings::FindingsV1;
pub use notifications::NotificationsV1;
