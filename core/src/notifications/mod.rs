//! Client for the Notifications service: webhook channels that receive
//! security findings for an account.

pub mod models;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{DetailedResponse, Headers, HttpMethod};
use crate::operation::{impl_operation, BodyShape, Descriptor, ServiceInfo};
use crate::service::{impl_service_client, BaseService};

pub use models::*;

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "notifications",
    version: "V1",
    default_url: "https://us-south.secadvisor.cloud.ibm.com/notifications",
};

/// Client for the Notifications service.
#[derive(Debug, Clone)]
pub struct NotificationsV1 {
    service: BaseService,
}

impl_service_client!(NotificationsV1, SERVICE);

const CHANNEL_BODY: BodyShape = BodyShape::Object(&[
    ("name", "name"),
    ("channel_type", "type"),
    ("endpoint", "endpoint"),
    ("description", "description"),
    ("severity", "severity"),
    ("enabled", "enabled"),
    ("alert_source", "alert_source"),
]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAllChannelsOptions {
    pub account_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListAllChannelsOptions => ChannelsList,
    Descriptor::new(
        SERVICE,
        "list_all_channels",
        HttpMethod::Get,
        "/v1/{account_id}/notifications/channels",
    )
    .required(&["account_id"])
    .path(&["account_id"])
    .query(&[("limit", "limit"), ("skip", "skip")])
);

/// `channel_type` is sent as `type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNotificationChannelOptions {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub channel_type: Option<ChannelType>,
    pub endpoint: Option<String>,
    pub description: Option<String>,
    pub severity: Option<Vec<ChannelSeverity>>,
    pub enabled: Option<bool>,
    pub alert_source: Option<Vec<NotificationChannelAlertSourceItem>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateNotificationChannelOptions => ChannelInfo,
    Descriptor::new(
        SERVICE,
        "create_notification_channel",
        HttpMethod::Post,
        "/v1/{account_id}/notifications/channels",
    )
    .required(&["account_id", "name", "channel_type", "endpoint"])
    .path(&["account_id"])
    .body(CHANNEL_BODY)
);

/// Bulk delete; `request_body` is the list of channel ids, sent as a bare
/// JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteNotificationChannelsOptions {
    pub account_id: Option<String>,
    pub request_body: Option<Vec<String>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteNotificationChannelsOptions => BulkDeleteChannelsResponse,
    Descriptor::new(
        SERVICE,
        "delete_notification_channels",
        HttpMethod::Delete,
        "/v1/{account_id}/notifications/channels",
    )
    .required(&["account_id", "request_body"])
    .path(&["account_id"])
    .body(BodyShape::Raw("request_body"))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteNotificationChannelOptions {
    pub account_id: Option<String>,
    pub channel_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteNotificationChannelOptions => DeleteChannelResponse,
    Descriptor::new(
        SERVICE,
        "delete_notification_channel",
        HttpMethod::Delete,
        "/v1/{account_id}/notifications/channels/{channel_id}",
    )
    .required(&["account_id", "channel_id"])
    .path(&["account_id", "channel_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetNotificationChannelOptions {
    pub account_id: Option<String>,
    pub channel_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetNotificationChannelOptions => GetChannelResponse,
    Descriptor::new(
        SERVICE,
        "get_notification_channel",
        HttpMethod::Get,
        "/v1/{account_id}/notifications/channels/{channel_id}",
    )
    .required(&["account_id", "channel_id"])
    .path(&["account_id", "channel_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNotificationChannelOptions {
    pub account_id: Option<String>,
    pub channel_id: Option<String>,
    pub name: Option<String>,
    pub channel_type: Option<ChannelType>,
    pub endpoint: Option<String>,
    pub description: Option<String>,
    pub severity: Option<Vec<ChannelSeverity>>,
    pub enabled: Option<bool>,
    pub alert_source: Option<Vec<NotificationChannelAlertSourceItem>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    UpdateNotificationChannelOptions => ChannelInfo,
    Descriptor::new(
        SERVICE,
        "update_notification_channel",
        HttpMethod::Put,
        "/v1/{account_id}/notifications/channels/{channel_id}",
    )
    .required(&["account_id", "channel_id", "name", "channel_type", "endpoint"])
    .path(&["account_id", "channel_id"])
    .body(CHANNEL_BODY)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestNotificationChannelOptions {
    pub account_id: Option<String>,
    pub channel_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    TestNotificationChannelOptions => TestChannelResponse,
    Descriptor::new(
        SERVICE,
        "test_notification_channel",
        HttpMethod::Get,
        "/v1/{account_id}/notifications/channels/{channel_id}/test",
    )
    .required(&["account_id", "channel_id"])
    .path(&["account_id", "channel_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetPublicKeyOptions {
    pub account_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetPublicKeyOptions => PublicKeyResponse,
    Descriptor::new(
        SERVICE,
        "get_public_key",
        HttpMethod::Get,
        "/v1/{account_id}/notifications/public_key",
    )
    .required(&["account_id"])
    .path(&["account_id"])
);

impl NotificationsV1 {
    pub fn list_all_channels(
        &self,
        params: &ListAllChannelsOptions,
    ) -> Result<DetailedResponse<ChannelsList>, ApiError> {
        self.service.send(params)
    }

    pub fn create_notification_channel(
        &self,
        params: &CreateNotificationChannelOptions,
    ) -> Result<DetailedResponse<ChannelInfo>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_notification_channels(
        &self,
        params: &DeleteNotificationChannelsOptions,
    ) -> Result<DetailedResponse<BulkDeleteChannelsResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_notification_channel(
        &self,
        params: &DeleteNotificationChannelOptions,
    ) -> Result<DetailedResponse<DeleteChannelResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn get_notification_channel(
        &self,
        params: &GetNotificationChannelOptions,
    ) -> Result<DetailedResponse<GetChannelResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn update_notification_channel(
        &self,
        params: &UpdateNotificationChannelOptions,
    ) -> Result<DetailedResponse<ChannelInfo>, ApiError> {
        self.service.send(params)
    }

    /// Ask the service to deliver a test payload to the channel's endpoint.
    pub fn test_notification_channel(
        &self,
        params: &TestNotificationChannelOptions,
    ) -> Result<DetailedResponse<TestChannelResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn get_public_key(
        &self,
        params: &GetPublicKeyOptions,
    ) -> Result<DetailedResponse<PublicKeyResponse>, ApiError> {
        self.service.send(params)
    }
}
