//! Payload shapes for the Notifications service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelType {
    Webhook,
    /// Any value newer than this client.
    #[serde(other)]
    Unknown,
}

/// Finding severities a channel can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelSeverity {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannelAlertSourceItem {
    pub provider_name: Option<String>,
    pub finding_types: Option<Vec<Value>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannelSeverity {
    pub critical: Option<bool>,
    pub high: Option<bool>,
    pub medium: Option<bool>,
    pub low: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub channel_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub channel_type: Option<ChannelType>,
    pub severity: Option<NotificationChannelSeverity>,
    pub endpoint: Option<String>,
    pub enabled: Option<bool>,
    pub alert_source: Option<Vec<NotificationChannelAlertSourceItem>>,
    pub frequency: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelsList {
    pub channels: Option<Vec<NotificationChannel>>,
}

/// Returned by create and update.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub channel_id: Option<String>,
    pub status_code: Option<u16>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteChannelsResponse {
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteChannelResponse {
    pub channel_id: Option<String>,
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetChannelResponse {
    pub channel: Option<NotificationChannel>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestChannelResponse {
    pub test: Option<String>,
}

/// PEM key used to verify signed webhook payloads.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicKeyResponse {
    #[serde(rename = "publicKey")]
    pub public_key: Option<String>,
}
