//! Payload shapes for the Findings service.
//!
//! Notes describe a kind of finding or metric published by a provider;
//! occurrences are individual instances of a note observed on a resource.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteKind {
    Finding,
    Kpi,
    Card,
    CardConfigured,
    Section,
    /// Any value newer than this client.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

/// Confidence that a finding is real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Certainty {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KpiAggregationType {
    Sum,
    #[serde(other)]
    Unknown,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reporter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelatedUrl {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemediationStep {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindingType {
    pub severity: Option<Severity>,
    pub next_steps: Option<Vec<RemediationStep>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiType {
    pub aggregation_type: Option<KpiAggregationType>,
}

/// Dashboard card. Elements are polymorphic (numeric, breakdown, time
/// series) and kept as raw JSON.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub section: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub order: Option<u64>,
    pub finding_note_names: Option<Vec<String>>,
    pub requires_configuration: Option<bool>,
    pub badge_text: Option<String>,
    pub badge_image: Option<String>,
    pub elements: Option<Vec<Value>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: Option<String>,
    pub image: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiNote {
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub kind: Option<NoteKind>,
    pub related_url: Option<Vec<RelatedUrl>>,
    pub expiration_time: Option<String>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
    pub id: Option<String>,
    pub shared: Option<bool>,
    pub reported_by: Option<Reporter>,
    pub finding: Option<FindingType>,
    pub kpi: Option<KpiType>,
    pub card: Option<Card>,
    pub section: Option<Section>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub region: Option<String>,
    pub resource_crn: Option<String>,
    pub resource_id: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub service_crn: Option<String>,
    pub service_name: Option<String>,
    pub environment_name: Option<String>,
    pub component_name: Option<String>,
    pub toolchain_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocketAddress {
    pub address: Option<String>,
    pub port: Option<u16>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConnection {
    pub direction: Option<String>,
    pub protocol: Option<String>,
    pub client: Option<SocketAddress>,
    pub server: Option<SocketAddress>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTransferred {
    pub client_bytes: Option<u64>,
    pub server_bytes: Option<u64>,
    pub client_packets: Option<u64>,
    pub server_packets: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Option<Severity>,
    pub certainty: Option<Certainty>,
    pub next_steps: Option<Vec<RemediationStep>>,
    pub network_connection: Option<NetworkConnection>,
    pub data_transferred: Option<DataTransferred>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub value: Option<f64>,
    pub total: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiOccurrence {
    pub resource_url: Option<String>,
    pub note_name: Option<String>,
    pub kind: Option<NoteKind>,
    pub remediation: Option<String>,
    pub create_time: Option<String>,
    pub update_time: Option<String>,
    pub id: Option<String>,
    pub context: Option<Context>,
    pub finding: Option<Finding>,
    pub kpi: Option<Kpi>,
    pub reference_data: Option<Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiListNotesResponse {
    pub notes: Option<Vec<ApiNote>>,
    pub next_page_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiListOccurrencesResponse {
    pub occurrences: Option<Vec<ApiOccurrence>>,
    pub next_page_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiListNoteOccurrencesResponse {
    pub occurrences: Option<Vec<ApiOccurrence>>,
    pub next_page_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiProvider {
    pub name: Option<String>,
    pub id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiListProvidersResponse {
    pub providers: Option<Vec<ApiProvider>>,
    pub total_count: Option<u64>,
}
