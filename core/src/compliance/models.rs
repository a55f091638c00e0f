//! Payload shapes for the Compliance service.
//!
//! Every field is optional: these mirror the service's JSON schema and the
//! service is responsible for validating their contents.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Whether a control library is IBM-provided or user-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlLibraryType {
    Predefined,
    Custom,
    /// Any value newer than this client.
    #[serde(other)]
    Unknown,
}

/// Whether a profile is IBM-provided or user-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileType {
    Predefined,
    Custom,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStatus {
    Enabled,
    Disabled,
    #[serde(other)]
    Unknown,
}

/// How often an attachment is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSchedule {
    Daily,
    #[serde(rename = "every_7_days")]
    Every7Days,
    #[serde(rename = "every_30_days")]
    Every30Days,
    #[serde(other)]
    Unknown,
}

/// Link to a page of a paginated collection.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub href: Option<String>,
    pub start: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub parameter_name: Option<String>,
    pub parameter_display_name: Option<String>,
    pub parameter_type: Option<String>,
}

/// One assessment that implements a control specification.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    pub assessment_id: Option<String>,
    pub assessment_method: Option<String>,
    pub assessment_type: Option<String>,
    pub assessment_description: Option<String>,
    pub parameter_count: Option<u64>,
    pub parameters: Option<Vec<ParameterInfo>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSpecifications {
    pub control_specification_id: Option<String>,
    pub responsibility: Option<String>,
    pub component_id: Option<String>,
    pub component_name: Option<String>,
    pub environment: Option<String>,
    pub control_specification_description: Option<String>,
    pub assessments_count: Option<u64>,
    pub assessments: Option<Vec<Implementation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlDocs {
    pub control_docs_id: Option<String>,
    pub control_docs_type: Option<String>,
}

/// A control as it appears inside a control library.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlsInControlLib {
    pub control_name: Option<String>,
    pub control_id: Option<String>,
    pub control_description: Option<String>,
    pub control_category: Option<String>,
    pub control_parent: Option<String>,
    pub control_tags: Option<Vec<String>>,
    pub control_specifications: Option<Vec<ControlSpecifications>>,
    pub control_docs: Option<ControlDocs>,
    pub control_requirement: Option<bool>,
    pub status: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibrary {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub control_library_name: Option<String>,
    pub control_library_description: Option<String>,
    pub control_library_type: Option<ControlLibraryType>,
    pub version_group_label: Option<String>,
    pub control_library_version: Option<String>,
    pub created_on: Option<String>,
    pub created_by: Option<String>,
    pub updated_on: Option<String>,
    pub updated_by: Option<String>,
    pub latest: Option<bool>,
    pub hierarchy_enabled: Option<bool>,
    pub controls_count: Option<u64>,
    pub control_parents_count: Option<u64>,
    pub controls: Option<Vec<ControlsInControlLib>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibraryCollection {
    pub total_count: Option<u64>,
    pub limit: Option<u64>,
    pub first: Option<PageRef>,
    pub next: Option<PageRef>,
    pub control_libraries: Option<Vec<ControlLibrary>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlLibraryDelete {
    pub deleted: Option<String>,
}

/// Reference to a control, used when building a profile.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileControlsPrototype {
    pub control_library_id: Option<String>,
    pub control_id: Option<String>,
}

/// A control as it appears inside a profile.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileControls {
    pub control_library_id: Option<String>,
    pub control_id: Option<String>,
    pub control_library_version: Option<String>,
    pub control_name: Option<String>,
    pub control_description: Option<String>,
    pub control_category: Option<String>,
    pub control_parent: Option<String>,
    pub control_requirement: Option<bool>,
    pub control_docs: Option<ControlDocs>,
    pub control_specifications_count: Option<u64>,
    pub control_specifications: Option<Vec<ControlSpecifications>>,
}

/// Default value for an assessment parameter within a profile.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultParameters {
    pub assessment_type: Option<String>,
    pub assessment_id: Option<String>,
    pub parameter_name: Option<String>,
    pub parameter_default_value: Option<String>,
    pub parameter_display_name: Option<String>,
    pub parameter_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<String>,
    pub profile_name: Option<String>,
    pub profile_description: Option<String>,
    pub profile_type: Option<ProfileType>,
    pub profile_version: Option<String>,
    pub version_group_label: Option<String>,
    pub instance_id: Option<String>,
    pub latest: Option<bool>,
    pub hierarchy_enabled: Option<bool>,
    pub created_by: Option<String>,
    pub created_on: Option<String>,
    pub updated_by: Option<String>,
    pub updated_on: Option<String>,
    pub controls_count: Option<u64>,
    pub control_parents_count: Option<u64>,
    pub attachments_count: Option<u64>,
    pub controls: Option<Vec<ProfileControls>>,
    pub default_parameters: Option<Vec<DefaultParameters>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCollection {
    pub total_count: Option<u64>,
    pub limit: Option<u64>,
    pub first: Option<PageRef>,
    pub next: Option<PageRef>,
    pub profiles: Option<Vec<Profile>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDefaultParameters {
    pub id: Option<String>,
    pub default_parameters: Option<Vec<DefaultParameters>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyItem {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// Where an attachment applies, e.g. an account or a resource group.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiCloudScope {
    pub environment: Option<String>,
    pub properties: Option<Vec<PropertyItem>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FailedControls {
    pub threshold_limit: Option<u64>,
    pub failed_control_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentsNotifications {
    pub enabled: Option<bool>,
    pub controls: Option<FailedControls>,
}

/// Parameter value applied to an attachment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentParameter {
    pub assessment_type: Option<String>,
    pub assessment_id: Option<String>,
    pub parameter_name: Option<String>,
    pub parameter_value: Option<String>,
    pub parameter_display_name: Option<String>,
    pub parameter_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentParameters {
    pub parameters: Option<Vec<AttachmentParameter>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastScan {
    pub id: Option<String>,
    pub status: Option<String>,
    pub time: Option<String>,
}

/// Request shape for one new attachment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentsPrototype {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub scope: Option<Vec<MultiCloudScope>>,
    pub status: Option<AttachmentStatus>,
    pub schedule: Option<ScanSchedule>,
    pub notifications: Option<AttachmentsNotifications>,
    pub attachment_parameters: Option<Vec<AttachmentParameter>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Option<String>,
    pub profile_id: Option<String>,
    pub account_id: Option<String>,
    pub instance_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub scope: Option<Vec<MultiCloudScope>>,
    pub created_on: Option<String>,
    pub created_by: Option<String>,
    pub updated_on: Option<String>,
    pub updated_by: Option<String>,
    pub status: Option<AttachmentStatus>,
    pub schedule: Option<ScanSchedule>,
    pub notifications: Option<AttachmentsNotifications>,
    pub attachment_parameters: Option<Vec<AttachmentParameter>>,
    pub last_scan: Option<LastScan>,
    pub next_scan_time: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPrototypeResponse {
    pub profile_id: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentCollection {
    pub total_count: Option<u64>,
    pub limit: Option<u64>,
    pub first: Option<PageRef>,
    pub next: Option<PageRef>,
    pub attachments: Option<Vec<Attachment>>,
}

/// A scan started for an attachment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub attachment_id: Option<String>,
    pub report_id: Option<String>,
    pub status: Option<String>,
    pub last_scan_time: Option<String>,
    pub next_scan_time: Option<String>,
    pub scan_type: Option<String>,
    pub occurence: Option<u64>,
}
