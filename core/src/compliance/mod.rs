//! Client for the Compliance service: control libraries, profiles,
//! attachments, attachment parameters and scans.
//!
//! Every path is scoped to a service instance:
//! `/instances/{instance_id}/v3/...`.

pub mod models;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{DetailedResponse, Headers, HttpMethod};
use crate::operation::{impl_operation, BodyShape, Descriptor, ServiceInfo};
use crate::service::{impl_service_client, BaseService};

pub use models::*;

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "compliance",
    version: "V3",
    default_url: "https://us-south.compliance.cloud.ibm.com",
};

/// Client for the Compliance service.
#[derive(Debug, Clone)]
pub struct ComplianceV3 {
    service: BaseService,
}

impl_service_client!(ComplianceV3, SERVICE);

// ---------------------------------------------------------------------------
// Control libraries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListControlLibrariesOptions {
    pub instance_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub control_library_type: Option<ControlLibraryType>,
    pub start: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListControlLibrariesOptions => ControlLibraryCollection,
    Descriptor::new(
        SERVICE,
        "list_control_libraries",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/control_libraries",
    )
    .required(&["instance_id"])
    .path(&["instance_id"])
    .query(&[
        ("limit", "limit"),
        ("control_library_type", "control_library_type"),
        ("start", "start"),
    ])
);

const CONTROL_LIBRARY_BODY: BodyShape = BodyShape::Object(&[
    ("control_library_name", "control_library_name"),
    ("control_library_description", "control_library_description"),
    ("control_library_type", "control_library_type"),
    ("controls", "controls"),
    ("version_group_label", "version_group_label"),
    ("control_library_version", "control_library_version"),
    ("latest", "latest"),
    ("controls_count", "controls_count"),
]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCustomControlLibraryOptions {
    pub instance_id: Option<String>,
    pub control_library_name: Option<String>,
    pub control_library_description: Option<String>,
    pub control_library_type: Option<ControlLibraryType>,
    pub controls: Option<Vec<ControlsInControlLib>>,
    pub version_group_label: Option<String>,
    pub control_library_version: Option<String>,
    pub latest: Option<bool>,
    pub controls_count: Option<u64>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateCustomControlLibraryOptions => ControlLibrary,
    Descriptor::new(
        SERVICE,
        "create_custom_control_library",
        HttpMethod::Post,
        "/instances/{instance_id}/v3/control_libraries",
    )
    .required(&[
        "instance_id",
        "control_library_name",
        "control_library_description",
        "control_library_type",
        "controls",
    ])
    .path(&["instance_id"])
    .body(CONTROL_LIBRARY_BODY)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetControlLibraryOptions {
    pub instance_id: Option<String>,
    pub control_libraries_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteCustomControlLibraryOptions {
    pub instance_id: Option<String>,
    pub control_libraries_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetControlLibraryOptions => ControlLibrary,
    Descriptor::new(
        SERVICE,
        "get_control_library",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/control_libraries/{control_libraries_id}",
    )
    .required(&["instance_id", "control_libraries_id"])
    .path(&["instance_id", "control_libraries_id"])
);

impl_operation!(
    DeleteCustomControlLibraryOptions => ControlLibraryDelete,
    Descriptor::new(
        SERVICE,
        "delete_custom_control_library",
        HttpMethod::Delete,
        "/instances/{instance_id}/v3/control_libraries/{control_libraries_id}",
    )
    .required(&["instance_id", "control_libraries_id"])
    .path(&["instance_id", "control_libraries_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceCustomControlLibraryOptions {
    pub instance_id: Option<String>,
    pub control_libraries_id: Option<String>,
    pub control_library_name: Option<String>,
    pub control_library_description: Option<String>,
    pub control_library_type: Option<ControlLibraryType>,
    pub controls: Option<Vec<ControlsInControlLib>>,
    pub version_group_label: Option<String>,
    pub control_library_version: Option<String>,
    pub latest: Option<bool>,
    pub controls_count: Option<u64>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ReplaceCustomControlLibraryOptions => ControlLibrary,
    Descriptor::new(
        SERVICE,
        "replace_custom_control_library",
        HttpMethod::Put,
        "/instances/{instance_id}/v3/control_libraries/{control_libraries_id}",
    )
    .required(&[
        "instance_id",
        "control_libraries_id",
        "control_library_name",
        "control_library_description",
        "control_library_type",
        "controls",
    ])
    .path(&["instance_id", "control_libraries_id"])
    .body(CONTROL_LIBRARY_BODY)
);

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProfilesOptions {
    pub instance_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub profile_type: Option<ProfileType>,
    pub start: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListProfilesOptions => ProfileCollection,
    Descriptor::new(
        SERVICE,
        "list_profiles",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/profiles",
    )
    .required(&["instance_id"])
    .path(&["instance_id"])
    .query(&[
        ("limit", "limit"),
        ("profile_type", "profile_type"),
        ("start", "start"),
    ])
);

const PROFILE_BODY: BodyShape = BodyShape::Object(&[
    ("profile_name", "profile_name"),
    ("profile_description", "profile_description"),
    ("profile_type", "profile_type"),
    ("controls", "controls"),
    ("default_parameters", "default_parameters"),
]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProfileOptions {
    pub instance_id: Option<String>,
    pub profile_name: Option<String>,
    pub profile_type: Option<ProfileType>,
    pub profile_description: Option<String>,
    pub controls: Option<Vec<ProfileControlsPrototype>>,
    pub default_parameters: Option<Vec<DefaultParameters>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateProfileOptions => Profile,
    Descriptor::new(
        SERVICE,
        "create_profile",
        HttpMethod::Post,
        "/instances/{instance_id}/v3/profiles",
    )
    .required(&["instance_id", "profile_name", "profile_type"])
    .path(&["instance_id"])
    .body(PROFILE_BODY)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetProfileOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteCustomProfileOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetProfileDefaultParametersOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetProfileOptions => Profile,
    Descriptor::new(
        SERVICE,
        "get_profile",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/profiles/{profiles_id}",
    )
    .required(&["instance_id", "profiles_id"])
    .path(&["instance_id", "profiles_id"])
);

impl_operation!(
    DeleteCustomProfileOptions => Profile,
    Descriptor::new(
        SERVICE,
        "delete_custom_profile",
        HttpMethod::Delete,
        "/instances/{instance_id}/v3/profiles/{profiles_id}",
    )
    .required(&["instance_id", "profiles_id"])
    .path(&["instance_id", "profiles_id"])
);

impl_operation!(
    GetProfileDefaultParametersOptions => ProfileDefaultParameters,
    Descriptor::new(
        SERVICE,
        "get_profile_default_parameters",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/parameters",
    )
    .required(&["instance_id", "profiles_id"])
    .path(&["instance_id", "profiles_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceProfileOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub profile_name: Option<String>,
    pub profile_type: Option<ProfileType>,
    pub profile_description: Option<String>,
    pub controls: Option<Vec<ProfileControlsPrototype>>,
    pub default_parameters: Option<Vec<DefaultParameters>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ReplaceProfileOptions => Profile,
    Descriptor::new(
        SERVICE,
        "replace_profile",
        HttpMethod::Put,
        "/instances/{instance_id}/v3/profiles/{profiles_id}",
    )
    .required(&["instance_id", "profiles_id", "profile_name", "profile_type"])
    .path(&["instance_id", "profiles_id"])
    .body(PROFILE_BODY)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceProfileParametersOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub id: Option<String>,
    pub default_parameters: Option<Vec<DefaultParameters>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ReplaceProfileParametersOptions => ProfileDefaultParameters,
    Descriptor::new(
        SERVICE,
        "replace_profile_parameters",
        HttpMethod::Put,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/parameters",
    )
    .required(&["instance_id", "profiles_id"])
    .path(&["instance_id", "profiles_id"])
    .body(BodyShape::Object(&[
        ("id", "id"),
        ("default_parameters", "default_parameters"),
    ]))
);

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAttachmentOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachments: Option<Vec<AttachmentsPrototype>>,
    pub profile_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateAttachmentOptions => AttachmentPrototypeResponse,
    Descriptor::new(
        SERVICE,
        "create_attachment",
        HttpMethod::Post,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments",
    )
    .required(&["instance_id", "profiles_id", "attachments"])
    .path(&["instance_id", "profiles_id"])
    .body(BodyShape::Object(&[
        ("attachments", "attachments"),
        ("profile_id", "profile_id"),
    ]))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAttachmentsOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub start: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListAttachmentsOptions => AttachmentCollection,
    Descriptor::new(
        SERVICE,
        "list_attachments",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments",
    )
    .required(&["instance_id", "profiles_id"])
    .path(&["instance_id", "profiles_id"])
    .query(&[("limit", "limit"), ("start", "start")])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetProfileAttachmentOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteProfileAttachmentOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetAttachmentParametersOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetProfileAttachmentOptions => Attachment,
    Descriptor::new(
        SERVICE,
        "get_profile_attachment",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments/{attachment_id}",
    )
    .required(&["instance_id", "profiles_id", "attachment_id"])
    .path(&["instance_id", "profiles_id", "attachment_id"])
);

impl_operation!(
    DeleteProfileAttachmentOptions => Attachment,
    Descriptor::new(
        SERVICE,
        "delete_profile_attachment",
        HttpMethod::Delete,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments/{attachment_id}",
    )
    .required(&["instance_id", "profiles_id", "attachment_id"])
    .path(&["instance_id", "profiles_id", "attachment_id"])
);

impl_operation!(
    GetAttachmentParametersOptions => AttachmentParameters,
    Descriptor::new(
        SERVICE,
        "get_attachment_parameters",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments/{attachment_id}/parameters",
    )
    .required(&["instance_id", "profiles_id", "attachment_id"])
    .path(&["instance_id", "profiles_id", "attachment_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceProfileAttachmentOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachment_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub scope: Option<Vec<MultiCloudScope>>,
    pub status: Option<AttachmentStatus>,
    pub schedule: Option<ScanSchedule>,
    pub notifications: Option<AttachmentsNotifications>,
    pub attachment_parameters: Option<Vec<AttachmentParameter>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ReplaceProfileAttachmentOptions => Attachment,
    Descriptor::new(
        SERVICE,
        "replace_profile_attachment",
        HttpMethod::Put,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments/{attachment_id}",
    )
    .required(&["instance_id", "profiles_id", "attachment_id"])
    .path(&["instance_id", "profiles_id", "attachment_id"])
    .body(BodyShape::Object(&[
        ("name", "name"),
        ("description", "description"),
        ("scope", "scope"),
        ("status", "status"),
        ("schedule", "schedule"),
        ("notifications", "notifications"),
        ("attachment_parameters", "attachment_parameters"),
    ]))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAttachmentsAccountOptions {
    pub instance_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub start: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListAttachmentsAccountOptions => AttachmentCollection,
    Descriptor::new(
        SERVICE,
        "list_attachments_account",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/attachments",
    )
    .required(&["instance_id"])
    .path(&["instance_id"])
    .query(&[("limit", "limit"), ("start", "start")])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceAttachmentParametersOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachment_id: Option<String>,
    pub parameters: Option<Vec<AttachmentParameter>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ReplaceAttachmentParametersOptions => AttachmentParameters,
    Descriptor::new(
        SERVICE,
        "replace_attachment_parameters",
        HttpMethod::Put,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments/{attachment_id}/parameters",
    )
    .required(&["instance_id", "profiles_id", "attachment_id", "parameters"])
    .path(&["instance_id", "profiles_id", "attachment_id"])
    .body(BodyShape::Object(&[("parameters", "parameters")]))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetParametersByNameOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachment_id: Option<String>,
    pub parameter_name: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetParametersByNameOptions => AttachmentParameter,
    Descriptor::new(
        SERVICE,
        "get_parameters_by_name",
        HttpMethod::Get,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments/{attachment_id}/parameters/{parameter_name}",
    )
    .required(&["instance_id", "profiles_id", "attachment_id", "parameter_name"])
    .path(&["instance_id", "profiles_id", "attachment_id", "parameter_name"])
);

/// Replace one attachment parameter. The `new_*` fields carry the
/// replacement values; `parameter_name` selects the parameter to replace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceAttachmentParametersByNameOptions {
    pub instance_id: Option<String>,
    pub profiles_id: Option<String>,
    pub attachment_id: Option<String>,
    pub parameter_name: Option<String>,
    pub new_assessment_type: Option<String>,
    pub new_assessment_id: Option<String>,
    pub new_parameter_name: Option<String>,
    pub new_parameter_display_name: Option<String>,
    pub new_parameter_type: Option<String>,
    pub new_parameter_value: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ReplaceAttachmentParametersByNameOptions => AttachmentParameter,
    Descriptor::new(
        SERVICE,
        "replace_attachment_parameters_by_name",
        HttpMethod::Put,
        "/instances/{instance_id}/v3/profiles/{profiles_id}/attachments/{attachment_id}/parameters/{parameter_name}",
    )
    .required(&["instance_id", "profiles_id", "attachment_id", "parameter_name"])
    .path(&["instance_id", "profiles_id", "attachment_id", "parameter_name"])
    .body(BodyShape::Object(&[
        ("new_assessment_type", "assessment_type"),
        ("new_assessment_id", "assessment_id"),
        ("new_parameter_name", "parameter_name"),
        ("new_parameter_display_name", "parameter_display_name"),
        ("new_parameter_type", "parameter_type"),
        ("new_parameter_value", "parameter_value"),
    ]))
);

// ---------------------------------------------------------------------------
// Scans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateScanOptions {
    pub instance_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateScanOptions => Scan,
    Descriptor::new(
        SERVICE,
        "create_scan",
        HttpMethod::Post,
        "/instances/{instance_id}/v3/scans",
    )
    .required(&["instance_id", "attachment_id"])
    .path(&["instance_id"])
    .body(BodyShape::Object(&[("attachment_id", "attachment_id")]))
);

impl ComplianceV3 {
    pub fn list_control_libraries(
        &self,
        params: &ListControlLibrariesOptions,
    ) -> Result<DetailedResponse<ControlLibraryCollection>, ApiError> {
        self.service.send(params)
    }

    pub fn create_custom_control_library(
        &self,
        params: &CreateCustomControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibrary>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_custom_control_library(
        &self,
        params: &DeleteCustomControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibraryDelete>, ApiError> {
        self.service.send(params)
    }

    pub fn get_control_library(
        &self,
        params: &GetControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibrary>, ApiError> {
        self.service.send(params)
    }

    pub fn replace_custom_control_library(
        &self,
        params: &ReplaceCustomControlLibraryOptions,
    ) -> Result<DetailedResponse<ControlLibrary>, ApiError> {
        self.service.send(params)
    }

    pub fn list_profiles(
        &self,
        params: &ListProfilesOptions,
    ) -> Result<DetailedResponse<ProfileCollection>, ApiError> {
        self.service.send(params)
    }

    /// Create a custom profile from controls of one or more control libraries.
    pub fn create_profile(
        &self,
        params: &CreateProfileOptions,
    ) -> Result<DetailedResponse<Profile>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_custom_profile(
        &self,
        params: &DeleteCustomProfileOptions,
    ) -> Result<DetailedResponse<Profile>, ApiError> {
        self.service.send(params)
    }

    pub fn get_profile(
        &self,
        params: &GetProfileOptions,
    ) -> Result<DetailedResponse<Profile>, ApiError> {
        self.service.send(params)
    }

    pub fn replace_profile(
        &self,
        params: &ReplaceProfileOptions,
    ) -> Result<DetailedResponse<Profile>, ApiError> {
        self.service.send(params)
    }

    pub fn get_profile_default_parameters(
        &self,
        params: &GetProfileDefaultParametersOptions,
    ) -> Result<DetailedResponse<ProfileDefaultParameters>, ApiError> {
        self.service.send(params)
    }

    pub fn replace_profile_parameters(
        &self,
        params: &ReplaceProfileParametersOptions,
    ) -> Result<DetailedResponse<ProfileDefaultParameters>, ApiError> {
        self.service.send(params)
    }

    /// Attach a profile to one or more scopes.
    pub fn create_attachment(
        &self,
        params: &CreateAttachmentOptions,
    ) -> Result<DetailedResponse<AttachmentPrototypeResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn list_attachments(
        &self,
        params: &ListAttachmentsOptions,
    ) -> Result<DetailedResponse<AttachmentCollection>, ApiError> {
        self.service.send(params)
    }

    pub fn get_profile_attachment(
        &self,
        params: &GetProfileAttachmentOptions,
    ) -> Result<DetailedResponse<Attachment>, ApiError> {
        self.service.send(params)
    }

    pub fn replace_profile_attachment(
        &self,
        params: &ReplaceProfileAttachmentOptions,
    ) -> Result<DetailedResponse<Attachment>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_profile_attachment(
        &self,
        params: &DeleteProfileAttachmentOptions,
    ) -> Result<DetailedResponse<Attachment>, ApiError> {
        self.service.send(params)
    }

    /// List attachments across every profile of the instance.
    pub fn list_attachments_account(
        &self,
        params: &ListAttachmentsAccountOptions,
    ) -> Result<DetailedResponse<AttachmentCollection>, ApiError> {
        self.service.send(params)
    }

    /// Start an on-demand scan of an attachment.
    pub fn create_scan(
        &self,
        params: &CreateScanOptions,
    ) -> Result<DetailedResponse<Scan>, ApiError> {
        self.service.send(params)
    }

    pub fn get_attachment_parameters(
        &self,
        params: &GetAttachmentParametersOptions,
    ) -> Result<DetailedResponse<AttachmentParameters>, ApiError> {
        self.service.send(params)
    }

    pub fn replace_attachment_parameters(
        &self,
        params: &ReplaceAttachmentParametersOptions,
    ) -> Result<DetailedResponse<AttachmentParameters>, ApiError> {
        self.service.send(params)
    }

    pub fn get_parameters_by_name(
        &self,
        params: &GetParametersByNameOptions,
    ) -> Result<DetailedResponse<AttachmentParameter>, ApiError> {
        self.service.send(params)
    }

    pub fn replace_attachment_parameters_by_name(
        &self,
        params: &ReplaceAttachmentParametersByNameOptions,
    ) -> Result<DetailedResponse<AttachmentParameter>, ApiError> {
        self.service.send(params)
    }
}
