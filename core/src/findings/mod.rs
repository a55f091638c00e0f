//! Client for the Findings service: providers, notes, occurrences and the
//! graph query endpoint.

pub mod models;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{DetailedResponse, Headers, HttpMethod};
use crate::operation::{impl_operation, BodyShape, Descriptor, FieldMapping, ServiceInfo};
use crate::service::{impl_service_client, BaseService};

pub use models::*;

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "findings",
    version: "V1",
    default_url: "https://us-south.secadvisor.cloud.ibm.com/findings",
};

const REPLACEABLE: &[FieldMapping] = &[
    ("replace_if_exists", "Replace-If-Exists"),
    ("transaction_id", "Transaction-Id"),
];

/// Client for the Findings service.
#[derive(Debug, Clone)]
pub struct FindingsV1 {
    service: BaseService,
}

impl_service_client!(FindingsV1, SERVICE);

// ---------------------------------------------------------------------------
// Graph and providers
// ---------------------------------------------------------------------------

/// A GraphQL query sent verbatim. `content_type` defaults to
/// `application/json`; use `application/graphql` for a bare query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostGraphOptions {
    pub account_id: Option<String>,
    pub body: Option<String>,
    pub content_type: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    PostGraphOptions => Value,
    Descriptor::new(SERVICE, "post_graph", HttpMethod::Post, "/v1/{account_id}/graph")
        .required(&["account_id", "body"])
        .path(&["account_id"])
        .body(BodyShape::Text {
            field: "body",
            content_type_field: "content_type",
        })
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProvidersOptions {
    pub account_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub skip: Option<u64>,
    pub start_provider_id: Option<String>,
    pub end_provider_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListProvidersOptions => ApiListProvidersResponse,
    Descriptor::new(SERVICE, "list_providers", HttpMethod::Get, "/v1/{account_id}/providers")
        .required(&["account_id"])
        .path(&["account_id"])
        .query(&[
            ("limit", "limit"),
            ("skip", "skip"),
            ("start_provider_id", "start_provider_id"),
            ("end_provider_id", "end_provider_id"),
        ])
);

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

const NOTE_BODY: BodyShape = BodyShape::Object(&[
    ("short_description", "short_description"),
    ("long_description", "long_description"),
    ("kind", "kind"),
    ("id", "id"),
    ("reported_by", "reported_by"),
    ("related_url", "related_url"),
    ("expiration_time", "expiration_time"),
    ("shared", "shared"),
    ("finding", "finding"),
    ("kpi", "kpi"),
    ("card", "card"),
    ("section", "section"),
]);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub kind: Option<NoteKind>,
    pub id: Option<String>,
    pub reported_by: Option<Reporter>,
    pub related_url: Option<Vec<RelatedUrl>>,
    pub expiration_time: Option<String>,
    pub shared: Option<bool>,
    pub finding: Option<FindingType>,
    pub kpi: Option<KpiType>,
    pub card: Option<Card>,
    pub section: Option<Section>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateNoteOptions => ApiNote,
    Descriptor::new(
        SERVICE,
        "create_note",
        HttpMethod::Post,
        "/v1/{account_id}/providers/{provider_id}/notes",
    )
    .required(&[
        "account_id",
        "provider_id",
        "short_description",
        "long_description",
        "kind",
        "id",
        "reported_by",
    ])
    .path(&["account_id", "provider_id"])
    .body(NOTE_BODY)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListNotesOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub transaction_id: Option<String>,
    pub page_size: Option<u64>,
    pub page_token: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListNotesOptions => ApiListNotesResponse,
    Descriptor::new(
        SERVICE,
        "list_notes",
        HttpMethod::Get,
        "/v1/{account_id}/providers/{provider_id}/notes",
    )
    .required(&["account_id", "provider_id"])
    .path(&["account_id", "provider_id"])
    .query(&[("page_size", "page_size"), ("page_token", "page_token")])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetNoteOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub note_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetNoteOptions => ApiNote,
    Descriptor::new(
        SERVICE,
        "get_note",
        HttpMethod::Get,
        "/v1/{account_id}/providers/{provider_id}/notes/{note_id}",
    )
    .required(&["account_id", "provider_id", "note_id"])
    .path(&["account_id", "provider_id", "note_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub note_id: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub kind: Option<NoteKind>,
    pub id: Option<String>,
    pub reported_by: Option<Reporter>,
    pub related_url: Option<Vec<RelatedUrl>>,
    pub expiration_time: Option<String>,
    pub shared: Option<bool>,
    pub finding: Option<FindingType>,
    pub kpi: Option<KpiType>,
    pub card: Option<Card>,
    pub section: Option<Section>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    UpdateNoteOptions => ApiNote,
    Descriptor::new(
        SERVICE,
        "update_note",
        HttpMethod::Put,
        "/v1/{account_id}/providers/{provider_id}/notes/{note_id}",
    )
    .required(&[
        "account_id",
        "provider_id",
        "note_id",
        "short_description",
        "long_description",
        "kind",
        "id",
        "reported_by",
    ])
    .path(&["account_id", "provider_id", "note_id"])
    .body(NOTE_BODY)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteNoteOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub note_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteNoteOptions => (),
    Descriptor::new(
        SERVICE,
        "delete_note",
        HttpMethod::Delete,
        "/v1/{account_id}/providers/{provider_id}/notes/{note_id}",
    )
    .required(&["account_id", "provider_id", "note_id"])
    .path(&["account_id", "provider_id", "note_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOccurrenceNoteOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub occurrence_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetOccurrenceNoteOptions => ApiNote,
    Descriptor::new(
        SERVICE,
        "get_occurrence_note",
        HttpMethod::Get,
        "/v1/{account_id}/providers/{provider_id}/occurrences/{occurrence_id}/note",
    )
    .required(&["account_id", "provider_id", "occurrence_id"])
    .path(&["account_id", "provider_id", "occurrence_id"])
);

// ---------------------------------------------------------------------------
// Occurrences
// ---------------------------------------------------------------------------

const OCCURRENCE_BODY: BodyShape = BodyShape::Object(&[
    ("note_name", "note_name"),
    ("kind", "kind"),
    ("id", "id"),
    ("resource_url", "resource_url"),
    ("remediation", "remediation"),
    ("context", "context"),
    ("finding", "finding"),
    ("kpi", "kpi"),
    ("reference_data", "reference_data"),
]);

/// Set `replace_if_exists` to overwrite an occurrence with the same id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOccurrenceOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub note_name: Option<String>,
    pub kind: Option<NoteKind>,
    pub id: Option<String>,
    pub resource_url: Option<String>,
    pub remediation: Option<String>,
    pub context: Option<Context>,
    pub finding: Option<Finding>,
    pub kpi: Option<Kpi>,
    pub reference_data: Option<Value>,
    pub replace_if_exists: Option<bool>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateOccurrenceOptions => ApiOccurrence,
    Descriptor::new(
        SERVICE,
        "create_occurrence",
        HttpMethod::Post,
        "/v1/{account_id}/providers/{provider_id}/occurrences",
    )
    .required(&["account_id", "provider_id", "note_name", "kind", "id"])
    .path(&["account_id", "provider_id"])
    .body(OCCURRENCE_BODY)
    .headers(REPLACEABLE)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOccurrencesOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub transaction_id: Option<String>,
    pub page_size: Option<u64>,
    pub page_token: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListOccurrencesOptions => ApiListOccurrencesResponse,
    Descriptor::new(
        SERVICE,
        "list_occurrences",
        HttpMethod::Get,
        "/v1/{account_id}/providers/{provider_id}/occurrences",
    )
    .required(&["account_id", "provider_id"])
    .path(&["account_id", "provider_id"])
    .query(&[("page_size", "page_size"), ("page_token", "page_token")])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListNoteOccurrencesOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub note_id: Option<String>,
    pub transaction_id: Option<String>,
    pub page_size: Option<u64>,
    pub page_token: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListNoteOccurrencesOptions => ApiListNoteOccurrencesResponse,
    Descriptor::new(
        SERVICE,
        "list_note_occurrences",
        HttpMethod::Get,
        "/v1/{account_id}/providers/{provider_id}/notes/{note_id}/occurrences",
    )
    .required(&["account_id", "provider_id", "note_id"])
    .path(&["account_id", "provider_id", "note_id"])
    .query(&[("page_size", "page_size"), ("page_token", "page_token")])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOccurrenceOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub occurrence_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetOccurrenceOptions => ApiOccurrence,
    Descriptor::new(
        SERVICE,
        "get_occurrence",
        HttpMethod::Get,
        "/v1/{account_id}/providers/{provider_id}/occurrences/{occurrence_id}",
    )
    .required(&["account_id", "provider_id", "occurrence_id"])
    .path(&["account_id", "provider_id", "occurrence_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOccurrenceOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub occurrence_id: Option<String>,
    pub note_name: Option<String>,
    pub kind: Option<NoteKind>,
    pub id: Option<String>,
    pub resource_url: Option<String>,
    pub remediation: Option<String>,
    pub context: Option<Context>,
    pub finding: Option<Finding>,
    pub kpi: Option<Kpi>,
    pub reference_data: Option<Value>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    UpdateOccurrenceOptions => ApiOccurrence,
    Descriptor::new(
        SERVICE,
        "update_occurrence",
        HttpMethod::Put,
        "/v1/{account_id}/providers/{provider_id}/occurrences/{occurrence_id}",
    )
    .required(&[
        "account_id",
        "provider_id",
        "occurrence_id",
        "note_name",
        "kind",
        "id",
    ])
    .path(&["account_id", "provider_id", "occurrence_id"])
    .body(OCCURRENCE_BODY)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteOccurrenceOptions {
    pub account_id: Option<String>,
    pub provider_id: Option<String>,
    pub occurrence_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteOccurrenceOptions => (),
    Descriptor::new(
        SERVICE,
        "delete_occurrence",
        HttpMethod::Delete,
        "/v1/{account_id}/providers/{provider_id}/occurrences/{occurrence_id}",
    )
    .required(&["account_id", "provider_id", "occurrence_id"])
    .path(&["account_id", "provider_id", "occurrence_id"])
);

impl FindingsV1 {
    /// Query findings with GraphQL; the result is returned as raw JSON.
    pub fn post_graph(&self, params: &PostGraphOptions) -> Result<DetailedResponse<Value>, ApiError> {
        self.service.send(params)
    }

    pub fn list_providers(
        &self,
        params: &ListProvidersOptions,
    ) -> Result<DetailedResponse<ApiListProvidersResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn create_note(&self, params: &CreateNoteOptions) -> Result<DetailedResponse<ApiNote>, ApiError> {
        self.service.send(params)
    }

    pub fn list_notes(
        &self,
        params: &ListNotesOptions,
    ) -> Result<DetailedResponse<ApiListNotesResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn get_note(&self, params: &GetNoteOptions) -> Result<DetailedResponse<ApiNote>, ApiError> {
        self.service.send(params)
    }

    pub fn update_note(&self, params: &UpdateNoteOptions) -> Result<DetailedResponse<ApiNote>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_note(&self, params: &DeleteNoteOptions) -> Result<DetailedResponse<()>, ApiError> {
        self.service.send(params)
    }

    pub fn get_occurrence_note(
        &self,
        params: &GetOccurrenceNoteOptions,
    ) -> Result<DetailedResponse<ApiNote>, ApiError> {
        self.service.send(params)
    }

    pub fn create_occurrence(
        &self,
        params: &CreateOccurrenceOptions,
    ) -> Result<DetailedResponse<ApiOccurrence>, ApiError> {
        self.service.send(params)
    }

    pub fn list_occurrences(
        &self,
        params: &ListOccurrencesOptions,
    ) -> Result<DetailedResponse<ApiListOccurrencesResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn list_note_occurrences(
        &self,
        params: &ListNoteOccurrencesOptions,
    ) -> Result<DetailedResponse<ApiListNoteOccurrencesResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn get_occurrence(
        &self,
        params: &GetOccurrenceOptions,
    ) -> Result<DetailedResponse<ApiOccurrence>, ApiError> {
        self.service.send(params)
    }

    pub fn update_occurrence(
        &self,
        params: &UpdateOccurrenceOptions,
    ) -> Result<DetailedResponse<ApiOccurrence>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_occurrence(
        &self,
        params: &DeleteOccurrenceOptions,
    ) -> Result<DetailedResponse<()>, ApiError> {
        self.service.send(params)
    }
}
