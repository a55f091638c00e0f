//! Client for the Configuration Governance service: rules, templates and
//! their attachments to account scopes.
//!
//! Updates use optimistic concurrency. Read the `ETag` header from a get
//! response and pass it back as `if_match`; the service answers 412 when
//! the resource changed in between.

pub mod models;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{DetailedResponse, Headers, HttpMethod};
use crate::operation::{impl_operation, BodyShape, Descriptor, FieldMapping, ServiceInfo};
use crate::service::{impl_service_client, BaseService};

pub use models::*;

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "configuration_governance",
    version: "V1",
    default_url: "https://us.compliance.cloud.ibm.com",
};

const CONDITIONAL: &[FieldMapping] = &[("if_match", "If-Match"), ("transaction_id", "Transaction-Id")];

/// Client for the Configuration Governance service.
#[derive(Debug, Clone)]
pub struct ConfigurationGovernanceV1 {
    service: BaseService,
}

impl_service_client!(ConfigurationGovernanceV1, SERVICE);

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRulesOptions {
    pub rules: Option<Vec<RuleRequest>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateRulesOptions => CreateRulesResponse,
    Descriptor::new(SERVICE, "create_rules", HttpMethod::Post, "/config/v1/rules")
        .required(&["rules"])
        .body(BodyShape::Object(&[("rules", "rules")]))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRulesOptions {
    pub account_id: Option<String>,
    pub transaction_id: Option<String>,
    pub attached: Option<bool>,
    /// Comma-joined on the wire.
    pub labels: Option<Vec<String>>,
    pub scopes: Option<Vec<String>>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListRulesOptions => RuleList,
    Descriptor::new(SERVICE, "list_rules", HttpMethod::Get, "/config/v1/rules")
        .required(&["account_id"])
        .query(&[
            ("account_id", "account_id"),
            ("attached", "attached"),
            ("labels", "labels"),
            ("scopes", "scopes"),
            ("limit", "limit"),
            ("offset", "offset"),
        ])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetRuleOptions {
    pub rule_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetRuleOptions => Rule,
    Descriptor::new(SERVICE, "get_rule", HttpMethod::Get, "/config/v1/rules/{rule_id}")
        .required(&["rule_id"])
        .path(&["rule_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRuleOptions {
    pub rule_id: Option<String>,
    pub if_match: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub target: Option<TargetResource>,
    pub required_config: Option<RuleRequiredConfig>,
    pub enforcement_actions: Option<Vec<EnforcementAction>>,
    pub account_id: Option<String>,
    pub rule_type: Option<RuleType>,
    pub labels: Option<Vec<String>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    UpdateRuleOptions => Rule,
    Descriptor::new(SERVICE, "update_rule", HttpMethod::Put, "/config/v1/rules/{rule_id}")
        .required(&[
            "rule_id",
            "if_match",
            "name",
            "description",
            "target",
            "required_config",
            "enforcement_actions",
        ])
        .path(&["rule_id"])
        .body(BodyShape::Object(&[
            ("name", "name"),
            ("description", "description"),
            ("target", "target"),
            ("required_config", "required_config"),
            ("enforcement_actions", "enforcement_actions"),
            ("account_id", "account_id"),
            ("rule_type", "rule_type"),
            ("labels", "labels"),
        ]))
        .headers(CONDITIONAL)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRuleOptions {
    pub rule_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteRuleOptions => (),
    Descriptor::new(SERVICE, "delete_rule", HttpMethod::Delete, "/config/v1/rules/{rule_id}")
        .required(&["rule_id"])
        .path(&["rule_id"])
        .no_accept()
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRuleAttachmentsOptions {
    pub rule_id: Option<String>,
    pub attachments: Option<Vec<RuleAttachmentRequest>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateRuleAttachmentsOptions => CreateRuleAttachmentsResponse,
    Descriptor::new(
        SERVICE,
        "create_rule_attachments",
        HttpMethod::Post,
        "/config/v1/rules/{rule_id}/attachments",
    )
    .required(&["rule_id", "attachments"])
    .path(&["rule_id"])
    .body(BodyShape::Object(&[("attachments", "attachments")]))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRuleAttachmentsOptions {
    pub rule_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListRuleAttachmentsOptions => RuleAttachmentList,
    Descriptor::new(
        SERVICE,
        "list_rule_attachments",
        HttpMethod::Get,
        "/config/v1/rules/{rule_id}/attachments",
    )
    .required(&["rule_id"])
    .path(&["rule_id"])
    .query(&[("limit", "limit"), ("offset", "offset")])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetRuleAttachmentOptions {
    pub rule_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetRuleAttachmentOptions => RuleAttachment,
    Descriptor::new(
        SERVICE,
        "get_rule_attachment",
        HttpMethod::Get,
        "/config/v1/rules/{rule_id}/attachments/{attachment_id}",
    )
    .required(&["rule_id", "attachment_id"])
    .path(&["rule_id", "attachment_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRuleAttachmentOptions {
    pub rule_id: Option<String>,
    pub attachment_id: Option<String>,
    pub if_match: Option<String>,
    pub account_id: Option<String>,
    pub included_scope: Option<RuleScope>,
    pub excluded_scopes: Option<Vec<RuleScope>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    UpdateRuleAttachmentOptions => RuleAttachment,
    Descriptor::new(
        SERVICE,
        "update_rule_attachment",
        HttpMethod::Put,
        "/config/v1/rules/{rule_id}/attachments/{attachment_id}",
    )
    .required(&["rule_id", "attachment_id", "if_match", "account_id", "included_scope"])
    .path(&["rule_id", "attachment_id"])
    .body(BodyShape::Object(&[
        ("account_id", "account_id"),
        ("included_scope", "included_scope"),
        ("excluded_scopes", "excluded_scopes"),
    ]))
    .headers(CONDITIONAL)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRuleAttachmentOptions {
    pub rule_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteRuleAttachmentOptions => (),
    Descriptor::new(
        SERVICE,
        "delete_rule_attachment",
        HttpMethod::Delete,
        "/config/v1/rules/{rule_id}/attachments/{attachment_id}",
    )
    .required(&["rule_id", "attachment_id"])
    .path(&["rule_id", "attachment_id"])
    .no_accept()
);

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTemplatesOptions {
    pub templates: Option<Vec<TemplateRequest>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateTemplatesOptions => CreateTemplatesResponse,
    Descriptor::new(SERVICE, "create_templates", HttpMethod::Post, "/config/v1/templates")
        .required(&["templates"])
        .body(BodyShape::Object(&[("templates", "templates")]))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTemplatesOptions {
    pub account_id: Option<String>,
    pub transaction_id: Option<String>,
    pub attached: Option<bool>,
    pub scopes: Option<Vec<String>>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListTemplatesOptions => TemplateList,
    Descriptor::new(SERVICE, "list_templates", HttpMethod::Get, "/config/v1/templates")
        .required(&["account_id"])
        .query(&[
            ("account_id", "account_id"),
            ("attached", "attached"),
            ("scopes", "scopes"),
            ("limit", "limit"),
            ("offset", "offset"),
        ])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTemplateOptions {
    pub template_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetTemplateOptions => Template,
    Descriptor::new(
        SERVICE,
        "get_template",
        HttpMethod::Get,
        "/config/v1/templates/{template_id}",
    )
    .required(&["template_id"])
    .path(&["template_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplateOptions {
    pub template_id: Option<String>,
    pub if_match: Option<String>,
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub target: Option<SimpleTargetResource>,
    pub customized_defaults: Option<Vec<TemplateCustomizedDefaultProperty>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    UpdateTemplateOptions => Template,
    Descriptor::new(
        SERVICE,
        "update_template",
        HttpMethod::Put,
        "/config/v1/templates/{template_id}",
    )
    .required(&[
        "template_id",
        "if_match",
        "account_id",
        "name",
        "description",
        "target",
    ])
    .path(&["template_id"])
    .body(BodyShape::Object(&[
        ("account_id", "account_id"),
        ("name", "name"),
        ("description", "description"),
        ("target", "target"),
        ("customized_defaults", "customized_defaults"),
    ]))
    .headers(CONDITIONAL)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTemplateOptions {
    pub template_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteTemplateOptions => (),
    Descriptor::new(
        SERVICE,
        "delete_template",
        HttpMethod::Delete,
        "/config/v1/templates/{template_id}",
    )
    .required(&["template_id"])
    .path(&["template_id"])
    .no_accept()
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTemplateAttachmentsOptions {
    pub template_id: Option<String>,
    pub attachments: Option<Vec<TemplateAttachmentRequest>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    CreateTemplateAttachmentsOptions => CreateTemplateAttachmentsResponse,
    Descriptor::new(
        SERVICE,
        "create_template_attachments",
        HttpMethod::Post,
        "/config/v1/templates/{template_id}/attachments",
    )
    .required(&["template_id", "attachments"])
    .path(&["template_id"])
    .body(BodyShape::Object(&[("attachments", "attachments")]))
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTemplateAttachmentsOptions {
    pub template_id: Option<String>,
    pub transaction_id: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    ListTemplateAttachmentsOptions => TemplateAttachmentList,
    Descriptor::new(
        SERVICE,
        "list_template_attachments",
        HttpMethod::Get,
        "/config/v1/templates/{template_id}/attachments",
    )
    .required(&["template_id"])
    .path(&["template_id"])
    .query(&[("limit", "limit"), ("offset", "offset")])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTemplateAttachmentOptions {
    pub template_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    GetTemplateAttachmentOptions => TemplateAttachment,
    Descriptor::new(
        SERVICE,
        "get_template_attachment",
        HttpMethod::Get,
        "/config/v1/templates/{template_id}/attachments/{attachment_id}",
    )
    .required(&["template_id", "attachment_id"])
    .path(&["template_id", "attachment_id"])
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTemplateAttachmentOptions {
    pub template_id: Option<String>,
    pub attachment_id: Option<String>,
    pub if_match: Option<String>,
    pub account_id: Option<String>,
    pub included_scope: Option<TemplateScope>,
    pub excluded_scopes: Option<Vec<TemplateScope>>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    UpdateTemplateAttachmentOptions => TemplateAttachment,
    Descriptor::new(
        SERVICE,
        "update_template_attachment",
        HttpMethod::Put,
        "/config/v1/templates/{template_id}/attachments/{attachment_id}",
    )
    .required(&["template_id", "attachment_id", "if_match", "account_id", "included_scope"])
    .path(&["template_id", "attachment_id"])
    .body(BodyShape::Object(&[
        ("account_id", "account_id"),
        ("included_scope", "included_scope"),
        ("excluded_scopes", "excluded_scopes"),
    ]))
    .headers(CONDITIONAL)
);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTemplateAttachmentOptions {
    pub template_id: Option<String>,
    pub attachment_id: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl_operation!(
    DeleteTemplateAttachmentOptions => (),
    Descriptor::new(
        SERVICE,
        "delete_template_attachment",
        HttpMethod::Delete,
        "/config/v1/templates/{template_id}/attachments/{attachment_id}",
    )
    .required(&["template_id", "attachment_id"])
    .path(&["template_id", "attachment_id"])
    .no_accept()
);

impl ConfigurationGovernanceV1 {
    /// Create one or more rules; each entry succeeds or fails on its own.
    pub fn create_rules(
        &self,
        params: &CreateRulesOptions,
    ) -> Result<DetailedResponse<CreateRulesResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn list_rules(
        &self,
        params: &ListRulesOptions,
    ) -> Result<DetailedResponse<RuleList>, ApiError> {
        self.service.send(params)
    }

    /// Fetch a rule. The response's `ETag` header feeds `update_rule`.
    pub fn get_rule(&self, params: &GetRuleOptions) -> Result<DetailedResponse<Rule>, ApiError> {
        self.service.send(params)
    }

    pub fn update_rule(
        &self,
        params: &UpdateRuleOptions,
    ) -> Result<DetailedResponse<Rule>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_rule(&self, params: &DeleteRuleOptions) -> Result<DetailedResponse<()>, ApiError> {
        self.service.send(params)
    }

    pub fn create_rule_attachments(
        &self,
        params: &CreateRuleAttachmentsOptions,
    ) -> Result<DetailedResponse<CreateRuleAttachmentsResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn list_rule_attachments(
        &self,
        params: &ListRuleAttachmentsOptions,
    ) -> Result<DetailedResponse<RuleAttachmentList>, ApiError> {
        self.service.send(params)
    }

    pub fn get_rule_attachment(
        &self,
        params: &GetRuleAttachmentOptions,
    ) -> Result<DetailedResponse<RuleAttachment>, ApiError> {
        self.service.send(params)
    }

    pub fn update_rule_attachment(
        &self,
        params: &UpdateRuleAttachmentOptions,
    ) -> Result<DetailedResponse<RuleAttachment>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_rule_attachment(
        &self,
        params: &DeleteRuleAttachmentOptions,
    ) -> Result<DetailedResponse<()>, ApiError> {
        self.service.send(params)
    }

    pub fn create_templates(
        &self,
        params: &CreateTemplatesOptions,
    ) -> Result<DetailedResponse<CreateTemplatesResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn list_templates(
        &self,
        params: &ListTemplatesOptions,
    ) -> Result<DetailedResponse<TemplateList>, ApiError> {
        self.service.send(params)
    }

    pub fn get_template(
        &self,
        params: &GetTemplateOptions,
    ) -> Result<DetailedResponse<Template>, ApiError> {
        self.service.send(params)
    }

    pub fn update_template(
        &self,
        params: &UpdateTemplateOptions,
    ) -> Result<DetailedResponse<Template>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_template(
        &self,
        params: &DeleteTemplateOptions,
    ) -> Result<DetailedResponse<()>, ApiError> {
        self.service.send(params)
    }

    pub fn create_template_attachments(
        &self,
        params: &CreateTemplateAttachmentsOptions,
    ) -> Result<DetailedResponse<CreateTemplateAttachmentsResponse>, ApiError> {
        self.service.send(params)
    }

    pub fn list_template_attachments(
        &self,
        params: &ListTemplateAttachmentsOptions,
    ) -> Result<DetailedResponse<TemplateAttachmentList>, ApiError> {
        self.service.send(params)
    }

    pub fn get_template_attachment(
        &self,
        params: &GetTemplateAttachmentOptions,
    ) -> Result<DetailedResponse<TemplateAttachment>, ApiError> {
        self.service.send(params)
    }

    pub fn update_template_attachment(
        &self,
        params: &UpdateTemplateAttachmentOptions,
    ) -> Result<DetailedResponse<TemplateAttachment>, ApiError> {
        self.service.send(params)
    }

    pub fn delete_template_attachment(
        &self,
        params: &DeleteTemplateAttachmentOptions,
    ) -> Result<DetailedResponse<()>, ApiError> {
        self.service.send(params)
    }
}
