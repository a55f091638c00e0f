//! Payload shapes for the Configuration Governance service.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    UserDefined,
    /// Any value newer than this client.
    #[serde(other)]
    Unknown,
}

/// What happens when a resource violates a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementActionType {
    Disallow,
    AuditLog,
    #[serde(other)]
    Unknown,
}

/// Level of the account hierarchy a rule or template is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeType {
    #[serde(rename = "enterprise")]
    Enterprise,
    #[serde(rename = "enterprise.account_group")]
    EnterpriseAccountGroup,
    #[serde(rename = "enterprise.account")]
    EnterpriseAccount,
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "account.resource_group")]
    AccountResourceGroup,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    IsTrue,
    IsFalse,
    IsEmpty,
    IsNotEmpty,
    StringEquals,
    StringNotEquals,
    StringMatch,
    StringNotMatch,
    NumEquals,
    NumNotEquals,
    NumLessThan,
    NumLessThanEquals,
    NumGreaterThan,
    NumGreaterThanEquals,
    IpsInRange,
    StringsInList,
    #[serde(other)]
    Unknown,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetResourceAttribute {
    pub name: Option<String>,
    pub value: Option<String>,
    pub operator: Option<ConditionOperator>,
}

/// The kind of resource a rule evaluates.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetResource {
    pub service_name: Option<String>,
    pub resource_kind: Option<String>,
    pub additional_target_attributes: Option<Vec<TargetResourceAttribute>>,
}

/// A property condition, or an `and`/`or` group of nested conditions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleRequiredConfig {
    pub description: Option<String>,
    pub property: Option<String>,
    pub operator: Option<ConditionOperator>,
    pub value: Option<Value>,
    pub and: Option<Vec<RuleRequiredConfig>>,
    pub or: Option<Vec<RuleRequiredConfig>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnforcementAction {
    pub action: Option<EnforcementActionType>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub rule_type: Option<RuleType>,
    pub target: Option<TargetResource>,
    pub required_config: Option<RuleRequiredConfig>,
    pub enforcement_actions: Option<Vec<EnforcementAction>>,
    pub labels: Option<Vec<String>>,
    pub rule_id: Option<String>,
    pub creation_date: Option<String>,
    pub created_by: Option<String>,
    pub modification_date: Option<String>,
    pub modified_by: Option<String>,
    pub number_of_attachments: Option<u64>,
}

/// One entry of a bulk rule creation request.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleRequest {
    pub request_id: Option<String>,
    pub rule: Option<Rule>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub code: Option<String>,
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleResponse {
    pub request_id: Option<String>,
    pub status_code: Option<u16>,
    pub rule: Option<Rule>,
    pub errors: Option<Vec<ResponseError>>,
    pub trace: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRulesResponse {
    pub rules: Option<Vec<CreateRuleResponse>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleList {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub total_count: Option<u64>,
    pub first: Option<Link>,
    pub last: Option<Link>,
    pub rules: Option<Vec<Rule>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleScope {
    pub note: Option<String>,
    pub scope_id: Option<String>,
    pub scope_type: Option<ScopeType>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleAttachmentRequest {
    pub account_id: Option<String>,
    pub included_scope: Option<RuleScope>,
    pub excluded_scopes: Option<Vec<RuleScope>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleAttachment {
    pub attachment_id: Option<String>,
    pub rule_id: Option<String>,
    pub account_id: Option<String>,
    pub included_scope: Option<RuleScope>,
    pub excluded_scopes: Option<Vec<RuleScope>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRuleAttachmentsResponse {
    pub attachments: Option<Vec<RuleAttachment>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleAttachmentList {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub total_count: Option<u64>,
    pub first: Option<Link>,
    pub last: Option<Link>,
    pub attachments: Option<Vec<RuleAttachment>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleTargetResource {
    pub service_name: Option<String>,
    pub resource_kind: Option<String>,
    pub additional_target_attributes: Option<Vec<TargetResourceAttribute>>,
}

/// A default value a template applies to a resource property.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCustomizedDefaultProperty {
    pub property: Option<String>,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub account_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub target: Option<SimpleTargetResource>,
    pub customized_defaults: Option<Vec<TemplateCustomizedDefaultProperty>>,
    pub template_id: Option<String>,
    pub creation_date: Option<String>,
    pub created_by: Option<String>,
    pub modification_date: Option<String>,
    pub modified_by: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRequest {
    pub request_id: Option<String>,
    pub template: Option<Template>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTemplateResponse {
    pub request_id: Option<String>,
    pub status_code: Option<u16>,
    pub template: Option<Template>,
    pub errors: Option<Vec<ResponseError>>,
    pub trace: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTemplatesResponse {
    pub templates: Option<Vec<CreateTemplateResponse>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateList {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub total_count: Option<u64>,
    pub first: Option<Link>,
    pub last: Option<Link>,
    pub templates: Option<Vec<Template>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateScope {
    pub note: Option<String>,
    pub scope_id: Option<String>,
    pub scope_type: Option<ScopeType>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateAttachmentRequest {
    pub account_id: Option<String>,
    pub included_scope: Option<TemplateScope>,
    pub excluded_scopes: Option<Vec<TemplateScope>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateAttachment {
    pub attachment_id: Option<String>,
    pub template_id: Option<String>,
    pub account_id: Option<String>,
    pub included_scope: Option<TemplateScope>,
    pub excluded_scopes: Option<Vec<TemplateScope>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTemplateAttachmentsResponse {
    pub attachments: Option<Vec<TemplateAttachment>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateAttachmentList {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub total_count: Option<u64>,
    pub first: Option<Link>,
    pub last: Option<Link>,
    pub attachments: Option<Vec<TemplateAttachment>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scope_types_use_dotted_wire_names() {
        assert_eq!(
            serde_json::to_value(ScopeType::EnterpriseAccountGroup).unwrap(),
            "enterprise.account_group"
        );
        let scope: RuleScope =
            serde_json::from_value(json!({"scope_id": "acct", "scope_type": "account.resource_group"}))
                .unwrap();
        assert_eq!(scope.scope_type, Some(ScopeType::AccountResourceGroup));
    }

    #[test]
    fn required_config_nests_condition_groups() {
        let config: RuleRequiredConfig = serde_json::from_value(json!({
            "description": "public access off",
            "and": [
                {"property": "public_access_enabled", "operator": "is_false"},
                {"or": [{"property": "tls", "operator": "num_greater_than_equals", "value": "1.2"}]}
            ]
        }))
        .unwrap();
        let and = config.and.unwrap();
        assert_eq!(and[0].operator, Some(ConditionOperator::IsFalse));
        assert_eq!(and[1].or.as_ref().unwrap()[0].value, Some(json!("1.2")));
    }

    #[test]
    fn enforcement_actions_round_trip_wire_spelling() {
        let action = EnforcementAction {
            action: Some(EnforcementActionType::AuditLog),
        };
        assert_eq!(serde_json::to_string(&action).unwrap(), r#"{"action":"audit_log"}"#);
    }

    #[test]
    fn unlisted_operators_and_scopes_parse_as_unknown() {
        let scope: RuleScope =
            serde_json::from_value(json!({"scope_id": "acct", "scope_type": "enterprise.region"}))
                .unwrap();
        assert_eq!(scope.scope_type, Some(ScopeType::Unknown));
        let operator: ConditionOperator = serde_json::from_value(json!("regex_match")).unwrap();
        assert_eq!(operator, ConditionOperator::Unknown);
    }
}
