//! Operation descriptors and the shared request builder.
//!
//! # Design
//! Every remote operation is a parameter struct plus a static [`Descriptor`]
//! naming its method, URL template and field tables. The struct is serialized
//! to a JSON object once; the descriptor then decides which keys become path
//! values, query values, body members (with their wire names) or headers.
//! Per-operation quirks such as raw array bodies or caller-chosen content
//! types are [`BodyShape`] variants rather than hand-written code.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::headers::APPLICATION_JSON;
use crate::http::HttpMethod;

/// Unreserved characters per RFC 3986 stay literal; everything else is encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `(parameter field, wire name)` pair.
pub type FieldMapping = (&'static str, &'static str);

/// Correlation id header carried by nearly every operation.
pub const TRANSACTION_ID: &[FieldMapping] = &[("transaction_id", "Transaction-Id")];

/// Static facts about one remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub default_url: &'static str,
}

/// How the request body is assembled from the parameter object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    None,
    /// JSON object built from the listed fields, renamed to wire names.
    Object(&'static [FieldMapping]),
    /// The named field's value sent verbatim, e.g. a bare array.
    Raw(&'static str),
    /// The named string field sent as-is with the content type taken from
    /// `content_type_field` (JSON when absent).
    Text {
        field: &'static str,
        content_type_field: &'static str,
    },
}

/// Everything the shared builder needs to know about one operation.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    pub service: ServiceInfo,
    pub operation_id: &'static str,
    pub method: HttpMethod,
    pub url: &'static str,
    pub required: &'static [&'static str],
    pub path: &'static [&'static str],
    pub query: &'static [FieldMapping],
    pub body: BodyShape,
    pub headers: &'static [FieldMapping],
    pub accept: bool,
}

impl Descriptor {
    pub const fn new(
        service: ServiceInfo,
        operation_id: &'static str,
        method: HttpMethod,
        url: &'static str,
    ) -> Self {
        Self {
            service,
            operation_id,
            method,
            url,
            required: &[],
            path: &[],
            query: &[],
            body: BodyShape::None,
            headers: TRANSACTION_ID,
            accept: true,
        }
    }

    pub const fn required(self, required: &'static [&'static str]) -> Self {
        Self { required, ..self }
    }

    pub const fn path(self, path: &'static [&'static str]) -> Self {
        Self { path, ..self }
    }

    pub const fn query(self, query: &'static [FieldMapping]) -> Self {
        Self { query, ..self }
    }

    pub const fn body(self, body: BodyShape) -> Self {
        Self { body, ..self }
    }

    pub const fn headers(self, headers: &'static [FieldMapping]) -> Self {
        Self { headers, ..self }
    }

    /// The operation returns no body, so no `Accept` header is sent.
    pub const fn no_accept(self) -> Self {
        Self {
            accept: false,
            ..self
        }
    }

    /// Every parameter field the descriptor knows about.
    pub fn allowed_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        fields.extend(self.required);
        fields.extend(self.path);
        fields.extend(self.query.iter().map(|(field, _)| *field));
        fields.extend(self.headers.iter().map(|(field, _)| *field));
        match self.body {
            BodyShape::None => {}
            BodyShape::Object(mapping) => fields.extend(mapping.iter().map(|(field, _)| *field)),
            BodyShape::Raw(field) => fields.push(field),
            BodyShape::Text {
                field,
                content_type_field,
            } => fields.extend([field, content_type_field]),
        }
        fields.sort_unstable();
        fields.dedup();
        fields
    }
}

/// A parameter struct bound to its remote operation.
pub trait Operation: Serialize {
    /// Shape of the successful response body.
    type Output: DeserializeOwned;

    const DESCRIPTOR: Descriptor;

    /// Caller-supplied headers; these win over every computed header.
    fn caller_headers(&self) -> &[(String, String)];
}

/// Implements [`Operation`] for a parameter struct with a `headers` field.
macro_rules! impl_operation {
    ($params:ty => $output:ty, $descriptor:expr) => {
        impl $crate::operation::Operation for $params {
            type Output = $output;

            const DESCRIPTOR: $crate::operation::Descriptor = $descriptor;

            fn caller_headers(&self) -> &[(String, String)] {
                &self.headers
            }
        }
    };
}
pub(crate) use impl_operation;

/// Request body ready for transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Text {
        content: String,
        content_type: String,
    },
}

impl RequestBody {
    pub fn content_type(&self) -> &str {
        match self {
            RequestBody::Json(_) => APPLICATION_JSON,
            RequestBody::Text { content_type, .. } => content_type,
        }
    }

    pub fn render(&self) -> Result<String, ApiError> {
        match self {
            RequestBody::Json(value) => {
                serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
            }
            RequestBody::Text { content, .. } => Ok(content.clone()),
        }
    }
}

/// Method, URL template and the values extracted for it.
///
/// `url` is the descriptor's template unchanged; `path` holds the value for
/// each placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub url: &'static str,
    pub path: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    /// Extract path, query and body values from a validated parameter object.
    pub fn from_params(descriptor: &Descriptor, params: &Value) -> Result<Self, ApiError> {
        let empty = Map::new();
        let fields = params.as_object().unwrap_or(&empty);
        let present = |name: &str| fields.get(name).filter(|value| !value.is_null());

        let mut path = Vec::with_capacity(descriptor.path.len());
        let mut missing = Vec::new();
        for &name in descriptor.path {
            match present(name) {
                Some(value) => path.push((name, scalar(value))),
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(ApiError::MissingParameters(missing));
        }

        let query = descriptor
            .query
            .iter()
            .filter_map(|&(field, wire)| present(field).map(|value| (wire, query_value(value))))
            .collect();

        let body = match descriptor.body {
            BodyShape::None => None,
            BodyShape::Object(mapping) => {
                let object: Map<String, Value> = mapping
                    .iter()
                    .filter_map(|&(field, wire)| {
                        present(field).map(|value| (wire.to_string(), value.clone()))
                    })
                    .collect();
                Some(RequestBody::Json(Value::Object(object)))
            }
            BodyShape::Raw(field) => present(field).cloned().map(RequestBody::Json),
            BodyShape::Text {
                field,
                content_type_field,
            } => present(field).map(|value| RequestBody::Text {
                content: scalar(value),
                content_type: present(content_type_field)
                    .map(scalar)
                    .unwrap_or_else(|| APPLICATION_JSON.to_string()),
            }),
        };

        Ok(Self {
            method: descriptor.method,
            url: descriptor.url,
            path,
            query,
            body,
        })
    }

    /// Join the service URL with the template, substituting and encoding path
    /// values and appending the query string.
    pub fn resolve_url(&self, service_url: &str) -> String {
        let mut resolved = self.url.to_string();
        for (name, value) in &self.path {
            let encoded = utf8_percent_encode(value, COMPONENT).to_string();
            resolved = resolved.replace(&format!("{{{name}}}"), &encoded);
        }

        let mut url = format!("{}{}", service_url.trim_end_matches('/'), resolved);
        for (i, (name, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&utf8_percent_encode(name, COMPONENT).to_string());
            url.push('=');
            url.push_str(&utf8_percent_encode(value, COMPONENT).to_string());
        }
        url
    }
}

/// Render a scalar the way it should appear in a path, query or header.
pub(crate) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(","),
        other => scalar(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SERVICE: ServiceInfo = ServiceInfo {
        name: "test",
        version: "V1",
        default_url: "https://example.com",
    };

    const CREATE: Descriptor = Descriptor::new(
        SERVICE,
        "create_thing",
        HttpMethod::Post,
        "/v1/{account_id}/things/{thing_id}",
    )
    .required(&["account_id", "thing_id", "new_name"])
    .path(&["account_id", "thing_id"])
    .query(&[("labels", "labels"), ("limit", "limit")])
    .body(BodyShape::Object(&[("new_name", "name"), ("description", "description")]));

    #[test]
    fn object_body_uses_wire_names_and_skips_absent_fields() {
        let params = json!({
            "account_id": "a1",
            "thing_id": "t1",
            "new_name": "renamed",
            "description": null,
        });
        let options = RequestOptions::from_params(&CREATE, &params).unwrap();
        assert_eq!(options.method, HttpMethod::Post);
        assert_eq!(options.url, "/v1/{account_id}/things/{thing_id}");
        assert_eq!(options.path, vec![("account_id", "a1".to_string()), ("thing_id", "t1".to_string())]);
        assert!(options.query.is_empty());
        assert_eq!(options.body, Some(RequestBody::Json(json!({"name": "renamed"}))));
    }

    #[test]
    fn query_arrays_are_comma_joined_and_numbers_rendered() {
        let params = json!({
            "account_id": "a1",
            "thing_id": "t1",
            "new_name": "n",
            "labels": ["x", "y"],
            "limit": 50,
        });
        let options = RequestOptions::from_params(&CREATE, &params).unwrap();
        assert_eq!(
            options.query,
            vec![("labels", "x,y".to_string()), ("limit", "50".to_string())]
        );
        assert_eq!(
            options.resolve_url("https://example.com/"),
            "https://example.com/v1/a1/things/t1?labels=x%2Cy&limit=50"
        );
    }

    #[test]
    fn path_values_are_percent_encoded() {
        let params = json!({"account_id": "a b/c", "thing_id": "t~1", "new_name": "n"});
        let options = RequestOptions::from_params(&CREATE, &params).unwrap();
        assert_eq!(
            options.resolve_url("https://example.com"),
            "https://example.com/v1/a%20b%2Fc/things/t~1"
        );
    }

    #[test]
    fn missing_path_value_is_reported() {
        let params = json!({"account_id": "a1"});
        let err = RequestOptions::from_params(&CREATE, &params).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: thing_id");
    }

    #[test]
    fn raw_body_is_sent_verbatim() {
        const BULK: Descriptor = Descriptor::new(SERVICE, "bulk", HttpMethod::Delete, "/v1/things")
            .required(&["request_body"])
            .body(BodyShape::Raw("request_body"));
        let params = json!({"request_body": ["c1", "c2"]});
        let options = RequestOptions::from_params(&BULK, &params).unwrap();
        let body = options.body.unwrap();
        assert_eq!(body, RequestBody::Json(json!(["c1", "c2"])));
        assert_eq!(body.render().unwrap(), r#"["c1","c2"]"#);
    }

    #[test]
    fn text_body_takes_caller_content_type() {
        const GRAPH: Descriptor = Descriptor::new(SERVICE, "graph", HttpMethod::Post, "/graph")
            .required(&["body"])
            .body(BodyShape::Text {
                field: "body",
                content_type_field: "content_type",
            });
        let params = json!({"body": "{ notes { id } }", "content_type": "application/graphql"});
        let body = RequestOptions::from_params(&GRAPH, &params).unwrap().body.unwrap();
        assert_eq!(body.content_type(), "application/graphql");
        assert_eq!(body.render().unwrap(), "{ notes { id } }");

        let params = json!({"body": "{}"});
        let body = RequestOptions::from_params(&GRAPH, &params).unwrap().body.unwrap();
        assert_eq!(body.content_type(), APPLICATION_JSON);
    }

    #[test]
    fn allowed_fields_cover_every_table() {
        let fields = CREATE.allowed_fields();
        for name in ["account_id", "thing_id", "new_name", "description", "labels", "limit", "transaction_id"] {
            assert!(fields.contains(&name), "{name} should be allowed");
        }
        assert!(!fields.contains(&"name"));
    }
}
