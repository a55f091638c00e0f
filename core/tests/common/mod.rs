//! Shared fixtures: a transport that records every request and replays
//! scripted responses.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use scc_sdk::{
    ApiError, HttpRequest, HttpResponse, NoAuthAuthenticator, Operation, ServiceOptions, Transport,
};
use serde_json::Value;

pub const SERVICE_URL: &str = "https://scc.test";

#[derive(Debug, Default)]
pub struct Recorder {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn replying(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into()),
        })
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for Recorder {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| json_response(200, "{}")))
    }
}

pub fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: String::new(),
        headers: vec![("Content-Type".into(), "application/json".into())],
        body: body.into(),
    }
}

pub fn no_content() -> HttpResponse {
    HttpResponse {
        status: 204,
        status_text: "No Content".into(),
        headers: Vec::new(),
        body: String::new(),
    }
}

/// Options that never consult external configuration.
pub fn options(transport: Arc<Recorder>) -> ServiceOptions {
    ServiceOptions {
        service_url: Some(SERVICE_URL.into()),
        authenticator: Some(Arc::new(NoAuthAuthenticator)),
        transport: Some(transport),
        ..Default::default()
    }
}

pub fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has no body")).unwrap()
}

/// The body of `request` as JSON, or as a JSON string when it is plain text.
pub fn body_value(request: &HttpRequest) -> Option<Value> {
    request
        .body
        .as_deref()
        .map(|body| serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.into())))
}

/// `err` must list every required field of `P`, in declaration order.
pub fn assert_missing_required<P: Operation>(operation: &str, err: &ApiError, _params: &P) {
    match err {
        ApiError::MissingParameters(names) => {
            assert_eq!(names.as_slice(), P::DESCRIPTOR.required, "{operation}: missing fields")
        }
        other => panic!("{operation}: expected missing parameters, got {other:?}"),
    }
    assert!(
        err.to_string().starts_with("Missing required parameters: "),
        "{operation}: {err}"
    );
}

pub const CALLER_NEGOTIATION: [(&str, &str); 2] = [
    ("accept", "text/plain"),
    ("content-type", "application/merge-patch+json"),
];

/// Caller `Accept` and `Content-Type` must replace the computed values, not
/// sit beside them.
pub fn assert_caller_negotiation(operation: &str, request: &HttpRequest) {
    for (name, value) in CALLER_NEGOTIATION {
        assert_eq!(request.header(name), Some(value), "{operation}: {name}");
        let copies = request
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .count();
        assert_eq!(copies, 1, "{operation}: duplicate {name}");
    }
}

/// Runs each row of an operation table against `$svc`, a client whose
/// transport is `$transport`.
///
/// A row names the client method and a fully populated parameter struct,
/// then the method, path and query, and body the struct must build. The
/// method called with default parameters must fail before anything is
/// sent.
#[allow(unused_macros)]
macro_rules! check_operations {
    ($svc:expr, $transport:expr, {
        $( $op:ident($params:expr) => $method:ident $url:literal, $body:expr; )*
    }) => {{
        let mut covered: Vec<&str> = Vec::new();
        $({
            let operation = stringify!($op);
            let populated = $params;

            let sent = $transport.count();
            let err = $svc.$op(&Default::default()).unwrap_err();
            $crate::common::assert_missing_required(operation, &err, &populated);
            assert_eq!($transport.count(), sent, "{operation}: empty parameters were sent");

            let request = $svc.base().build_request(&populated).unwrap();
            assert_eq!(request.method, ::scc_sdk::HttpMethod::$method, "{operation}: method");
            assert_eq!(
                request.url,
                format!("{}{}", $crate::common::SERVICE_URL, $url),
                "{operation}: url"
            );
            let body: Option<::serde_json::Value> = $body;
            assert_eq!($crate::common::body_value(&request), body, "{operation}: body");

            let mut overridden = populated.clone();
            overridden.headers = $crate::common::CALLER_NEGOTIATION
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            let request = $svc.base().build_request(&overridden).unwrap();
            $crate::common::assert_caller_negotiation(operation, &request);

            covered.push(operation);
        })*
        covered
    }};
}
