//! Header composition for outgoing requests.
//!
//! Layers are applied lowest precedence first and merged case-insensitively,
//! so a later layer replaces an earlier value key for key:
//!
//! 1. SDK identification (`User-Agent`, `X-IBMCloud-SDK-Analytics`)
//! 2. client default headers
//! 3. content negotiation (`Accept`, `Content-Type`)
//! 4. correlation headers taken from named parameters
//! 5. caller-supplied headers on the parameter object

use crate::http::Headers;

pub const SDK_NAME: &str = "scc-sdk-rust";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Headers identifying the SDK and the operation being called.
pub fn sdk_headers(service_name: &str, service_version: &str, operation_id: &str) -> Headers {
    vec![
        (
            "User-Agent".to_string(),
            format!(
                "{SDK_NAME}/{SDK_VERSION} (os={}; arch={})",
                std::env::consts::OS,
                std::env::consts::ARCH
            ),
        ),
        (
            "X-IBMCloud-SDK-Analytics".to_string(),
            format!(
                "service_name={service_name};service_version={service_version};operation_id={operation_id}"
            ),
        ),
    ]
}

/// Builder merging header layers in precedence order.
#[derive(Debug, Default)]
pub struct HeaderComposer {
    headers: Headers,
}

impl HeaderComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a layer on top of everything added so far.
    #[must_use]
    pub fn layer<K, V, I>(mut self, layer: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in layer {
            self.set(name.as_ref(), value.as_ref());
        }
        self
    }

    fn set(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some(existing) => *existing = (name.to_string(), value.to_string()),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    pub fn finish(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::find_header;

    #[test]
    fn later_layers_win_case_insensitively() {
        let headers = HeaderComposer::new()
            .layer([(ACCEPT, APPLICATION_JSON), (CONTENT_TYPE, APPLICATION_JSON)])
            .layer([("accept", "text/plain")])
            .finish();
        assert_eq!(headers.len(), 2);
        assert_eq!(find_header(&headers, "Accept"), Some("text/plain"));
        assert_eq!(find_header(&headers, "content-type"), Some(APPLICATION_JSON));
    }

    #[test]
    fn caller_layer_can_override_sdk_headers() {
        let headers = HeaderComposer::new()
            .layer(sdk_headers("compliance", "V3", "create_profile"))
            .layer([("User-Agent", "custom-agent")])
            .finish();
        assert_eq!(find_header(&headers, "user-agent"), Some("custom-agent"));
    }

    #[test]
    fn analytics_header_names_the_operation() {
        let headers = sdk_headers("findings", "V1", "post_graph");
        assert_eq!(
            find_header(&headers, "X-IBMCloud-SDK-Analytics"),
            Some("service_name=findings;service_version=V1;operation_id=post_graph")
        );
        assert!(find_header(&headers, "User-Agent")
            .unwrap()
            .starts_with("scc-sdk-rust/"));
    }
}
