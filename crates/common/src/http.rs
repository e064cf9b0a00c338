// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use http::StatusCode;

#[derive(Debug, Clone, Default)]
pub struct Headers {
    inner: Vec<(String, String)>,
}

impl Headers {
    pub fn from_vec(vec: Vec<(String, String)>) -> Self {
        Self {
            inner: vec
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .iter()
            .find(|(k, _)| k == &key.to_lowercase())
            .map(|(_, v)| v.clone())
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

pub struct ResponsePayload {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub status_code: StatusCode,
}

impl ResponsePayload {
    /// A response carrying already-serialized JSON.
    pub fn json(bytes: Vec<u8>, status_code: StatusCode) -> Self {
        Self {
            body: bytes,
            headers: Headers::from_vec(vec![(
                http::header::CONTENT_TYPE.to_string(),
                "application/json".to_string(),
            )]),
            status_code,
        }
    }

    /// A response in the `{"errors": [{"message": ...}]}` shape used for every error payload.
    pub fn error(message: &str, status_code: StatusCode) -> Self {
        let body = serde_json::json!({ "errors": [{ "message": message }] });
        Self::json(body.to_string().into_bytes(), status_code)
    }
}

/// Represents a HTTP request from which information can be extracted
pub trait RequestHead {
    fn get_path(&self) -> String;

    fn get_method(&self) -> http::Method;

    /// The scheme the client used ("http" or "https"), after honoring any forwarding headers
    /// the host framework trusts.
    fn get_scheme(&self) -> String;

    /// The host authority the client addressed (host with an optional port).
    fn get_host(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let headers = Headers::from_vec(vec![
            ("Content-Type".into(), "text/plain".into()),
            ("X-Trace".into(), "abc".into()),
        ]);

        assert_eq!(headers.get("content-type").as_deref(), Some("text/plain"));
        assert_eq!(headers.get("x-TRACE").as_deref(), Some("abc"));
        assert_eq!(headers.get("missing"), None);
    }

    #[test]
    fn error_payload_shape() {
        let response = ResponsePayload::error("boom", StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers.get("content-type").as_deref(),
            Some("application/json")
        );
        let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body, serde_json::json!({"errors": [{"message": "boom"}]}));
    }
}
