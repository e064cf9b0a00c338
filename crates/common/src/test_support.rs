// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![cfg(any(feature = "test-support", test))]

use crate::http::RequestHead;

/// A request head with fixed values, for exercising routers without a host framework.
#[derive(Debug, Clone)]
pub struct TestRequestHead {
    pub method: http::Method,
    pub path: String,
    pub scheme: String,
    pub host: String,
}

impl TestRequestHead {
    pub fn get(path: &str) -> Self {
        Self {
            method: http::Method::GET,
            path: path.to_string(),
            scheme: "http".to_string(),
            host: "localhost:8000".to_string(),
        }
    }

    pub fn with_method(mut self, method: http::Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_origin(mut self, scheme: &str, host: &str) -> Self {
        self.scheme = scheme.to_string();
        self.host = host.to_string();
        self
    }
}

impl RequestHead for TestRequestHead {
    fn get_path(&self) -> String {
        self.path.clone()
    }

    fn get_method(&self) -> http::Method {
        self.method.clone()
    }

    fn get_scheme(&self) -> String {
        self.scheme.clone()
    }

    fn get_host(&self) -> String {
        self.host.clone()
    }
}
