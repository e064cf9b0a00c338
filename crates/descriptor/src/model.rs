// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The published document. Field names and null handling here are the wire contract.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub description: String,
    /// Absolute URL (`scheme://host[:port]`) that endpoint paths are relative to
    pub base_url: String,
    /// One entry per (path, method), in route registration order
    pub endpoints: Vec<EndpointInfo>,
    /// Keyed by path alone. When several methods on a path carry schemas, the one enumerated
    /// last wins.
    pub schemas: IndexMap<String, SchemaPair>,
    pub auth: AuthInfo,
    /// Examples of all routes, flattened in route order
    pub examples: Vec<String>,
    /// Opaque value for UI hints, passed through as configured
    pub ui: Option<Value>,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

/// The declared authentication shape. Reported only; never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
}

impl AuthInfo {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Default for AuthInfo {
    fn default() -> Self {
        Self::new("none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_schema_sides_are_omitted() {
        let pair = SchemaPair {
            request: None,
            response: Some(json!({"type": "string"})),
        };

        assert_eq!(
            serde_json::to_value(&pair).unwrap(),
            json!({"response": {"type": "string"}})
        );
    }

    #[test]
    fn default_auth_serializes_null_description() {
        assert_eq!(
            serde_json::to_value(AuthInfo::default()).unwrap(),
            json!({"type": "none", "description": null})
        );
        assert_eq!(
            serde_json::to_value(AuthInfo::new("bearer").with_description("JWT in header"))
                .unwrap(),
            json!({"type": "bearer", "description": "JWT in header"})
        );
    }
}
