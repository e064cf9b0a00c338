// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use http::Method;
use serde_json::Value;

/// Metadata the server author attaches to one (path, method).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteAnnotation {
    pub summary: String,
    pub request_schema: Option<Value>,
    pub response_schema: Option<Value>,
    pub examples: Vec<String>,
}

impl RouteAnnotation {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn with_request_schema(mut self, schema: Value) -> Self {
        self.request_schema = Some(schema);
        self
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// The request schema, treating an explicit JSON `null` as absent
    pub fn request(&self) -> Option<&Value> {
        self.request_schema.as_ref().filter(|schema| !schema.is_null())
    }

    /// The response schema, treating an explicit JSON `null` as absent
    pub fn response(&self) -> Option<&Value> {
        self.response_schema.as_ref().filter(|schema| !schema.is_null())
    }
}

/// Read access to annotations. Populated before the server starts and read-only afterwards.
pub trait AnnotationStore: Send + Sync {
    fn annotation(&self, path: &str, method: &Method) -> Option<&RouteAnnotation>;
}

#[derive(Debug, Clone, Default)]
pub struct Annotations {
    entries: HashMap<String, HashMap<Method, RouteAnnotation>>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an annotation to (path, method), returning the one it replaced, if any.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        method: Method,
        annotation: RouteAnnotation,
    ) -> Option<RouteAnnotation> {
        self.entries
            .entry(path.into())
            .or_default()
            .insert(method, annotation)
    }
}

impl AnnotationStore for Annotations {
    fn annotation(&self, path: &str, method: &Method) -> Option<&RouteAnnotation> {
        self.entries.get(path)?.get(method)
    }
}
