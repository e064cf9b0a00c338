// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use common::http::RequestHead;
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    SPEC_VERSION,
    annotation::AnnotationStore,
    base_url::resolve_base_url,
    config::DescriptorConfig,
    error::DescriptorError,
    model::{Descriptor, EndpointInfo, SchemaPair},
    route_table::{RouteTable, list_routes},
    size_guard::{self, PublishedDescriptor},
};

/// Joins the route table with the annotation store into a descriptor.
pub struct DescriptorBuilder<'a> {
    config: &'a DescriptorConfig,
    routes: &'a dyn RouteTable,
    annotations: &'a dyn AnnotationStore,
}

impl<'a> DescriptorBuilder<'a> {
    pub fn new(
        config: &'a DescriptorConfig,
        routes: &'a dyn RouteTable,
        annotations: &'a dyn AnnotationStore,
    ) -> Self {
        Self {
            config,
            routes,
            annotations,
        }
    }

    /// Build and size-check the descriptor. `request_head` is only consulted when no base URL
    /// is configured.
    pub fn build(
        &self,
        request_head: &dyn RequestHead,
    ) -> Result<PublishedDescriptor, DescriptorError> {
        let base_url = resolve_base_url(self.config.base_url.as_deref(), request_head)?;

        size_guard::check(self.assemble(base_url))
    }

    /// Assemble the descriptor without checking its size.
    pub fn assemble(&self, base_url: String) -> Descriptor {
        let routes = list_routes(self.routes);
        debug!(routes = routes.len(), %base_url, "Assembling discovery descriptor");

        let mut endpoints = Vec::with_capacity(routes.len());
        let mut schemas = IndexMap::new();
        let mut examples = vec![];

        for route in routes {
            let annotation = self.annotations.annotation(&route.path, &route.method);

            endpoints.push(EndpointInfo {
                path: route.path.clone(),
                method: route.method.as_str().to_uppercase(),
                summary: annotation
                    .map(|annotation| annotation.summary.clone())
                    .unwrap_or_default(),
            });

            let Some(annotation) = annotation else {
                continue;
            };

            let (request, response) = (annotation.request(), annotation.response());
            if request.is_some() || response.is_some() {
                // Keyed by path only: a later method on the same path replaces an earlier one
                schemas.insert(
                    route.path,
                    SchemaPair {
                        request: request.cloned(),
                        response: response.cloned(),
                    },
                );
            }

            examples.extend(annotation.examples.iter().cloned());
        }

        Descriptor {
            name: self.config.name.clone(),
            description: self.config.description.clone(),
            base_url,
            endpoints,
            schemas,
            auth: self.config.auth.clone().unwrap_or_default(),
            examples,
            ui: self.config.ui.clone(),
            spec_version: SPEC_VERSION.to_string(),
        }
    }
}
