// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use async_trait::async_trait;
use common::http::{RequestHead, ResponsePayload};
use common::router::Router;
use descriptor::{
    AnnotationStore, DISCOVERY_PATH, DescriptorBuilder, DescriptorCache, DescriptorConfig,
    DescriptorError, PublishedDescriptor, RouteTable,
};
use http::{Method, StatusCode};

/// Serves the descriptor at [`DISCOVERY_PATH`].
///
/// The descriptor is built on the first request (which also supplies the base URL when none is
/// configured) and then served from the cache for every later request.
pub struct DiscoveryRouter {
    config: DescriptorConfig,
    routes: Arc<dyn RouteTable>,
    annotations: Arc<dyn AnnotationStore>,
    cache: Arc<DescriptorCache>,
}

impl DiscoveryRouter {
    pub fn new(
        config: DescriptorConfig,
        routes: Arc<dyn RouteTable>,
        annotations: Arc<dyn AnnotationStore>,
        cache: Arc<DescriptorCache>,
    ) -> Self {
        Self {
            config,
            routes,
            annotations,
            cache,
        }
    }

    fn suitable(&self, request_head: &(dyn RequestHead + Send + Sync)) -> bool {
        request_head.get_path() == DISCOVERY_PATH && request_head.get_method() == Method::GET
    }

    /// The cached descriptor, building it from `request_head` if this is the first call.
    pub async fn descriptor(
        &self,
        request_head: &(dyn RequestHead + Send + Sync),
    ) -> Result<&PublishedDescriptor, DescriptorError> {
        self.cache
            .get_or_build(|| {
                DescriptorBuilder::new(&self.config, self.routes.as_ref(), self.annotations.as_ref())
                    .build(request_head)
            })
            .await
    }
}

#[async_trait]
impl Router for DiscoveryRouter {
    async fn route(
        &self,
        request_head: &(dyn RequestHead + Send + Sync),
    ) -> Option<ResponsePayload> {
        if !self.suitable(request_head) {
            return None;
        }

        let response = match self.descriptor(request_head).await {
            Ok(published) => ResponsePayload::json(published.json().to_vec(), StatusCode::OK),
            Err(err @ DescriptorError::InvalidHost { .. }) => {
                tracing::error!("{}", err);
                ResponsePayload::error(&err.to_string(), StatusCode::BAD_REQUEST)
            }
            Err(err) => {
                tracing::error!("{}", err);
                ResponsePayload::error(&err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
            }
        };

        Some(response)
    }
}

#[cfg(test)]
mod tests {
    use common::test_support::TestRequestHead;
    use descriptor::{Annotations, RouteAnnotation, StaticRouteTable};
    use serde_json::{Value, json};
    use test_log::test;

    use super::*;

    fn router_with(annotations: Annotations, cache: Arc<DescriptorCache>) -> DiscoveryRouter {
        let routes = StaticRouteTable::new()
            .route("/todo", &[Method::POST])
            .route("/todos", &[Method::GET])
            .route(DISCOVERY_PATH, &[Method::GET]);

        DiscoveryRouter::new(
            DescriptorConfig::new("Todo API", "Simple todo list management API"),
            Arc::new(routes),
            Arc::new(annotations),
            cache,
        )
    }

    #[test(tokio::test)]
    async fn ignores_other_paths_and_methods() {
        let router = router_with(Annotations::new(), Arc::new(DescriptorCache::new()));

        assert!(router.route(&TestRequestHead::get("/todos")).await.is_none());
        assert!(
            router
                .route(&TestRequestHead::get(DISCOVERY_PATH).with_method(Method::POST))
                .await
                .is_none()
        );
    }

    #[test(tokio::test)]
    async fn serves_json_and_keeps_first_base_url() {
        let cache = Arc::new(DescriptorCache::new());
        let router = router_with(Annotations::new(), cache.clone());

        let first = router
            .route(&TestRequestHead::get(DISCOVERY_PATH).with_origin("https", "api.example.com"))
            .await
            .unwrap();
        let second = router
            .route(&TestRequestHead::get(DISCOVERY_PATH).with_origin("http", "other.example.org"))
            .await
            .unwrap();

        assert_eq!(first.status_code, StatusCode::OK);
        assert_eq!(
            first.headers.get("content-type").as_deref(),
            Some("application/json")
        );
        assert_eq!(first.body, second.body);

        let descriptor: Value = serde_json::from_slice(&first.body).unwrap();
        assert_eq!(descriptor["base_url"], json!("https://api.example.com"));
        assert_eq!(descriptor["endpoints"].as_array().unwrap().len(), 2);
        assert!(cache.get().is_some());
    }

    #[test(tokio::test)]
    async fn oversized_descriptor_is_a_server_error_every_time() {
        let mut annotations = Annotations::new();
        annotations.insert(
            "/todos",
            Method::GET,
            (0..200).fold(RouteAnnotation::new("List"), |annotation, i| {
                annotation.with_example(format!("curl /todos?page={i}&filler=................"))
            }),
        );
        let cache = Arc::new(DescriptorCache::new());
        let router = router_with(annotations, cache.clone());

        for _ in 0..2 {
            let response = router
                .route(&TestRequestHead::get(DISCOVERY_PATH))
                .await
                .unwrap();
            assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);

            let body: Value = serde_json::from_slice(&response.body).unwrap();
            let message = body["errors"][0]["message"].as_str().unwrap();
            assert!(message.contains("exceeds the 8192 byte limit"));
            assert!(cache.get().is_none());
        }
    }

    #[test(tokio::test)]
    async fn unusable_host_is_a_bad_request_and_not_cached() {
        let cache = Arc::new(DescriptorCache::new());
        let router = router_with(Annotations::new(), cache.clone());

        let response = router
            .route(&TestRequestHead::get(DISCOVERY_PATH).with_origin("http", ""))
            .await
            .unwrap();
        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert!(cache.get().is_none());

        let response = router
            .route(&TestRequestHead::get(DISCOVERY_PATH).with_origin("http", "localhost:8000"))
            .await
            .unwrap();
        assert_eq!(response.status_code, StatusCode::OK);
    }
}
