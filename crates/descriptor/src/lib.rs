// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Builds the discovery descriptor: a compact JSON document describing an HTTP server's endpoints,
//! their schemas and usage examples, published at [`DISCOVERY_PATH`].
//!
//! The pieces, in the order data flows through them:
//! - [`route_table`] enumerates the host framework's routes (minus the discovery route itself)
//! - [`annotation`] holds the per-route summaries, schemas and examples written by the server author
//! - [`builder`] joins the two into a [`Descriptor`]
//! - [`size_guard`] serializes the descriptor and enforces the size budget
//! - [`cache`] keeps the single published copy for the lifetime of the process

pub mod annotation;
pub mod base_url;
pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod route_table;
pub mod size_guard;

pub use annotation::{AnnotationStore, Annotations, RouteAnnotation};
pub use builder::DescriptorBuilder;
pub use cache::DescriptorCache;
pub use config::DescriptorConfig;
pub use error::DescriptorError;
pub use model::{AuthInfo, Descriptor, EndpointInfo, SchemaPair};
pub use route_table::{RegisteredRoute, RouteEntry, RouteTable, StaticRouteTable, list_routes};
pub use size_guard::{PublishedDescriptor, SizeStatus};

/// The well-known path at which the descriptor is served.
pub const DISCOVERY_PATH: &str = "/.well-known/socket-agent";

/// Version of the descriptor format, reported as `specVersion`.
pub const SPEC_VERSION: &str = "2025-01-01";
