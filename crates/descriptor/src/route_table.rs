// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Reading the host framework's route table.

use std::collections::HashSet;

use http::Method;

use crate::DISCOVERY_PATH;

/// A route as the host framework registered it: one path, one or more methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredRoute {
    pub path: String,
    pub methods: Vec<Method>,
}

impl RegisteredRoute {
    pub fn new(path: impl Into<String>, methods: &[Method]) -> Self {
        Self {
            path: path.into(),
            methods: methods.to_vec(),
        }
    }
}

/// A single (path, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    pub path: String,
    pub method: Method,
}

/// The live route table of a host framework, in registration order.
pub trait RouteTable: Send + Sync {
    fn registered_routes(&self) -> Vec<RegisteredRoute>;
}

/// Enumerate (path, method) pairs in registration order, leaving out the discovery route.
///
/// A pair registered more than once is reported only at its first registration, which is the
/// one the framework dispatches to.
pub fn list_routes(table: &dyn RouteTable) -> Vec<RouteEntry> {
    let mut seen = HashSet::new();

    table
        .registered_routes()
        .into_iter()
        .filter(|route| route.path != DISCOVERY_PATH)
        .flat_map(|route| {
            let RegisteredRoute { path, methods } = route;
            methods.into_iter().map(move |method| RouteEntry {
                path: path.clone(),
                method,
            })
        })
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// A fixed route table, for frameworks whose routes are known up front (and for tests).
#[derive(Debug, Clone, Default)]
pub struct StaticRouteTable {
    routes: Vec<RegisteredRoute>,
}

impl StaticRouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: impl Into<String>, methods: &[Method]) -> Self {
        self.routes.push(RegisteredRoute::new(path, methods));
        self
    }
}

impl RouteTable for StaticRouteTable {
    fn registered_routes(&self) -> Vec<RegisteredRoute> {
        self.routes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, method: Method) -> RouteEntry {
        RouteEntry {
            path: path.to_string(),
            method,
        }
    }

    #[test]
    fn expands_methods_in_registration_order() {
        let table = StaticRouteTable::new()
            .route("/todos", &[Method::GET])
            .route("/todo/{id}", &[Method::GET, Method::HEAD])
            .route("/todo", &[Method::POST]);

        assert_eq!(
            list_routes(&table),
            vec![
                entry("/todos", Method::GET),
                entry("/todo/{id}", Method::GET),
                entry("/todo/{id}", Method::HEAD),
                entry("/todo", Method::POST),
            ]
        );
    }

    #[test]
    fn discovery_route_is_never_listed() {
        let tables = [
            StaticRouteTable::new().route(DISCOVERY_PATH, &[Method::GET]),
            StaticRouteTable::new()
                .route("/a", &[Method::GET])
                .route(DISCOVERY_PATH, &[Method::GET, Method::HEAD])
                .route("/b", &[Method::PUT, Method::DELETE]),
            StaticRouteTable::new(),
        ];

        for table in &tables {
            let routes = list_routes(table);
            assert!(routes.iter().all(|r| r.path != DISCOVERY_PATH));

            let registered_pairs: usize = table
                .registered_routes()
                .iter()
                .filter(|r| r.path != DISCOVERY_PATH)
                .map(|r| r.methods.len())
                .sum();
            assert_eq!(routes.len(), registered_pairs);
        }
    }

    #[test]
    fn only_the_exact_discovery_path_is_filtered() {
        let table = StaticRouteTable::new()
            .route("/.well-known/socket-agent/extra", &[Method::GET])
            .route("/.well-known/other", &[Method::GET]);

        assert_eq!(list_routes(&table).len(), 2);
    }

    #[test]
    fn duplicate_pairs_keep_first_registration() {
        let table = StaticRouteTable::new()
            .route("/a", &[Method::GET])
            .route("/b", &[Method::GET])
            .route("/a", &[Method::GET, Method::POST]);

        assert_eq!(
            list_routes(&table),
            vec![
                entry("/a", Method::GET),
                entry("/b", Method::GET),
                entry("/a", Method::POST),
            ]
        );
    }
}
