// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use actix_web::{
    FromRequest, Handler, Resource, Responder, guard,
    web::{self, ServiceConfig},
};
use descriptor::{
    AnnotationStore, Annotations, RegisteredRoute, RouteAnnotation, RouteTable,
};
use http::Method;
use indexmap::IndexMap;

use crate::error::ServerError;

type AddRoute = Arc<dyn Fn(Resource) -> Resource + Send + Sync>;

struct Registration {
    path: String,
    methods: Vec<Method>,
    add_route: AddRoute,
}

/// The application's routes, recorded in registration order.
///
/// Actix does not let us enumerate an `App`'s routes once it is built, so routes are registered
/// here instead. The registry configures actix and doubles as the route table and annotation
/// store the descriptor is built from.
#[derive(Default)]
pub struct ApiRoutes {
    registrations: Vec<Registration>,
    annotations: Annotations,
}

impl ApiRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<F, Args>(
        &mut self,
        path: &str,
        method: Method,
        handler: F,
    ) -> Result<RouteDescription<'_>, ServerError>
    where
        F: Handler<Args> + Send + Sync,
        Args: FromRequest + 'static,
        F::Output: Responder + 'static,
    {
        self.route_methods(path, &[method], handler)
    }

    /// Register one handler for several methods on the same path.
    pub fn route_methods<F, Args>(
        &mut self,
        path: &str,
        methods: &[Method],
        handler: F,
    ) -> Result<RouteDescription<'_>, ServerError>
    where
        F: Handler<Args> + Send + Sync,
        Args: FromRequest + 'static,
        F::Output: Responder + 'static,
    {
        let actix_methods = methods
            .iter()
            .map(|method| to_actix_method(path, method))
            .collect::<Result<Vec<_>, _>>()?;

        let Some((first, rest)) = actix_methods.split_first() else {
            return Err(ServerError::NoMethods(path.to_string()));
        };
        let (first, rest) = (first.clone(), rest.to_vec());

        let add_route: AddRoute = Arc::new(move |resource: Resource| {
            let methods_guard = rest.iter().fold(
                guard::Any(guard::Method(first.clone())),
                |any, method| any.or(guard::Method(method.clone())),
            );
            resource.route(web::route().guard(methods_guard).to(handler.clone()))
        });

        self.registrations.push(Registration {
            path: path.to_string(),
            methods: methods.to_vec(),
            add_route,
        });

        Ok(RouteDescription {
            annotations: &mut self.annotations,
            path: path.to_string(),
            methods: methods.to_vec(),
        })
    }

    /// Register every route with actix. All methods of a path share one resource (in the order
    /// the path was first registered), so that each method reaches its handler.
    pub(crate) fn configure(&self, app: &mut ServiceConfig) {
        let mut resources: IndexMap<&str, Vec<&AddRoute>> = IndexMap::new();
        for registration in &self.registrations {
            resources
                .entry(registration.path.as_str())
                .or_default()
                .push(&registration.add_route);
        }

        for (path, add_routes) in resources {
            let resource = add_routes
                .into_iter()
                .fold(web::resource(path), |resource, add_route| add_route(resource));
            app.service(resource);
        }
    }
}

impl RouteTable for ApiRoutes {
    fn registered_routes(&self) -> Vec<RegisteredRoute> {
        self.registrations
            .iter()
            .map(|registration| {
                RegisteredRoute::new(registration.path.clone(), &registration.methods)
            })
            .collect()
    }
}

impl AnnotationStore for ApiRoutes {
    fn annotation(&self, path: &str, method: &Method) -> Option<&RouteAnnotation> {
        self.annotations.annotation(path, method)
    }
}

/// Returned from route registration to optionally attach an annotation. Dropping it leaves the
/// route unannotated.
pub struct RouteDescription<'a> {
    annotations: &'a mut Annotations,
    path: String,
    methods: Vec<Method>,
}

impl RouteDescription<'_> {
    /// Attach the annotation to every method of the route.
    pub fn describe(self, annotation: RouteAnnotation) {
        for method in self.methods {
            self.annotations
                .insert(self.path.clone(), method, annotation.clone());
        }
    }
}

fn to_actix_method(path: &str, method: &Method) -> Result<actix_web::http::Method, ServerError> {
    actix_web::http::Method::from_bytes(method.as_str().as_bytes()).map_err(|_| {
        ServerError::UnsupportedMethod {
            path: path.to_string(),
            method: method.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use actix_web::HttpResponse;
    use descriptor::list_routes;

    use super::*;

    async fn noop() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[test]
    fn records_routes_in_registration_order() {
        let mut routes = ApiRoutes::new();
        routes.route("/todos", Method::GET, noop).unwrap();
        routes
            .route_methods("/todo/{id}", &[Method::GET, Method::DELETE], noop)
            .unwrap()
            .describe(RouteAnnotation::new("Get or delete a todo"));
        routes.route("/todos", Method::POST, noop).unwrap();

        assert_eq!(
            routes.registered_routes(),
            vec![
                RegisteredRoute::new("/todos", &[Method::GET]),
                RegisteredRoute::new("/todo/{id}", &[Method::GET, Method::DELETE]),
                RegisteredRoute::new("/todos", &[Method::POST]),
            ]
        );
        assert_eq!(list_routes(&routes).len(), 4);
    }

    #[test]
    fn describe_annotates_every_method() {
        let mut routes = ApiRoutes::new();
        routes
            .route_methods("/item", &[Method::PUT, Method::PATCH], noop)
            .unwrap()
            .describe(RouteAnnotation::new("Update an item"));

        for method in [Method::PUT, Method::PATCH] {
            assert_eq!(
                routes
                    .annotation("/item", &method)
                    .map(|a| a.summary.as_str()),
                Some("Update an item")
            );
        }
        assert!(routes.annotation("/item", &Method::GET).is_none());
    }

    #[test]
    fn a_route_needs_a_method() {
        let mut routes = ApiRoutes::new();

        assert!(matches!(
            routes.route_methods("/nothing", &[], noop),
            Err(ServerError::NoMethods(path)) if path == "/nothing"
        ));
        assert!(routes.registered_routes().is_empty());
    }
}
