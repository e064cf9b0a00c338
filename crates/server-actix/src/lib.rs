// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Serves the discovery descriptor from an actix-web application.
//!
//! Routes are registered through [`ApiRoutes`] (so that the descriptor can enumerate them), then
//! [`SocketAgent::configure`] installs them together with the discovery endpoint:
//!
//! ```ignore
//! let mut routes = ApiRoutes::new();
//! routes
//!     .route("/todos", Method::GET, list_todos)?
//!     .describe(RouteAnnotation::new("List all todos"));
//!
//! let agent = SocketAgent::new(routes, DescriptorConfig::new("Todo API", "Manage todos"))?;
//! HttpServer::new(move || App::new().configure(agent.configure()))
//! ```

mod error;
mod request;
mod routes;
pub mod todo;

use std::sync::Arc;

use actix_web::{
    HttpRequest, HttpResponse,
    web::{self, ServiceConfig},
};
use common::http::ResponsePayload;
use common::router::Router;
use descriptor::{DISCOVERY_PATH, DescriptorCache, DescriptorConfig};
use discovery_router::DiscoveryRouter;
use http::{Method, StatusCode};

pub use error::ServerError;
pub use request::ActixRequestHead;
pub use routes::{ApiRoutes, RouteDescription};

macro_rules! error_msg {
    ($msg:literal) => {
        concat!("{\"errors\": [{\"message\":\"", $msg, "\"}]}").as_bytes()
    };
}

/// The application's routes plus the discovery endpoint describing them.
#[derive(Clone)]
pub struct SocketAgent {
    routes: Arc<ApiRoutes>,
    router: web::Data<DiscoveryRouter>,
}

impl SocketAgent {
    pub fn new(routes: ApiRoutes, config: DescriptorConfig) -> Result<Self, ServerError> {
        Self::with_cache(routes, config, Arc::new(DescriptorCache::new()))
    }

    /// Like [`SocketAgent::new`], but publishing through the given cache.
    pub fn with_cache(
        mut routes: ApiRoutes,
        config: DescriptorConfig,
        cache: Arc<DescriptorCache>,
    ) -> Result<Self, ServerError> {
        routes.route(DISCOVERY_PATH, Method::GET, discover)?;

        let routes = Arc::new(routes);
        let router = DiscoveryRouter::new(config, routes.clone(), routes.clone(), cache);

        Ok(Self {
            routes,
            router: web::Data::new(router),
        })
    }

    pub fn configure(&self) -> impl FnOnce(&mut ServiceConfig) + use<> {
        let routes = self.routes.clone();
        let router = self.router.clone();

        move |app| {
            app.app_data(router);
            routes.configure(app);
        }
    }
}

async fn discover(req: HttpRequest, router: web::Data<DiscoveryRouter>) -> HttpResponse {
    let request_head = match ActixRequestHead::from_request(&req) {
        Ok(request_head) => request_head,
        Err(err) => {
            tracing::error!("Unsupported method {}: {}", req.method(), err);
            return HttpResponse::build(actix_web::http::StatusCode::BAD_REQUEST)
                .body(error_msg!("Unsupported method"));
        }
    };

    match router.route(&request_head).await {
        Some(response) => to_http_response(response),
        None => HttpResponse::build(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR)
            .body(error_msg!("Error resolving request")),
    }
}

fn to_http_response(response: ResponsePayload) -> HttpResponse {
    let ResponsePayload {
        body,
        headers,
        status_code,
    } = response;

    let actix_status_code = match to_actix_status_code(status_code) {
        Ok(status_code) => status_code,
        Err(err) => {
            tracing::error!("Invalid status code: {}", err);
            return HttpResponse::build(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR)
                .body(error_msg!("Invalid status code"));
        }
    };

    let mut builder = HttpResponse::build(actix_status_code);

    for header in headers.into_iter() {
        builder.append_header(header);
    }

    builder.body(body)
}

// Actix uses http-0.2, while the rest of the system uses http-1.x.
fn to_actix_status_code(status_code: StatusCode) -> Result<actix_web::http::StatusCode, String> {
    actix_web::http::StatusCode::from_u16(status_code.as_u16())
        .map_err(|_| "Invalid status code".to_string())
}
