// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use actix_web::{HttpRequest, dev::ConnectionInfo};
use common::http::RequestHead;
use http::method::InvalidMethod;

pub struct ActixRequestHead {
    // we cannot refer to HttpRequest directly, as it holds an Rc (and therefore does
    // not impl Send or Sync)
    connection_info: ConnectionInfo,
    method: http::Method,
    path: String,
}

impl ActixRequestHead {
    pub fn from_request(req: &HttpRequest) -> Result<ActixRequestHead, InvalidMethod> {
        Ok(ActixRequestHead {
            connection_info: req.connection_info().clone(),
            method: to_http_method(req.method())?,
            path: req.path().to_string(),
        })
    }
}

// Actix uses http-0.2. However, the rest of the system uses
// http-1.x, so we need to convert between the two.
fn to_http_method(method: &actix_web::http::Method) -> Result<http::Method, InvalidMethod> {
    match *method {
        actix_web::http::Method::CONNECT => Ok(http::Method::CONNECT),
        actix_web::http::Method::GET => Ok(http::Method::GET),
        actix_web::http::Method::HEAD => Ok(http::Method::HEAD),
        actix_web::http::Method::OPTIONS => Ok(http::Method::OPTIONS),
        actix_web::http::Method::POST => Ok(http::Method::POST),
        actix_web::http::Method::PUT => Ok(http::Method::PUT),
        actix_web::http::Method::DELETE => Ok(http::Method::DELETE),
        actix_web::http::Method::PATCH => Ok(http::Method::PATCH),
        actix_web::http::Method::TRACE => Ok(http::Method::TRACE),
        _ => http::Method::from_bytes(method.as_str().as_bytes()),
    }
}

impl RequestHead for ActixRequestHead {
    fn get_method(&self) -> http::Method {
        self.method.clone()
    }

    fn get_path(&self) -> String {
        self.path.clone()
    }

    // Both honor the Forwarded/X-Forwarded-* headers, so a server behind a reverse proxy reports
    // the address the client used.
    fn get_scheme(&self) -> String {
        self.connection_info.scheme().to_string()
    }

    fn get_host(&self) -> String {
        self.connection_info.host().to_string()
    }
}
