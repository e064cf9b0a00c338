// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use actix_web::{App, HttpServer, middleware, web};
use tracing_actix_web::TracingLogger;

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time;

use agent_env::SystemEnvironment;
use common::env_const::{get_server_host, get_server_port};
use descriptor::{DISCOVERY_PATH, DescriptorConfig};
use server_actix::{
    ApiRoutes, ServerError, SocketAgent,
    todo::{self, TodoStore},
};

/// Run the todo API along with its discovery descriptor
#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    let start_time = time::SystemTime::now();

    common::logging_tracing::init();

    let env = SystemEnvironment;

    let config = DescriptorConfig::new("Todo API", "Simple todo list management API")
        .with_env(&env)?;

    let mut routes = ApiRoutes::new();
    todo::register(&mut routes)?;
    let agent = SocketAgent::new(routes, config)?;

    let store = web::Data::new(TodoStore::default());

    let server_port = get_server_port(&env)?;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::new(
                middleware::TrailingSlash::Trim,
            ))
            .app_data(store.clone())
            .configure(agent.configure())
    });

    // Bind to "localhost" unless told otherwise, which covers both the IPv4 and IPv6 loopback
    // addresses. Set the host to "0.0.0.0" to accept connections from outside the machine.
    let server_host = get_server_host(&env).unwrap_or_else(|| "localhost".to_string());

    match server.bind((server_host, server_port)) {
        Ok(server) => {
            let pretty_addr = pretty_addr(&server.addrs());

            println!(
                "Started server on {} in {:.2} ms",
                pretty_addr,
                start_time
                    .elapsed()
                    .map(|elapsed| elapsed.as_micros() as f64 / 1000.0)
                    .unwrap_or_default()
            );
            println!("- Discovery descriptor hosted at:");
            println!("\thttp://{pretty_addr}{DISCOVERY_PATH}");

            Ok(server.run().await?)
        }
        Err(e) => Err(if e.kind() == ErrorKind::AddrInUse {
            ServerError::PortInUse(server_port)
        } else {
            ServerError::Io(e)
        }),
    }
}

fn pretty_addr(addrs: &[SocketAddr]) -> String {
    let loopback_addr = addrs.iter().find(|addr| addr.ip().is_loopback());

    match loopback_addr {
        Some(addr) => format!("localhost:{}", addr.port()),
        None => match addrs {
            // Print single address without square brackets
            [addr] => format!("{addr}"),
            _ => {
                format!("{addrs:?}")
            }
        },
    }
}
