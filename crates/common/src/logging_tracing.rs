// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Tracing configuration setup.
//!
//! The server code is instrumented with Rust's `tracing` framework.
//!
//! Calling the `init` function will initialize a global tracing subscriber based on the value of
//! the `SOCKET_AGENT_LOG` environment variable which follows the same conventions as
//! `RUST_LOG`. This provides console logging. For example, to see every descriptor build:
//!
//! ```shell
//! $ SOCKET_AGENT_LOG=descriptor=debug,info todo-server
//! ```

use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use crate::env_const::SOCKET_AGENT_LOG;

/// Initialize the tracing subscriber.
///
/// Installs a compact `tracing_subscriber::fmt` layer filtered by `SOCKET_AGENT_LOG`, defaulting
/// to `WARN` so that descriptor size warnings are visible out of the box.
pub fn init() {
    let fmt_layer = tracing_subscriber::fmt::layer().compact();
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(SOCKET_AGENT_LOG)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
