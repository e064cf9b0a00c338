// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use agent_env::{EnvError, Environment};
use common::env_const::{get_auth_description, get_auth_type, get_base_url};
use serde_json::Value;

use crate::model::AuthInfo;

/// Server-author supplied settings for the descriptor.
#[derive(Debug, Clone)]
pub struct DescriptorConfig {
    pub name: String,
    pub description: String,
    /// Used verbatim when set; otherwise inferred from the first discovery request
    pub base_url: Option<String>,
    pub auth: Option<AuthInfo>,
    pub ui: Option<Value>,
}

impl DescriptorConfig {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            base_url: None,
            auth: None,
            ui: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_auth(mut self, auth: AuthInfo) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn with_ui(mut self, ui: Value) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Apply overrides from `SOCKET_AGENT_BASE_URL`, `SOCKET_AGENT_AUTH_TYPE` and
    /// `SOCKET_AGENT_AUTH_DESCRIPTION`.
    pub fn with_env(mut self, env: &dyn Environment) -> Result<Self, EnvError> {
        if let Some(base_url) = get_base_url(env)? {
            self.base_url = Some(base_url);
        }

        match (get_auth_type(env), get_auth_description(env)) {
            (Some(kind), description) => {
                self.auth = Some(AuthInfo { kind, description });
            }
            (None, Some(description)) => {
                let auth = self.auth.take().unwrap_or_default();
                self.auth = Some(auth.with_description(description));
            }
            (None, None) => {}
        }

        Ok(self)
    }
}
