// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use agent_env::{EnvError, Environment, get_parsed};

pub const SOCKET_AGENT_LOG: &str = "SOCKET_AGENT_LOG";

pub const SOCKET_AGENT_SERVER_PORT: &str = "SOCKET_AGENT_SERVER_PORT";
pub const SOCKET_AGENT_SERVER_HOST: &str = "SOCKET_AGENT_SERVER_HOST";

pub const SOCKET_AGENT_BASE_URL: &str = "SOCKET_AGENT_BASE_URL";

pub const SOCKET_AGENT_AUTH_TYPE: &str = "SOCKET_AGENT_AUTH_TYPE";
pub const SOCKET_AGENT_AUTH_DESCRIPTION: &str = "SOCKET_AGENT_AUTH_DESCRIPTION";

const DEFAULT_SERVER_PORT: u16 = 8000;

pub fn get_server_port(env: &dyn Environment) -> Result<u16, EnvError> {
    get_parsed(env, SOCKET_AGENT_SERVER_PORT, DEFAULT_SERVER_PORT)
}

pub fn get_server_host(env: &dyn Environment) -> Option<String> {
    env.get_non_empty(SOCKET_AGENT_SERVER_HOST)
}

/// Explicit base URL for the descriptor. When unset, the base URL is inferred from the first
/// discovery request.
pub fn get_base_url(env: &dyn Environment) -> Result<Option<String>, EnvError> {
    env.get_url(SOCKET_AGENT_BASE_URL)
}

pub fn get_auth_type(env: &dyn Environment) -> Option<String> {
    env.get_non_empty(SOCKET_AGENT_AUTH_TYPE)
}

pub fn get_auth_description(env: &dyn Environment) -> Option<String> {
    env.get_non_empty(SOCKET_AGENT_AUTH_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_env::MapEnvironment;

    #[test]
    fn server_port_defaults_and_validates() {
        assert_eq!(get_server_port(&MapEnvironment::new()).unwrap(), 8000);

        let env = MapEnvironment::from([(SOCKET_AGENT_SERVER_PORT, "9876")]);
        assert_eq!(get_server_port(&env).unwrap(), 9876);

        let env = MapEnvironment::from([(SOCKET_AGENT_SERVER_PORT, "70000")]);
        assert!(get_server_port(&env).is_err());
    }

    #[test]
    fn base_url_must_be_absolute() {
        let env = MapEnvironment::from([(SOCKET_AGENT_BASE_URL, "https://api.example.com")]);
        assert_eq!(
            get_base_url(&env).unwrap().as_deref(),
            Some("https://api.example.com")
        );

        let env = MapEnvironment::from([(SOCKET_AGENT_BASE_URL, "api.example.com")]);
        assert!(get_base_url(&env).is_err());
    }
}
