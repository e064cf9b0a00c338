// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Access to configuration values supplied through the environment.
//!
//! Code never reads `std::env` directly. Instead it is handed a `dyn Environment`, which is
//! a [`SystemEnvironment`] in the server binary and a [`MapEnvironment`] in tests.

mod map;

use std::str::FromStr;

use url::Url;

pub use map::MapEnvironment;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Like `get`, but treats an empty or whitespace-only value as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    /// An absolute URL (scheme and host required). The raw string is returned untouched.
    fn get_url(&self, key: &str) -> Result<Option<String>, EnvError> {
        match self.get_non_empty(key) {
            Some(value) => match Url::parse(&value) {
                Ok(url) if url.has_host() => Ok(Some(value)),
                _ => Err(EnvError::InvalidUrl {
                    key: key.to_string(),
                    value,
                }),
            },
            None => Ok(None),
        }
    }
}

/// Parse the value of `key` with `FromStr`, falling back to `default_value` when the key is unset.
pub fn get_parsed<T: FromStr>(
    env: &dyn Environment,
    key: &str,
    default_value: T,
) -> Result<T, EnvError> {
    match env.get_non_empty(key) {
        Some(value) => value.parse::<T>().map_err(|_| EnvError::InvalidValue {
            key: key.to_string(),
            value,
            expected: std::any::type_name::<T>(),
        }),
        None => Ok(default_value),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid value for {key}: {value}. Expected a value of type {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid value for {key}: {value}. Expected an absolute URL such as https://api.example.com")]
    InvalidUrl { key: String, value: String },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
