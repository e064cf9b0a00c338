// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error(
        "Discovery descriptor is {size} bytes, which exceeds the {limit} byte limit. Reduce the number of routes, schemas or examples"
    )]
    TooLarge { size: usize, limit: usize },

    #[error("Cannot infer a base URL from scheme '{scheme}' and host '{host}'")]
    InvalidHost { scheme: String, host: String },

    #[error("Failed to serialize the discovery descriptor: {0}")]
    Serialization(#[from] serde_json::Error),
}
