// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::http::{RequestHead, ResponsePayload};
use async_trait::async_trait;

/// A unit of request handling. Returns `None` when the request is not meant for this router, so
/// that the host can fall through to its own routing.
#[async_trait]
pub trait Router: Sync {
    async fn route(&self, request_head: &(dyn RequestHead + Send + Sync))
    -> Option<ResponsePayload>;
}
