// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tokio::sync::OnceCell;

use crate::error::DescriptorError;
use crate::size_guard::PublishedDescriptor;

/// Holds the published descriptor for the lifetime of the process.
///
/// The first successful build is kept forever; there is no invalidation. Concurrent callers that
/// arrive before the first build completes wait for it instead of building again. A failed build
/// leaves the slot empty, so the next caller tries again.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    slot: OnceCell<PublishedDescriptor>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_build<F>(&self, build: F) -> Result<&PublishedDescriptor, DescriptorError>
    where
        F: FnOnce() -> Result<PublishedDescriptor, DescriptorError>,
    {
        self.slot.get_or_try_init(|| async move { build() }).await
    }

    pub fn get(&self) -> Option<&PublishedDescriptor> {
        self.slot.get()
    }
}
