// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::{info, warn};

use crate::error::DescriptorError;
use crate::model::Descriptor;

/// Above this many bytes the descriptor is still served, but a warning is logged.
pub const SIZE_WARNING_THRESHOLD: usize = 3 * 1024;
/// Above this many bytes the descriptor is rejected.
pub const SIZE_HARD_LIMIT: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStatus {
    WithinBudget,
    OverWarningThreshold,
    OverHardLimit,
}

impl SizeStatus {
    pub fn of(size: usize) -> Self {
        if size > SIZE_HARD_LIMIT {
            SizeStatus::OverHardLimit
        } else if size > SIZE_WARNING_THRESHOLD {
            SizeStatus::OverWarningThreshold
        } else {
            SizeStatus::WithinBudget
        }
    }
}

/// A descriptor that passed the size check, along with the exact bytes that are served.
#[derive(Debug, Clone)]
pub struct PublishedDescriptor {
    descriptor: Descriptor,
    json: Vec<u8>,
}

impl PublishedDescriptor {
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn json(&self) -> &[u8] {
        &self.json
    }

    pub fn size(&self) -> usize {
        self.json.len()
    }
}

/// Serialize the descriptor to compact JSON and enforce the size budget.
pub fn check(descriptor: Descriptor) -> Result<PublishedDescriptor, DescriptorError> {
    let json = serde_json::to_vec(&descriptor)?;
    let size = json.len();

    match SizeStatus::of(size) {
        SizeStatus::WithinBudget => {}
        SizeStatus::OverWarningThreshold => {
            warn!(
                size,
                threshold = SIZE_WARNING_THRESHOLD,
                "Discovery descriptor is larger than recommended; consider trimming schemas or examples"
            );
        }
        SizeStatus::OverHardLimit => {
            return Err(DescriptorError::TooLarge {
                size,
                limit: SIZE_HARD_LIMIT,
            });
        }
    }

    info!(
        size,
        endpoints = descriptor.endpoints.len(),
        "Built discovery descriptor"
    );

    Ok(PublishedDescriptor { descriptor, json })
}
