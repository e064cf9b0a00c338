// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use common::http::RequestHead;
use url::Url;

use crate::error::DescriptorError;

/// The configured base URL if there is one, otherwise the origin the request was addressed to.
pub fn resolve_base_url(
    configured: Option<&str>,
    request_head: &dyn RequestHead,
) -> Result<String, DescriptorError> {
    match configured {
        Some(base_url) => Ok(base_url.to_string()),
        None => infer_base_url(request_head),
    }
}

/// Normalize the request's scheme and host authority to `scheme://host[:port]`. Default ports
/// are dropped, as is anything after the authority.
pub fn infer_base_url(request_head: &dyn RequestHead) -> Result<String, DescriptorError> {
    let scheme = request_head.get_scheme();
    let host = request_head.get_host();

    let invalid_host = || DescriptorError::InvalidHost {
        scheme: scheme.clone(),
        host: host.clone(),
    };

    let url = Url::parse(&format!("{scheme}://{host}")).map_err(|_| invalid_host())?;
    let origin = url.origin();

    if origin.is_tuple() {
        Ok(origin.ascii_serialization())
    } else {
        Err(invalid_host())
    }
}
