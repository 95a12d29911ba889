// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication support for ConnectWise requests
//!
//! This module provides the `add_auth_headers` pre-hook function that the
//! Progenitor-generated client runs on every request before it is sent.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};

use crate::Credentials;

/// Vendor media type pinning the API schema version
pub const ACCEPT_VALUE: &str = "application/vnd.connectwise.com+json; version=2024.13";

/// Header carrying the registered integration's client id
pub const CLIENT_ID_HEADER: &str = "clientid";

/// `Authorization` value for `credentials`:
/// `Basic base64(company+publicKey:privateKey)`
pub fn basic_authorization(credentials: &Credentials) -> String {
    format!("Basic {}", STANDARD.encode(credentials.basic_credential()))
}

/// Add ConnectWise headers to a request
///
/// This function is used as a `pre_hook_async` for the Progenitor-generated
/// client. It sets `Content-Type`, the versioned `Accept`, `clientId`, and
/// Basic `Authorization`, replacing any values already present.
///
/// # Arguments
/// * `credentials` - Resolved credentials stored in the client
/// * `request` - The mutable request to add headers to
///
/// # Errors
/// Returns an error if a credential contains bytes that are not valid in an
/// HTTP header value
pub async fn add_auth_headers(
    credentials: &Credentials,
    request: &mut reqwest::Request,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client_id = header_value(credentials.client_id(), "clientId")?;
    let mut authorization = header_value(&basic_authorization(credentials), "authorization")?;
    authorization.set_sensitive(true);

    let headers = request.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(HeaderName::from_static(CLIENT_ID_HEADER), client_id);
    headers.insert(AUTHORIZATION, authorization);

    Ok(())
}

fn header_value(
    value: &str,
    name: &str,
) -> Result<HeaderValue, Box<dyn std::error::Error + Send + Sync>> {
    HeaderValue::from_str(value).map_err(|e| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Invalid {} header: {}", name, e),
        )) as Box<dyn std::error::Error + Send + Sync>
    })
}
