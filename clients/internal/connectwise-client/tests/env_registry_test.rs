// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Environment-driven acquisition through the process-wide registry
//!
//! Kept in its own test binary with a single test: it mutates the process
//! environment and initializes [`ClientRegistry::global`], which can only
//! happen once per process.

use std::sync::Arc;

use connectwise_client::{
    ClientInfo, ClientRegistry, CredentialOverrides, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_CLIENT_ID,
    ENV_COMPANY, ENV_PRIVATE_KEY, ENV_PUBLIC_KEY,
};

#[test]
fn test_global_acquire_from_env() {
    // SAFETY: this binary runs a single test, so nothing reads the
    // environment concurrently.
    unsafe {
        std::env::remove_var(ENV_BASE_URL);
        std::env::set_var(ENV_COMPANY, "envco");
        std::env::set_var(ENV_CLIENT_ID, "env-client");
        std::env::set_var(ENV_PUBLIC_KEY, "envpub");
        std::env::set_var(ENV_PRIVATE_KEY, "envpriv");
    }

    let registry = ClientRegistry::global();
    let client = registry.acquire_from_env().expect("client from environment");
    assert_eq!(client.baseurl(), DEFAULT_BASE_URL);
    assert_eq!(client.inner().company(), "envco");
    assert_eq!(client.inner().username(), "envco+envpub");

    // Later changes to the environment or explicit arguments do not matter
    unsafe {
        std::env::set_var(ENV_COMPANY, "otherco");
    }
    let explicit = CredentialOverrides {
        company: Some("argco".to_string()),
        ..Default::default()
    };
    let again = registry.acquire(&explicit).unwrap();
    assert!(Arc::ptr_eq(&client, &again));
    assert_eq!(again.inner().company(), "envco");
}
