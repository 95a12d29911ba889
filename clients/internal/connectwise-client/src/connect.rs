// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client construction and the once-initialized client registry
//!
//! A [`ClientRegistry`] resolves credentials and builds a client exactly once.
//! Whatever the first attempt produces, a client or an error, is what every
//! later caller of that registry gets back. Applications own a registry at
//! their composition root; [`ClientRegistry::global`] is available for code
//! that wants one client per process.

use std::sync::{Arc, OnceLock};

use crate::config::{CredentialOverrides, Credentials};
use crate::error::ConnectError;
use crate::Client;

const USER_AGENT: &str = concat!("connectwise-client/", env!("CARGO_PKG_VERSION"));

static GLOBAL: ClientRegistry = ClientRegistry::new();

impl Credentials {
    /// Build a new, unshared client authenticated with these credentials
    ///
    /// # Errors
    /// Returns [`ConnectError::Transport`] if the HTTP client cannot be built
    pub fn connect(self) -> Result<Client, ConnectError> {
        let http = http_client()?;
        tracing::info!(
            base_url = %self.base_url(),
            company = %self.company(),
            "Connected to ConnectWise API"
        );
        let base_url = self.base_url().to_string();
        Ok(Client::new_with_client(&base_url, http, self))
    }
}

fn http_client() -> Result<reqwest::Client, ConnectError> {
    // reqwest is built without a bundled rustls provider
    if rustls::crypto::CryptoProvider::get_default().is_none() {
        let _ = rustls::crypto::ring::default_provider().install_default();
    }

    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ConnectError::Transport(e.to_string()))
}

/// Holds at most one client, created on first use
#[derive(Debug, Default)]
pub struct ClientRegistry {
    slot: OnceLock<Result<Arc<Client>, ConnectError>>,
}

impl ClientRegistry {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static ClientRegistry {
        &GLOBAL
    }

    /// Get the client, resolving credentials from `overrides` and the
    /// `CW_*` environment variables on first use
    ///
    /// Once resolved, `overrides` is ignored by later calls.
    pub fn acquire(&self, overrides: &CredentialOverrides) -> Result<Arc<Client>, ConnectError> {
        self.get_or_connect(|| Credentials::from_env(overrides))
    }

    /// Get the client, resolving credentials purely from the `CW_*`
    /// environment variables on first use
    ///
    /// The base URL defaults to [`crate::DEFAULT_BASE_URL`] when
    /// `CW_BASE_URL` is unset.
    pub fn acquire_from_env(&self) -> Result<Arc<Client>, ConnectError> {
        self.get_or_connect(Credentials::from_env_only)
    }

    /// Get the client, calling `resolve` to obtain credentials if this is
    /// the first attempt
    ///
    /// Concurrent first callers block until the single attempt finishes.
    /// `resolve` is never called again after the first attempt, even if it
    /// failed.
    pub fn get_or_connect<F>(&self, resolve: F) -> Result<Arc<Client>, ConnectError>
    where
        F: FnOnce() -> Result<Credentials, ConnectError>,
    {
        let mut initialized_here = false;
        let result = self.slot.get_or_init(|| {
            initialized_here = true;
            tracing::debug!("Connecting to ConnectWise API");
            let result = resolve().and_then(Credentials::connect).map(Arc::new);
            if let Err(e) = &result {
                tracing::error!(error = %e, "ConnectWise client initialization failed");
            }
            result
        });

        if !initialized_here && let Err(e) = result {
            tracing::warn!(error = %e, "returning cached ConnectWise initialization failure");
        }
        result.clone()
    }

    /// The outcome of the first attempt, if there has been one
    pub fn get(&self) -> Option<&Result<Arc<Client>, ConnectError>> {
        self.slot.get()
    }
}
