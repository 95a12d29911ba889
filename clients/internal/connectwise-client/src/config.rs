// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Credential resolution
//!
//! ConnectWise needs five values for every request. Each one can be passed
//! explicitly through [`CredentialOverrides`] or read from its `CW_*`
//! environment variable; an explicit non-empty value always wins.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::ConnectError;
use crate::record::LinkTarget;

pub const ENV_BASE_URL: &str = "CW_BASE_URL";
pub const ENV_COMPANY: &str = "CW_COMPANY";
pub const ENV_CLIENT_ID: &str = "CW_CLIENT_ID";
pub const ENV_PUBLIC_KEY: &str = "CW_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "CW_PRIVATE_KEY";

/// North America cloud endpoint, used when `CW_BASE_URL` is unset on the
/// environment-only path
pub const DEFAULT_BASE_URL: &str = "https://na.myconnectwise.net/v4_6_release/apis/3.0";

/// Explicitly supplied credential values
///
/// `None` and `Some("")` both mean "not supplied": the matching environment
/// variable is consulted instead. Deserializes from a camelCase object so
/// embedding applications can keep these in their own config files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialOverrides {
    pub base_url: Option<String>,
    pub company: Option<String>,
    pub client_id: Option<String>,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

/// A complete, validated set of ConnectWise API credentials
///
/// Used as the inner state of the generated [`crate::Client`], so the auth
/// pre-hook can read it on every request.
#[derive(Debug, Clone)]
pub struct Credentials {
    base_url: String,
    company: String,
    client_id: String,
    public_key: String,
    private_key: Arc<SecretString>,
}

impl Credentials {
    /// Build credentials from explicit values
    ///
    /// # Errors
    /// Returns [`ConnectError::MissingConfiguration`] naming every empty value
    pub fn new(
        base_url: impl Into<String>,
        company: impl Into<String>,
        client_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self, ConnectError> {
        let fields = [
            (ENV_BASE_URL, base_url.into()),
            (ENV_COMPANY, company.into()),
            (ENV_CLIENT_ID, client_id.into()),
            (ENV_PUBLIC_KEY, public_key.into()),
            (ENV_PRIVATE_KEY, private_key.into()),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ConnectError::MissingConfiguration { missing });
        }

        let [base_url, company, client_id, public_key, private_key] = fields.map(|(_, v)| v);
        Ok(Self {
            base_url,
            company,
            client_id,
            public_key,
            private_key: Arc::new(SecretString::from(private_key)),
        })
    }

    /// Resolve credentials from overrides, falling back to `lookup` for
    /// every value that was not supplied
    ///
    /// `lookup` receives an environment variable name (see the `ENV_*`
    /// constants). Passing a closure keeps resolution testable without
    /// touching the process environment.
    pub fn resolve<F>(overrides: &CredentialOverrides, lookup: F) -> Result<Self, ConnectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: &Option<String>, name: &str| -> String {
            match explicit.as_deref() {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => {
                    let value = lookup(name).unwrap_or_default();
                    if !value.is_empty() {
                        tracing::debug!(variable = name, "using credential value from environment");
                    }
                    value
                }
            }
        };

        Self::new(
            pick(&overrides.base_url, ENV_BASE_URL),
            pick(&overrides.company, ENV_COMPANY),
            pick(&overrides.client_id, ENV_CLIENT_ID),
            pick(&overrides.public_key, ENV_PUBLIC_KEY),
            pick(&overrides.private_key, ENV_PRIVATE_KEY),
        )
    }

    /// Resolve credentials purely from `lookup`, using [`DEFAULT_BASE_URL`]
    /// when no base URL is available
    pub fn resolve_env<F>(lookup: F) -> Result<Self, ConnectError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::resolve(&CredentialOverrides::default(), |name| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .or_else(|| (name == ENV_BASE_URL).then(|| DEFAULT_BASE_URL.to_string()))
        })
    }

    /// [`Credentials::resolve`] against the process environment
    pub fn from_env(overrides: &CredentialOverrides) -> Result<Self, ConnectError> {
        Self::resolve(overrides, process_env)
    }

    /// [`Credentials::resolve_env`] against the process environment
    pub fn from_env_only() -> Result<Self, ConnectError> {
        Self::resolve_env(process_env)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn private_key(&self) -> &SecretString {
        &self.private_key
    }

    /// Basic-auth username: `company+publicKey`
    pub fn username(&self) -> String {
        format!("{}+{}", self.company, self.public_key)
    }

    /// Basic-auth credential before encoding: `company+publicKey:privateKey`
    pub(crate) fn basic_credential(&self) -> String {
        format!("{}:{}", self.username(), self.private_key.expose_secret())
    }

    /// Deep-link target using this tenant's company name
    pub fn link_target(&self) -> LinkTarget {
        LinkTarget::default().with_company_name(self.company.clone())
    }
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
