// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! ConnectWise Manage Client Library
//!
//! This is a Progenitor-generated client for the subset of the ConnectWise
//! Manage REST API defined in `apis/connectwise-api`, plus the pieces needed
//! to use it against a real tenant:
//!
//! - [`Credentials`]: the five values ConnectWise requires, resolved from
//!   explicit overrides or `CW_*` environment variables
//! - [`auth::add_auth_headers`]: the request pre-hook that adds the
//!   versioned `Accept`, `clientId`, and Basic `Authorization` headers to
//!   every outgoing request
//! - [`ClientRegistry`]: a once-initialized holder for a shared client
//! - [`ViewUrl`] / [`Record`]: deep links into the ConnectWise web UI
//!
//! ## Usage
//!
//! ### Shared client from the environment
//!
//! ```ignore
//! use connectwise_client::ClientRegistry;
//!
//! // Reads CW_COMPANY, CW_CLIENT_ID, CW_PUBLIC_KEY, CW_PRIVATE_KEY
//! // (and CW_BASE_URL, defaulting to the North America cloud)
//! let client = ClientRegistry::global().acquire_from_env()?;
//!
//! let ticket = client.get_ticket().id(12345).send().await?.into_inner();
//! ```
//!
//! ### Explicit credentials
//!
//! ```ignore
//! use connectwise_client::{ClientRegistry, CredentialOverrides};
//!
//! let registry = ClientRegistry::new();
//! let client = registry.acquire(&CredentialOverrides {
//!     company: Some("acme".to_string()),
//!     client_id: Some("f5c6a1b2-...".to_string()),
//!     ..Default::default()
//! })?; // missing fields fall back to CW_* variables
//! ```
//!
//! ### Deep links
//!
//! ```ignore
//! use connectwise_client::{ViewUrl, resolve_view_url};
//!
//! let url = ticket.view_url()?;
//! // https://na.myconnectwise.net/v4_6_release/services/system_io/Service/fv_sr100_request.rails?service_recid=12345&companyName=nexigen
//!
//! // Absent records resolve to nothing
//! assert_eq!(resolve_view_url::<types::Ticket>(None)?, None);
//! ```

pub mod auth;
pub mod config;
pub mod connect;
pub mod error;
pub mod record;

// Include the Progenitor-generated client code
include!(concat!(env!("OUT_DIR"), "/client.rs"));

pub use config::{
    CredentialOverrides, Credentials, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_CLIENT_ID, ENV_COMPANY,
    ENV_PRIVATE_KEY, ENV_PUBLIC_KEY,
};
pub use connect::ClientRegistry;
pub use error::{ConnectError, RecordError};
pub use record::{
    DEFAULT_COMPANY_NAME, DEFAULT_WEB_ROOT, LinkTarget, Record, RecordKind, ViewUrl,
    resolve_view_url, view_url_for,
};
