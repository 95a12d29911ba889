// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for connectwise-client

use thiserror::Error;

use crate::record::RecordKind;

/// Errors that can occur while building a ConnectWise client
///
/// A [`crate::ClientRegistry`] caches these, so they are `Clone` and carry
/// only owned strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// One or more credential values resolved empty
    #[error(
        "missing required ConnectWise configuration: {}. Please ensure CW_BASE_URL, CW_COMPANY, \
         CW_CLIENT_ID, CW_PUBLIC_KEY, and CW_PRIVATE_KEY are set",
        .missing.join(", ")
    )]
    MissingConfiguration {
        /// Environment variable names of the missing values
        missing: Vec<&'static str>,
    },

    /// The HTTP transport could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Transport(String),
}

/// Errors that can occur while resolving a record's web UI link
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record kind has no known deep link
    #[error("unsupported record type: {0}")]
    UnsupportedRecordType(String),

    /// The record has no `id`, so there is nothing to link to
    #[error("{0} record has no id")]
    MissingIdentifier(RecordKind),
}
