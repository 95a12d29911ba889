// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Deep links into the ConnectWise web UI
//!
//! Only five record kinds have a stable "open this record" URL. Each
//! generated record type implements [`ViewUrl`]; [`Record`] borrows any of
//! them when the kind is only known at runtime.

use crate::error::RecordError;
use crate::types;

/// Web UI root of the North America cloud
pub const DEFAULT_WEB_ROOT: &str = "https://na.myconnectwise.net/v4_6_release/services/system_io/";

/// Company name used in links when none is configured
pub const DEFAULT_COMPANY_NAME: &str = "nexigen";

/// The record kinds that have a web UI deep link
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum RecordKind {
    Contact,
    Company,
    Ticket,
    Agreement,
    Project,
}

impl RecordKind {
    /// Path and query of this kind's record page, relative to the web root
    fn link_suffix(self, id: i32, company_name: &str) -> String {
        let company = urlencoding::encode(company_name);
        match self {
            RecordKind::Contact => format!(
                "router/openrecord.rails?locale=en_US&recordType=ContactFV&companyName={company}&recid={id}"
            ),
            RecordKind::Company => format!(
                "router/openrecord.rails?locale=en_US&recordType=CompanyFV&recid={id}&companyName={company}"
            ),
            RecordKind::Ticket => {
                format!("Service/fv_sr100_request.rails?service_recid={id}&companyName={company}")
            }
            RecordKind::Agreement => format!(
                "router/openrecord.rails?recordType=AgreementFV&recid={id}&companyName={company}"
            ),
            RecordKind::Project => format!(
                "router/openrecord.rails?recordType=ProjectHeaderFV&recid={id}&companyName={company}"
            ),
        }
    }

    /// Full web UI link for the record of this kind with `id`
    pub fn view_url(self, id: i32, target: &LinkTarget) -> String {
        format!(
            "{}{}",
            target.web_root(),
            self.link_suffix(id, target.company_name())
        )
    }
}

/// Where deep links point: web UI root and tenant company name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    web_root: String,
    company_name: String,
}

impl Default for LinkTarget {
    fn default() -> Self {
        Self {
            web_root: DEFAULT_WEB_ROOT.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
        }
    }
}

impl LinkTarget {
    /// Use a different web UI root (a trailing `/` is added if missing)
    pub fn with_web_root(mut self, web_root: impl Into<String>) -> Self {
        let mut web_root = web_root.into();
        if !web_root.ends_with('/') {
            web_root.push('/');
        }
        self.web_root = web_root;
        self
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = company_name.into();
        self
    }

    pub fn web_root(&self) -> &str {
        &self.web_root
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }
}

/// A record that can be opened in the ConnectWise web UI
pub trait ViewUrl {
    fn kind(&self) -> RecordKind;

    fn record_id(&self) -> Option<i32>;

    /// Deep link using the default [`LinkTarget`]
    ///
    /// # Errors
    /// [`RecordError::MissingIdentifier`] if the record has no `id`
    fn view_url(&self) -> Result<String, RecordError> {
        self.view_url_at(&LinkTarget::default())
    }

    /// Deep link for a specific [`LinkTarget`]
    fn view_url_at(&self, target: &LinkTarget) -> Result<String, RecordError> {
        let kind = self.kind();
        let id = self
            .record_id()
            .ok_or(RecordError::MissingIdentifier(kind))?;
        Ok(kind.view_url(id, target))
    }
}

macro_rules! impl_view_url {
    ($($ty:ident),* $(,)?) => {
        $(
            impl ViewUrl for types::$ty {
                fn kind(&self) -> RecordKind {
                    RecordKind::$ty
                }

                fn record_id(&self) -> Option<i32> {
                    self.id
                }
            }

            impl<'a> From<&'a types::$ty> for Record<'a> {
                fn from(value: &'a types::$ty) -> Self {
                    Record::$ty(value)
                }
            }
        )*
    };
}

impl_view_url!(Contact, Company, Ticket, Agreement, Project);

/// A borrowed record of any linkable kind
#[derive(Debug, Clone, Copy)]
pub enum Record<'a> {
    Contact(&'a types::Contact),
    Company(&'a types::Company),
    Ticket(&'a types::Ticket),
    Agreement(&'a types::Agreement),
    Project(&'a types::Project),
}

impl ViewUrl for Record<'_> {
    fn kind(&self) -> RecordKind {
        match self {
            Record::Contact(r) => r.kind(),
            Record::Company(r) => r.kind(),
            Record::Ticket(r) => r.kind(),
            Record::Agreement(r) => r.kind(),
            Record::Project(r) => r.kind(),
        }
    }

    fn record_id(&self) -> Option<i32> {
        match self {
            Record::Contact(r) => r.record_id(),
            Record::Company(r) => r.record_id(),
            Record::Ticket(r) => r.record_id(),
            Record::Agreement(r) => r.record_id(),
            Record::Project(r) => r.record_id(),
        }
    }
}

/// Resolve an optional record to its deep link
///
/// `None` means there is nothing to resolve and yields `Ok(None)`.
pub fn resolve_view_url<R: ViewUrl + ?Sized>(
    record: Option<&R>,
) -> Result<Option<String>, RecordError> {
    record.map(|r| r.view_url()).transpose()
}

/// Deep link for a record identified only by kind name and id
///
/// For callers that carry the record type as data (e.g. a `recordType`
/// column or a callback payload).
///
/// # Errors
/// - [`RecordError::UnsupportedRecordType`] if `kind` is not a linkable kind
/// - [`RecordError::MissingIdentifier`] if `id` is `None`
pub fn view_url_for(kind: &str, id: Option<i32>) -> Result<String, RecordError> {
    let kind: RecordKind = kind
        .parse()
        .map_err(|_| RecordError::UnsupportedRecordType(kind.to_string()))?;
    let id = id.ok_or(RecordError::MissingIdentifier(kind))?;
    Ok(kind.view_url(id, &LinkTarget::default()))
}
