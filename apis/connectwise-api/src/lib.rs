// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! ConnectWise Manage API Trait Definition
//!
//! **IMPORTANT**: This trait defines a *subset* of the ConnectWise Manage REST
//! API (v3.0, schema version 2024.13). The vendor document describes hundreds
//! of operations; this trait only carries the records we read:
//! - System info (connectivity check)
//! - Contacts and companies
//! - Service tickets
//! - Agreements
//! - Projects
//!
//! The actual API is served by ConnectWise. This trait exists to:
//! 1. Document the exact API surface we depend on
//! 2. Generate an OpenAPI specification for client generation
//! 3. Back the stub server used in integration tests
//!
//! Reference: https://developer.connectwise.com/Products/ConnectWise_PSA/REST

use dropshot::{HttpError, HttpResponseOk, Path, Query, RequestContext};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Page size the vendor applies when `pageSize` is omitted
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest `pageSize` the vendor honours
pub const MAX_PAGE_SIZE: u32 = 1000;

// ============================================================================
// Shared Types
// ============================================================================

/// Generic reference to another record (board, status, priority, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: Option<i32>,
    pub name: Option<String>,
}

/// Reference to a company, as embedded in contacts, tickets, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyReference {
    pub id: Option<i32>,
    /// Short company identifier (e.g. "AcmeCorp")
    pub identifier: Option<String>,
    pub name: Option<String>,
}

/// Query parameters accepted by every list endpoint
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Condition expression, e.g. `status/name="New" and closedFlag=false`
    pub conditions: Option<String>,

    /// Sort expression, e.g. `id desc`
    pub order_by: Option<String>,

    /// 1-based page number (default: 1)
    pub page: Option<u32>,

    /// Records per page (default: 25, max: 1000)
    pub page_size: Option<u32>,
}

/// Path parameter for single-record endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RecordIdPath {
    /// Numeric record identifier
    pub id: i32,
}

// ============================================================================
// Records
// ============================================================================

/// Server version and deployment information
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub version: Option<String>,
    pub is_cloud: Option<bool>,
    pub server_time_zone: Option<String>,
    pub cloud_region: Option<String>,
}

/// A person attached to a company
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub company: Option<CompanyReference>,
    pub inactive_flag: Option<bool>,
}

/// A customer, vendor, or other organisation
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Option<i32>,
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub status: Option<Reference>,
    pub deleted_flag: Option<bool>,
}

// NOTE: In the vendor openapi document this record is "Ticket" under the
// "service" tag; project tickets live elsewhere and are not covered here.
/// A service ticket
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Option<i32>,
    pub summary: Option<String>,
    pub board: Option<Reference>,
    pub status: Option<Reference>,
    pub priority: Option<Reference>,
    pub company: Option<CompanyReference>,
    pub contact: Option<Reference>,
    pub closed_flag: Option<bool>,
}

/// A service or billing agreement with a company
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub id: Option<i32>,
    pub name: Option<String>,
    /// Agreement type (e.g. "Managed Services")
    #[serde(rename = "type")]
    pub agreement_type: Option<Reference>,
    pub company: Option<CompanyReference>,
    /// ISO-8601 start date
    pub start_date: Option<String>,
    /// ISO-8601 end date
    pub end_date: Option<String>,
    pub cancelled_flag: Option<bool>,
}

/// A project header
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub board: Option<Reference>,
    pub status: Option<Reference>,
    pub company: Option<CompanyReference>,
    pub estimated_start: Option<String>,
    pub estimated_end: Option<String>,
    pub closed_flag: Option<bool>,
}

// ============================================================================
// API Trait
// ============================================================================

/// ConnectWise Manage REST API v3.0 (Subset)
///
/// **IMPORTANT**: This is a partial definition of the vendor API containing
/// only the endpoints this workspace calls. Every request must carry the
/// ConnectWise `clientId`, versioned `Accept`, and Basic `Authorization`
/// headers; the client crate adds them in a request pre-hook.
#[dropshot::api_description]
pub trait ConnectwiseApi {
    /// Context type for request handlers
    type Context: Send + Sync + 'static;

    /// Get system information
    ///
    /// **Vendor Reference**: GET /system/info
    #[endpoint {
        method = GET,
        path = "/system/info",
        tags = ["system"],
    }]
    async fn get_system_info(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<SystemInfo>, HttpError>;

    /// List contacts
    ///
    /// **Vendor Reference**: GET /company/contacts
    #[endpoint {
        method = GET,
        path = "/company/contacts",
        tags = ["company"],
    }]
    async fn list_contacts(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListQuery>,
    ) -> Result<HttpResponseOk<Vec<Contact>>, HttpError>;

    /// Get a contact by id
    ///
    /// **Vendor Reference**: GET /company/contacts/{id}
    #[endpoint {
        method = GET,
        path = "/company/contacts/{id}",
        tags = ["company"],
    }]
    async fn get_contact(
        rqctx: RequestContext<Self::Context>,
        path: Path<RecordIdPath>,
    ) -> Result<HttpResponseOk<Contact>, HttpError>;

    /// List companies
    ///
    /// **Vendor Reference**: GET /company/companies
    #[endpoint {
        method = GET,
        path = "/company/companies",
        tags = ["company"],
    }]
    async fn list_companies(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListQuery>,
    ) -> Result<HttpResponseOk<Vec<Company>>, HttpError>;

    /// Get a company by id
    ///
    /// **Vendor Reference**: GET /company/companies/{id}
    #[endpoint {
        method = GET,
        path = "/company/companies/{id}",
        tags = ["company"],
    }]
    async fn get_company(
        rqctx: RequestContext<Self::Context>,
        path: Path<RecordIdPath>,
    ) -> Result<HttpResponseOk<Company>, HttpError>;

    /// List service tickets
    ///
    /// **Vendor Reference**: GET /service/tickets
    #[endpoint {
        method = GET,
        path = "/service/tickets",
        tags = ["service"],
    }]
    async fn list_tickets(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListQuery>,
    ) -> Result<HttpResponseOk<Vec<Ticket>>, HttpError>;

    /// Get a service ticket by id
    ///
    /// **Vendor Reference**: GET /service/tickets/{id}
    #[endpoint {
        method = GET,
        path = "/service/tickets/{id}",
        tags = ["service"],
    }]
    async fn get_ticket(
        rqctx: RequestContext<Self::Context>,
        path: Path<RecordIdPath>,
    ) -> Result<HttpResponseOk<Ticket>, HttpError>;

    /// List agreements
    ///
    /// **Vendor Reference**: GET /finance/agreements
    #[endpoint {
        method = GET,
        path = "/finance/agreements",
        tags = ["finance"],
    }]
    async fn list_agreements(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListQuery>,
    ) -> Result<HttpResponseOk<Vec<Agreement>>, HttpError>;

    /// Get an agreement by id
    ///
    /// **Vendor Reference**: GET /finance/agreements/{id}
    #[endpoint {
        method = GET,
        path = "/finance/agreements/{id}",
        tags = ["finance"],
    }]
    async fn get_agreement(
        rqctx: RequestContext<Self::Context>,
        path: Path<RecordIdPath>,
    ) -> Result<HttpResponseOk<Agreement>, HttpError>;

    /// List projects
    ///
    /// **Vendor Reference**: GET /project/projects
    #[endpoint {
        method = GET,
        path = "/project/projects",
        tags = ["project"],
    }]
    async fn list_projects(
        rqctx: RequestContext<Self::Context>,
        query: Query<ListQuery>,
    ) -> Result<HttpResponseOk<Vec<Project>>, HttpError>;

    /// Get a project by id
    ///
    /// **Vendor Reference**: GET /project/projects/{id}
    #[endpoint {
        method = GET,
        path = "/project/projects/{id}",
        tags = ["project"],
    }]
    async fn get_project(
        rqctx: RequestContext<Self::Context>,
        path: Path<RecordIdPath>,
    ) -> Result<HttpResponseOk<Project>, HttpError>;
}
