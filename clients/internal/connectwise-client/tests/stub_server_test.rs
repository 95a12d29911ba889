// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Integration tests for connectwise-client using connectwise-stub-server
//!
//! These tests spin up the stub server and drive it with a client obtained
//! from a [`ClientRegistry`], so the auth pre-hook, the generated request
//! builders, and deep-link resolution are exercised end to end.

use std::sync::Arc;
use std::time::Duration;

use connectwise_client::{
    ClientInfo, ClientRegistry, CredentialOverrides, Credentials, Record, RecordKind, ViewUrl,
    resolve_view_url,
};
use connectwise_stub_server::{ExpectedAuth, StubContext};
use pretty_assertions::assert_eq;

const COMPANY: &str = "acme";
const CLIENT_ID: &str = "0b9c5f7e-test-client";
const PUBLIC_KEY: &str = "pubkey";
const PRIVATE_KEY: &str = "privkey";

struct StubServer {
    base_url: String,
    context: Arc<StubContext>,
    _server: dropshot::HttpServer<Arc<StubContext>>,
}

async fn start_stub() -> Option<StubServer> {
    let context = Arc::new(
        StubContext::from_fixtures(
            &connectwise_stub_server::fixtures_dir(),
            ExpectedAuth::new(COMPANY, CLIENT_ID, PUBLIC_KEY, PRIVATE_KEY),
        )
        .unwrap(),
    );

    let api = connectwise_stub_server::api_description().expect("stub api description");

    let config = dropshot::ConfigDropshot {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let log = dropshot::ConfigLogging::StderrTerminal {
        level: dropshot::ConfigLoggingLevel::Warn,
    }
    .to_logger("connectwise-stub-test")
    .expect("stub logger");

    let server = match dropshot::HttpServerStarter::new(&config, api, context.clone(), &log) {
        Ok(starter) => starter.start(),
        Err(e) => {
            eprintln!("skipping integration test: failed to start stub: {}", e);
            return None;
        }
    };

    let base_url = format!("http://{}", server.local_addr());

    // Give server a moment to be ready
    tokio::time::sleep(Duration::from_millis(50)).await;

    Some(StubServer {
        base_url,
        context,
        _server: server,
    })
}

fn overrides(base_url: &str, private_key: &str) -> CredentialOverrides {
    CredentialOverrides {
        base_url: Some(base_url.to_string()),
        company: Some(COMPANY.to_string()),
        client_id: Some(CLIENT_ID.to_string()),
        public_key: Some(PUBLIC_KEY.to_string()),
        private_key: Some(private_key.to_string()),
    }
}

#[tokio::test]
async fn test_registry_client_against_stub() {
    let Some(stub) = start_stub().await else {
        return;
    };

    let registry = ClientRegistry::new();
    let client = registry
        .acquire(&overrides(&stub.base_url, PRIVATE_KEY))
        .expect("client from registry");

    // Test: system info
    let info = client
        .get_system_info()
        .send()
        .await
        .expect("system info")
        .into_inner();
    assert_eq!(info.is_cloud, Some(true));

    // Test: fetch a ticket and link to it
    let ticket = client
        .get_ticket()
        .id(12345)
        .send()
        .await
        .expect("get ticket")
        .into_inner();
    assert_eq!(ticket.summary.as_deref(), Some("Printer on fire"));

    let url = ticket.view_url().unwrap();
    assert_eq!(
        url,
        "https://na.myconnectwise.net/v4_6_release/services/system_io/Service/fv_sr100_request.rails?service_recid=12345&companyName=nexigen"
    );

    let tenant_url = ticket.view_url_at(&client.inner().link_target()).unwrap();
    assert!(tenant_url.ends_with("service_recid=12345&companyName=acme"));

    // Test: a second acquire hands back the same client
    let again = registry
        .acquire(&CredentialOverrides::default())
        .expect("cached client");
    assert!(Arc::ptr_eq(&client, &again));

    assert_eq!(stub.context.rejected_requests(), 0);
    assert_eq!(stub.context.accepted_requests(), 2);
}

#[tokio::test]
async fn test_list_endpoints_and_links() {
    let Some(stub) = start_stub().await else {
        return;
    };

    let client = Credentials::resolve(&overrides(&stub.base_url, PRIVATE_KEY), |_| None)
        .unwrap()
        .connect()
        .unwrap();

    let tickets = client
        .list_tickets()
        .page(1)
        .page_size(2)
        .send()
        .await
        .expect("list tickets")
        .into_inner();
    let ids: Vec<_> = tickets.iter().filter_map(|t| t.id).collect();
    assert_eq!(ids, vec![12345, 12346]);

    let rest = client
        .list_tickets()
        .page(2)
        .page_size(2)
        .send()
        .await
        .expect("list tickets page 2")
        .into_inner();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].closed_flag, Some(true));

    let companies = client.list_companies().send().await.unwrap().into_inner();
    let contacts = client.list_contacts().send().await.unwrap().into_inner();
    let agreements = client.list_agreements().send().await.unwrap().into_inner();
    let projects = client.list_projects().send().await.unwrap().into_inner();

    let mut records: Vec<Record<'_>> = Vec::new();
    records.extend(companies.iter().map(Record::from));
    records.extend(contacts.iter().map(Record::from));
    records.extend(agreements.iter().map(Record::from));
    records.extend(projects.iter().map(Record::from));

    for record in &records {
        let url = record.view_url().expect("fixture records have ids");
        let id = record.record_id().unwrap();
        assert_eq!(url, record.kind().view_url(id, &Default::default()));
    }
    assert!(records.iter().any(|r| r.kind() == RecordKind::Agreement));
    assert!(records.iter().any(|r| r.kind() == RecordKind::Project));

    let agreement = client.get_agreement().id(88).send().await.unwrap().into_inner();
    assert!(
        resolve_view_url(Some(&agreement))
            .unwrap()
            .unwrap()
            .contains("recordType=AgreementFV&recid=88")
    );
}

#[tokio::test]
async fn test_unknown_record_is_not_found() {
    let Some(stub) = start_stub().await else {
        return;
    };

    let client = Credentials::resolve(&overrides(&stub.base_url, PRIVATE_KEY), |_| None)
        .unwrap()
        .connect()
        .unwrap();

    let err = client.get_ticket().id(999).send().await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    match err {
        connectwise_client::Error::ErrorResponse(body) => {
            assert_eq!(body.message, "Ticket not found: 999");
        }
        other => panic!("expected an error response, got {}", other),
    }
}

#[tokio::test]
async fn test_wrong_private_key_is_unauthorized() {
    let Some(stub) = start_stub().await else {
        return;
    };

    let client = ClientRegistry::new()
        .acquire(&overrides(&stub.base_url, "not-the-key"))
        .expect("construction does not contact the server");

    let err = client.get_ticket().id(12345).send().await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert_eq!(stub.context.rejected_requests(), 1);
    assert_eq!(stub.context.accepted_requests(), 0);
}
