// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

// Copyright 2026 Edgecast Cloud LLC.

//! Standalone stub ConnectWise server for testing and development
//!
//! Run with:
//! ```bash
//! cargo run -p connectwise-stub-server
//! ```
//!
//! Requests must authenticate with the `CW_COMPANY`, `CW_CLIENT_ID`,
//! `CW_PUBLIC_KEY`, and `CW_PRIVATE_KEY` values the server was started with
//! (development defaults are used for any that are unset). Point a client at
//! it with `CW_BASE_URL=http://localhost:9191`.

use anyhow::Result;
use dropshot::{ConfigDropshot, ConfigLogging, ConfigLoggingLevel, HttpServerStarter};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use connectwise_stub_server::{ExpectedAuth, StubContext, api_description, fixtures_dir};

const PORT: u16 = 9191;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("connectwise_stub_server=info,dropshot=info")
            }),
        )
        .init();

    let log_config = ConfigLogging::StderrTerminal {
        level: ConfigLoggingLevel::Info,
    };
    let log = log_config.to_logger("connectwise-stub-server")?;

    let company = env_or("CW_COMPANY", "devco");
    let auth = ExpectedAuth::new(
        &company,
        &env_or("CW_CLIENT_ID", "dev-client-id"),
        &env_or("CW_PUBLIC_KEY", "dev-public"),
        &env_or("CW_PRIVATE_KEY", "dev-private"),
    );

    let context = Arc::new(StubContext::from_fixtures(&fixtures_dir(), auth)?);
    tracing::info!(
        "Loaded {} records from fixtures for company {}",
        context.record_count(),
        company
    );

    let config = ConfigDropshot {
        bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, PORT)),
        default_request_body_max_bytes: 1024 * 1024,
        default_handler_task_mode: dropshot::HandlerTaskMode::Detached,
        ..Default::default()
    };

    let api = api_description().map_err(|e| anyhow::anyhow!(e))?;
    let server = HttpServerStarter::new(&config, api, context, &log)
        .map_err(|e| anyhow::anyhow!("Failed to create server: {}", e))?
        .start();

    tracing::info!("Stub ConnectWise server listening on http://localhost:{}", PORT);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET /system/info");
    tracing::info!("  GET /company/contacts, /company/contacts/{{id}}");
    tracing::info!("  GET /company/companies, /company/companies/{{id}}");
    tracing::info!("  GET /service/tickets, /service/tickets/{{id}}");
    tracing::info!("  GET /finance/agreements, /finance/agreements/{{id}}");
    tracing::info!("  GET /project/projects, /project/projects/{{id}}");

    server
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
