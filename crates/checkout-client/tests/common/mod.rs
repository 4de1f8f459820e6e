//! Common test utilities for Checkout client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::time::Duration;

use checkout_client::{CheckoutClient, ClientOptions, TicketCache};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key accepted by the mocked ticket endpoint.
pub const API_KEY: &str = "api-key";

/// Ticket issued for [`API_KEY`].
pub const TICKET: &str = "ticket";

/// Path of the ticket endpoint for a key.
pub fn ticket_path(api_key: &str) -> String {
    format!("/service/login/ticket/{api_key}")
}

/// Mount a ticket endpoint that issues [`TICKET`] for `api_key`.
pub async fn mount_ticket(server: &MockServer, api_key: &str) {
    Mock::given(method("GET"))
        .and(path(ticket_path(api_key)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticket": TICKET,
            "reciverEmailNotRequired": true,
        })))
        .mount(server)
        .await;
}

/// Options pointing at the mock server with an isolated ticket cache.
pub fn options(server: &MockServer) -> ClientOptions {
    ClientOptions::new()
        .with_host(server.uri())
        .with_timeout(Duration::from_secs(5))
        .with_ticket_cache(TicketCache::new())
}

/// Client for [`API_KEY`] with its own ticket cache.
pub fn client(server: &MockServer) -> CheckoutClient {
    CheckoutClient::with_options(API_KEY, options(server)).expect("Failed to build client")
}

/// Number of requests the server received for ticket issuance.
pub async fn ticket_requests(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path().starts_with("/service/login/ticket/"))
        .count()
}

/// Total number of requests the server received.
pub async fn total_requests(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}
