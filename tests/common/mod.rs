#![allow(
    unused,
    reason = "Each test crate uses a different subset of these helpers"
)]

use congress_gov_client::auth::ApiKey;
use congress_gov_client::auth::state::Authenticated;
use congress_gov_client::{Client, Config};
use httpmock::MockServer;

pub const API_KEY: &str = "DEMO_KEY";
pub const API_KEY_HEADER: &str = "X-Api-Key";

pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-remaining";

pub type TestClient = Client<Authenticated>;

/// A client that never raises on unexpected statuses.
pub fn create(server: &MockServer) -> anyhow::Result<Client> {
    Ok(Client::new(&server.base_url(), Config::default())?)
}

/// A client with `raise_on_unexpected_status` enabled.
pub fn create_raising(server: &MockServer) -> anyhow::Result<Client> {
    let config = Config::builder().raise_on_unexpected_status(true).build();
    Ok(Client::new(&server.base_url(), config)?)
}

pub fn create_authenticated(server: &MockServer) -> anyhow::Result<TestClient> {
    Ok(create(server)?.authenticate(ApiKey::from(API_KEY))?)
}
