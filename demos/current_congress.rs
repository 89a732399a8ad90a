//! Walks every congress.gov endpoint this crate exposes and logs what comes back.
//!
//! Requires an api.data.gov key in `CONGRESS_GOV_API_KEY`. Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,rustls=off cargo run --example current_congress --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=congress.log RUST_LOG=debug cargo run --example current_congress --features tracing
//! ```

use std::fs::File;

use congress_gov_client::auth::ApiKey;
use congress_gov_client::types::request::{
    CrsReportsRequest, CurrentCongressRequest, HouseCommunicationsByCommitteeRequest,
    NominationCommitteesRequest, TreatyCommitteesRequest,
};
use congress_gov_client::types::response::{
    CrsReportsResponse, CurrentCongressResponse, HouseCommunicationsResponse,
    NominationCommitteesResponse, TreatyCommitteesResponse,
};
use congress_gov_client::{Client, Config, DEFAULT_HOST};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let config = Config::builder().raise_on_unexpected_status(true).build();
    let client = Client::new(DEFAULT_HOST, config)?.authenticate(ApiKey::from_env()?)?;

    let congress = client
        .current_congress_detailed(&CurrentCongressRequest::default())
        .await?;
    match congress.json::<CurrentCongressResponse>() {
        Ok(body) => info!(
            endpoint = "current_congress",
            name = %body.congress.name,
            sessions = body.congress.sessions.len()
        ),
        Err(e) => error!(endpoint = "current_congress", status = %congress.status_code, error = %e),
    }

    let communications = client
        .house_communications_by_committee_detailed(
            &HouseCommunicationsByCommitteeRequest::builder()
                .chamber("house")
                .committee_code("hspw00")
                .limit(5)
                .build(),
        )
        .await?;
    match communications.json::<HouseCommunicationsResponse>() {
        Ok(body) => info!(
            endpoint = "house_communications_by_committee",
            count = body.house_communications.len()
        ),
        Err(e) => debug!(endpoint = "house_communications_by_committee", error = %e),
    }

    let reports = client
        .crs_reports_detailed(&CrsReportsRequest::builder().limit(5).build())
        .await?;
    match reports.json::<CrsReportsResponse>() {
        Ok(body) => {
            for report in body.reports {
                info!(endpoint = "crs_reports", id = %report.id, title = %report.title);
            }
        }
        Err(e) => debug!(endpoint = "crs_reports", error = %e),
    }

    let nomination = client
        .nomination_committees_detailed(
            &NominationCommitteesRequest::builder()
                .congress(117)
                .nomination_number(2467)
                .build(),
        )
        .await?;
    match nomination.json::<NominationCommitteesResponse>() {
        Ok(body) => info!(endpoint = "nomination_committees", count = body.committees.len()),
        Err(e) => debug!(endpoint = "nomination_committees", error = %e),
    }

    let treaty = client
        .treaty_committees_detailed(
            &TreatyCommitteesRequest::builder()
                .congress(116)
                .treaty_number(3)
                .build(),
        )
        .await?;
    match treaty.json::<TreatyCommitteesResponse>() {
        Ok(body) => info!(endpoint = "treaty_committees", count = body.treaty_committees.len()),
        Err(e) => debug!(endpoint = "treaty_committees", error = %e),
    }

    Ok(())
}
