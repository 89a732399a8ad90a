//! Fetches the current congress without an async runtime.
//!
//! ```sh
//! CONGRESS_GOV_API_KEY=... cargo run --example blocking --features blocking
//! ```

use congress_gov_client::auth::ApiKey;
use congress_gov_client::types::request::CurrentCongressRequest;
use congress_gov_client::types::response::CurrentCongressResponse;
use congress_gov_client::{Client, Config, DEFAULT_HOST};

fn main() -> anyhow::Result<()> {
    let client = Client::new(DEFAULT_HOST, Config::default())?.authenticate(ApiKey::from_env()?)?;

    let response = client
        .blocking()
        .current_congress_detailed(&CurrentCongressRequest::default())?;

    if response.status_code.is_success() {
        let body: CurrentCongressResponse = response.json()?;
        for session in body.congress.sessions {
            println!(
                "{} session {} of the {}: {} to {}",
                session.chamber,
                session.number,
                body.congress.name,
                session.start_date,
                session
                    .end_date
                    .map_or_else(|| "present".to_owned(), |date| date.to_string())
            );
        }
    } else {
        println!(
            "request failed with {}: {}",
            response.status_code,
            String::from_utf8_lossy(&response.content)
        );
    }

    Ok(())
}
