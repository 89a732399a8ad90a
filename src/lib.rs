#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod response;
pub(crate) mod serde_helpers;
pub mod types;

use reqwest::Request;

pub use crate::client::{Client, Config};
pub use crate::endpoint::{Endpoint, RequestParts};
pub use crate::response::Response;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the congress.gov API, version 3.
pub const DEFAULT_HOST: &str = "https://api.congress.gov/v3";

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<E: Endpoint>(
    client: &reqwest::Client,
    request: Request,
    raise_on_unexpected_status: bool,
) -> Result<Response<E::Payload>> {
    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let headers = response.headers().clone();
    let content = response.bytes().await?;

    endpoint::build_response::<E>(raise_on_unexpected_status, status_code, headers, content)
}
