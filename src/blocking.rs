//! Blocking endpoint calls.
//!
//! **Feature flag:** `blocking` (required to use this module)
//!
//! [`BlockingClient`] mirrors the async endpoint methods of [`Client`] name for name. Both build
//! their requests through [`Endpoint::parts`] and interpret responses the same way; the only
//! difference is that these calls run on the caller's thread using a blocking transport that
//! [`Client`] creates the first time it is needed.
//!
//! # Example
//!
//! ```no_run
//! use congress_gov_client::Client;
//! use congress_gov_client::types::request::TreatyCommitteesRequest;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//! let request = TreatyCommitteesRequest::builder()
//!     .congress(116)
//!     .treaty_number(3)
//!     .build();
//!
//! let response = client.blocking().treaty_committees_detailed(&request)?;
//! println!("{} ({} bytes)", response.status_code, response.content.len());
//! # Ok(())
//! # }
//! ```

use reqwest::blocking::{Client as BlockingReqwestClient, Request};

use crate::Result;
use crate::auth::state::State;
use crate::client::Client;
use crate::endpoint::{self, Endpoint};
use crate::response::Response;
use crate::types::request::{
    CrsReportsRequest, CurrentCongressRequest, HouseCommunicationsByCommitteeRequest,
    NominationCommitteesRequest, TreatyCommitteesRequest,
};

/// Blocking view over a [`Client`], returned by [`Client::blocking`].
#[derive(Clone, Debug)]
pub struct BlockingClient<'client, S: State> {
    client: &'client Client<S>,
}

impl<'client, S: State> BlockingClient<'client, S> {
    pub(crate) fn new(client: &'client Client<S>) -> Self {
        Self { client }
    }

    /// Executes any [`Endpoint`] and returns the full [`Response`] envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, or when the status code is not recognized by the
    /// endpoint and [`crate::Config::raise_on_unexpected_status`] is set.
    pub fn send_detailed<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Payload>> {
        let transport = self.client.blocking_transport()?;
        let parts = endpoint.parts()?;
        let request = transport
            .request(parts.method.clone(), parts.url(self.client.host()))
            .build()?;

        execute::<E>(
            transport,
            request,
            self.client.config().raise_on_unexpected_status(),
        )
    }

    /// Executes any [`Endpoint`] and returns only its interpreted payload.
    ///
    /// # Errors
    ///
    /// See [`BlockingClient::send_detailed`].
    pub fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Option<E::Payload>> {
        Ok(self.send_detailed(endpoint)?.parsed)
    }

    /// Blocking [`Client::house_communications_by_committee_detailed`].
    pub fn house_communications_by_committee_detailed(
        &self,
        request: &HouseCommunicationsByCommitteeRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request)
    }

    /// Blocking [`Client::house_communications_by_committee`].
    pub fn house_communications_by_committee(
        &self,
        request: &HouseCommunicationsByCommitteeRequest,
    ) -> Result<Option<()>> {
        self.send(request)
    }

    /// Blocking [`Client::current_congress_detailed`].
    pub fn current_congress_detailed(
        &self,
        request: &CurrentCongressRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request)
    }

    /// Blocking [`Client::current_congress`].
    pub fn current_congress(&self, request: &CurrentCongressRequest) -> Result<Option<()>> {
        self.send(request)
    }

    /// Blocking [`Client::crs_reports_detailed`].
    pub fn crs_reports_detailed(&self, request: &CrsReportsRequest) -> Result<Response<()>> {
        self.send_detailed(request)
    }

    /// Blocking [`Client::crs_reports`].
    pub fn crs_reports(&self, request: &CrsReportsRequest) -> Result<Option<()>> {
        self.send(request)
    }

    /// Blocking [`Client::nomination_committees_detailed`].
    pub fn nomination_committees_detailed(
        &self,
        request: &NominationCommitteesRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request)
    }

    /// Blocking [`Client::nomination_committees`].
    pub fn nomination_committees(
        &self,
        request: &NominationCommitteesRequest,
    ) -> Result<Option<()>> {
        self.send(request)
    }

    /// Blocking [`Client::treaty_committees_detailed`].
    pub fn treaty_committees_detailed(
        &self,
        request: &TreatyCommitteesRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request)
    }

    /// Blocking [`Client::treaty_committees`].
    pub fn treaty_committees(&self, request: &TreatyCommitteesRequest) -> Result<Option<()>> {
        self.send(request)
    }
}

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
fn execute<E: Endpoint>(
    client: &BlockingReqwestClient,
    request: Request,
    raise_on_unexpected_status: bool,
) -> Result<Response<E::Payload>> {
    let response = client.execute(request)?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let headers = response.headers().clone();
    let content = response.bytes()?;

    endpoint::build_response::<E>(raise_on_unexpected_status, status_code, headers, content)
}
