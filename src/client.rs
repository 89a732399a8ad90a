//! Client for the congress.gov API.
//!
//! # Example
//!
//! ```no_run
//! use congress_gov_client::auth::ApiKey;
//! use congress_gov_client::types::request::NominationCommitteesRequest;
//! use congress_gov_client::types::response::NominationCommitteesResponse;
//! use congress_gov_client::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder().raise_on_unexpected_status(true).build();
//! let client = Client::new("https://api.congress.gov/v3", config)?
//!     .authenticate(ApiKey::from_env()?)?;
//!
//! let request = NominationCommitteesRequest::builder()
//!     .congress(117)
//!     .nomination_number(2467)
//!     .build();
//!
//! let response = client.nomination_committees_detailed(&request).await?;
//! let committees: NominationCommitteesResponse = response.json()?;
//! for committee in committees.committees {
//!     println!("{} ({})", committee.name, committee.system_code);
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
use std::sync::OnceLock;
use std::sync::Arc;
use std::time::Duration;

use bon::Builder;
use reqwest::Client as ReqwestClient;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect::Policy;
use url::Url;

use crate::auth::state::{Authenticated, State, Unauthenticated};
use crate::auth::{self, ApiKey, DEFAULT_AUTH_HEADER};
use crate::endpoint::Endpoint;
use crate::response::Response;
use crate::types::request::{
    CrsReportsRequest, CurrentCongressRequest, HouseCommunicationsByCommitteeRequest,
    NominationCommitteesRequest, TreatyCommitteesRequest,
};
use crate::{DEFAULT_HOST, Result};

/// Configuration for [`Client`]
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Whether a status code outside an endpoint's recognized set fails the call with
    /// [`crate::error::Kind::UnexpectedStatus`]. When `false`, the call returns an envelope with
    /// no payload instead.
    #[builder(default)]
    raise_on_unexpected_status: bool,
    /// Request timeout applied by both transports. No timeout when unset.
    timeout: Option<Duration>,
    /// Whether redirects are followed. Defaults to `false`.
    #[builder(default)]
    follow_redirects: bool,
    /// Extra headers sent with every request.
    #[builder(default)]
    headers: HeaderMap,
    /// Header the API key is sent in. Defaults to [`DEFAULT_AUTH_HEADER`].
    #[builder(into, default = DEFAULT_AUTH_HEADER.to_owned())]
    auth_header_name: String,
    /// Prefix placed before the key in the auth header, e.g. `Bearer`. None by default.
    #[builder(into)]
    auth_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    #[must_use]
    pub fn raise_on_unexpected_status(&self) -> bool {
        self.raise_on_unexpected_status
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn auth_header_name(&self) -> &str {
        &self.auth_header_name
    }

    #[must_use]
    pub fn auth_prefix(&self) -> Option<&str> {
        self.auth_prefix.as_deref()
    }

    fn redirect_policy(&self) -> Policy {
        if self.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        }
    }
}

#[derive(Debug)]
struct ClientInner<S: State> {
    config: Config,
    /// The current [`State`] of this client
    state: S,
    /// The [`Url`] every endpoint path is appended to.
    host: Url,
    /// Default headers of both transports, including the auth header once authenticated.
    headers: HeaderMap,
    /// The async transport.
    client: ReqwestClient,
    /// The blocking transport, created on first blocking call.
    #[cfg(feature = "blocking")]
    blocking: OnceLock<reqwest::blocking::Client>,
}

/// HTTP client for the congress.gov API.
///
/// Cloning is cheap: clones share the configuration and both transports.
///
/// # API Base URL
///
/// The default API endpoint is `https://api.congress.gov/v3`.
#[derive(Clone, Debug)]
pub struct Client<S: State = Unauthenticated> {
    inner: Arc<ClientInner<S>>,
}

impl Default for Client<Unauthenticated> {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client<Unauthenticated> {
    /// Creates a new congress.gov client against `host`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client fails to build.
    pub fn new(host: &str, config: Config) -> Result<Client<Unauthenticated>> {
        let headers = default_headers(&config);
        let client = build_client(&config, &headers)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                state: Unauthenticated,
                host: Url::parse(host)?,
                headers,
                client,
                #[cfg(feature = "blocking")]
                blocking: OnceLock::new(),
            }),
        })
    }

    /// Returns a client that sends `api_key` with every request, in the header named by
    /// [`Config::auth_header_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key or header name is not a valid header, or the HTTP client
    /// fails to build.
    pub fn authenticate(self, api_key: ApiKey) -> Result<Client<Authenticated>> {
        let config = self.inner.config.clone();

        let mut headers = self.inner.headers.clone();
        headers.extend(auth::create_headers(
            &api_key,
            config.auth_header_name(),
            config.auth_prefix(),
        )?);
        let client = build_client(&config, &headers)?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                config,
                state: Authenticated { api_key },
                host: self.inner.host.clone(),
                headers,
                client,
                #[cfg(feature = "blocking")]
                blocking: OnceLock::new(),
            }),
        })
    }
}

impl Client<Authenticated> {
    /// Returns the API key this client authenticates with.
    #[must_use]
    pub fn api_key(&self) -> &ApiKey {
        &self.inner.state.api_key
    }

    /// Drops the API key, returning a client whose requests carry no auth header.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn deauthenticate(self) -> Result<Client<Unauthenticated>> {
        Client::new(self.inner.host.as_str(), self.inner.config.clone())
    }
}

impl<S: State> Client<S> {
    /// Returns the base URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.inner.host
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Returns a view of this client whose endpoint methods block the calling thread.
    ///
    /// **Feature flag:** `blocking`
    ///
    /// Must not be used from within an async runtime.
    #[cfg(feature = "blocking")]
    #[must_use]
    pub fn blocking(&self) -> crate::blocking::BlockingClient<'_, S> {
        crate::blocking::BlockingClient::new(self)
    }

    #[cfg(feature = "blocking")]
    pub(crate) fn blocking_transport(&self) -> Result<&reqwest::blocking::Client> {
        if let Some(client) = self.inner.blocking.get() {
            return Ok(client);
        }

        let client = build_blocking_client(&self.inner.config, &self.inner.headers)?;
        Ok(self.inner.blocking.get_or_init(|| client))
    }

    /// Executes any [`Endpoint`] and returns the full [`Response`] envelope.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, or when the status code is not recognized by the
    /// endpoint and [`Config::raise_on_unexpected_status`] is set.
    pub async fn send_detailed<E: Endpoint>(&self, endpoint: &E) -> Result<Response<E::Payload>> {
        let parts = endpoint.parts()?;
        let request = self
            .inner
            .client
            .request(parts.method.clone(), parts.url(self.host()))
            .build()?;

        crate::request::<E>(
            &self.inner.client,
            request,
            self.inner.config.raise_on_unexpected_status,
        )
        .await
    }

    /// Executes any [`Endpoint`] and returns only its interpreted payload.
    ///
    /// # Errors
    ///
    /// See [`Client::send_detailed`].
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<Option<E::Payload>> {
        Ok(self.send_detailed(endpoint).await?.parsed)
    }

    /// Returns the list of House communications associated with a specified congressional
    /// committee.
    ///
    /// `GET /committee/{chamber}/{committeeCode}/house-communication`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use congress_gov_client::Client;
    /// use congress_gov_client::types::request::HouseCommunicationsByCommitteeRequest;
    /// use congress_gov_client::types::response::HouseCommunicationsResponse;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let request = HouseCommunicationsByCommitteeRequest::builder()
    ///     .chamber("house")
    ///     .committee_code("hspw00")
    ///     .build();
    ///
    /// let response = client.house_communications_by_committee_detailed(&request).await?;
    /// let body: HouseCommunicationsResponse = response.json()?;
    /// for communication in body.house_communications {
    ///     println!("{} {}", communication.communication_type.code, communication.number);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn house_communications_by_committee_detailed(
        &self,
        request: &HouseCommunicationsByCommitteeRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request).await
    }

    /// See [`Client::house_communications_by_committee_detailed`].
    pub async fn house_communications_by_committee(
        &self,
        request: &HouseCommunicationsByCommitteeRequest,
    ) -> Result<Option<()>> {
        self.send(request).await
    }

    /// Returns detailed information for the current congress.
    ///
    /// `GET /congress/current`
    pub async fn current_congress_detailed(
        &self,
        request: &CurrentCongressRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request).await
    }

    /// See [`Client::current_congress_detailed`].
    pub async fn current_congress(&self, request: &CurrentCongressRequest) -> Result<Option<()>> {
        self.send(request).await
    }

    /// Returns Congressional Research Service (CRS) report data.
    ///
    /// `GET /crsreport`
    pub async fn crs_reports_detailed(&self, request: &CrsReportsRequest) -> Result<Response<()>> {
        self.send_detailed(request).await
    }

    /// See [`Client::crs_reports_detailed`].
    pub async fn crs_reports(&self, request: &CrsReportsRequest) -> Result<Option<()>> {
        self.send(request).await
    }

    /// Returns the list of committees associated with a specified nomination.
    ///
    /// `GET /nomination/{congress}/{nominationNumber}/committees`
    pub async fn nomination_committees_detailed(
        &self,
        request: &NominationCommitteesRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request).await
    }

    /// See [`Client::nomination_committees_detailed`].
    pub async fn nomination_committees(
        &self,
        request: &NominationCommitteesRequest,
    ) -> Result<Option<()>> {
        self.send(request).await
    }

    /// Returns the list of committees associated with a specified treaty.
    ///
    /// `GET /treaty/{congress}/{treatyNumber}/committees`
    pub async fn treaty_committees_detailed(
        &self,
        request: &TreatyCommitteesRequest,
    ) -> Result<Response<()>> {
        self.send_detailed(request).await
    }

    /// See [`Client::treaty_committees_detailed`].
    pub async fn treaty_committees(&self, request: &TreatyCommitteesRequest) -> Result<Option<()>> {
        self.send(request).await
    }
}

fn default_headers(config: &Config) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(USER_AGENT, HeaderValue::from_static("congress_gov_client"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.extend(config.headers.clone());

    headers
}

fn build_client(config: &Config, headers: &HeaderMap) -> Result<ReqwestClient> {
    let mut builder = ReqwestClient::builder()
        .default_headers(headers.clone())
        .redirect(config.redirect_policy());

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

#[cfg(feature = "blocking")]
fn build_blocking_client(
    config: &Config,
    headers: &HeaderMap,
) -> Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .default_headers(headers.clone())
        .redirect(config.redirect_policy())
        .timeout(config.timeout)
        .build()?)
}
