#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

//! Request types, one per endpoint.
//!
//! Every endpoint accepts the same optional query parameters:
//!
//! | Parameter | Type | Meaning |
//! |-----------|------|---------|
//! | `format` | string | Response format, `json` or `xml` |
//! | `offset` | integer | Index of the first record returned |
//! | `limit` | integer | Number of records returned, at most 250 |
//!
//! A parameter left unset is omitted from the query string altogether. Explicit values,
//! including `0` and the empty string, are always sent.

use bon::Builder;
use reqwest::StatusCode;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::endpoint::Endpoint;

/// `GET /committee/{chamber}/{committeeCode}/house-communication`
///
/// # Example
///
/// ```
/// use congress_gov_client::Endpoint as _;
/// use congress_gov_client::types::request::HouseCommunicationsByCommitteeRequest;
///
/// let request = HouseCommunicationsByCommitteeRequest::builder()
///     .chamber("house")
///     .committee_code("hspw00")
///     .build();
///
/// assert_eq!(request.path(), "/committee/house/hspw00/house-communication");
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct HouseCommunicationsByCommitteeRequest {
    /// `house`, `senate` or `joint`.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub chamber: String,
    /// Committee system code, e.g. `hspw00`.
    #[serde(skip_serializing)]
    #[builder(into)]
    pub committee_code: String,
    #[builder(into)]
    pub format: Option<String>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}

impl Endpoint for HouseCommunicationsByCommitteeRequest {
    type Payload = ();

    const RECOGNIZED: &'static [StatusCode] = &[StatusCode::OK, StatusCode::BAD_REQUEST];

    fn path(&self) -> String {
        format!(
            "/committee/{}/{}/house-communication",
            self.chamber, self.committee_code
        )
    }
}

/// `GET /congress/current`
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct CurrentCongressRequest {
    #[builder(into)]
    pub format: Option<String>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}

impl Endpoint for CurrentCongressRequest {
    type Payload = ();

    const RECOGNIZED: &'static [StatusCode] = &[StatusCode::OK, StatusCode::BAD_REQUEST];

    fn path(&self) -> String {
        "/congress/current".to_owned()
    }
}

/// `GET /crsreport`
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct CrsReportsRequest {
    #[builder(into)]
    pub format: Option<String>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}

impl Endpoint for CrsReportsRequest {
    type Payload = ();

    const RECOGNIZED: &'static [StatusCode] = &[StatusCode::OK, StatusCode::BAD_REQUEST];

    fn path(&self) -> String {
        "/crsreport".to_owned()
    }
}

/// `GET /nomination/{congress}/{nominationNumber}/committees`
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct NominationCommitteesRequest {
    #[serde(skip_serializing)]
    pub congress: u32,
    /// Nomination number, e.g. `2467` for PN2467.
    #[serde(skip_serializing)]
    pub nomination_number: u32,
    #[builder(into)]
    pub format: Option<String>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}

impl Endpoint for NominationCommitteesRequest {
    type Payload = ();

    const RECOGNIZED: &'static [StatusCode] = &[StatusCode::OK, StatusCode::BAD_REQUEST];

    fn path(&self) -> String {
        format!(
            "/nomination/{}/{}/committees",
            self.congress, self.nomination_number
        )
    }
}

/// `GET /treaty/{congress}/{treatyNumber}/committees`
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct TreatyCommitteesRequest {
    #[serde(skip_serializing)]
    pub congress: u32,
    #[serde(skip_serializing)]
    pub treaty_number: u32,
    #[builder(into)]
    pub format: Option<String>,
    pub offset: Option<i32>,
    pub limit: Option<i32>,
}

impl Endpoint for TreatyCommitteesRequest {
    type Payload = ();

    const RECOGNIZED: &'static [StatusCode] = &[StatusCode::OK, StatusCode::BAD_REQUEST];

    fn path(&self) -> String {
        format!(
            "/treaty/{}/{}/committees",
            self.congress, self.treaty_number
        )
    }
}
