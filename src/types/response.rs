//! Typed models of the congress.gov response bodies.
//!
//! Endpoint envelopes carry the raw body only; decode it into these with
//! [`crate::Response::json`].

use bon::Builder;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Paging information attached to list responses.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct Pagination {
    /// Total number of records matching the request.
    pub count: u64,
    /// URL of the next page, absent on the last page.
    #[builder(into)]
    pub next: Option<String>,
}

/// Body of `GET /congress/current`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct CurrentCongressResponse {
    pub congress: Congress,
}

#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Congress {
    /// e.g. `118th Congress`
    pub name: String,
    pub number: u32,
    /// Sent as a string, e.g. `"2023"`.
    #[serde_as(as = "DisplayFromStr")]
    pub start_year: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub end_year: i32,
    #[serde(default)]
    #[builder(default)]
    pub sessions: Vec<Session>,
    pub update_date: Option<DateTime<Utc>>,
    pub url: Option<String>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// `House of Representatives` or `Senate`.
    pub chamber: String,
    pub number: u32,
    pub start_date: NaiveDate,
    /// Absent while the session is ongoing.
    pub end_date: Option<NaiveDate>,
    /// Session type, `R` for regular.
    #[serde(rename = "type")]
    pub session_type: String,
}

/// Body of `GET /committee/{chamber}/{committeeCode}/house-communication`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct HouseCommunicationsResponse {
    pub house_communications: Vec<HouseCommunication>,
    pub pagination: Option<Pagination>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct HouseCommunication {
    pub chamber: String,
    pub communication_type: CommunicationType,
    pub congress: u32,
    pub number: u32,
    pub referral_date: Option<NaiveDate>,
    pub update_date: Option<NaiveDate>,
    pub url: String,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct CommunicationType {
    /// e.g. `EC`
    pub code: String,
    /// e.g. `Executive Communication`
    pub name: String,
}

/// Body of `GET /crsreport`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct CrsReportsResponse {
    #[serde(rename = "CRSReports")]
    pub reports: Vec<CrsReport>,
    pub pagination: Option<Pagination>,
}

/// A Congressional Research Service report.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct CrsReport {
    /// Report number, e.g. `R43083` or `98-202`.
    pub id: String,
    pub content_type: String,
    /// `Active` or `Archived`.
    pub status: String,
    pub title: String,
    pub publish_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
    pub url: String,
    pub version: u32,
}

/// Body of `GET /nomination/{congress}/{nominationNumber}/committees`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
pub struct NominationCommitteesResponse {
    pub committees: Vec<Committee>,
    pub pagination: Option<Pagination>,
}

/// Body of `GET /treaty/{congress}/{treatyNumber}/committees`.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct TreatyCommitteesResponse {
    pub treaty_committees: Vec<Committee>,
    pub pagination: Option<Pagination>,
}

/// A committee together with what it did with the nomination or treaty.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    pub name: String,
    pub chamber: String,
    /// e.g. `ssas00`
    pub system_code: String,
    /// e.g. `Standing`
    #[serde(rename = "type")]
    pub committee_type: String,
    pub url: String,
    #[serde(default)]
    #[builder(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    #[builder(default)]
    pub subcommittees: Vec<Committee>,
}

#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Activity {
    /// e.g. `Referred to`
    pub name: String,
    pub date: DateTime<Utc>,
}
