//! The request/response contract every congress.gov endpoint shares.
//!
//! An endpoint is a request type implementing [`Endpoint`]: it knows its path, serializes its
//! optional query parameters, and declares which status codes it recognizes. The client turns
//! it into [`RequestParts`], executes it on either transport, and hands the raw response to
//! [`build_response`].

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::Result;
use crate::error::Error;
use crate::response::Response;

/// A congress.gov endpoint descriptor.
///
/// Path parameters are excluded from serialization (`#[serde(skip_serializing)]`); every other
/// field is an optional query parameter and is omitted from the query string when `None`.
pub trait Endpoint: Serialize {
    /// The interpreted payload surfaced in [`Response::parsed`].
    type Payload;

    /// Status codes this endpoint has a defined interpretation for. Anything else is an
    /// unexpected status.
    const RECOGNIZED: &'static [StatusCode];

    /// Path relative to the API base URL with placeholders substituted, starting with `/`.
    fn path(&self) -> String;

    fn method(&self) -> Method {
        Method::GET
    }

    /// Interprets the body of a recognized status. Endpoints that do not decode their
    /// responses keep this default, which always yields no payload.
    fn decode(_status_code: StatusCode, _content: &Bytes) -> Result<Option<Self::Payload>> {
        Ok(None)
    }

    /// Builds the method, path and query string for this request.
    fn parts(&self) -> Result<RequestParts> {
        Ok(RequestParts {
            method: self.method(),
            path: self.path(),
            query: serde_html_form::to_string(self)?,
        })
    }
}

/// A built request: what goes on the wire, minus the host and headers.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    pub method: Method,
    pub path: String,
    /// URL-encoded query string without the leading `?`. Empty when no parameter is set.
    pub query: String,
}

impl RequestParts {
    /// Decoded `(key, value)` pairs of [`RequestParts::query`], in order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Returns the value of the query parameter `key`, if it is present.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// The full request URL against `host`, which may or may not end with `/`.
    #[must_use]
    pub fn url(&self, host: &Url) -> String {
        let base = host.as_str().trim_end_matches('/');
        if self.query.is_empty() {
            format!("{base}{}", self.path)
        } else {
            format!("{base}{}?{}", self.path, self.query)
        }
    }
}

/// Applies the endpoint's status policy to a raw response.
///
/// Recognized statuses are decoded by the endpoint. Any other status fails with
/// [`crate::error::Kind::UnexpectedStatus`] when `raise_on_unexpected_status` is set, and
/// otherwise yields no payload.
pub(crate) fn parse_response<E: Endpoint>(
    raise_on_unexpected_status: bool,
    status_code: StatusCode,
    content: &Bytes,
) -> Result<Option<E::Payload>> {
    if E::RECOGNIZED.contains(&status_code) {
        return E::decode(status_code, content);
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(
        status = %status_code,
        raise = raise_on_unexpected_status,
        "unexpected status code"
    );

    if raise_on_unexpected_status {
        Err(Error::unexpected_status(status_code, content.clone()))
    } else {
        Ok(None)
    }
}

/// Wraps the raw response and its interpretation in a [`Response`].
pub(crate) fn build_response<E: Endpoint>(
    raise_on_unexpected_status: bool,
    status_code: StatusCode,
    headers: HeaderMap,
    content: Bytes,
) -> Result<Response<E::Payload>> {
    let parsed = parse_response::<E>(raise_on_unexpected_status, status_code, &content)?;

    Ok(Response::new(status_code, content, headers, parsed))
}
