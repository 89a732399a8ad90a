use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::Result;

/// The envelope returned by every `*_detailed` endpoint call.
///
/// `status_code`, `content` and `headers` are exactly what the transport received. `parsed`
/// holds the endpoint's interpretation of the body, which is only ever present for a status
/// code the endpoint recognizes.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status_code: StatusCode,
    pub content: Bytes,
    pub headers: HeaderMap,
    pub parsed: Option<T>,
}

impl<T> Response<T> {
    pub(crate) fn new(
        status_code: StatusCode,
        content: Bytes,
        headers: HeaderMap,
        parsed: Option<T>,
    ) -> Self {
        Self {
            status_code,
            content,
            headers,
            parsed,
        }
    }

    /// Decodes the raw body as JSON.
    ///
    /// No status check is made here: a 400 body decodes just like a 200 body, so pick the
    /// target type accordingly.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use congress_gov_client::Client;
    /// use congress_gov_client::types::request::CurrentCongressRequest;
    /// use congress_gov_client::types::response::CurrentCongressResponse;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let response = client
    ///     .current_congress_detailed(&CurrentCongressRequest::default())
    ///     .await?;
    ///
    /// let current: CurrentCongressResponse = response.json()?;
    /// println!("{}", current.congress.name);
    /// # Ok(())
    /// # }
    /// ```
    pub fn json<M: DeserializeOwned>(&self) -> Result<M> {
        let value = serde_json::from_slice::<serde_json::Value>(&self.content)?;
        crate::serde_helpers::deserialize_with_warnings(value)
    }
}
