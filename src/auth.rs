use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::Result;
use crate::error::Error;

/// Environment variable [`ApiKey::from_env`] reads the key from.
pub const API_KEY_VAR: &str = "CONGRESS_GOV_API_KEY";

/// Header the API key is sent in unless [`crate::client::Config`] says otherwise.
pub const DEFAULT_AUTH_HEADER: &str = "X-Api-Key";

/// A congress.gov (api.data.gov) API key.
///
/// The key is kept in a [`SecretString`], so formatting an [`ApiKey`] or any client holding one
/// with `{:?}` never prints it.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(SecretString);

impl ApiKey {
    #[must_use]
    pub fn new(key: String) -> Self {
        Self(SecretString::from(key))
    }

    /// Reads the key from the [`API_KEY_VAR`] environment variable.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Validation`] error when the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(Error::validation(format!("{API_KEY_VAR} is not set"))),
        }
    }

    /// Returns the key.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.0
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key.to_owned())
    }
}

/// Each client can exist in one state at a time, i.e. [`state::Unauthenticated`] or
/// [`state::Authenticated`].
pub mod state {
    use super::ApiKey;

    /// The initial state of the client. Requests carry no API key.
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Unauthenticated;

    /// The state reached through [`crate::client::Client::authenticate`]. Every request carries
    /// the API key header.
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Authenticated {
        pub(crate) api_key: ApiKey,
    }

    /// The client state can only be [`Unauthenticated`] or [`Authenticated`].
    pub trait State: sealed::Sealed + Clone + Send + Sync + 'static {}

    impl State for Unauthenticated {}
    impl sealed::Sealed for Unauthenticated {}

    impl State for Authenticated {}
    impl sealed::Sealed for Authenticated {}

    mod sealed {
        pub trait Sealed {}
    }
}

/// Returns the [`HeaderMap`] carrying `api_key` in `header_name`, optionally prefixed
/// (`Bearer <key>`).
pub(crate) fn create_headers(
    api_key: &ApiKey,
    header_name: &str,
    prefix: Option<&str>,
) -> Result<HeaderMap> {
    let value = match prefix {
        Some(prefix) => format!("{prefix} {}", api_key.secret().expose_secret()),
        None => api_key.secret().expose_secret().to_owned(),
    };

    let mut value = HeaderValue::from_str(&value)?;
    value.set_sensitive(true);

    let mut map = HeaderMap::new();
    map.insert(HeaderName::from_bytes(header_name.as_bytes())?, value);

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_headers_without_prefix() -> anyhow::Result<()> {
        let key = ApiKey::from("DEMO_KEY");

        let headers = create_headers(&key, DEFAULT_AUTH_HEADER, None)?;

        assert_eq!(headers.len(), 1);
        assert_eq!(headers["x-api-key"], "DEMO_KEY");
        assert!(headers["x-api-key"].is_sensitive());

        Ok(())
    }

    #[test]
    fn create_headers_with_prefix() -> anyhow::Result<()> {
        let key = ApiKey::from("DEMO_KEY");

        let headers = create_headers(&key, "Authorization", Some("Bearer"))?;

        assert_eq!(headers["authorization"], "Bearer DEMO_KEY");

        Ok(())
    }

    #[test]
    fn create_headers_with_invalid_name_should_fail() {
        let key = ApiKey::from("DEMO_KEY");

        let err = create_headers(&key, "bad header", None).unwrap_err();

        assert_eq!(err.kind(), crate::error::Kind::Internal);
    }

    #[test]
    fn debug_does_not_expose_secrets() {
        let key_value = "my_super_secret_congress_key_12345";
        let key = ApiKey::new(key_value.to_owned());

        let debug_output = format!("{key:?}");

        assert!(
            !debug_output.contains(key_value),
            "Debug output should NOT contain the key. Got: {debug_output}"
        );
    }
}
