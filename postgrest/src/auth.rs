use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use thiserror::Error;

/// Service credentials for a Supabase-style PostgREST endpoint.
///
/// The same key is sent both as the `apikey` header and as a bearer token.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("API key is empty")]
    EmptyKey,
    #[error("API key is not a valid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Result<Self, CredentialsError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CredentialsError::EmptyKey);
        }

        Ok(Self { api_key })
    }

    pub fn as_headers(&self) -> Result<HeaderMap, CredentialsError> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&self.api_key)?);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        Ok(headers)
    }
}
