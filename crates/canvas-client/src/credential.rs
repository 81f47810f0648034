use std::fmt;

use http::HeaderValue;

use crate::CanvasClientError;

/// Where a bearer token was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialOrigin {
    /// Passed on the command line.
    Flag,
    /// Read from an environment variable (or a `.env` file).
    EnvVar,
}

/// An opaque bearer token attached to every request to the canvas API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    origin: CredentialOrigin,
}

impl Credential {
    /// Fails with [`CanvasClientError::MissingToken`] if `token` is empty or whitespace.
    pub fn new(
        token: impl Into<String>,
        origin: CredentialOrigin,
    ) -> Result<Credential, CanvasClientError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(CanvasClientError::MissingToken);
        }
        tracing::debug!("using bearer token {} from {:?}", mask_key(&token), origin);
        Ok(Credential { token, origin })
    }

    pub const fn origin(&self) -> CredentialOrigin {
        self.origin
    }

    /// `Bearer <token>`, flagged sensitive so it never shows up in header dumps.
    pub fn header_value(&self) -> Result<HeaderValue, CanvasClientError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &mask_key(&self.token))
            .field("origin", &self.origin)
            .finish()
    }
}

/// Keeps the first four characters of a secret and stars out the rest.
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    let hidden = key.chars().count().saturating_sub(4);
    format!("{visible}{}", "*".repeat(hidden))
}
