use http::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};

use crate::credential::Credential;
use crate::CanvasClientError;

const CLIENT_NAME: &str = "canvas-history";

/// Builds the headers attached to every request to the canvas API.
///
/// `Content-Type` is left to the GraphQL layer; this only carries identity
/// and authentication.
pub fn build(
    credential: &Credential,
    client_version: &str,
) -> Result<HeaderMap, CanvasClientError> {
    let mut headers = HeaderMap::new();

    tracing::debug!(?client_version);
    let user_agent = HeaderValue::from_str(&format!("{CLIENT_NAME}/{client_version}"))?;
    headers.insert(USER_AGENT, user_agent);

    headers.insert(AUTHORIZATION, credential.header_value()?);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::*;
    use crate::credential::CredentialOrigin;

    #[test]
    fn it_carries_identity_and_authorization() {
        let credential = Credential::new("abc", CredentialOrigin::Flag).unwrap();

        let headers = build(&credential, "1.2.3").unwrap();

        assert_that!(headers.get(USER_AGENT))
            .is_some()
            .is_equal_to(&HeaderValue::from_static("canvas-history/1.2.3"));
        assert_that!(headers.get(AUTHORIZATION).map(|v| v.to_str().unwrap()))
            .is_some()
            .is_equal_to("Bearer abc");
    }
}
