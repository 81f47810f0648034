use std::time::Duration;

use canvas_client::CanvasClientError;
use canvas_client::credential::{Credential, CredentialOrigin};
use canvas_http::HttpServiceConfig;
use clap::Parser;
use url::Url;

use crate::error::{CanvasResult, Context};
use crate::utils::client::ClientConfig;
use crate::utils::env::{CanvasEnv, CanvasEnvKey};

#[derive(Debug, Clone, Parser)]
pub struct ClientOpt {
    /// GraphQL endpoint of the canvas API.
    /// Falls back to $CANVAS_HISTORY_ENDPOINT, then the public endpoint.
    #[arg(long)]
    pub endpoint: Option<Url>,

    /// Bearer token for the canvas API. Falls back to $CANVAS_HISTORY_TOKEN.
    #[arg(long)]
    pub token: Option<String>,

    /// Seconds to wait for the whole batch before giving up
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates from the endpoint.
    /// Only useful against a local proxy.
    #[arg(long = "insecure-accept-invalid-certs")]
    pub accept_invalid_certs: bool,
}

impl ClientOpt {
    /// The flag wins over the environment.
    pub fn credential(&self, env: &CanvasEnv) -> CanvasResult<Credential> {
        let (token, origin) = match &self.token {
            Some(token) => (token.clone(), CredentialOrigin::Flag),
            None => match env.get(CanvasEnvKey::Token)? {
                Some(token) => (token, CredentialOrigin::EnvVar),
                None => return Err(CanvasClientError::MissingToken.into()),
            },
        };
        Ok(Credential::new(token, origin)?)
    }

    pub fn endpoint(&self, env: &CanvasEnv) -> CanvasResult<Option<Url>> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(Some(endpoint.clone()));
        }
        env.get(CanvasEnvKey::Endpoint)?
            .map(|endpoint| {
                Url::parse(&endpoint).with_context(|| {
                    format!("${} is not a valid URL", CanvasEnvKey::Endpoint)
                })
            })
            .transpose()
            .map_err(Into::into)
    }

    pub fn http_config(&self) -> HttpServiceConfig {
        HttpServiceConfig::builder()
            .accept_invalid_certificates(self.accept_invalid_certs)
            .and_timeout(self.timeout.map(Duration::from_secs))
            .build()
    }

    pub fn get_client_config(&self, env: &CanvasEnv) -> CanvasResult<ClientConfig> {
        ClientConfig::new(self.endpoint(env)?, self.credential(env)?, self.http_config())
    }
}
