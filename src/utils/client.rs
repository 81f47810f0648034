use canvas_client::client::{CanvasClient, DEFAULT_ENDPOINT};
use canvas_client::credential::Credential;
use canvas_http::{HttpService, HttpServiceConfig, ReqwestService};
use url::Url;

use crate::error::{CanvasResult, Context};

/// the version of canvas-history currently set in `Cargo.toml`
const CANVAS_HISTORY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed to talk to the canvas API, resolved from flags and
/// the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    endpoint: Url,
    credential: Credential,
    http_config: HttpServiceConfig,
    version: String,
}

impl ClientConfig {
    pub fn new(
        override_endpoint: Option<Url>,
        credential: Credential,
        http_config: HttpServiceConfig,
    ) -> CanvasResult<ClientConfig> {
        let version = if cfg!(debug_assertions) {
            format!("{} (dev)", CANVAS_HISTORY_VERSION)
        } else {
            CANVAS_HISTORY_VERSION.to_string()
        };

        let endpoint = match override_endpoint {
            Some(endpoint) => endpoint,
            None => Url::parse(DEFAULT_ENDPOINT)
                .with_context(|| format!("{DEFAULT_ENDPOINT} is not a valid URL"))?,
        };

        Ok(ClientConfig {
            endpoint,
            credential,
            http_config,
            version,
        })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn get_client(&self) -> CanvasResult<CanvasClient> {
        let http_service: HttpService = ReqwestService::builder()
            .config(self.http_config.clone())
            .build()
            .context("could not build the HTTP client")?
            .into();
        Ok(CanvasClient::new(
            self.endpoint.clone(),
            self.credential.clone(),
            self.version.clone(),
            http_service,
        ))
    }
}
