use buildstructor::buildstructor;
use canvas_graphql::{GraphQLLayer, GraphQLService};
use canvas_http::extend_headers::{ExtendHeaders, ExtendHeadersLayer};
use canvas_http::HttpService;
use derive_getters::Getters;
use tower::ServiceBuilder;
use url::Url;

use crate::credential::Credential;
use crate::{headers, CanvasClientError};

/// The public endpoint of the collaborative canvas GraphQL API.
pub const DEFAULT_ENDPOINT: &str = "https://gql-realtime-2.reddit.com/query";

/// The GraphQL service stack produced by [`CanvasClient::graphql_service`].
pub type CanvasGraphQLService = GraphQLService<ExtendHeaders<HttpService>>;

/// An authenticated client for the canvas API.
///
/// The credential is handed in explicitly; nothing here reads process-wide state.
#[derive(Clone, Debug, Getters)]
pub struct CanvasClient {
    endpoint: Url,
    credential: Credential,
    client_version: String,
    #[getter(skip)]
    http_service: HttpService,
}

#[buildstructor]
impl CanvasClient {
    #[builder]
    pub fn new(
        endpoint: Url,
        credential: Credential,
        client_version: String,
        http_service: HttpService,
    ) -> CanvasClient {
        CanvasClient {
            endpoint,
            credential,
            client_version,
            http_service,
        }
    }

    /// HTTP transport → bearer/user-agent headers → GraphQL framing.
    pub fn graphql_service(&self) -> Result<CanvasGraphQLService, CanvasClientError> {
        let headers = headers::build(&self.credential, &self.client_version)?;
        Ok(ServiceBuilder::new()
            .layer(GraphQLLayer::new(self.endpoint.clone()))
            .layer(ExtendHeadersLayer::new(headers))
            .service(self.http_service.clone()))
    }
}
