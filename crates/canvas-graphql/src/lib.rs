#![warn(missing_docs)]

//! GraphQL middleware for [`canvas_http`] services.
//!
//! Unlike code-generated clients, the documents sent through this layer are
//! built at runtime, so a request carries its query text and its variables as
//! plain JSON and the response `data` tree comes back untouched.

use std::{fmt, future::Future, pin::Pin, str::FromStr};

use bytes::Bytes;
use canvas_http::{HttpRequest, HttpResponse};
use http::{uri::InvalidUri, HeaderValue, Method, StatusCode, Uri};
use http_body_util::Full;
use serde::Serialize;
use serde_json::Value;
use tower::{Layer, Service};
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Re-export / renamed type alias for [`graphql_client::Response`]
pub type GraphQLResponse = graphql_client::Response<Value>;

/// Errors that may occur from using a [`GraphQLService`]
#[derive(thiserror::Error, Debug)]
pub enum GraphQLServiceError {
    /// There was no data field provided in the response
    #[error("No data field provided")]
    NoData(Vec<graphql_client::Error>),
    /// The response returned some data, but there were errors
    #[error("Data was returned, but with errors: {}", friendly_errors_detail.join(" "))]
    PartialError {
        /// The partial data returned
        data: Value,
        /// The GraphQL errors that were produced
        errors: Vec<graphql_client::Error>,
        /// display ready decoration of `errors`
        friendly_errors_detail: Vec<String>,
    },
    /// The server refused the bearer token
    #[error("Invalid credentials provided (HTTP {status_code}). Check the bearer token.")]
    InvalidCredentials {
        /// The [`StatusCode`] the server answered with
        status_code: StatusCode,
    },
    /// Data serialization error
    #[error("Serialization error")]
    Serialization(serde_json::Error),
    /// Data deserialization error
    #[error("Deserialization error (HTTP {status_code})")]
    Deserialization {
        /// The source error
        error: serde_json::Error,
        /// The data that was attempted to be deserialized
        data: Bytes,
        /// The [`StatusCode`] of the request
        status_code: StatusCode,
    },
    /// [`http`]-related error, probably from header-related tasks
    #[error("HTTP error: {:?}", .0)]
    Http(#[from] http::Error),
    /// Error that occurs from a failure to parse a [`Uri`] from a [`Url`]
    #[error("Unable to convert URL to URI.")]
    InvalidUri(#[from] InvalidUri),
    /// Errors that occur as a result of the underlying HTTP service failing
    #[error("Upstream service error: {}", .0)]
    UpstreamService(#[from] Box<dyn std::error::Error + Send + Sync>),
}

fn friendly_errors(errors: &[graphql_client::Error]) -> Vec<String> {
    errors.iter().map(|err| err.message.clone()).collect()
}

/// One anonymous GraphQL request: a document and its variables
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GraphQLRequest {
    query: String,
    variables: Value,
}

impl GraphQLRequest {
    /// Constructs a new anonymous [`GraphQLRequest`]
    pub fn new(query: impl Into<String>, variables: Value) -> GraphQLRequest {
        GraphQLRequest {
            query: query.into(),
            variables,
        }
    }

    /// The document text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The variables object
    pub const fn variables(&self) -> &Value {
        &self.variables
    }
}

/// [`Layer`] that wraps a service with GraphQL middleware
#[derive(Clone, Debug, Default)]
pub struct GraphQLLayer {
    endpoint: Option<Url>,
}

impl GraphQLLayer {
    /// Constructs a new [`GraphQLLayer`]
    pub const fn new(endpoint: Url) -> GraphQLLayer {
        GraphQLLayer {
            endpoint: Some(endpoint),
        }
    }
}

impl<S> Layer<S> for GraphQLLayer {
    type Service = GraphQLService<S>;
    fn layer(&self, inner: S) -> Self::Service {
        GraphQLService::new(self.endpoint.clone(), inner)
    }
}

/// Middleware that wraps a service in GraphQL functionality
#[derive(Clone, Debug)]
pub struct GraphQLService<S> {
    inner: S,
    endpoint: Option<Url>,
}

impl<S> GraphQLService<S> {
    /// Constructs a new [`GraphQLService`]
    pub const fn new(endpoint: Option<Url>, inner: S) -> GraphQLService<S> {
        GraphQLService { endpoint, inner }
    }
}

impl<S> Service<GraphQLRequest> for GraphQLService<S>
where
    S: Service<HttpRequest, Response = HttpResponse> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    type Response = Value;
    type Error = GraphQLServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::poll_ready(&mut self.inner, cx)
            .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))
    }

    fn call(&mut self, req: GraphQLRequest) -> Self::Future {
        // https://docs.rs/tower/latest/tower/trait.Service.html#be-careful-when-cloning-inner-services
        let cloned = self.inner.clone();
        let mut client = std::mem::replace(&mut self.inner, cloned);

        let url = self.endpoint.clone();

        let fut = async move {
            let body_bytes =
                Bytes::from(serde_json::to_vec(&req).map_err(GraphQLServiceError::Serialization)?);
            tracing::debug!(bytes = body_bytes.len(), "serialized GraphQL request body");
            let builder = http::Request::builder();
            let builder = if let Some(url) = url.as_ref() {
                builder.uri(Uri::from_str(url.as_ref())?)
            } else {
                builder
            };
            let http_req = builder
                .method(Method::POST)
                .header(
                    http::header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                )
                .body(Full::new(body_bytes))
                .map_err(GraphQLServiceError::Http)?;
            let resp = client
                .call(http_req)
                .await
                .map_err(|err| GraphQLServiceError::UpstreamService(Box::new(err)))?;

            let status_code = resp.status();
            if status_code == StatusCode::UNAUTHORIZED || status_code == StatusCode::FORBIDDEN {
                return Err(GraphQLServiceError::InvalidCredentials { status_code });
            }

            // `Full` only ever holds one frame, so collecting it cannot fail
            let body = http_body_util::BodyExt::collect(resp.into_body())
                .await
                .map(|collected| collected.to_bytes())
                .unwrap_or_default();
            let graphql_response: GraphQLResponse =
                serde_json::from_slice(&body).map_err(|error| {
                    GraphQLServiceError::Deserialization {
                        error,
                        data: body.clone(),
                        status_code,
                    }
                })?;

            match (graphql_response.data, graphql_response.errors) {
                (Some(data), None) => Ok(data),
                (Some(data), Some(errors)) if errors.is_empty() => Ok(data),
                (Some(data), Some(errors)) => Err(GraphQLServiceError::PartialError {
                    data,
                    friendly_errors_detail: friendly_errors(&errors),
                    errors,
                }),
                (None, errors) => Err(GraphQLServiceError::NoData(errors.unwrap_or_default())),
            }
        };
        Box::pin(fut)
    }
}

impl fmt::Display for GraphQLRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}
