#![warn(missing_docs)]

//! [`tower`] services for sending HTTP requests to the canvas GraphQL endpoint

use std::time::Duration;

use buildstructor::Builder;
use bytes::Bytes;
use derive_getters::Getters;
pub use http_body::Body;
pub use http_body_util::{BodyExt, Empty, Full};
use tower::util::BoxCloneService;

pub mod body;
mod error;
pub mod extend_headers;
mod reqwest;

pub use error::HttpServiceError;
pub use reqwest::ReqwestService;

/// The request type every service in this crate accepts
pub type HttpRequest = http::Request<Full<Bytes>>;
/// The response type every service in this crate produces
pub type HttpResponse<T = Full<Bytes>> = http::Response<T>;
/// A type-erased, cloneable HTTP [`tower::Service`]
pub type HttpService = BoxCloneService<HttpRequest, HttpResponse, HttpServiceError>;

/// Transport configuration, agnostic to the underlying HTTP client
#[derive(Clone, Debug, Builder, Default, Getters)]
pub struct HttpServiceConfig {
    accept_invalid_certificates: Option<bool>,
    timeout: Option<Duration>,
}

