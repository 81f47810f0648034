//! A layer that stamps a fixed set of headers onto every outgoing request

use http::HeaderMap;
use tower::{Layer, Service};

/// [`Layer`] producing [`ExtendHeaders`] services
#[derive(Clone, Debug)]
pub struct ExtendHeadersLayer {
    headers: HeaderMap,
}

impl ExtendHeadersLayer {
    /// Constructs a new [`ExtendHeadersLayer`]
    pub fn new(headers: impl Into<HeaderMap>) -> ExtendHeadersLayer {
        ExtendHeadersLayer {
            headers: headers.into(),
        }
    }
}

impl<S: Clone> Layer<S> for ExtendHeadersLayer {
    type Service = ExtendHeaders<S>;
    fn layer(&self, inner: S) -> Self::Service {
        ExtendHeaders::new(self.headers.clone(), inner)
    }
}

/// Inserts its headers into each request before handing it to the inner service.
/// Existing headers with the same name are replaced.
#[derive(Clone, Debug)]
pub struct ExtendHeaders<S: Clone> {
    headers: HeaderMap,
    inner: S,
}

impl<S: Clone> ExtendHeaders<S> {
    /// Constructs a new [`ExtendHeaders`]
    pub const fn new(headers: HeaderMap, inner: S) -> ExtendHeaders<S> {
        ExtendHeaders { headers, inner }
    }
}

impl<Req, S> Service<http::Request<Req>> for ExtendHeaders<S>
where
    S: Service<http::Request<Req>> + Clone,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<Req>) -> Self::Future {
        req.headers_mut().extend(self.headers.clone());
        self.inner.call(req)
    }
}
