use std::{future::Future, pin::Pin};

use canvas_graphql::{GraphQLRequest, GraphQLServiceError};
use serde_json::Value;
use tower::Service;

use super::types::BatchRequest;
use crate::CanvasClientError;

/// Sends one [`BatchRequest`] through a GraphQL service and hands back the
/// response `data` untouched.
#[derive(Clone)]
pub struct TileHistory<S: Clone> {
    inner: S,
}

impl<S: Clone> TileHistory<S> {
    pub const fn new(inner: S) -> TileHistory<S> {
        TileHistory { inner }
    }
}

impl<S, Fut> Service<BatchRequest> for TileHistory<S>
where
    S: Service<GraphQLRequest, Response = Value, Error = GraphQLServiceError, Future = Fut>
        + Clone
        + Send
        + 'static,
    Fut: Future<Output = Result<S::Response, S::Error>> + Send,
{
    type Response = Value;
    type Error = CanvasClientError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        tower::Service::<GraphQLRequest>::poll_ready(&mut self.inner, cx)
            .map_err(|err| CanvasClientError::ServiceReady(Box::new(err)))
    }

    fn call(&mut self, req: BatchRequest) -> Self::Future {
        let cloned = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, cloned);
        let fut = async move {
            let request = req.to_graphql_request()?;
            tracing::info!(
                operations = req.len(),
                "sending tile history batch in a single request"
            );
            let data = inner.call(request).await?;
            Ok(data)
        };
        Box::pin(fut)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;
    use tokio::task;
    use tower::ServiceExt;
    use tower_test::mock;

    use super::*;
    use crate::operations::tile_history::ActParams;
    use crate::region::{enumerate, Coordinate};

    fn batch() -> BatchRequest {
        let sequence = enumerate(Coordinate::new(0, 0), Coordinate::new(1, 1)).into_sequence();
        BatchRequest::new(&sequence, &ActParams::default())
    }

    #[tokio::test]
    async fn it_sends_the_document_and_variables_together() {
        let (mock_service, mut handle) = mock::pair::<GraphQLRequest, Value>();
        let graphql = mock_service.map_err(GraphQLServiceError::UpstreamService);
        let service = TileHistory::new(graphql);

        let call = service.oneshot(batch());

        task::spawn(async move {
            let (actual, send_response) = handle.next_request().await.unwrap();
            let expected = batch().to_graphql_request().unwrap();
            assert_that!(actual).is_equal_to(expected);
            send_response.send_response(json!({ "inputAct0": null }));
        });

        assert_that!(call.await)
            .is_ok()
            .is_equal_to(json!({ "inputAct0": null }));
    }

    #[tokio::test]
    async fn it_surfaces_graphql_errors_as_client_errors() {
        let (mock_service, mut handle) = mock::pair::<GraphQLRequest, Value>();
        let graphql = mock_service.map_err(GraphQLServiceError::UpstreamService);
        let service = TileHistory::new(graphql);

        let call = service.oneshot(batch());

        task::spawn(async move {
            let (_, send_response) = handle.next_request().await.unwrap();
            send_response.send_error(std::io::Error::other("connection reset"));
        });

        assert_that!(call.await)
            .is_err()
            .matches(|err| matches!(err, CanvasClientError::SendRequest(_)));
    }
}
