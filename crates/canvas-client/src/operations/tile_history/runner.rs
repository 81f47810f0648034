use tower::{Service, ServiceExt};

use super::service::TileHistory;
use super::types::{TileHistoryInput, TileHistoryResponse};
use crate::client::CanvasClient;
use crate::CanvasClientError;

/// Fetches the history of every tile in a region with one batched mutation.
pub async fn run(
    input: TileHistoryInput,
    client: &CanvasClient,
) -> Result<TileHistoryResponse, CanvasClientError> {
    let (region, batch) = input.into_batch()?;
    let cell_count = batch.len();
    tracing::debug!(%region, cell_count, "planned tile history batch");

    let mut service = TileHistory::new(client.graphql_service()?);
    let service = service.ready().await?;
    let data = service.call(batch).await?;

    Ok(TileHistoryResponse {
        region,
        cell_count,
        data,
    })
}
