use canvas_client::operations::tile_history::TileHistoryInput;
use clap::Parser;
use serde_json::json;

use crate::command::CanvasOutput;
use crate::options::{ActOpt, RegionOpt};
use crate::CanvasResult;

/// Build the batched request for a region and print it without sending it
#[derive(Debug, Clone, Parser)]
pub struct Plan {
    #[clap(flatten)]
    region: RegionOpt,

    #[clap(flatten)]
    act: ActOpt,
}

impl Plan {
    pub fn run(&self) -> CanvasResult<CanvasOutput> {
        let input = TileHistoryInput {
            region: self.region.region(),
            policy: self.region.inverted_region,
            params: self.act.params(),
        };
        let (region, batch) = input.into_batch()?;
        tracing::info!(%region, operations = batch.len(), "planned tile history batch");

        let request = batch.to_graphql_request()?;
        Ok(CanvasOutput::Plan(json!({
            "query": request.query(),
            "variables": request.variables(),
        })))
    }
}
