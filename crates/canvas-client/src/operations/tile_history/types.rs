use canvas_graphql::GraphQLRequest;
use serde::Serialize;
use serde_json::Value;

use super::document::BatchDocument;
use super::variables::BatchVariables;
use crate::region::{Coordinate, CoordinateSequence, InvertedRegionPolicy, Region};
use crate::CanvasClientError;

pub const DEFAULT_ACTION_NAME: &str = "r/replace:get_tile_history";

/// Constants shared by every `act` invocation in one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActParams {
    pub action_name: String,
    pub canvas_index: u32,
    pub color_index: u32,
}

impl Default for ActParams {
    fn default() -> Self {
        ActParams {
            action_name: DEFAULT_ACTION_NAME.to_string(),
            canvas_index: 0,
            color_index: 0,
        }
    }
}

/// One aliased `act` field and the coordinate its variable carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActOperation {
    pub(crate) index: usize,
    pub(crate) coordinate: Coordinate,
}

impl ActOperation {
    /// Numbers the sequence once. Both the document and the variables are
    /// rendered from this list, so their index sets cannot drift apart.
    pub(crate) fn plan(sequence: &CoordinateSequence) -> Vec<ActOperation> {
        sequence
            .iter()
            .enumerate()
            .map(|(index, coordinate)| ActOperation {
                index,
                coordinate: *coordinate,
            })
            .collect()
    }

    pub(crate) fn alias(&self) -> String {
        format!("inputAct{}", self.index)
    }

    pub(crate) fn variable(&self) -> String {
        format!("input{}", self.index)
    }
}

/// A synthesized document together with the variables it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    document: BatchDocument,
    variables: BatchVariables,
}

impl BatchRequest {
    pub fn new(sequence: &CoordinateSequence, params: &ActParams) -> BatchRequest {
        let operations = ActOperation::plan(sequence);
        let variables = BatchVariables::from_operations(&operations, params);
        let document = BatchDocument::from_operations(operations);
        tracing::debug!("built a batch of {} act operations", document.len());
        BatchRequest {
            document,
            variables,
        }
    }

    pub const fn document(&self) -> &BatchDocument {
        &self.document
    }

    pub const fn variables(&self) -> &BatchVariables {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub fn to_graphql_request(&self) -> Result<GraphQLRequest, CanvasClientError> {
        Ok(GraphQLRequest::new(
            self.document.to_string(),
            serde_json::to_value(&self.variables)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileHistoryInput {
    pub region: Region,
    pub policy: InvertedRegionPolicy,
    pub params: ActParams,
}

impl TileHistoryInput {
    /// Enumerates the region and fixes the order of its cells.
    pub fn into_batch(self) -> Result<(Region, BatchRequest), CanvasClientError> {
        let region = self.region.checked(self.policy)?;
        let sequence = region.coordinates().into_sequence();
        Ok((region, BatchRequest::new(&sequence, &self.params)))
    }
}

/// The response `data` tree, untouched, and the region it answers for.
#[derive(Debug, Clone, PartialEq)]
pub struct TileHistoryResponse {
    pub region: Region,
    pub cell_count: usize,
    pub data: Value,
}
