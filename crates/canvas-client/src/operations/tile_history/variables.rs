use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::types::{ActOperation, ActParams};
use crate::region::{Coordinate, CoordinateSequence};

/// The value bound to one `$input{n}` variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActInput {
    pub action_name: String,
    #[serde(rename = "PixelMessageData")]
    pub pixel_message_data: PixelMessageData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelMessageData {
    pub coordinate: Coordinate,
    pub color_index: u32,
    pub canvas_index: u32,
}

/// Variable bindings for a batch, keyed `input{n}` and kept in index order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchVariables {
    entries: Vec<(String, ActInput)>,
}

impl BatchVariables {
    /// Builds one binding per coordinate, numbering them in the sequence's order.
    pub fn build(sequence: &CoordinateSequence, params: &ActParams) -> BatchVariables {
        BatchVariables::from_operations(&ActOperation::plan(sequence), params)
    }

    pub(crate) fn from_operations(
        operations: &[ActOperation],
        params: &ActParams,
    ) -> BatchVariables {
        let entries = operations
            .iter()
            .map(|operation| {
                let input = ActInput {
                    action_name: params.action_name.clone(),
                    pixel_message_data: PixelMessageData {
                        coordinate: operation.coordinate,
                        color_index: params.color_index,
                        canvas_index: params.canvas_index,
                    },
                };
                (operation.variable(), input)
            })
            .collect();
        BatchVariables { entries }
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&ActInput> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, input)| input)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BatchVariables {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, input) in &self.entries {
            map.serialize_entry(key, input)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;
    use crate::operations::tile_history::BatchDocument;
    use crate::region::enumerate;

    #[test]
    fn it_binds_each_key_to_its_coordinate() {
        let sequence = CoordinateSequence::new(vec![
            Coordinate::new(9, 1),
            Coordinate::new(-4, 2),
            Coordinate::new(0, 0),
        ]);

        let variables = BatchVariables::build(&sequence, &ActParams::default());

        assert_that!(variables.keys()).is_equal_to(vec![
            "input0".to_string(),
            "input1".to_string(),
            "input2".to_string(),
        ]);
        for (n, coordinate) in sequence.iter().enumerate() {
            let input = variables.get(&format!("input{n}")).unwrap();
            assert_that!(input.pixel_message_data.coordinate).is_equal_to(*coordinate);
        }
    }

    #[test]
    fn it_serializes_the_canvas_wire_shape() {
        let sequence = CoordinateSequence::new(vec![Coordinate::new(334, 78)]);
        let params = ActParams {
            action_name: "r/replace:get_tile_history".to_string(),
            canvas_index: 2,
            color_index: 7,
        };

        let value = serde_json::to_value(BatchVariables::build(&sequence, &params)).unwrap();

        assert_eq!(
            value,
            json!({
                "input0": {
                    "actionName": "r/replace:get_tile_history",
                    "PixelMessageData": {
                        "coordinate": { "x": 334, "y": 78 },
                        "colorIndex": 7,
                        "canvasIndex": 2
                    }
                }
            })
        );
    }

    #[test]
    fn keys_match_the_declared_document_variables() {
        for end in [Coordinate::new(0, 0), Coordinate::new(1, 1), Coordinate::new(4, 3)] {
            let sequence = enumerate(Coordinate::new(0, 0), end).into_sequence();

            let variables = BatchVariables::build(&sequence, &ActParams::default());
            let document = BatchDocument::synthesize(&sequence);

            assert_that!(variables.keys()).is_equal_to(document.variable_names());
            assert_that!(variables.len()).is_equal_to(sequence.len());
        }
    }

    #[test]
    fn building_twice_gives_identical_output() {
        let sequence = enumerate(Coordinate::new(-3, -3), Coordinate::new(3, 3)).into_sequence();

        let first = serde_json::to_string(&BatchVariables::build(&sequence, &ActParams::default()));
        let second = serde_json::to_string(&BatchVariables::build(&sequence, &ActParams::default()));

        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn an_empty_sequence_has_no_bindings() {
        let variables = BatchVariables::build(&CoordinateSequence::default(), &ActParams::default());

        assert!(variables.is_empty());
        assert_eq!(serde_json::to_value(variables).unwrap(), json!({}));
    }
}
