//! Renders a batch of aliased `act` mutations into one GraphQL document.
//!
//! The document has this shape, with one variable and one aliased field per
//! coordinate:
//!
//! ```graphql
//! mutation($input0: ActInput!, $input1: ActInput!) {
//!   inputAct0: act(input: $input0) {
//!     data {
//!       ... on BasicMessage {
//!         id
//!         data {
//!           ... on GetTileHistoryResponseMessageData {
//!             lastModifiedTimestamp
//!             userInfo {
//!               userID
//!               username
//!             }
//!           }
//!         }
//!       }
//!     }
//!   }
//!   inputAct1: act(input: $input1) { ... }
//! }
//! ```

use std::fmt::{self, Display};

use apollo_encoder::{
    Argument, Document, Field, InlineFragment, OperationDefinition, OperationType, Selection,
    SelectionSet, TypeCondition, Type_, Value, VariableDefinition,
};

use super::types::ActOperation;
use crate::region::CoordinateSequence;

/// The input object type every `$input{n}` variable is declared as.
pub const ACT_INPUT_TYPE: &str = "ActInput";

const ACT_FIELD: &str = "act";
const ACT_ARGUMENT: &str = "input";
const MESSAGE_TYPE: &str = "BasicMessage";
const TILE_HISTORY_TYPE: &str = "GetTileHistoryResponseMessageData";

/// One anonymous mutation holding an aliased `act` field per coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDocument {
    operations: Vec<ActOperation>,
    rendered: String,
}

impl BatchDocument {
    /// Builds the document for `sequence`, numbering coordinates in the
    /// sequence's order.
    pub fn synthesize(sequence: &CoordinateSequence) -> BatchDocument {
        BatchDocument::from_operations(ActOperation::plan(sequence))
    }

    pub(crate) fn from_operations(operations: Vec<ActOperation>) -> BatchDocument {
        let rendered = render(&operations);
        BatchDocument {
            operations,
            rendered,
        }
    }

    pub(crate) fn operations(&self) -> &[ActOperation] {
        &self.operations
    }

    /// `inputAct{n}` for every operation, in index order.
    pub fn alias_names(&self) -> Vec<String> {
        self.operations.iter().map(ActOperation::alias).collect()
    }

    /// `input{n}` for every declared variable, in index order.
    pub fn variable_names(&self) -> Vec<String> {
        self.operations.iter().map(ActOperation::variable).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl Display for BatchDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

fn render(operations: &[ActOperation]) -> String {
    let mut selection_set = SelectionSet::new();
    for operation in operations {
        selection_set.selection(Selection::Field(act_field(operation)));
    }

    let mut mutation = OperationDefinition::new(OperationType::Mutation, selection_set);
    for operation in operations {
        mutation.variable_definition(VariableDefinition::new(
            operation.variable(),
            Type_::NonNull {
                ty: Box::new(Type_::NamedType {
                    name: ACT_INPUT_TYPE.to_string(),
                }),
            },
        ));
    }

    let mut document = Document::new();
    document.operation(mutation);
    document.to_string()
}

fn act_field(operation: &ActOperation) -> Field {
    let mut field = Field::new(ACT_FIELD.to_string());
    field.alias(Some(operation.alias()));
    field.argument(Argument::new(
        ACT_ARGUMENT.to_string(),
        Value::Variable(operation.variable()),
    ));
    field.selection_set(Some(history_selection()));
    field
}

/// `data { ... on BasicMessage { id data { ... on GetTileHistoryResponseMessageData { .. } } } }`
fn history_selection() -> SelectionSet {
    let mut user_info = SelectionSet::new();
    user_info.selection(leaf("userID"));
    user_info.selection(leaf("username"));

    let mut history = SelectionSet::new();
    history.selection(leaf("lastModifiedTimestamp"));
    history.selection(Selection::Field(with_selections("userInfo", user_info)));

    let mut message_data = SelectionSet::new();
    message_data.selection(on_type(TILE_HISTORY_TYPE, history));

    let mut message = SelectionSet::new();
    message.selection(leaf("id"));
    message.selection(Selection::Field(with_selections("data", message_data)));

    let mut data = SelectionSet::new();
    data.selection(on_type(MESSAGE_TYPE, message));

    let mut root = SelectionSet::new();
    root.selection(Selection::Field(with_selections("data", data)));
    root
}

fn leaf(name: &str) -> Selection {
    Selection::Field(Field::new(name.to_string()))
}

fn with_selections(name: &str, selection_set: SelectionSet) -> Field {
    let mut field = Field::new(name.to_string());
    field.selection_set(Some(selection_set));
    field
}

fn on_type(type_name: &str, selection_set: SelectionSet) -> Selection {
    let mut fragment = InlineFragment::new(selection_set);
    fragment.type_condition(Some(TypeCondition::new(type_name.to_string())));
    Selection::InlineFragment(fragment)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use apollo_parser::{cst, Parser};
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;
    use crate::region::{enumerate, Coordinate};

    /// (alias, variable bound to its `input` argument) for every top level field,
    /// plus every declared variable name.
    fn parse(document: &str) -> (Vec<(String, String)>, Vec<String>) {
        let tree = Parser::new(document).parse();
        let errors: Vec<_> = tree.errors().map(|e| e.message().to_string()).collect();
        assert!(errors.is_empty(), "{document}\nparsed with errors: {errors:?}");

        let mut fields = Vec::new();
        let mut declared = Vec::new();
        for definition in tree.document().definitions() {
            let cst::Definition::OperationDefinition(operation) = definition else {
                panic!("unexpected definition in {document}");
            };
            if let Some(definitions) = operation.variable_definitions() {
                for definition in definitions.variable_definitions() {
                    let name = definition.variable().and_then(|v| v.name()).unwrap();
                    declared.push(name.text().to_string());
                }
            }
            for selection in operation.selection_set().unwrap().selections() {
                let cst::Selection::Field(field) = selection else {
                    panic!("unexpected selection in {document}");
                };
                let alias = field.alias().and_then(|a| a.name()).unwrap();
                let argument = field
                    .arguments()
                    .unwrap()
                    .arguments()
                    .next()
                    .and_then(|argument| argument.value())
                    .unwrap();
                let cst::Value::Variable(variable) = argument else {
                    panic!("argument is not a variable in {document}");
                };
                fields.push((
                    alias.text().to_string(),
                    variable.name().unwrap().text().to_string(),
                ));
            }
        }
        (fields, declared)
    }

    #[rstest]
    #[case::single(Coordinate::new(5, 5), Coordinate::new(5, 5))]
    #[case::square(Coordinate::new(0, 0), Coordinate::new(1, 1))]
    #[case::past_ten(Coordinate::new(0, 0), Coordinate::new(3, 2))]
    fn it_declares_and_aliases_every_coordinate(#[case] start: Coordinate, #[case] end: Coordinate) {
        let sequence = enumerate(start, end).into_sequence();
        let n = sequence.len();

        let document = BatchDocument::synthesize(&sequence);
        let (fields, declared) = parse(document.as_str());

        let expected_aliases: Vec<String> = (0..n).map(|i| format!("inputAct{i}")).collect();
        let expected_variables: Vec<String> = (0..n).map(|i| format!("input{i}")).collect();
        assert_that!(document.alias_names()).is_equal_to(&expected_aliases);
        assert_that!(document.variable_names()).is_equal_to(&expected_variables);
        assert_that!(declared).is_equal_to(&expected_variables);
        assert_that!(fields
            .iter()
            .map(|(alias, _)| alias.clone())
            .collect::<Vec<_>>())
        .is_equal_to(&expected_aliases);
        // every alias reads its own variable
        for (i, (_, variable)) in fields.iter().enumerate() {
            assert_that!(variable).is_equal_to(&format!("input{i}"));
        }
    }

    #[test]
    fn names_stay_unique_for_large_batches() {
        let sequence = enumerate(Coordinate::new(0, 0), Coordinate::new(11, 11)).into_sequence();

        let document = BatchDocument::synthesize(&sequence);

        let aliases: HashSet<_> = document.alias_names().into_iter().collect();
        let variables: HashSet<_> = document.variable_names().into_iter().collect();
        assert_that!(aliases.len()).is_equal_to(144);
        assert_that!(variables.len()).is_equal_to(144);
    }

    #[test]
    fn every_operation_requests_the_history_fields() {
        let sequence = enumerate(Coordinate::new(0, 0), Coordinate::new(0, 2)).into_sequence();

        let rendered = BatchDocument::synthesize(&sequence).to_string();

        for field in [
            "BasicMessage",
            "GetTileHistoryResponseMessageData",
            "lastModifiedTimestamp",
            "userID",
            "username",
        ] {
            assert_that!(rendered.matches(field).count()).is_equal_to(3);
        }
    }

    #[test]
    fn an_empty_sequence_renders_a_bare_mutation() {
        let document = BatchDocument::synthesize(&CoordinateSequence::default());

        assert!(document.is_empty());
        assert!(document.alias_names().is_empty());
        assert!(document.as_str().trim_start().starts_with("mutation"));
        assert!(!document.as_str().contains('$'));
        assert!(!document.as_str().contains(ACT_FIELD));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let sequence = enumerate(Coordinate::new(-2, -2), Coordinate::new(2, 2)).into_sequence();

        assert_that!(BatchDocument::synthesize(&sequence))
            .is_equal_to(BatchDocument::synthesize(&sequence));
    }
}
