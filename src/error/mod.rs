mod suggestion;

pub use suggestion::CanvasErrorSuggestion;

pub use anyhow::{Context, anyhow};

pub type CanvasResult<T> = std::result::Result<T, CanvasError>;

use std::fmt::{self, Debug, Display};

use canvas_client::CanvasClientError;
use canvas_std::CanvasStdError;
use console::style;

use crate::persist::PersistError;

/// A specialized `Error` type for canvas-history that wraps `anyhow`
/// and attaches a next step for the user when one is known.
#[derive(Debug)]
pub struct CanvasError {
    error: anyhow::Error,
    suggestion: Option<CanvasErrorSuggestion>,
}

impl CanvasError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let error = error.into();
        let suggestion = suggest(&error);
        Self { error, suggestion }
    }

    pub fn suggestion(&self) -> Option<CanvasErrorSuggestion> {
        self.suggestion.clone()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

fn suggest(error: &anyhow::Error) -> Option<CanvasErrorSuggestion> {
    if let Some(client_error) = error.downcast_ref::<CanvasClientError>() {
        return match client_error {
            CanvasClientError::MissingToken => Some(CanvasErrorSuggestion::ProvideToken),
            CanvasClientError::InvalidCredentials { .. } => Some(CanvasErrorSuggestion::CheckToken),
            CanvasClientError::InvertedRegion { .. } => Some(CanvasErrorSuggestion::FixRegion),
            CanvasClientError::SendRequest(_) | CanvasClientError::ServiceReady(_) => {
                Some(CanvasErrorSuggestion::CheckEndpoint)
            }
            CanvasClientError::Serialization(_) => Some(CanvasErrorSuggestion::SubmitIssue),
            _ => None,
        };
    }
    if error.downcast_ref::<PersistError>().is_some()
        || error.downcast_ref::<CanvasStdError>().is_some()
    {
        return Some(CanvasErrorSuggestion::CheckOutputDir);
    }
    None
}

impl Display for CanvasError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor = style("error:").red().bold();
        writeln!(formatter, "{} {:?}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for CanvasError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

#[cfg(test)]
mod tests {
    use canvas_client::region::{Coordinate, Region};
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;

    #[rstest]
    #[case::missing_token(CanvasClientError::MissingToken, Some(CanvasErrorSuggestion::ProvideToken))]
    #[case::rejected_token(
        CanvasClientError::InvalidCredentials { status_code: http::StatusCode::UNAUTHORIZED },
        Some(CanvasErrorSuggestion::CheckToken)
    )]
    #[case::inverted(
        CanvasClientError::InvertedRegion {
            region: Region::new(Coordinate::new(3, 3), Coordinate::new(1, 1)),
        },
        Some(CanvasErrorSuggestion::FixRegion)
    )]
    #[case::graphql(CanvasClientError::GraphQL { msg: "boom".to_string() }, None)]
    fn client_errors_carry_suggestions(
        #[case] error: CanvasClientError,
        #[case] expected: Option<CanvasErrorSuggestion>,
    ) {
        let error = CanvasError::from(error);
        assert_that!(error.suggestion()).is_equal_to(expected);
    }

    #[test]
    fn display_leads_with_the_message_and_ends_with_the_suggestion() {
        console::set_colors_enabled(false);
        let error = CanvasError::from(CanvasClientError::MissingToken);

        let rendered = error.to_string();

        assert!(rendered.starts_with("error: no bearer token was provided"));
        assert!(rendered.contains("CANVAS_HISTORY_TOKEN"));
    }

    #[test]
    fn adhoc_errors_have_no_suggestion() {
        let error = CanvasError::from(anyhow!("something odd"));
        assert_that!(error.suggestion()).is_none();
        assert_that!(error.message()).is_equal_to("something odd".to_string());
    }
}
