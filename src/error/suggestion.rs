use std::fmt::{self, Display};

use console::style;

use crate::utils::env::CanvasEnvKey;

/// Next steps printed under an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasErrorSuggestion {
    ProvideToken,
    CheckToken,
    FixRegion,
    CheckEndpoint,
    CheckOutputDir,
    SubmitIssue,
}

impl Display for CanvasErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suggestion = match self {
            CanvasErrorSuggestion::ProvideToken => format!(
                "Pass a bearer token with {} or set {} in the environment or a .env file.",
                style("--token").yellow(),
                style(CanvasEnvKey::Token).yellow()
            ),
            CanvasErrorSuggestion::CheckToken => {
                "Bearer tokens for the canvas expire quickly. Grab a fresh one and try again."
                    .to_string()
            }
            CanvasErrorSuggestion::FixRegion => format!(
                "Make sure --start is not past --end on either axis, or pass {} to send an empty batch.",
                style("--inverted-region empty").yellow()
            ),
            CanvasErrorSuggestion::CheckEndpoint => format!(
                "Check that the endpoint is reachable, or override it with {} or {}.",
                style("--endpoint").yellow(),
                style(CanvasEnvKey::Endpoint).yellow()
            ),
            CanvasErrorSuggestion::CheckOutputDir => format!(
                "Check that {} points somewhere you can write to.",
                style("--output-dir").yellow()
            ),
            CanvasErrorSuggestion::SubmitIssue => {
                "This error was unexpected! Please submit an issue with any relevant details about what you were trying to do.".to_string()
            }
        };
        write!(formatter, "{}", &suggestion)
    }
}
