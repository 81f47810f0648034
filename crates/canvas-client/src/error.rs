use canvas_graphql::GraphQLServiceError;
use thiserror::Error;

use crate::region::Region;

/// CanvasClientError represents all possible failures that can occur during a client request.
#[derive(Error, Debug)]
pub enum CanvasClientError {
    /// No bearer token was supplied, or it was blank.
    #[error("no bearer token was provided")]
    MissingToken,

    /// Tried to build a [`http::HeaderMap`] with an invalid header value.
    #[error("invalid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// A coordinate could not be parsed from its textual form.
    #[error("could not parse \"{input}\" as a coordinate: {reason}")]
    InvalidCoordinate {
        /// The text that was given.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An inverted-region policy name was not recognised.
    #[error("unknown inverted region policy \"{0}\", expected \"empty\" or \"reject\"")]
    InvalidRegionPolicy(String),

    /// The region's start lies past its end on at least one axis and the
    /// caller asked for inverted regions to be rejected.
    #[error("the region {region} is inverted: start must not lie past end on either axis")]
    InvertedRegion {
        /// The offending region.
        region: Region,
    },

    /// The batch variables could not be turned into JSON.
    #[error("could not serialize the batch variables")]
    Serialization(#[from] serde_json::Error),

    /// The server did not accept the bearer token.
    #[error("the canvas API rejected the bearer token (HTTP {status_code})")]
    InvalidCredentials {
        /// Status the server answered with.
        status_code: http::StatusCode,
    },

    /// The GraphQL response carried errors; the batch is treated as failed.
    #[error("encountered a GraphQL error, the canvas API responded with: {msg}")]
    GraphQL {
        /// The error messages, joined.
        msg: String,
    },

    /// Encountered an error handling the received response.
    #[error("encountered an error handling the response: {msg}")]
    HandleResponse {
        /// The error message.
        msg: String,
    },

    /// The transport failed before a GraphQL response was received.
    #[error("encountered an error while sending a request")]
    SendRequest(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service stack could not be made ready.
    #[error("the request service could not be made ready")]
    ServiceReady(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<GraphQLServiceError> for CanvasClientError {
    fn from(value: GraphQLServiceError) -> Self {
        match value {
            GraphQLServiceError::InvalidCredentials { status_code } => {
                CanvasClientError::InvalidCredentials { status_code }
            }
            GraphQLServiceError::NoData(errors) => CanvasClientError::GraphQL {
                msg: if errors.is_empty() {
                    String::from("the response contained neither data nor errors")
                } else {
                    errors
                        .into_iter()
                        .map(|err| err.message)
                        .collect::<Vec<String>>()
                        .join("\n")
                },
            },
            GraphQLServiceError::PartialError {
                friendly_errors_detail,
                ..
            } => CanvasClientError::GraphQL {
                msg: friendly_errors_detail.join("\n"),
            },
            GraphQLServiceError::Deserialization {
                error, status_code, ..
            } => CanvasClientError::HandleResponse {
                msg: format!("failed to parse response JSON (HTTP {status_code}): {error}"),
            },
            GraphQLServiceError::Serialization(error) => CanvasClientError::Serialization(error),
            GraphQLServiceError::UpstreamService(err) => CanvasClientError::SendRequest(err),
            err @ (GraphQLServiceError::Http(_) | GraphQLServiceError::InvalidUri(_)) => {
                CanvasClientError::SendRequest(Box::new(err))
            }
        }
    }
}
