//! Client for querying the edit history of a collaborative canvas.
//!
//! A rectangular [`region::Region`] is expanded into coordinates, every
//! coordinate becomes one aliased `act` mutation field, and the whole batch is
//! sent as a single GraphQL request.

/// Module for the authenticated client and its service stack.
pub mod client;
/// Module for the bearer token credential.
pub mod credential;
mod error;
/// Module related to constructing request headers.
pub mod headers;
/// Module for the batched operations this client can run.
pub mod operations;
/// Module for coordinates and rectangular regions.
pub mod region;

/// Module for client related errors.
pub use error::CanvasClientError;
