mod document;
mod runner;
mod service;
mod types;
mod variables;

pub use document::{BatchDocument, ACT_INPUT_TYPE};
pub use runner::run;
pub use service::TileHistory;
pub use types::{
    ActParams, BatchRequest, TileHistoryInput, TileHistoryResponse, DEFAULT_ACTION_NAME,
};
pub use variables::{ActInput, BatchVariables, PixelMessageData};
