mod fetch;
pub(crate) mod output;
mod plan;

pub use fetch::Fetch;
pub use output::CanvasOutput;
pub use plan::Plan;
