mod act;
mod client;
mod output;
mod region;

pub use act::ActOpt;
pub use client::ClientOpt;
pub use output::OutputOpt;
pub use region::RegionOpt;
