pub mod client;
pub mod effect;
pub mod env;
