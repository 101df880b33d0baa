//! Wire types shared by the interaction engine and the HTTP API.

pub mod types;

pub use types::{InteractRequest, InteractResponse, Point};
