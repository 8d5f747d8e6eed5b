//! Error types

mod api;
mod store;

pub use api::*;
pub use store::*;
