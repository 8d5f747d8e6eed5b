//! Data models

mod identity;
mod progress;

pub use identity::*;
pub use progress::*;
