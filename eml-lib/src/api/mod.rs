//! Registration API.
//!
//! [`RegistrationApi`] is the seam the submit flow talks to;
//! [`HttpRegistrationClient`] implements it over HTTP.

mod http;

pub use http::*;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::RegistrationRecord;

/// Remote user registration.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Registers a user and returns the identifier assigned by the server.
    async fn register_user(&self, record: &RegistrationRecord) -> Result<String, ApiError>;
}
