//! Account registration core for the EML learning app.
//!
//! Validates the registration form on every keystroke and, once the form is
//! ready, registers the user remotely and caches the resulting identity in a
//! local key-value store.

pub mod alert;
pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod persistor;
pub mod session;
pub mod store;
pub mod validation;

pub use config::RegistrationConfig;
pub use persistor::IdentityPersistor;
pub use persistor::SubmitOutcome;
pub use validation::FormValidationState;
