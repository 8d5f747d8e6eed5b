//! Registration form validation.
//!
//! Field rules are pure functions returning an error message (empty when the
//! value is valid) or a flag. [`FormValidationState`] owns the raw field
//! values, runs the rules on every change and keeps the aggregate readiness
//! flag in step with them.
//!
//! # Example
//!
//! ```
//! use eml_lib::validation::{Field, FormValidationState};
//!
//! let mut form = FormValidationState::new();
//! form.on_field_change(Field::RealName, "Ana Maria");
//! form.on_field_change(Field::Email, "ana@x.com");
//! form.on_field_change(Field::Password, "abcdefg1");
//! form.on_field_change(Field::ConfirmPassword, "abcdefg1");
//!
//! assert!(form.is_ready());
//! ```

mod field;
mod rules;
mod sanitize;
mod state;

pub use field::*;
pub use rules::*;
pub use sanitize::*;
pub use state::*;
